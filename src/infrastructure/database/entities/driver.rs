// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 司机数据库实体模型
///
/// 对应数据库中的 drivers 表，同时承载登录账号字段
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[sea_orm(unique)]
    pub license_number: Option<String>,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub date_joined: ChronoDateTimeWithTimeZone,
    pub last_login: Option<ChronoDateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::car_driver::Entity")]
    CarDrivers,
    #[sea_orm(has_many = "super::session::Entity")]
    Sessions,
}

impl Related<super::car_driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarDrivers.def()
    }
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        super::car_driver::Relation::Car.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::car_driver::Relation::Driver.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
