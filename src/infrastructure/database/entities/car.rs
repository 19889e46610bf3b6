// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 车辆数据库实体模型
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model: String,
    pub manufacturer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::manufacturer::Entity",
        from = "Column::ManufacturerId",
        to = "super::manufacturer::Column::Id",
        on_delete = "Cascade"
    )]
    Manufacturer,
    #[sea_orm(has_many = "super::car_driver::Entity")]
    CarDrivers,
}

impl Related<super::manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manufacturer.def()
    }
}

impl Related<super::car_driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarDrivers.def()
    }
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        super::car_driver::Relation::Driver.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::car_driver::Relation::Car.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
