use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create manufacturers table
        manager
            .create_table(
                Table::create()
                    .table(Manufacturers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Manufacturers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Manufacturers::Name)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Manufacturers::Country)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        // Create drivers table (user accounts)
        manager
            .create_table(
                Table::create()
                    .table(Drivers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Drivers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Drivers::Username)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Drivers::Password).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Drivers::FirstName)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Drivers::LastName)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Drivers::Email)
                            .string_len(254)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Drivers::LicenseNumber)
                            .string_len(255)
                            .null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Drivers::IsStaff)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Drivers::IsSuperuser)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Drivers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Drivers::DateJoined)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Drivers::LastLogin)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create cars table
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cars::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cars::Model).string_len(255).not_null())
                    .col(ColumnDef::new(Cars::ManufacturerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_manufacturer")
                            .from(Cars::Table, Cars::ManufacturerId)
                            .to(Manufacturers::Table, Manufacturers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create cars_drivers join table
        manager
            .create_table(
                Table::create()
                    .table(CarsDrivers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CarsDrivers::CarId).integer().not_null())
                    .col(ColumnDef::new(CarsDrivers::DriverId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(CarsDrivers::CarId)
                            .col(CarsDrivers::DriverId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_drivers_car")
                            .from(CarsDrivers::Table, CarsDrivers::CarId)
                            .to(Cars::Table, Cars::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_drivers_driver")
                            .from(CarsDrivers::Table, CarsDrivers::DriverId)
                            .to(Drivers::Table, Drivers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_manufacturer")
                    .table(Cars::Table)
                    .col(Cars::ManufacturerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cars_drivers_driver")
                    .table(CarsDrivers::Table)
                    .col(CarsDrivers::DriverId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarsDrivers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Drivers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Manufacturers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Manufacturers {
    Table,
    Id,
    Name,
    Country,
}

#[derive(DeriveIden)]
enum Drivers {
    Table,
    Id,
    Username,
    Password,
    FirstName,
    LastName,
    Email,
    LicenseNumber,
    IsStaff,
    IsSuperuser,
    IsActive,
    DateJoined,
    LastLogin,
}

#[derive(DeriveIden)]
enum Cars {
    Table,
    Id,
    Model,
    ManufacturerId,
}

#[derive(DeriveIden)]
enum CarsDrivers {
    Table,
    CarId,
    DriverId,
}
