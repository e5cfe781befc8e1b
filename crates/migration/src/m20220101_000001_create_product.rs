//! Create `product` table.
//!
//! Title and slug are both unique; duplicate writes surface as conflicts.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(uuid(Product::Id).primary_key())
                    .col(string_len(Product::Title, 255).unique_key().not_null())
                    .col(double(Product::Price).default(0.0).not_null())
                    .col(text_null(Product::Description))
                    .col(string_len(Product::Slug, 255).unique_key().not_null())
                    .col(integer(Product::Stock).default(0).not_null())
                    .col(json_binary(Product::Sizes).not_null())
                    .col(string_len(Product::Gender, 16).not_null())
                    .col(json_binary(Product::Tags).not_null())
                    .col(timestamp_with_time_zone(Product::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Product::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Title,
    Price,
    Description,
    Slug,
    Stock,
    Sizes,
    Gender,
    Tags,
    CreatedAt,
    UpdatedAt,
}
