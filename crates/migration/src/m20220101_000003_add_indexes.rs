use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ProductImage: lookups and bulk deletes go by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_product_image_product")
                    .table(ProductImage::Table)
                    .col(ProductImage::ProductId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_product_image_product").table(ProductImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProductImage { Table, ProductId }
