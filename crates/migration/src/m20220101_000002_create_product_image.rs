//! Create `product_image` table with FK to `product`.
//!
//! Images are owned by their product and go away with it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductImage::Id))
                    .col(text(ProductImage::Url).not_null())
                    .col(uuid(ProductImage::ProductId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_image_product")
                            .from(ProductImage::Table, ProductImage::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductImage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductImage { Table, Id, Url, ProductId }

#[derive(DeriveIden)]
enum Product { Table, Id }
