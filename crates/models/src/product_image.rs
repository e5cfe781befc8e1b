use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, product};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    pub product_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Product,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity)
                .from(Column::ProductId)
                .to(product::Column::Id)
                .into(),
        }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert one row per URL, preserving order.
pub async fn attach<C: ConnectionTrait>(db: &C, product_id: Uuid, urls: &[String]) -> Result<Vec<Model>, ModelError> {
    let mut created = Vec::with_capacity(urls.len());
    for url in urls {
        let am = ActiveModel {
            url: Set(url.clone()),
            product_id: Set(product_id),
            ..Default::default()
        };
        created.push(am.insert(db).await?);
    }
    Ok(created)
}

pub async fn find_for_product<C: ConnectionTrait>(db: &C, product_id: Uuid) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::ProductId.eq(product_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// Remove every image owned by `product_id`; returns rows affected.
pub async fn delete_for_product<C: ConnectionTrait>(db: &C, product_id: Uuid) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::ProductId.eq(product_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
