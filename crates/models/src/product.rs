use sea_orm::{entity::prelude::*, ConnectionTrait, FromJsonQueryResult, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, product_image};

/// Accepted values for [`Model::gender`].
pub const GENDERS: [&str; 4] = ["men", "women", "kid", "unisex"];

/// JSON-backed list of strings (sizes, tags).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(v: Vec<String>) -> Self { Self(v) }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub title: String,
    pub price: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(unique)]
    pub slug: String,
    pub stock: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub sizes: StringList,
    pub gender: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: StringList,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Images,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Images => Entity::has_many(product_image::Entity).into(),
        }
    }
}

impl Related<product_image::Entity> for Entity {
    fn to() -> RelationDef { Relation::Images.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Scalar fields of a product to be inserted. Images live elsewhere.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub gender: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial change set; `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductChanges {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Lower-case, spaces to `_`, apostrophes dropped.
pub fn normalize_slug(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_").replace('\'', "")
}

pub fn validate_title(t: &str) -> Result<(), ModelError> {
    if t.trim().is_empty() {
        return Err(ModelError::Validation("title required".into()));
    }
    Ok(())
}

pub fn validate_price(p: f64) -> Result<(), ModelError> {
    if !p.is_finite() || p < 0.0 {
        return Err(ModelError::Validation("price must be a non-negative number".into()));
    }
    Ok(())
}

pub fn validate_stock(s: i32) -> Result<(), ModelError> {
    if s < 0 {
        return Err(ModelError::Validation("stock must be >= 0".into()));
    }
    Ok(())
}

pub fn validate_gender(g: &str) -> Result<(), ModelError> {
    if !GENDERS.contains(&g) {
        return Err(ModelError::Validation(format!("gender must be one of {}", GENDERS.join(", "))));
    }
    Ok(())
}

pub fn validate_slug(s: &str) -> Result<(), ModelError> {
    if s.is_empty() {
        return Err(ModelError::Validation("slug must not be empty".into()));
    }
    Ok(())
}

impl NewProduct {
    /// Validate, fill defaults and build the row to insert. The slug falls
    /// back to the title before normalization.
    pub fn into_active_model(self) -> Result<ActiveModel, ModelError> {
        validate_title(&self.title)?;
        let price = self.price.unwrap_or(0.0);
        validate_price(price)?;
        let stock = self.stock.unwrap_or(0);
        validate_stock(stock)?;
        validate_gender(&self.gender)?;
        let slug = normalize_slug(self.slug.as_deref().unwrap_or(&self.title));
        validate_slug(&slug)?;

        let now = Utc::now().into();
        Ok(ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(self.title),
            price: Set(price),
            description: Set(self.description),
            slug: Set(slug),
            stock: Set(stock),
            sizes: Set(self.sizes.into()),
            gender: Set(self.gender),
            tags: Set(self.tags.into()),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl ProductChanges {
    /// Merge into a loaded row. Only present fields are marked dirty.
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        if let Some(t) = self.title { validate_title(&t)?; am.title = Set(t); }
        if let Some(p) = self.price { validate_price(p)?; am.price = Set(p); }
        if let Some(d) = self.description { am.description = Set(Some(d)); }
        if let Some(s) = self.slug {
            let s = normalize_slug(&s);
            validate_slug(&s)?;
            am.slug = Set(s);
        }
        if let Some(s) = self.stock { validate_stock(s)?; am.stock = Set(s); }
        if let Some(s) = self.sizes { am.sizes = Set(s.into()); }
        if let Some(g) = self.gender { validate_gender(&g)?; am.gender = Set(g); }
        if let Some(t) = self.tags { am.tags = Set(t.into()); }
        am.updated_at = Set(Utc::now().into());
        Ok(())
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewProduct) -> Result<Model, ModelError> {
    let am = new.into_active_model()?;
    Ok(am.insert(db).await?)
}
