use models::{errors::ModelError, product, product_image};
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    DatabaseTransaction, EntityTrait, LoaderTrait, QueryFilter, QuerySelect, SqlErr, TransactionTrait,
};
use tracing::{error, info, info_span, instrument, warn, Span};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use super::domain::{CreateProduct, PlainProduct, ProductLookup, ProductWithImages, UpdateProduct};

/// Persistence service for products and their images.
///
/// Every operation runs in a child span of `span`, so callers can scope the
/// service's logs per instance (see [`ProductsService::with_span`]).
pub struct ProductsService {
    db: DatabaseConnection,
    span: Span,
}

impl ProductsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_span(db, info_span!("products_service"))
    }

    pub fn with_span(db: DatabaseConnection, span: Span) -> Self { Self { db, span } }

    /// Insert a product and its images in one transaction.
    ///
    /// Returns the stored fields together with the image URLs as given; the
    /// images are not read back.
    #[instrument(parent = &self.span, skip_all, fields(title = %input.details.title))]
    pub async fn create(&self, input: CreateProduct) -> Result<PlainProduct, ServiceError> {
        let CreateProduct { details, images } = input;
        let am = details.into_active_model().map_err(|e| self.handle_db_exceptions(e))?;

        let txn = self.db.begin().await.map_err(|e| self.handle_db_exceptions(e))?;
        let written = async {
            let product = am.insert(&txn).await?;
            product_image::attach(&txn, product.id, &images).await?;
            Ok::<_, ModelError>(product)
        }
        .await;

        match written {
            Ok(product) => {
                txn.commit().await.map_err(|e| self.handle_db_exceptions(e))?;
                info!(product_id = %product.id, images = images.len(), "product_created");
                Ok(PlainProduct { product, images })
            }
            Err(e) => {
                Self::rollback(txn).await;
                Err(self.handle_db_exceptions(e))
            }
        }
    }

    /// One page of products, images collapsed to URLs.
    #[instrument(parent = &self.span, skip(self))]
    pub async fn find_all(&self, pagination: Pagination) -> Result<Vec<PlainProduct>, ServiceError> {
        let (limit, offset) = pagination.normalize()?;
        let products = product::Entity::find()
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(|e| self.handle_db_exceptions(e))?;
        let images = products
            .load_many(product_image::Entity, &self.db)
            .await
            .map_err(|e| self.handle_db_exceptions(e))?;

        Ok(products
            .into_iter()
            .zip(images)
            .map(|(product, images)| ProductWithImages { product, images }.into_plain())
            .collect())
    }

    /// Resolve `term` to one product with its image records.
    #[instrument(parent = &self.span, skip_all, fields(term = %term))]
    pub async fn find_one(&self, term: &ProductLookup) -> Result<ProductWithImages, ServiceError> {
        let select = match term {
            ProductLookup::Id(id) => product::Entity::find_by_id(*id),
            ProductLookup::NameOrSlug(value) => product::Entity::find().filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::upper(Expr::col((product::Entity, product::Column::Title))))
                            .eq(self.upper_like_backend(value)),
                    )
                    .add(product::Column::Slug.eq(value.as_str())),
            ),
        };
        let found = select
            .find_with_related(product_image::Entity)
            .all(&self.db)
            .await
            .map_err(|e| self.handle_db_exceptions(e))?;

        match found.into_iter().next() {
            Some((product, images)) => Ok(ProductWithImages { product, images }),
            None => Err(ServiceError::not_found(term)),
        }
    }

    pub async fn find_one_plain(&self, term: &ProductLookup) -> Result<PlainProduct, ServiceError> {
        Ok(self.find_one(term).await?.into_plain())
    }

    /// Merge `input` into the stored product. With `images` present the old
    /// image rows are deleted and the new ones inserted; without, the stored
    /// images are reattached. Both paths run in one transaction that is
    /// committed or rolled back before returning.
    #[instrument(parent = &self.span, skip_all, fields(product_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateProduct) -> Result<ProductWithImages, ServiceError> {
        let UpdateProduct { changes, images } = input;

        let existing = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| self.handle_db_exceptions(e))?
            .ok_or_else(|| ServiceError::NotFound(format!("Product with id: {id} not found")))?;
        let mut am: product::ActiveModel = existing.into();
        changes.apply(&mut am).map_err(|e| self.handle_db_exceptions(e))?;

        let replacing = images.is_some();
        let txn = self.db.begin().await.map_err(|e| self.handle_db_exceptions(e))?;
        match Self::save_with_images(&txn, id, am, images).await {
            Ok(updated) => {
                txn.commit().await.map_err(|e| self.handle_db_exceptions(e))?;
                info!(images = updated.images.len(), replaced_images = replacing, "product_updated");
                Ok(updated)
            }
            Err(e) => {
                Self::rollback(txn).await;
                Err(self.handle_db_exceptions(e))
            }
        }
    }

    async fn save_with_images(
        txn: &DatabaseTransaction,
        id: Uuid,
        am: product::ActiveModel,
        images: Option<Vec<String>>,
    ) -> Result<ProductWithImages, ModelError> {
        let images = match images {
            Some(urls) => {
                product_image::delete_for_product(txn, id).await?;
                product_image::attach(txn, id, &urls).await?
            }
            None => product_image::find_for_product(txn, id).await?,
        };
        let product = am.update(txn).await?;
        Ok(ProductWithImages { product, images })
    }

    /// Delete one product; its images cascade.
    #[instrument(parent = &self.span, skip(self))]
    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        let found = self.find_one(&ProductLookup::Id(id)).await?;
        product::Entity::delete_by_id(found.product.id)
            .exec(&self.db)
            .await
            .map_err(|e| self.handle_db_exceptions(e))?;
        info!(product_id = %id, "product_removed");
        Ok(())
    }

    /// Wipe the catalog. Returns the number of products removed.
    #[instrument(parent = &self.span, skip(self))]
    pub async fn delete_all_products(&self) -> Result<u64, ServiceError> {
        let res = product::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| self.handle_db_exceptions(e))?;
        info!(removed = res.rows_affected, "products_cleared");
        Ok(res.rows_affected)
    }

    /// SQLite's `UPPER` folds ASCII only; fold the term the same way there
    /// so both sides of the title comparison agree.
    fn upper_like_backend(&self, term: &str) -> String {
        match self.db.get_database_backend() {
            DatabaseBackend::Sqlite => term.to_ascii_uppercase(),
            _ => term.to_uppercase(),
        }
    }

    async fn rollback(txn: DatabaseTransaction) {
        if let Err(e) = txn.rollback().await {
            warn!(error = %e, "transaction rollback failed");
        }
    }

    /// Map storage failures to caller-facing errors. Unique violations keep
    /// their detail; everything else is logged here and returned opaque.
    fn handle_db_exceptions(&self, err: impl Into<ModelError>) -> ServiceError {
        match err.into() {
            ModelError::Validation(msg) => {
                warn!(reason = %msg, "input rejected");
                ServiceError::Validation(msg)
            }
            ModelError::Db(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    warn!(%detail, "unique constraint violated");
                    ServiceError::Conflict(detail)
                }
                _ => {
                    error!(error = %e, debug = ?e, "unexpected database error");
                    ServiceError::Internal
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use models::product::{NewProduct, ProductChanges};

    use super::*;
    use crate::test_support::get_db;

    fn chair() -> CreateProduct {
        CreateProduct {
            details: NewProduct {
                title: "Office Chair".into(),
                slug: Some("chair-1".into()),
                price: Some(120.0),
                stock: Some(4),
                gender: "unisex".into(),
                ..Default::default()
            },
            images: vec!["chair-front.jpg".into(), "chair-side.jpg".into()],
        }
    }

    fn item(title: &str) -> CreateProduct {
        CreateProduct {
            details: NewProduct { title: title.into(), gender: "men".into(), ..Default::default() },
            images: vec![format!("{title}.png")],
        }
    }

    #[tokio::test]
    async fn create_then_find_plain_returns_same_urls() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());

        let created = svc.create(chair()).await?;
        assert_eq!(created.images, vec!["chair-front.jpg".to_string(), "chair-side.jpg".to_string()]);
        assert_eq!(created.product.slug, "chair-1");

        let plain = svc.find_one_plain(&ProductLookup::Id(created.product.id)).await?;
        assert_eq!(plain.product.id, created.product.id);
        let mut urls = plain.images.clone();
        urls.sort();
        assert_eq!(urls, created.images);
        Ok(())
    }

    #[tokio::test]
    async fn find_one_misses_are_not_found() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        svc.create(chair()).await?;

        let by_id = svc.find_one(&ProductLookup::Id(Uuid::new_v4())).await;
        assert!(matches!(by_id, Err(ServiceError::NotFound(_))));

        let by_slug = svc.find_one(&ProductLookup::parse("no-such-product")).await;
        assert!(matches!(by_slug, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn title_is_case_insensitive_and_slug_is_exact() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        let created = svc.create(chair()).await?;

        let by_title = svc.find_one(&ProductLookup::parse("OFFICE CHAIR")).await?;
        assert_eq!(by_title.product.id, created.product.id);
        assert_eq!(by_title.images.len(), 2);

        let by_slug = svc.find_one(&ProductLookup::parse("chair-1")).await?;
        assert_eq!(by_slug.product.id, created.product.id);

        let wrong_case = svc.find_one(&ProductLookup::parse("Chair-1")).await;
        assert!(matches!(wrong_case, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn title_match_ignores_ascii_case_around_accents() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        let mut cafe = item("Café Crème");
        cafe.details.slug = Some("cafe-creme".into());
        let created = svc.create(cafe).await?;

        let found = svc.find_one(&ProductLookup::parse("café crème")).await?;
        assert_eq!(found.product.id, created.product.id);
        let found = svc.find_one(&ProductLookup::parse("CAFé CRèME")).await?;
        assert_eq!(found.product.id, created.product.id);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_images_replaces_all_of_them() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        let created = svc.create(chair()).await?;
        let id = created.product.id;

        let updated = svc
            .update(id, UpdateProduct { images: Some(vec!["a".into(), "b".into()]), ..Default::default() })
            .await?;
        let urls: Vec<_> = updated.images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["a", "b"]);

        let mut reloaded = svc.find_one_plain(&ProductLookup::Id(id)).await?.images;
        reloaded.sort();
        assert_eq!(reloaded, vec!["a".to_string(), "b".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn update_without_images_keeps_them() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        let created = svc.create(chair()).await?;
        let id = created.product.id;

        let changes = ProductChanges { price: Some(99.0), slug: Some("Chair Two".into()), ..Default::default() };
        let updated = svc.update(id, UpdateProduct { changes, images: None }).await?;
        assert_eq!(updated.product.price, 99.0);
        assert_eq!(updated.product.slug, "chair_two");
        assert_eq!(updated.product.title, "Office Chair");
        assert_eq!(updated.images.len(), 2);

        let mut reloaded = svc.find_one_plain(&ProductLookup::Id(id)).await?.images;
        reloaded.sort();
        assert_eq!(reloaded, created.images);
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_product_is_not_found() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        let res = svc.update(Uuid::new_v4(), UpdateProduct::default()).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn failed_update_rolls_back_image_replacement() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        let chair = svc.create(chair()).await?;
        let other = svc.create(item("Desk")).await?;

        // slug collides with the desk, so the product save fails after the images were swapped
        let changes = ProductChanges { slug: Some(other.product.slug.clone()), ..Default::default() };
        let res = svc
            .update(chair.product.id, UpdateProduct { changes, images: Some(vec!["x".into()]) })
            .await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))));

        let mut kept = svc.find_one_plain(&ProductLookup::Id(chair.product.id)).await?.images;
        kept.sort();
        assert_eq!(kept, chair.images);
        Ok(())
    }

    #[tokio::test]
    async fn remove_deletes_product_and_images() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        let created = svc.create(chair()).await?;
        let id = created.product.id;

        svc.remove(id).await?;
        assert!(matches!(svc.find_one(&ProductLookup::Id(id)).await, Err(ServiceError::NotFound(_))));
        assert!(product_image::find_for_product(&t.db, id).await?.is_empty());

        assert!(matches!(svc.remove(id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_all_then_find_all_is_empty() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        svc.create(chair()).await?;
        svc.create(item("Desk")).await?;

        assert_eq!(svc.delete_all_products().await?, 2);
        assert!(svc.find_all(Pagination::default()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn find_all_pages_and_collapses_images() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        for i in 0..12 {
            svc.create(item(&format!("Item {i}"))).await?;
        }

        let first = svc.find_all(Pagination::default()).await?;
        assert_eq!(first.len(), 10);
        assert!(first.iter().all(|p| p.images == vec![format!("{}.png", p.product.title)]));

        let rest = svc.find_all(Pagination::new(10, 10)).await?;
        assert_eq!(rest.len(), 2);

        assert!(matches!(
            svc.find_all(Pagination { limit: Some(0), offset: None }).await,
            Err(ServiceError::Validation(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_creates_do_not_interfere() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = Arc::new(ProductsService::new(t.db.clone()));

        let mut handles = vec![];
        for i in 0..8 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move { svc.create(item(&format!("Parallel {i}"))).await }));
        }
        for h in handles {
            h.await??;
        }
        assert_eq!(svc.find_all(Pagination::new(50, 0)).await?.len(), 8);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_conflict() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        svc.create(chair()).await?;

        let mut dup = item("Another Chair");
        dup.details.slug = Some("chair-1".into());
        let err = svc.create(dup).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
        assert_eq!(err.status_code(), 400);

        // the failed create left nothing behind
        assert_eq!(svc.find_all(Pagination::default()).await?.len(), 1);
        Ok(())
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Captured {
        type Writer = Captured;
        fn make_writer(&'a self) -> Self::Writer { self.clone() }
    }

    #[tokio::test]
    async fn rejected_input_is_logged() -> anyhow::Result<()> {
        let t = get_db().await?;
        let logs = Captured::default();
        let subscriber = tracing_subscriber::fmt().with_writer(logs.clone()).with_ansi(false).finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let svc = ProductsService::new(t.db.clone());
        let mut bad = item("Negative Price");
        bad.details.price = Some(-5.0);
        assert!(matches!(svc.create(bad).await, Err(ServiceError::Validation(_))));

        let out = String::from_utf8(logs.0.lock().unwrap().clone())?;
        assert!(out.contains("input rejected"), "logs: {out}");
        assert!(out.contains("price must be a non-negative number"), "logs: {out}");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_is_a_validation_error() -> anyhow::Result<()> {
        let t = get_db().await?;
        let svc = ProductsService::new(t.db.clone());
        let mut bad = item("Robot Shirt");
        bad.details.gender = "robot".into();
        assert!(matches!(svc.create(bad).await, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
