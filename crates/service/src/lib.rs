//! Service layer for the product catalog.
//! - `products`: CRUD over products and their images, including the
//!   transactional image replacement on update.
//! - `seed`: wipe-and-reload of the static catalog dataset.
//! - `files`: upload media-type gate and stored-name helper.

pub mod errors;
pub mod pagination;
pub mod products;
pub mod seed;
pub mod files;
#[cfg(test)]
pub mod test_support;
