//! Persistence layer: `sea-orm` entities for the catalog, input validation
//! and database connection setup.

pub mod errors;
pub mod db;
pub mod product;
pub mod product_image;

#[cfg(test)]
mod tests;
