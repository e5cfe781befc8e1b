//! Products module: lookup/input/output types (`domain`) and the
//! persistence service (`service`).

pub mod domain;
pub mod service;

pub use domain::{CreateProduct, PlainProduct, ProductLookup, ProductWithImages, UpdateProduct};
pub use service::ProductsService;
