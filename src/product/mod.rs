mod feature;
#[allow(clippy::module_inception)]
mod product;
mod specs;

pub use feature::Feature;
pub use product::{Catalog, Product, Scalar};
pub use specs::Specification;
