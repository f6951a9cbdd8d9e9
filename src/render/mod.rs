mod fragments;
#[allow(clippy::module_inception)]
mod render;
mod view;

pub use fragments::{feature_list, specification_table};
pub use render::{initialize, render_product, DescriptionMode, RenderOptions};
pub use view::ProductView;
