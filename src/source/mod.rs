#[allow(clippy::module_inception)]
mod source;

pub use source::DataSource;
