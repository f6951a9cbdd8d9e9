//! Render Maruyama product-detail pages.
//!
//! [`initialize`] fetches a `{"products": [...]}` document from a
//! [`DataSource`] and writes its first product into a [`Page`]: title,
//! breadcrumb, images, thumbnail strip and the description, feature and
//! specification panels. [`HtmlPage`] is a page parsed from an HTML
//! skeleton; the returned [`ProductView`] handles thumbnail selection.
//!
//! The [`convert`] module turns the structured output of the PDF extraction
//! tools into the products document the renderer reads.

pub mod config;
pub mod convert;
mod error;
mod page;
mod product;
mod render;
mod source;

use header::{HeaderMap, HeaderValue};
use reqwest::header;

pub use config::Config;
pub use error::{Error, Result};
pub use page::{
    escape_attribute, escape_text, HtmlPage, Page, Selectors, Target, DEFAULT_SKELETON,
};
pub use product::{Catalog, Feature, Product, Scalar, Specification};
pub use render::{
    feature_list, initialize, render_product, specification_table, DescriptionMode,
    ProductView, RenderOptions,
};
pub use source::DataSource;
pub use url::Url;

/// Builds the default headers for the client.
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        )),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.5"),
    );
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/json, text/plain;q=0.9, */*;q=0.8"),
    );
    headers
}
