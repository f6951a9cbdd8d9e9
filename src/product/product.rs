use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::product::{Feature, Specification};

/// A value the source may send either as a JSON number or as a string,
/// like `rating` (`4.5` or `"4.5"`).
///
/// Numbers keep their JSON spelling, so `10` renders as `10` and `4.5` as `4.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(number) => write!(f, "{number}"),
            Scalar::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The details of a product shown on the page.
///
/// Obtain one with [`Catalog::first_product`]; every required field has been
/// checked by then.
pub struct Product {
    /// Product name, used in the title, the heading and image alt texts.
    pub name: String,
    /// Category shown in the breadcrumb and the category label.
    pub category: String,
    /// Short description.
    pub description: String,
    /// Rating shown after a star.
    pub rating: Scalar,
    /// Number of reviews.
    pub review_count: Scalar,
    /// URL or path of the primary image.
    pub main_image: String,
    /// URLs of the alternate images, in display order.
    pub thumbnails: Vec<String>,
    /// Pre-formatted markup for the description panel.
    pub detailed_description: String,
    /// Features, paired by position with `thumbnails`.
    pub features: Vec<Feature>,
    /// Specifications, in display order.
    pub specifications: Vec<Specification>,
}

/// Wire form of a product; required fields are optional here so that their
/// absence is reported by name instead of as a generic decode error.
#[derive(Deserialize)]
struct RawProduct {
    product_name: Option<String>,
    category: Option<String>,
    product_description: Option<String>,
    rating: Option<Scalar>,
    #[serde(rename = "reviewCount")]
    review_count: Option<Scalar>,
    #[serde(rename = "mainImage")]
    main_image: Option<String>,
    #[serde(default)]
    thumbnails: Vec<String>,
    #[serde(rename = "detailedDescription", default)]
    detailed_description: Option<String>,
    #[serde(default)]
    features: Vec<Feature>,
    #[serde(default)]
    specifications: Vec<Specification>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingData { field })
}

impl TryFrom<RawProduct> for Product {
    type Error = Error;

    fn try_from(raw: RawProduct) -> Result<Self> {
        Ok(Product {
            name: required(raw.product_name, "product_name")?,
            category: required(raw.category, "category")?,
            description: required(raw.product_description, "product_description")?,
            rating: required(raw.rating, "rating")?,
            review_count: required(raw.review_count, "reviewCount")?,
            main_image: required(raw.main_image, "mainImage")?,
            thumbnails: raw.thumbnails,
            detailed_description: raw.detailed_description.unwrap_or_default(),
            features: raw.features,
            specifications: raw.specifications,
        })
    }
}

/// The fetched product document, `{"products": [...]}`.
///
/// Entries are kept undecoded; only the first one is ever turned into a
/// [`Product`].
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    products: Vec<serde_json::Value>,
}

impl Catalog {
    /// Parses a catalog from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let catalog: Catalog = serde_json::from_slice(bytes)?;
        debug!("catalog holds {} product(s)", catalog.products.len());
        Ok(catalog)
    }

    /// Number of product entries in the document.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Decodes and validates `products[0]`.
    pub fn first_product(&self) -> Result<Product> {
        let first = self.products.first().ok_or(Error::MissingData {
            field: "products[0]",
        })?;
        let raw = RawProduct::deserialize(first)?;
        Product::try_from(raw)
    }
}
