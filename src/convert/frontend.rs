use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use crate::convert::{ExtractedImage, ExtractedProduct, ExtractedTable, ExtractionResult};
use crate::error::{Error, Result};
use crate::product::{Feature, Scalar, Specification};

const DEFAULT_RATING: &str = "4.5";
const DEFAULT_REVIEW_COUNT: &str = "128";
const TEXT_ONLY: &str = "text_only";

/// The document the renderer reads, `{"products": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontendCatalog {
    pub products: Vec<FrontendProduct>,
}

/// One product in the shape the renderer expects, plus the extraction
/// details carried along for reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontendProduct {
    pub product_name: String,
    pub product_description: String,
    pub category: String,
    pub brand: String,
    pub model_number: String,
    pub rating: Scalar,
    #[serde(rename = "reviewCount")]
    pub review_count: Scalar,
    #[serde(rename = "detailedDescription")]
    pub detailed_description: String,
    pub features: Vec<Feature>,
    pub specifications: Vec<Specification>,
    #[serde(rename = "mainImage")]
    pub main_image: String,
    pub thumbnails: Vec<String>,
    pub tables: Vec<ExtractedTable>,
    pub raw_text: String,
    pub extraction_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_pdf: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image_details: Vec<ExtractedImage>,
}

impl FrontendProduct {
    /// Reshapes one extracted product.
    ///
    /// Every saved image becomes a thumbnail and the first one is the main
    /// image. Text-only extraction yields no images, so `mainImage` falls
    /// back to `thumbnail_image` or stays empty. Rating and review count get
    /// placeholder values only when the extraction has none.
    pub fn from_extracted(product: &ExtractedProduct, source_pdf: Option<&str>) -> Self {
        let description = product.product_description.clone().unwrap_or_default();
        let thumbnails: Vec<String> = product
            .images
            .iter()
            .filter_map(|image| image.local_path.clone())
            .collect();
        let main_image = thumbnails
            .first()
            .cloned()
            .or_else(|| product.thumbnail_image.clone())
            .unwrap_or_default();
        FrontendProduct {
            product_name: product.product_name.clone(),
            product_description: description.clone(),
            category: product.category.clone().unwrap_or_default(),
            brand: product.brand.clone().unwrap_or_default(),
            model_number: product.model_number.clone().unwrap_or_default(),
            rating: product
                .rating
                .clone()
                .unwrap_or_else(|| Scalar::from(DEFAULT_RATING)),
            review_count: product
                .review_count
                .clone()
                .unwrap_or_else(|| Scalar::from(DEFAULT_REVIEW_COUNT)),
            detailed_description: description,
            features: product
                .features
                .iter()
                .map(|f| Feature::new(&f.name, f.description.clone().unwrap_or_default()))
                .collect(),
            specifications: product
                .specifications
                .iter()
                .map(|s| Specification {
                    label: s.label.clone(),
                    value: format!("{} {}", s.value, s.unit.as_deref().unwrap_or_default())
                        .trim()
                        .to_owned(),
                })
                .collect(),
            main_image,
            thumbnails,
            tables: product.tables.clone(),
            raw_text: product.raw_text.clone(),
            extraction_type: product
                .extraction_type
                .clone()
                .unwrap_or_else(|| TEXT_ONLY.to_owned()),
            source_pdf: source_pdf.map(str::to_owned),
            image_details: product.images.clone(),
        }
    }
}

impl From<&ExtractionResult> for FrontendCatalog {
    fn from(result: &ExtractionResult) -> Self {
        let source_pdf = result.metadata.source_pdf.as_deref();
        FrontendCatalog {
            products: result
                .products
                .iter()
                .map(|product| FrontendProduct::from_extracted(product, source_pdf))
                .collect(),
        }
    }
}

/// Default output path: `<stem>_frontend.json` next to `input`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "products".to_owned());
    input.with_file_name(format!("{stem}_frontend.json"))
}

/// Reads a structured extraction file, converts it and writes the frontend
/// document to `output`, creating parent directories as needed.
pub fn convert_file(input: &Path, output: &Path) -> Result<FrontendCatalog> {
    let read_error = |source| Error::Io {
        path: input.to_owned(),
        source,
    };
    let write_error = |source| Error::Io {
        path: output.to_owned(),
        source,
    };

    let bytes = std::fs::read(input).map_err(read_error)?;
    let result: ExtractionResult = serde_json::from_slice(&bytes)?;
    if result.products.is_empty() {
        warn!("{} holds no products", input.display());
    }
    let catalog = FrontendCatalog::from(&result);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    let json = serde_json::to_string_pretty(&catalog)?;
    std::fs::write(output, json).map_err(write_error)?;
    info!("frontend JSON saved to {}", output.display());
    Ok(catalog)
}
