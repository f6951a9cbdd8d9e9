use serde::{Deserialize, Deserializer, Serialize};

use crate::product::Scalar;

/// Output of the PDF extraction pipeline: products found in one PDF plus
/// document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub products: Vec<ExtractedProduct>,
    #[serde(default)]
    pub metadata: ExtractionMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedProduct {
    pub product_name: String,
    pub product_description: Option<String>,
    pub brand: Option<String>,
    /// Some extractions list several model numbers; they are joined with `, `.
    #[serde(deserialize_with = "one_or_many")]
    pub model_number: Option<String>,
    pub category: Option<String>,
    pub specifications: Vec<ExtractedSpecification>,
    pub features: Vec<ExtractedFeature>,
    pub tables: Vec<ExtractedTable>,
    pub raw_text: String,
    pub extraction_type: Option<String>,
    /// Images cut from the PDF pages; empty for text-only extraction.
    pub images: Vec<ExtractedImage>,
    pub thumbnail_image: Option<String>,
    pub rating: Option<Scalar>,
    pub review_count: Option<Scalar>,
}

/// An image saved from a PDF page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedImage {
    pub id: String,
    pub filename: String,
    /// Where the image was written; images without one are not shown.
    pub local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_data: Option<String>,
    pub page_number: u32,
    pub size_estimate: u64,
    pub image_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSpecification {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFeature {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A table recovered from the OCR text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(default)]
    pub table_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionMetadata {
    pub source_pdf: Option<String>,
    pub total_pages: u32,
    pub total_text_length: u64,
    pub extraction_type: Option<String>,
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(
        Option::<OneOrMany>::deserialize(deserializer)?.map(|value| match value {
            OneOrMany::One(one) => one,
            OneOrMany::Many(many) => many.join(", "),
        }),
    )
}
