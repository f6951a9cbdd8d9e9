//! Conversion of PDF extraction output into the document the renderer reads.

mod extraction;
mod frontend;

pub use extraction::{
    ExtractedFeature, ExtractedImage, ExtractedProduct, ExtractedSpecification, ExtractedTable,
    ExtractionMetadata, ExtractionResult,
};
pub use frontend::{convert_file, default_output_path, FrontendCatalog, FrontendProduct};
