use std::fmt;

use serde::{Deserialize, Serialize};

/// A named element of the product page that the renderer writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// The document title.
    Title,
    Breadcrumb,
    Heading,
    Category,
    Description,
    Rating,
    ReviewCount,
    /// The primary product image.
    MainImage,
    /// Container of the clickable thumbnail tiles.
    ThumbnailStrip,
    /// First collapsible panel, holds the detailed description markup.
    DetailPanel,
    /// Second collapsible panel, holds the feature list.
    FeaturePanel,
    /// Third collapsible panel, holds the specification table.
    SpecificationPanel,
}

impl Target {
    pub const ALL: [Target; 12] = [
        Target::Title,
        Target::Breadcrumb,
        Target::Heading,
        Target::Category,
        Target::Description,
        Target::Rating,
        Target::ReviewCount,
        Target::MainImage,
        Target::ThumbnailStrip,
        Target::DetailPanel,
        Target::FeaturePanel,
        Target::SpecificationPanel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Target::Title => "title",
            Target::Breadcrumb => "breadcrumb",
            Target::Heading => "heading",
            Target::Category => "category",
            Target::Description => "description",
            Target::Rating => "rating",
            Target::ReviewCount => "review_count",
            Target::MainImage => "main_image",
            Target::ThumbnailStrip => "thumbnail_strip",
            Target::DetailPanel => "detail_panel",
            Target::FeaturePanel => "feature_panel",
            Target::SpecificationPanel => "specification_panel",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// CSS selectors locating each [`Target`] in a page skeleton.
///
/// The defaults match the bundled skeleton; any of them can be overridden
/// from the `renderer.selectors` section of `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub title: String,
    pub breadcrumb: String,
    pub heading: String,
    pub category: String,
    pub description: String,
    pub rating: String,
    pub review_count: String,
    pub main_image: String,
    pub thumbnail_strip: String,
    pub detail_panel: String,
    pub feature_panel: String,
    pub specification_panel: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            title: "title".into(),
            breadcrumb: ".breadcrumb".into(),
            heading: ".product-title".into(),
            category: ".product-category".into(),
            description: ".product-description".into(),
            rating: ".rating".into(),
            review_count: ".review-count".into(),
            main_image: "#main-image".into(),
            thumbnail_strip: ".thumbnail-strip".into(),
            detail_panel: "#detail-panel".into(),
            feature_panel: "#feature-panel".into(),
            specification_panel: "#specification-panel".into(),
        }
    }
}

impl Selectors {
    /// The selector configured for `target`.
    pub fn get(&self, target: Target) -> &str {
        match target {
            Target::Title => &self.title,
            Target::Breadcrumb => &self.breadcrumb,
            Target::Heading => &self.heading,
            Target::Category => &self.category,
            Target::Description => &self.description,
            Target::Rating => &self.rating,
            Target::ReviewCount => &self.review_count,
            Target::MainImage => &self.main_image,
            Target::ThumbnailStrip => &self.thumbnail_strip,
            Target::DetailPanel => &self.detail_panel,
            Target::FeaturePanel => &self.feature_panel,
            Target::SpecificationPanel => &self.specification_panel,
        }
    }
}
