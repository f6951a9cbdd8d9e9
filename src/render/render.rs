use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::page::{escape_text, Page, Target};
use crate::product::Product;
use crate::render::{fragments, ProductView};
use crate::source::DataSource;

/// How `detailedDescription` is placed into the description panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionMode {
    /// Inserted as-is. The data source is trusted to send safe markup.
    #[default]
    Markup,
    /// Escaped and shown as plain text.
    Text,
}

/// Options controlling how a product is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Appended to the product name in the document title.
    pub site_name: String,
    pub description_mode: DescriptionMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            site_name: "Maruyama".into(),
            description_mode: DescriptionMode::default(),
        }
    }
}

/// Fetches the product document from `source` and renders its first
/// product into `page`.
///
/// ```no_run
/// use maruyama_page::{initialize, DataSource, HtmlPage, RenderOptions, Selectors, DEFAULT_SKELETON};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut page = HtmlPage::parse(DEFAULT_SKELETON, Selectors::default())?;
///     let source: DataSource = "products.json".parse()?;
///     initialize(&mut page, &source, &RenderOptions::default()).await?;
///     println!("{}", page.to_html());
///     Ok(())
/// }
/// ```
///
/// Nothing is written to `page` unless the document was fetched and its
/// first product decoded successfully. Rendering then stops at the first
/// target the page does not have.
pub async fn initialize<P: Page>(
    page: &mut P,
    source: &DataSource,
    options: &RenderOptions,
) -> Result<ProductView> {
    let catalog = source.load().await?;
    let product = catalog.first_product()?;
    render_product(page, &product, options)
}

/// Renders `product` into `page` and returns the initial view-state.
pub fn render_product<P: Page>(
    page: &mut P,
    product: &Product,
    options: &RenderOptions,
) -> Result<ProductView> {
    info!("rendering product {:?}", product.name);

    page.set_text(
        Target::Title,
        &format!("{} - {}", product.name, options.site_name),
    )?;
    page.set_text(
        Target::Breadcrumb,
        &format!("Home / {} / {}", product.category, product.name),
    )?;
    page.set_text(Target::Heading, &product.name)?;
    page.set_text(Target::Category, &product.category)?;
    page.set_text(Target::Description, &product.description)?;
    page.set_text(Target::Rating, &format!("★ {}", product.rating))?;
    page.set_text(Target::ReviewCount, &format!("({})", product.review_count))?;

    page.set_attribute(Target::MainImage, "alt", &product.name)?;

    // Paints the main image `src` and the thumbnail strip.
    let view = ProductView::new(product);
    view.paint(page)?;
    debug!("{} thumbnail(s)", product.thumbnails.len());

    match options.description_mode {
        DescriptionMode::Markup => {
            page.set_markup(Target::DetailPanel, &product.detailed_description)?
        }
        DescriptionMode::Text => page.set_markup(
            Target::DetailPanel,
            &escape_text(&product.detailed_description),
        )?,
    }

    page.set_markup(
        Target::FeaturePanel,
        &fragments::feature_list(&product.features, &product.thumbnails),
    )?;
    debug!("{} feature(s)", product.features.len());

    page.set_markup(
        Target::SpecificationPanel,
        &fragments::specification_table(&product.specifications),
    )?;
    debug!("{} specification(s)", product.specifications.len());

    Ok(view)
}
