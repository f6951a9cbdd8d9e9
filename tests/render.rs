//! Rendering a product into a page.

use std::collections::{HashMap, HashSet};

use maruyama_page::{
    render_product, Catalog, DescriptionMode, Error, HtmlPage, Page, Product, RenderOptions,
    Selectors, Target, DEFAULT_SKELETON,
};
use scraper::{Html, Selector};

const WIDGET: &str = r#"{"products":[{"product_name":"Widget","category":"Tools","thumbnails":["a.jpg","b.jpg"],"features":[{"Durable":"Lasts long"}],"specifications":[{"label":"Weight","value":"1kg"}], "detailedDescription":"<p>Great</p>", "rating":4.5, "reviewCount":10, "mainImage":"main.jpg", "product_description":"desc"}]}"#;

fn widget() -> Product {
    Catalog::from_slice(WIDGET.as_bytes())
        .unwrap()
        .first_product()
        .unwrap()
}

fn select<'a>(document: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
    document.select(&Selector::parse(css).unwrap()).collect()
}

fn text(document: &Html, css: &str) -> String {
    select(document, css)[0].text().collect()
}

/// Records every write; targets in `missing` behave as absent elements.
#[derive(Default)]
struct RecordingPage {
    texts: HashMap<Target, String>,
    attributes: HashMap<(Target, String), String>,
    attribute_writes: Vec<(Target, String)>,
    markup: HashMap<Target, String>,
    missing: HashSet<Target>,
}

impl RecordingPage {
    fn check(&self, target: Target) -> maruyama_page::Result<()> {
        if self.missing.contains(&target) {
            return Err(Error::RenderTargetMissing {
                target,
                selector: Selectors::default().get(target).to_owned(),
            });
        }
        Ok(())
    }
}

impl Page for RecordingPage {
    fn set_text(&mut self, target: Target, text: &str) -> maruyama_page::Result<()> {
        self.check(target)?;
        self.texts.insert(target, text.to_owned());
        Ok(())
    }

    fn set_attribute(&mut self, target: Target, name: &str, value: &str) -> maruyama_page::Result<()> {
        self.check(target)?;
        self.attributes
            .insert((target, name.to_owned()), value.to_owned());
        self.attribute_writes.push((target, name.to_owned()));
        Ok(())
    }

    fn set_markup(&mut self, target: Target, markup: &str) -> maruyama_page::Result<()> {
        self.check(target)?;
        self.markup.insert(target, markup.to_owned());
        Ok(())
    }
}

#[test]
fn text_targets_follow_templates() {
    let mut page = RecordingPage::default();
    render_product(&mut page, &widget(), &RenderOptions::default()).unwrap();

    assert_eq!(page.texts[&Target::Title], "Widget - Maruyama");
    assert_eq!(page.texts[&Target::Breadcrumb], "Home / Tools / Widget");
    assert_eq!(page.texts[&Target::Heading], "Widget");
    assert_eq!(page.texts[&Target::Category], "Tools");
    assert_eq!(page.texts[&Target::Description], "desc");
    assert_eq!(page.texts[&Target::Rating], "★ 4.5");
    assert_eq!(page.texts[&Target::ReviewCount], "(10)");
    assert_eq!(
        page.attributes[&(Target::MainImage, "src".to_owned())],
        "main.jpg"
    );
    assert_eq!(
        page.attributes[&(Target::MainImage, "alt".to_owned())],
        "Widget"
    );
    assert_eq!(page.markup[&Target::DetailPanel], "<p>Great</p>");
}

#[test]
fn main_image_source_is_written_once() {
    let mut page = RecordingPage::default();
    render_product(&mut page, &widget(), &RenderOptions::default()).unwrap();

    let writes: Vec<&str> = page
        .attribute_writes
        .iter()
        .filter(|(target, _)| *target == Target::MainImage)
        .map(|(_, name)| name.as_str())
        .collect();
    assert_eq!(writes, ["alt", "src"]);
}

#[test]
fn site_name_is_configurable() {
    let mut page = RecordingPage::default();
    let options = RenderOptions {
        site_name: "Maruyama Shop".into(),
        ..RenderOptions::default()
    };
    render_product(&mut page, &widget(), &options).unwrap();
    assert_eq!(page.texts[&Target::Title], "Widget - Maruyama Shop");
}

#[test]
fn widget_scenario_on_bundled_skeleton() {
    let mut page = HtmlPage::parse(DEFAULT_SKELETON, Selectors::default()).unwrap();
    render_product(&mut page, &widget(), &RenderOptions::default()).unwrap();
    let document = Html::parse_document(&page.to_html());

    assert_eq!(text(&document, "title"), "Widget - Maruyama");
    assert_eq!(text(&document, ".breadcrumb"), "Home / Tools / Widget");
    assert_eq!(text(&document, ".rating"), "★ 4.5");
    assert_eq!(text(&document, ".review-count"), "(10)");

    let main = select(&document, "#main-image")[0];
    assert_eq!(main.value().attr("src"), Some("main.jpg"));
    assert_eq!(main.value().attr("alt"), Some("Widget"));

    let tiles = select(&document, ".thumbnail-strip .thumbnail");
    assert_eq!(tiles.len(), 2);
    let active = select(&document, ".thumbnail-strip .thumbnail.active");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].value().attr("data-index"), Some("0"));

    assert_eq!(text(&document, "#detail-panel p"), "Great");

    let items = select(&document, "#feature-panel li");
    assert_eq!(items.len(), 1);
    let img = select(&document, "#feature-panel li img")[0];
    assert_eq!(img.value().attr("src"), Some("a.jpg"));
    assert_eq!(text(&document, "#feature-panel li strong"), "Durable");
    assert_eq!(text(&document, "#feature-panel li p"), "Lasts long");

    let rows = select(&document, "#specification-panel tr");
    assert_eq!(rows.len(), 1);
    let cells: Vec<String> = select(&document, "#specification-panel td")
        .iter()
        .map(|td| td.text().collect())
        .collect();
    assert_eq!(cells, ["Weight", "1kg"]);
}

#[test]
fn clicking_thumbnails_moves_selection() {
    let mut page = HtmlPage::parse(DEFAULT_SKELETON, Selectors::default()).unwrap();
    let mut view = render_product(&mut page, &widget(), &RenderOptions::default()).unwrap();

    for k in [1, 0, 1] {
        view.select(k).unwrap();
        view.paint(&mut page).unwrap();

        let document = Html::parse_document(&page.to_html());
        let active = select(&document, ".thumbnail.active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].value().attr("data-index"), Some(k.to_string().as_str()));
        let main = select(&document, "#main-image")[0];
        assert_eq!(main.value().attr("src"), Some(["a.jpg", "b.jpg"][k]));
    }
}

#[test]
fn feature_without_thumbnail_gets_empty_image() {
    let product = Catalog::from_slice(
        br#"{"products":[{"product_name":"P","category":"C","product_description":"d","rating":5,"reviewCount":1,"mainImage":"m.jpg","thumbnails":["a.jpg"],"features":[{"One":"1"},{"Two":"2"}]}]}"#,
    )
    .unwrap()
    .first_product()
    .unwrap();
    let mut page = HtmlPage::parse(DEFAULT_SKELETON, Selectors::default()).unwrap();
    render_product(&mut page, &product, &RenderOptions::default()).unwrap();

    let document = Html::parse_document(&page.to_html());
    let sources: Vec<Option<&str>> = select(&document, "#feature-panel li img")
        .iter()
        .map(|img| img.value().attr("src"))
        .collect();
    assert_eq!(sources, [Some("a.jpg"), Some("")]);
    assert!(select(&document, "#specification-panel tr").is_empty());
}

#[test]
fn plain_description_mode_escapes_markup() {
    let mut page = HtmlPage::parse(DEFAULT_SKELETON, Selectors::default()).unwrap();
    let options = RenderOptions {
        description_mode: DescriptionMode::Text,
        ..RenderOptions::default()
    };
    render_product(&mut page, &widget(), &options).unwrap();
    let document = Html::parse_document(&page.to_html());
    assert!(select(&document, "#detail-panel p").is_empty());
    assert_eq!(text(&document, "#detail-panel"), "<p>Great</p>");
}

#[test]
fn missing_target_stops_later_steps() {
    let mut page = RecordingPage {
        missing: HashSet::from([Target::Rating]),
        ..RecordingPage::default()
    };
    let err = render_product(&mut page, &widget(), &RenderOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::RenderTargetMissing {
            target: Target::Rating,
            ..
        }
    ));
    assert!(page.texts.contains_key(&Target::Description));
    assert!(!page.texts.contains_key(&Target::ReviewCount));
    assert!(page.markup.is_empty());
}

#[test]
fn skeleton_without_panels_fails_on_first_panel() {
    let skeleton = r#"<html><head><title></title></head><body><nav class="breadcrumb"></nav><h1 class="product-title"></h1><div class="product-category"></div><p class="product-description"></p><span class="rating"></span><span class="review-count"></span><img id="main-image"><div class="thumbnail-strip"></div></body></html>"#;
    let mut page = HtmlPage::parse(skeleton, Selectors::default()).unwrap();
    let err = render_product(&mut page, &widget(), &RenderOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "page has no element for detail_panel (selector `#detail-panel`)"
    );
}

#[test]
fn custom_selectors_locate_targets() {
    let skeleton = r#"<html><head><title></title></head><body>
        <nav id="crumbs"></nav><h2></h2><em class="cat"></em><p class="desc"></p>
        <b class="stars"></b><i class="count"></i><img class="hero"><ul class="thumbs"></ul>
        <div class="collapsible-content"></div><div class="collapsible-content"></div><div class="collapsible-content"></div>
    </body></html>"#;
    let selectors = Selectors {
        breadcrumb: "#crumbs".into(),
        heading: "h2".into(),
        category: ".cat".into(),
        description: ".desc".into(),
        rating: ".stars".into(),
        review_count: ".count".into(),
        main_image: "img.hero".into(),
        thumbnail_strip: ".thumbs".into(),
        detail_panel: ".collapsible-content:nth-of-type(1)".into(),
        feature_panel: ".collapsible-content:nth-of-type(2)".into(),
        specification_panel: ".collapsible-content:nth-of-type(3)".into(),
        ..Selectors::default()
    };
    let mut page = HtmlPage::parse(skeleton, selectors).unwrap();
    render_product(&mut page, &widget(), &RenderOptions::default()).unwrap();

    let document = Html::parse_document(&page.to_html());
    assert_eq!(text(&document, "h2"), "Widget");
    let panels = select(&document, ".collapsible-content");
    assert_eq!(panels.len(), 3);
    assert_eq!(panels[0].text().collect::<String>(), "Great");
    assert_eq!(select(&document, ".collapsible-content ul li").len(), 1);
    assert_eq!(select(&document, ".collapsible-content table tr").len(), 1);
}
