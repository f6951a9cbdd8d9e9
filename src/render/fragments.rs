//! Markup for the feature and specification panels.

use crate::page::{escape_attribute, escape_text};
use crate::product::{Feature, Specification};

const CELL_STYLE: &str = "padding: 8px; border: 1px solid #ddd;";
const LABEL_STYLE: &str = "padding: 8px; border: 1px solid #ddd; font-weight: bold; background: #f7f7f7;";

/// Builds the feature list. Feature `i` is illustrated by `thumbnails[i]`,
/// or by an empty image source when there are fewer thumbnails than features.
pub fn feature_list(features: &[Feature], thumbnails: &[String]) -> String {
    let items: String = features
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            let image = thumbnails.get(i).map(String::as_str).unwrap_or_default();
            format!(
                r#"<li><img src="{}" alt="{}"><div><strong>{}</strong><p>{}</p></div></li>"#,
                escape_attribute(image),
                escape_attribute(&feature.title),
                escape_text(&feature.title),
                escape_text(&feature.description),
            )
        })
        .collect();
    format!(r#"<ul class="feature-list">{items}</ul>"#)
}

/// Builds the specification table, one row per specification.
pub fn specification_table(specifications: &[Specification]) -> String {
    let rows: String = specifications
        .iter()
        .map(|spec| {
            format!(
                r#"<tr><td style="{LABEL_STYLE}">{}</td><td style="{CELL_STYLE}">{}</td></tr>"#,
                escape_text(&spec.label),
                escape_text(&spec.value),
            )
        })
        .collect();
    format!(r#"<table style="width: 100%; border-collapse: collapse;">{rows}</table>"#)
}
