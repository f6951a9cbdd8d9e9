use log::debug;

use crate::error::{Error, Result};
use crate::page::{escape_attribute, Page, Target};
use crate::product::Product;

/// Interactive state of a rendered product page: which thumbnail is
/// selected and what the primary image shows.
///
/// The thumbnail strip and the primary image are always derived from this
/// value by [`ProductView::paint`]; the page holds no selection of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    thumbnails: Vec<String>,
    alt: String,
    main_image: String,
    selected_thumbnail: Option<usize>,
}

impl ProductView {
    /// Initial state: first thumbnail selected, primary image from `mainImage`.
    pub fn new(product: &Product) -> Self {
        Self {
            thumbnails: product.thumbnails.clone(),
            alt: product.name.clone(),
            main_image: product.main_image.clone(),
            selected_thumbnail: (!product.thumbnails.is_empty()).then_some(0),
        }
    }

    pub fn selected_thumbnail(&self) -> Option<usize> {
        self.selected_thumbnail
    }

    /// Source currently shown by the primary image.
    pub fn main_image(&self) -> &str {
        &self.main_image
    }

    pub fn thumbnails(&self) -> &[String] {
        &self.thumbnails
    }

    /// Handles a click on thumbnail tile `index`: it becomes the only
    /// selected tile and the primary image switches to its source.
    pub fn select(&mut self, index: usize) -> Result<()> {
        let thumbnail = self.thumbnails.get(index).ok_or(Error::NoSuchThumbnail {
            index,
            count: self.thumbnails.len(),
        })?;
        debug!("selecting thumbnail {index} ({thumbnail})");
        self.main_image = thumbnail.clone();
        self.selected_thumbnail = Some(index);
        Ok(())
    }

    /// Markup of the thumbnail strip, one tile per thumbnail.
    pub fn thumbnail_strip(&self) -> String {
        let alt = escape_attribute(&self.alt);
        self.thumbnails
            .iter()
            .enumerate()
            .map(|(i, src)| {
                let class = if Some(i) == self.selected_thumbnail {
                    "thumbnail active"
                } else {
                    "thumbnail"
                };
                format!(
                    r#"<div class="{class}" data-index="{i}"><img src="{}" alt="{alt}"></div>"#,
                    escape_attribute(src)
                )
            })
            .collect()
    }

    /// Writes the thumbnail strip and the primary image source to `page`.
    pub fn paint(&self, page: &mut impl Page) -> Result<()> {
        page.set_attribute(Target::MainImage, "src", &self.main_image)?;
        page.set_markup(Target::ThumbnailStrip, &self.thumbnail_strip())
    }
}
