mod html;
#[allow(clippy::module_inception)]
mod page;
mod target;

pub use html::{escape_attribute, escape_text, HtmlPage, DEFAULT_SKELETON};
pub use page::Page;
pub use target::{Selectors, Target};
