use crate::error::Result;
use crate::page::Target;

/// Handle to the page being rendered.
///
/// The renderer only ever talks to the page through this trait, so it can
/// drive a parsed HTML skeleton ([`HtmlPage`](crate::page::HtmlPage)) as well
/// as a recording double in tests. Every write replaces what the target held
/// before; nothing is merged.
///
/// Implementations return [`Error::RenderTargetMissing`](crate::Error::RenderTargetMissing)
/// when the page has no element for `target`.
pub trait Page {
    /// Replaces all children of `target` with a single text node.
    fn set_text(&mut self, target: Target, text: &str) -> Result<()>;

    /// Sets one attribute of `target`, keeping its other attributes.
    fn set_attribute(&mut self, target: Target, name: &str, value: &str) -> Result<()>;

    /// Replaces all children of `target` with `markup`, inserted unescaped.
    fn set_markup(&mut self, target: Target, markup: &str) -> Result<()>;
}
