use std::collections::HashMap;

use ego_tree::{NodeId, NodeRef, Tree};
use html5ever::{LocalName, Namespace, QualName};
use log::debug;
use scraper::node::Text;
use scraper::{Html, Node, Selector, StrTendril};

use crate::error::{Error, Result};
use crate::page::{Page, Selectors, Target};

/// The page skeleton shipped with the crate; its element classes and ids
/// match [`Selectors::default`].
pub const DEFAULT_SKELETON: &str = include_str!("../../assets/skeleton.html");

/// Escapes text for use as element content.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes text for use inside a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// A static HTML page parsed from a skeleton.
///
/// Targets are located once, when the page is parsed, using the configured
/// [`Selectors`]; the first matching element wins. Writes change the parsed
/// tree in place and [`HtmlPage::to_html`] serializes it.
pub struct HtmlPage {
    document: Html,
    selectors: Selectors,
    nodes: HashMap<Target, NodeId>,
    modified: bool,
}

impl HtmlPage {
    /// Parses `skeleton` and resolves every target.
    ///
    /// A target without a matching element is not an error here; writing
    /// to it is.
    pub fn parse(skeleton: &str, selectors: Selectors) -> Result<Self> {
        let document = Html::parse_document(skeleton);
        let mut nodes = HashMap::new();
        for target in Target::ALL {
            let css = selectors.get(target);
            let selector = Selector::parse(css).map_err(|_| Error::InvalidSelector {
                selector: css.to_owned(),
            })?;
            match document.select(&selector).next() {
                Some(element) => {
                    let node: &NodeRef<'_, Node> = &element;
                    nodes.insert(target, node.id());
                }
                None => debug!("skeleton has no element for {target} (`{css}`)"),
            }
        }
        Ok(Self {
            document,
            selectors,
            nodes,
            modified: false,
        })
    }

    /// Whether any write has been applied.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Serializes the document.
    pub fn to_html(&self) -> String {
        self.document.html()
    }

    fn missing(&self, target: Target) -> Error {
        Error::RenderTargetMissing {
            target,
            selector: self.selectors.get(target).to_owned(),
        }
    }

    /// Looks up the node of `target` and marks the page as written.
    fn node_id(&mut self, target: Target) -> Result<NodeId> {
        let id = self
            .nodes
            .get(&target)
            .copied()
            .ok_or_else(|| self.missing(target))?;
        self.modified = true;
        Ok(id)
    }

    /// Detaches every child of `target` and returns its node id.
    fn clear(&mut self, target: Target) -> Result<NodeId> {
        let id = self.node_id(target)?;
        if let Some(mut node) = self.document.tree.get_mut(id) {
            while let Some(mut child) = node.first_child() {
                child.detach();
            }
        }
        Ok(id)
    }
}

/// Appends a copy of `node` and its subtree under `parent`.
fn graft(tree: &mut Tree<Node>, parent: NodeId, node: NodeRef<'_, Node>) {
    let Some(mut parent) = tree.get_mut(parent) else {
        return;
    };
    let id = parent.append(node.value().clone()).id();
    for child in node.children() {
        graft(tree, id, child);
    }
}

impl Page for HtmlPage {
    fn set_text(&mut self, target: Target, text: &str) -> Result<()> {
        let id = self.clear(target)?;
        if let Some(mut node) = self.document.tree.get_mut(id) {
            node.append(Node::Text(Text {
                text: StrTendril::from_slice(text),
            }));
        }
        Ok(())
    }

    fn set_attribute(&mut self, target: Target, name: &str, value: &str) -> Result<()> {
        let id = self.node_id(target)?;
        let Some(mut node) = self.document.tree.get_mut(id) else {
            return Ok(());
        };
        if let Node::Element(element) = node.value() {
            let key = element
                .attrs
                .keys()
                .find(|key| key.prefix.is_none() && &*key.local == name)
                .cloned()
                .unwrap_or_else(|| {
                    QualName::new(None, Namespace::from(""), LocalName::from(name))
                });
            element.attrs.insert(key, StrTendril::from_slice(value));
        }
        Ok(())
    }

    fn set_markup(&mut self, target: Target, markup: &str) -> Result<()> {
        let id = self.clear(target)?;
        let fragment = Html::parse_fragment(markup);
        for child in fragment.root_element().children() {
            graft(&mut self.document.tree, id, child);
        }
        Ok(())
    }
}
