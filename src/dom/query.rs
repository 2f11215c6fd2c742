//! DOM queries: compound selectors, scoped lookup, `closest`.
//!
//! Only compound selectors are supported: a run of simple selectors with no
//! combinators, such as `div.portfolio-card`, `#portfolioModal` or
//! `.carousel-dots[data-carousel="brows"]`. That is all the page wiring needs.

use super::node::{NodeData, NodeId};
use super::tree::Dom;

/// A single attribute condition inside `[...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrMatch {
    /// `[name]`
    Present(String),
    /// `[name=value]` / `[name="value"]`
    Equals(String, String),
}

/// A parsed compound selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Consume a run of name characters from the front of `input`.
fn take_name(input: &str) -> (&str, &str) {
    let end = input
        .char_indices()
        .find(|&(_, c)| !is_name_char(c))
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    input.split_at(end)
}

impl Selector {
    /// Parse a compound selector. Returns `None` for anything malformed or
    /// containing combinators.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let mut sel = Selector::default();
        let (tag, mut rest) = take_name(input);
        if !tag.is_empty() {
            sel.tag = Some(tag.to_ascii_lowercase());
        }

        while let Some(first) = rest.chars().next() {
            match first {
                '#' | '.' => {
                    let (name, tail) = take_name(&rest[1..]);
                    if name.is_empty() {
                        return None;
                    }
                    if first == '#' {
                        sel.id = Some(name.to_owned());
                    } else {
                        sel.classes.push(name.to_owned());
                    }
                    rest = tail;
                }
                '[' => {
                    let close = rest.find(']')?;
                    sel.attrs.push(Self::parse_attr(&rest[1..close])?);
                    rest = &rest[close + 1..];
                }
                _ => return None,
            }
        }

        Some(sel)
    }

    fn parse_attr(body: &str) -> Option<AttrMatch> {
        match body.split_once('=') {
            None => {
                let name = body.trim();
                (!name.is_empty() && name.chars().all(is_name_char))
                    .then(|| AttrMatch::Present(name.to_owned()))
            }
            Some((name, value)) => {
                let name = name.trim();
                if name.is_empty() || !name.chars().all(is_name_char) {
                    return None;
                }
                let value = value.trim();
                let value = value
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                    .unwrap_or(value);
                Some(AttrMatch::Equals(name.to_owned(), value.to_owned()))
            }
        }
    }

    /// Whether a node satisfies every simple selector in this compound.
    pub fn matches(&self, data: &NodeData) -> bool {
        if self.tag.as_deref().is_some_and(|t| t != data.tag) {
            return false;
        }
        if self.id.is_some() && self.id != data.id {
            return false;
        }
        if !self.classes.iter().all(|c| data.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|attr| match attr {
            AttrMatch::Present(name) => data.attr(name).is_some(),
            AttrMatch::Equals(name, value) => data.attr(name) == Some(value.as_str()),
        })
    }
}

impl Dom {
    /// Find the first node (document order) whose `id` matches.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|&n| self.get(n).is_some_and(|d| d.id.as_deref() == Some(id)))
    }

    /// Find all nodes that have the given CSS class, in document order.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    /// First node in document order matching `selector`.
    ///
    /// An unparsable selector matches nothing.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    /// All nodes in document order matching `selector`.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        match self.root() {
            Some(root) => self.select_from(root, selector, true),
            None => Vec::new(),
        }
    }

    /// Descendants of `scope` (excluding `scope` itself) matching `selector`.
    pub fn query_within(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        self.select_from(scope, selector, false)
    }

    /// First descendant of `scope` matching `selector`.
    pub fn query_first_within(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        self.query_within(scope, selector).into_iter().next()
    }

    /// Nearest inclusive ancestor of `id` matching `selector`.
    pub fn closest(&self, id: NodeId, selector: &str) -> Option<NodeId> {
        let sel = Selector::parse(selector)?;
        if !self.contains(id) {
            return None;
        }
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|&n| self.get(n).is_some_and(|d| sel.matches(d)))
    }

    fn select_from(&self, start: NodeId, selector: &str, inclusive: bool) -> Vec<NodeId> {
        let Some(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.walk_depth_first(start)
            .into_iter()
            .filter(|&n| inclusive || n != start)
            .filter(|&n| self.get(n).is_some_and(|d| sel.matches(d)))
            .collect()
    }
}
