//! Node types: NodeId, NodeData.

use std::ops::Range;

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a DOM node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single DOM node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Lowercased element name (e.g. "div", "button").
    pub tag: String,
    /// Optional unique id (`#id` selector).
    pub id: Option<String>,
    /// CSS classes, in document order.
    pub classes: Vec<String>,
    /// Remaining attributes (`data-*`, `src`, `alt`, ...) in document order.
    pub attributes: Vec<(String, String)>,
    /// Whether this node can hold keyboard focus.
    pub focusable: bool,
    /// Byte range of the start tag in the markup it was parsed from.
    pub source: Option<Range<usize>>,
}

impl NodeData {
    /// Create a new `NodeData` for the given element name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            focusable: false,
            source: None,
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single CSS class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add multiple CSS classes (builder).
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            let class = class.into();
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set whether this node can receive focus (builder).
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Check whether this node has a given CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a CSS class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a CSS class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add the class when `on` is true, remove it otherwise.
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Look up an attribute value. `id` and `class` are answered from their
    /// dedicated fields.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match name {
            "id" => self.id.as_deref(),
            _ => self
                .attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "id" => self.id = Some(value),
            "class" => {
                self.classes.clear();
                for class in value.split_ascii_whitespace() {
                    self.add_class(class);
                }
            }
            _ => {
                if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
                    slot.1 = value;
                } else {
                    self.attributes.push((name, value));
                }
            }
        }
    }

    /// Shorthand for a `data-*` attribute.
    pub fn data(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.strip_prefix("data-") == Some(key))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let data = NodeData::new("DIV");
        assert_eq!(data.tag, "div");
        assert!(data.id.is_none());
        assert!(data.classes.is_empty());
        assert!(data.attributes.is_empty());
        assert!(!data.focusable);
    }

    #[test]
    fn builder_with_class_dedup() {
        let data = NodeData::new("div").with_class("card").with_class("card");
        assert_eq!(data.classes, vec!["card"]);
    }

    #[test]
    fn builder_with_classes() {
        let data = NodeData::new("div").with_class("a").with_classes(["a", "b", "c"]);
        assert_eq!(data.classes, vec!["a", "b", "c"]);
    }

    #[test]
    fn add_and_remove_class() {
        let mut data = NodeData::new("div");
        data.add_class("center");
        data.add_class("center");
        assert_eq!(data.classes.len(), 1);
        data.remove_class("center");
        data.remove_class("center");
        assert!(data.classes.is_empty());
    }

    #[test]
    fn toggle_class_follows_flag() {
        let mut data = NodeData::new("span");
        data.toggle_class("active", true);
        assert!(data.has_class("active"));
        data.toggle_class("active", true);
        assert_eq!(data.classes.len(), 1);
        data.toggle_class("active", false);
        assert!(!data.has_class("active"));
    }

    #[test]
    fn attributes_replace_in_place() {
        let mut data = NodeData::new("img")
            .with_attr("src", "a.jpg")
            .with_attr("alt", "Brows");
        data.set_attr("src", "b.jpg");
        assert_eq!(data.attr("src"), Some("b.jpg"));
        assert_eq!(data.attributes.len(), 2);
        assert_eq!(data.attr("missing"), None);
    }

    #[test]
    fn id_and_class_attributes_use_fields() {
        let mut data = NodeData::new("div");
        data.set_attr("id", "portfolio-brows");
        data.set_attr("class", "portfolio-carousel  active");
        assert_eq!(data.attr("id"), Some("portfolio-brows"));
        assert_eq!(data.classes, vec!["portfolio-carousel", "active"]);
        assert!(data.attributes.is_empty());
    }

    #[test]
    fn data_attribute_shorthand() {
        let data = NodeData::new("div").with_attr("data-carousel", "brows");
        assert_eq!(data.data("carousel"), Some("brows"));
        assert_eq!(data.data("target"), None);
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
