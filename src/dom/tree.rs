//! Tree operations: insert, walk, ancestor lookup.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The page's element tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships are stored
/// in secondary maps so lookup is O(1). Pages are loaded once and never
/// restructured afterwards; only node data (classes, attributes) changes.
#[derive(Debug)]
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    /// Create an empty DOM.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a root-level node (no parent).
    ///
    /// If no root has been set yet, this node becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// A stale `parent` makes the node a detached root-level node.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
            self.parent.insert(id, parent);
        }
        id
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no children
    /// or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Whether `ancestor` is `id` itself or one of its ancestors.
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        id == ancestor || self.ancestors(id).contains(&ancestor)
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the DOM.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the DOM is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the DOM contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start` (document order).
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            let kids = self.children(current);
            for &child in kids.iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Every node in document order, starting at the root.
    pub fn document_order(&self) -> Vec<NodeId> {
        self.root
            .map(|root| self.walk_depth_first(root))
            .unwrap_or_default()
    }

    /// Add a class to a node. Stale ids are ignored.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.add_class(class);
        }
    }

    /// Remove a class from a node. Stale ids are ignored.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.remove_class(class);
        }
    }

    /// Whether a node carries a class. False for stale ids.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes.get(id).is_some_and(|data| data.has_class(class))
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a small test tree:
    /// ```text
    ///       body
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (Dom, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("body"));
        let a = dom.insert_child(root, NodeData::new("section").with_id("a"));
        let b = dom.insert_child(root, NodeData::new("footer").with_id("b"));
        let c = dom.insert_child(a, NodeData::new("button").with_id("c"));
        let d = dom.insert_child(a, NodeData::new("span").with_id("d"));
        (dom, root, a, b, c, d)
    }

    #[test]
    fn insert_sets_root_once() {
        let mut dom = Dom::new();
        let first = dom.insert(NodeData::new("html"));
        let _second = dom.insert(NodeData::new("html"));
        assert_eq!(dom.root(), Some(first));
    }

    #[test]
    fn parent_and_children() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.parent(a), Some(root));
        assert_eq!(dom.parent(root), None);
        assert_eq!(dom.children(root), &[a, b]);
        assert_eq!(dom.children(a), &[c, d]);
        assert!(dom.children(c).is_empty());
    }

    #[test]
    fn ancestors_nearest_first() {
        let (dom, root, a, _b, c, _d) = build_tree();
        assert_eq!(dom.ancestors(c), vec![a, root]);
        assert!(dom.ancestors(root).is_empty());
    }

    #[test]
    fn inclusive_ancestor() {
        let (dom, root, a, b, c, _d) = build_tree();
        assert!(dom.is_inclusive_ancestor(a, c));
        assert!(dom.is_inclusive_ancestor(c, c));
        assert!(dom.is_inclusive_ancestor(root, c));
        assert!(!dom.is_inclusive_ancestor(b, c));
    }

    #[test]
    fn document_order_is_preorder() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.document_order(), vec![root, a, c, d, b]);
        assert_eq!(dom.walk_depth_first(a), vec![a, c, d]);
    }

    #[test]
    fn class_helpers_ignore_stale_ids() {
        let (mut dom, _root, a, ..) = build_tree();
        dom.add_class(a, "active");
        assert!(dom.has_class(a, "active"));
        dom.remove_class(a, "active");
        assert!(!dom.has_class(a, "active"));

        let mut other = Dom::new();
        let _ = other.insert(NodeData::new("x"));
        let foreign = other.insert(NodeData::new("y"));
        let mut small = Dom::new();
        small.add_class(foreign, "active");
        assert!(!small.has_class(foreign, "active"));
    }

    #[test]
    fn len_and_is_empty() {
        let (dom, ..) = build_tree();
        assert_eq!(dom.len(), 5);
        assert!(!dom.is_empty());
        assert!(Dom::default().is_empty());
        assert!(Dom::new().document_order().is_empty());
    }
}
