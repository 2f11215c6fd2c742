//! Click dispatch: capability table and bubble path computation.
//!
//! Interactive elements are registered once, at page load, with the
//! [`Capability`] they provide. A click resolves by walking the bubble path
//! from the target to the root; the first node that has an applicable
//! capability handles the click and propagation stops there. Unrelated page
//! regions therefore never observe each other's clicks.

use slotmap::SecondaryMap;

use crate::carousel::CarouselId;
use crate::dom::{Dom, NodeId};

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// What an interactive element does when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// Carousel arrow: relative step (`-1` left, `+1` right).
    CarouselStep { carousel: CarouselId, delta: i64 },
    /// Indicator dot for an absolute index.
    CarouselIndicator { carousel: CarouselId, index: usize },
    /// A card inside a carousel track.
    CarouselCard { carousel: CarouselId, index: usize },
    /// Opens the portfolio modal with this element's cover image.
    OpenModal,
    /// Closes the portfolio modal.
    CloseModal,
    /// Closes the portfolio modal, but only when clicked directly (the
    /// backdrop and content frame, never their descendants).
    DismissModalBackdrop,
    /// Portfolio tab switching carousel groups.
    PortfolioTab,
    /// Hamburger button opening and closing the navigation menu.
    ToggleMobileMenu,
    /// In-page navigation link; closes the mobile menu.
    CloseMobileMenu,
    /// Certificate in the fan; pressing it spreads or stacks the fan.
    ToggleCertificateFan,
}

impl Capability {
    /// Whether clicks on descendants of the registered node reach this
    /// capability.
    pub fn bubbles(&self) -> bool {
        !matches!(self, Capability::DismissModalBackdrop)
    }

    /// The pointer event this capability reacts to.
    pub fn trigger(&self) -> Trigger {
        match self {
            Capability::ToggleCertificateFan => Trigger::PointerDown,
            _ => Trigger::Click,
        }
    }
}

/// Pointer event kinds that go through the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Click,
    PointerDown,
}

// ---------------------------------------------------------------------------
// DispatchTable
// ---------------------------------------------------------------------------

/// Explicit registry of interactive elements.
#[derive(Debug, Default)]
pub struct DispatchTable {
    entries: SecondaryMap<NodeId, Vec<Capability>>,
}

impl DispatchTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a capability to a node. A node may carry several; they fire
    /// in registration order.
    pub fn register(&mut self, node: NodeId, capability: Capability) {
        match self.entries.get_mut(node) {
            Some(caps) => caps.push(capability),
            None => {
                self.entries.insert(node, vec![capability]);
            }
        }
    }

    /// Capabilities registered directly on `node`.
    pub fn capabilities(&self, node: NodeId) -> &[Capability] {
        self.entries.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes with at least one capability.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no node is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a click on `target` to the handling node and the capabilities
    /// that fire there.
    pub fn resolve(&self, dom: &Dom, target: NodeId) -> Option<(NodeId, Vec<Capability>)> {
        self.resolve_on(dom, target, Trigger::Click)
    }

    /// Like [`resolve`](Self::resolve), for any [`Trigger`]. Capabilities
    /// bound to other triggers are invisible to the walk.
    pub fn resolve_on(
        &self,
        dom: &Dom,
        target: NodeId,
        trigger: Trigger,
    ) -> Option<(NodeId, Vec<Capability>)> {
        for node in Self::bubble_path(dom, target) {
            let applicable: Vec<Capability> = self
                .capabilities(node)
                .iter()
                .filter(|cap| cap.trigger() == trigger)
                .filter(|cap| node == target || cap.bubbles())
                .cloned()
                .collect();
            if !applicable.is_empty() {
                return Some((node, applicable));
            }
        }
        None
    }

    /// Compute the bubble path from `start` up to the root (inclusive).
    ///
    /// Returns `[start, parent, grandparent, ..., root]`.
    /// If `start` does not exist in the DOM, returns an empty vec.
    pub fn bubble_path(dom: &Dom, start: NodeId) -> Vec<NodeId> {
        if !dom.contains(start) {
            return Vec::new();
        }
        let mut path = vec![start];
        path.extend(dom.ancestors(start));
        path
    }
}

// ===========================================================================
// Tests
// ===========================================================================
