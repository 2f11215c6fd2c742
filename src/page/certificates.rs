//! Certificate fan: the stacked certificates spread out on hover or tap.

use crate::dom::{Dom, NodeId};
use crate::event::{Capability, DispatchTable};

pub const GRID_SELECTOR: &str = ".certificate-grid";
pub const ITEM_SELECTOR: &str = ".certificate-item";

const SPREAD_CLASS: &str = "spread";

/// The fan container and whether the current viewport fans it at all.
///
/// Below the tablet breakpoint the stylesheet lays certificates out as a
/// plain grid, and the fan stays inert.
#[derive(Debug, Clone, Copy)]
pub struct CertificateFan {
    grid: NodeId,
    enabled: bool,
}

impl CertificateFan {
    pub fn discover(dom: &Dom, enabled: bool) -> Option<Self> {
        dom.query_selector(GRID_SELECTOR)
            .map(|grid| Self { grid, enabled })
    }

    /// Every certificate inside the grid toggles the fan on pointer down.
    pub fn register(&self, dom: &Dom, table: &mut DispatchTable) {
        for item in dom.query_within(self.grid, ITEM_SELECTOR) {
            table.register(item, Capability::ToggleCertificateFan);
        }
    }

    pub fn grid(&self) -> NodeId {
        self.grid
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_spread(&self, dom: &Dom) -> bool {
        dom.has_class(self.grid, SPREAD_CLASS)
    }

    pub fn spread(&self, dom: &mut Dom) {
        if self.enabled {
            dom.add_class(self.grid, SPREAD_CLASS);
        }
    }

    pub fn stack(&self, dom: &mut Dom) {
        if self.enabled {
            dom.remove_class(self.grid, SPREAD_CLASS);
        }
    }

    pub fn toggle(&self, dom: &mut Dom) {
        if self.is_spread(dom) {
            self.stack(dom);
        } else {
            self.spread(dom);
        }
    }

    /// A resize always stacks the fan, then re-decides whether it is live.
    pub fn reset(&mut self, dom: &mut Dom, enabled: bool) {
        dom.remove_class(self.grid, SPREAD_CLASS);
        self.enabled = enabled;
    }
}
