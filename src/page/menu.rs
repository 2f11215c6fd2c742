//! Mobile navigation menu.

use tracing::debug;

use crate::dom::{Dom, NodeId};
use crate::event::{Capability, DispatchTable};

/// Id of the hamburger button.
pub const TOGGLE_ID: &str = "mobileMenuToggle";
/// Id of the navigation list it shows and hides.
pub const MENU_ID: &str = "navMenu";

const OPEN_CLASS: &str = "active";

/// The menu and its toggle button.
#[derive(Debug, Clone, Copy)]
pub struct MobileMenu {
    menu: NodeId,
    toggle: Option<NodeId>,
}

impl MobileMenu {
    /// Locate the menu. Without `#navMenu` there is nothing to drive; the
    /// toggle button is optional.
    pub fn discover(dom: &Dom) -> Option<Self> {
        let Some(menu) = dom.query_by_id(MENU_ID) else {
            debug!("no navigation menu on page");
            return None;
        };
        Some(Self {
            menu,
            toggle: dom.query_by_id(TOGGLE_ID),
        })
    }

    /// Register the toggle button and every in-page link whose target
    /// exists. Bare `#` links are left alone.
    pub fn register(&self, dom: &Dom, table: &mut DispatchTable) {
        if let Some(toggle) = self.toggle {
            table.register(toggle, Capability::ToggleMobileMenu);
        }
        for link in dom.query_selector_all("a") {
            let anchor = dom
                .get(link)
                .and_then(|l| l.attr("href"))
                .and_then(|href| href.strip_prefix('#'))
                .filter(|id| !id.is_empty());
            if anchor.is_some_and(|id| dom.query_by_id(id).is_some()) {
                table.register(link, Capability::CloseMobileMenu);
            }
        }
    }

    pub fn is_open(&self, dom: &Dom) -> bool {
        dom.has_class(self.menu, OPEN_CLASS)
    }

    /// Flip the menu and the button independently, each on its own class.
    pub fn toggle(&self, dom: &mut Dom) {
        for node in std::iter::once(self.menu).chain(self.toggle) {
            if let Some(data) = dom.get_mut(node) {
                let on = !data.has_class(OPEN_CLASS);
                data.toggle_class(OPEN_CLASS, on);
            }
        }
    }

    /// Hide the menu. The button keeps its state.
    pub fn close(&self, dom: &mut Dom) {
        dom.remove_class(self.menu, OPEN_CLASS);
    }
}
