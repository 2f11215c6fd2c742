//! Portfolio tabs: switching between carousel groups.

use crate::dom::{Dom, NodeId};

pub const TAB_CLASS: &str = "portfolio-tab";
pub const GROUP_CLASS: &str = "portfolio-carousel";
pub const CTA_CLASS: &str = "portfolio-cta";

const ACTIVE: &str = "active";
const GROUP_ID_PREFIX: &str = "portfolio-";
const CTA_ID_PREFIX: &str = "cta-";

/// Outcome of a tab click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSwitch {
    /// The group that is now shown; `None` when the tab's target did not
    /// resolve and only the tab classes changed.
    pub group: Option<NodeId>,
}

/// Mark `tab` active and show the group named by its `data-target`.
pub fn activate(dom: &mut Dom, tab: NodeId) -> TabSwitch {
    for other in dom.query_by_class(TAB_CLASS) {
        dom.remove_class(other, ACTIVE);
    }
    dom.add_class(tab, ACTIVE);

    let target = dom.get(tab).and_then(|t| t.data("target")).map(str::to_owned);
    let Some(group) = target.as_deref().and_then(|sel| dom.query_selector(sel)) else {
        return TabSwitch { group: None };
    };

    for other in dom.query_by_class(GROUP_CLASS) {
        dom.remove_class(other, ACTIVE);
    }
    dom.add_class(group, ACTIVE);

    for cta in dom.query_by_class(CTA_CLASS) {
        dom.remove_class(cta, ACTIVE);
    }
    let suffix = dom
        .get(group)
        .and_then(|g| g.id.as_deref())
        .and_then(|id| id.strip_prefix(GROUP_ID_PREFIX))
        .map(str::to_owned);
    if let Some(cta) = suffix.and_then(|s| dom.query_by_id(&format!("{CTA_ID_PREFIX}{s}"))) {
        dom.add_class(cta, ACTIVE);
    }

    TabSwitch { group: Some(group) }
}

/// Whether `node` sits inside a carousel group that is currently hidden.
pub fn in_inactive_group(dom: &Dom, node: NodeId) -> bool {
    dom.ancestors(node)
        .into_iter()
        .any(|a| dom.has_class(a, GROUP_CLASS) && !dom.has_class(a, ACTIVE))
}
