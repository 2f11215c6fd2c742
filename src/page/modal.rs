//! Portfolio image modal.

use tracing::{debug, warn};

use crate::dom::{Dom, NodeId};
use crate::event::{Capability, DispatchTable};

/// Id of the modal backdrop.
pub const MODAL_ID: &str = "portfolioModal";
/// Id of the `<img>` inside the modal.
pub const MODAL_IMAGE_ID: &str = "modalImage";
/// Close button inside the modal.
pub const CLOSE_SELECTOR: &str = ".modal-close";
/// Frame around the image; a direct click on it dismisses like the backdrop.
pub const CONTENT_SELECTOR: &str = ".modal-content";
/// Elements that open the modal with their cover image.
pub const OPENER_SELECTORS: [&str; 2] = [".portfolio-card", ".portfolio-item"];
/// Preferred image inside an opener; falls back to the first `img`.
pub const COVER_SELECTOR: &str = ".portfolio-cover";
/// Body class that locks page scrolling while the modal is open.
pub const SCROLL_LOCK_CLASS: &str = "modal-open";

const DEFAULT_ALT: &str = "Portfolio Image";
const OPEN_CLASS: &str = "active";

/// The modal and the nodes it drives.
#[derive(Debug, Clone)]
pub struct Modal {
    backdrop: NodeId,
    content: Option<NodeId>,
    image: NodeId,
    close: NodeId,
    body: Option<NodeId>,
    open: bool,
}

impl Modal {
    /// Locate the modal elements. All three of backdrop, image and close
    /// button are required; otherwise the modal stays disabled.
    pub fn discover(dom: &Dom) -> Option<Self> {
        let backdrop = dom.query_by_id(MODAL_ID);
        let image = dom.query_by_id(MODAL_IMAGE_ID);
        let close = backdrop.and_then(|m| dom.query_first_within(m, CLOSE_SELECTOR));
        let (Some(backdrop), Some(image), Some(close)) = (backdrop, image, close) else {
            warn!("portfolio modal elements not found, modal disabled");
            return None;
        };

        Some(Self {
            backdrop,
            content: dom.query_first_within(backdrop, CONTENT_SELECTOR),
            image,
            close,
            body: dom.query_selector("body"),
            open: dom.has_class(backdrop, OPEN_CLASS),
        })
    }

    /// Register the close, dismiss and open capabilities.
    pub fn register(&self, dom: &Dom, table: &mut DispatchTable) {
        table.register(self.close, Capability::CloseModal);
        table.register(self.backdrop, Capability::DismissModalBackdrop);
        if let Some(content) = self.content {
            table.register(content, Capability::DismissModalBackdrop);
        }
        for selector in OPENER_SELECTORS {
            for opener in dom.query_selector_all(selector) {
                table.register(opener, Capability::OpenModal);
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The modal `<img>` node.
    pub fn image(&self) -> NodeId {
        self.image
    }

    /// Show the cover image of `opener`. Does nothing when the opener has no
    /// image with a `src`.
    pub fn open_for(&mut self, dom: &mut Dom, opener: NodeId) -> bool {
        let Some(cover) = dom
            .query_first_within(opener, COVER_SELECTOR)
            .or_else(|| dom.query_first_within(opener, "img"))
        else {
            return false;
        };
        let Some((src, alt)) = dom.get(cover).and_then(|img| {
            let src = img.attr("src").filter(|s| !s.is_empty())?;
            let alt = img.attr("alt").filter(|a| !a.is_empty()).unwrap_or(DEFAULT_ALT);
            Some((src.to_owned(), alt.to_owned()))
        }) else {
            return false;
        };

        if let Some(img) = dom.get_mut(self.image) {
            img.set_attr("src", src.as_str());
            img.set_attr("alt", alt);
        }
        dom.add_class(self.backdrop, OPEN_CLASS);
        if let Some(body) = self.body {
            dom.add_class(body, SCROLL_LOCK_CLASS);
        }
        self.open = true;
        debug!(%src, "modal opened");
        true
    }

    /// Hide the modal and release the scroll lock.
    pub fn close(&mut self, dom: &mut Dom) {
        dom.remove_class(self.backdrop, OPEN_CLASS);
        if let Some(body) = self.body {
            dom.remove_class(body, SCROLL_LOCK_CLASS);
        }
        if self.open {
            debug!("modal closed");
        }
        self.open = false;
    }
}
