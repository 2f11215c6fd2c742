//! Initial page state baked into served HTML.
//!
//! Before an `.html` file goes out, it is loaded into a [`Page`] at a fixed
//! viewport width, which mounts every carousel at index 0, and the resulting
//! role and indicator classes are written back into the markup. Cards then
//! arrive already placed by the stylesheet.

use tracing::{debug, warn};

use crate::carousel::{Breakpoints, CarouselSettings};
use crate::config::SiteConfig;
use crate::markup::write_classes;
use crate::page::Page;

/// Default viewport width for the served layout.
pub const DEFAULT_WIDTH: u32 = 1280;

/// How served pages are pre-rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Prerender {
    pub settings: CarouselSettings,
    pub breakpoints: Breakpoints,
    pub width: u32,
}

impl Default for Prerender {
    fn default() -> Self {
        Self {
            settings: CarouselSettings::default(),
            breakpoints: Breakpoints::default(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl Prerender {
    /// Settings from the site configuration, or `None` when pre-rendering
    /// is switched off.
    pub fn from_config(config: &SiteConfig) -> Option<Self> {
        config.server.prerender.then(|| Self {
            settings: config.carousel.clone(),
            breakpoints: config.viewport,
            width: config.server.prerender_width,
        })
    }

    /// Render the initial state into `source`. Markup the page loader
    /// rejects is served untouched.
    pub fn apply(&self, source: &str) -> String {
        match Page::load(source, self.settings.clone(), self.breakpoints, self.width) {
            Ok(page) => {
                debug!(carousels = page.carousels().count(), width = self.width, "prerendered");
                write_classes(source, page.dom())
            }
            Err(err) => {
                warn!(%err, "page markup rejected, serving as-is");
                source.to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse_document;
    use crate::testing::fixture::studio_page;

    #[test]
    fn cards_and_dots_carry_initial_classes() {
        let html = Prerender::default().apply(&studio_page());
        let dom = parse_document(&html).unwrap();
        let has = |id: &str, class: &str| dom.has_class(dom.query_by_id(id).unwrap(), class);

        assert!(has("card-brows-0", "center"));
        assert!(has("card-brows-1", "right-1"));
        assert!(has("card-brows-5", "left-1"));
        assert!(has("card-brows-3", "hidden"));
        assert!(has("card-brows-0", "portfolio-card"));
        assert!(has("dot-brows-0", "active"));
        assert!(!has("dot-brows-1", "active"));
        assert!(has("card-sugaring-0", "center"));
        // Text and scripts survive untouched.
        assert!(html.contains("<script>console.log('<not markup>');</script>"));
    }

    #[test]
    fn narrow_width_hides_neighbours() {
        let prerender = Prerender {
            width: 375,
            ..Prerender::default()
        };
        let dom = parse_document(&prerender.apply(&studio_page())).unwrap();
        let card = dom.query_by_id("card-brows-1").unwrap();
        assert!(dom.has_class(card, "hidden"));
    }

    #[test]
    fn rejected_markup_passes_through() {
        let broken = "<p><!-- never closed";
        assert_eq!(Prerender::default().apply(broken), broken);
    }

    #[test]
    fn config_switch() {
        let mut config = SiteConfig::default();
        assert_eq!(Prerender::from_config(&config), Some(Prerender::default()));
        config.server.prerender = false;
        assert_eq!(Prerender::from_config(&config), None);
    }
}
