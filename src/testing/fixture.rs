//! Generated portfolio markup for tests and demos.
//!
//! [`PortfolioFixture`] writes a page with the same structure as the real
//! site: tabs, one carousel group per service, arrows, dots, calls to
//! action and the image modal, plus optional navigation and certificate
//! sections. Parts can be switched off to exercise the degraded paths.

use std::fmt::Write;

/// Builder for a portfolio page.
#[derive(Debug, Clone)]
pub struct PortfolioFixture {
    groups: Vec<(String, usize)>,
    arrows: bool,
    dots: bool,
    modal: bool,
    nav: bool,
    certificates: usize,
}

impl PortfolioFixture {
    /// An empty page with arrows, dots and the modal enabled.
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            arrows: true,
            dots: true,
            modal: true,
            nav: false,
            certificates: 0,
        }
    }

    /// Add a carousel group with `cards` cards. The first group is active.
    pub fn group(mut self, name: impl Into<String>, cards: usize) -> Self {
        self.groups.push((name.into(), cards));
        self
    }

    pub fn without_arrows(mut self) -> Self {
        self.arrows = false;
        self
    }

    pub fn without_dots(mut self) -> Self {
        self.dots = false;
        self
    }

    pub fn without_modal(mut self) -> Self {
        self.modal = false;
        self
    }

    /// Add the navigation bar with its mobile menu toggle.
    pub fn with_nav(mut self) -> Self {
        self.nav = true;
        self
    }

    /// Add a certificate fan with `count` certificates.
    pub fn certificates(mut self, count: usize) -> Self {
        self.certificates = count;
        self
    }

    /// Render the page.
    ///
    /// Ids follow a fixed scheme so tests can address nodes directly:
    /// `tab-<name>`, `portfolio-<name>`, `container-<name>`,
    /// `prev-<name>`, `next-<name>`, `card-<name>-<i>`, `cover-<name>-<i>`,
    /// `dot-<name>-<i>`, `cta-<name>`. The navigation uses
    /// `mobileMenuToggle`, `navMenu` and `nav-booking`; certificates are
    /// `certificate-grid` and `certificate-<i>`.
    pub fn render(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head><title>Studio</title></head>\n<body>\n");

        if self.nav {
            html.push_str(concat!(
                "<nav class=\"navbar\">\n",
                "  <button class=\"mobile-menu-toggle\" id=\"mobileMenuToggle\">Menu</button>\n",
                "  <ul class=\"nav-menu\" id=\"navMenu\">\n",
                "    <li><a href=\"#booking\" id=\"nav-booking\">Book</a></li>\n",
                "    <li><a href=\"#\" id=\"nav-top\">Top</a></li>\n",
                "  </ul>\n",
                "</nav>\n",
            ));
        }

        html.push_str("<div class=\"portfolio-tabs\">\n");
        for (i, (name, _)) in self.groups.iter().enumerate() {
            let active = if i == 0 { " active" } else { "" };
            let _ = writeln!(
                html,
                "  <button class=\"portfolio-tab{active}\" id=\"tab-{name}\" data-target=\"#portfolio-{name}\">{name}</button>"
            );
        }
        html.push_str("</div>\n");

        for (i, (name, cards)) in self.groups.iter().enumerate() {
            let active = if i == 0 { " active" } else { "" };
            let _ = writeln!(html, "<div class=\"portfolio-carousel{active}\" id=\"portfolio-{name}\">");
            let _ = writeln!(
                html,
                "  <div class=\"custom-carousel-container\" id=\"container-{name}\" tabindex=\"0\">"
            );
            if self.arrows {
                let _ = writeln!(html, "    <button class=\"carousel-nav-left\" id=\"prev-{name}\">&lsaquo;</button>");
            }
            let _ = writeln!(html, "    <div class=\"custom-carousel-track\" data-carousel=\"{name}\">");
            for c in 0..*cards {
                let _ = writeln!(
                    html,
                    "      <div class=\"portfolio-card\" id=\"card-{name}-{c}\"><img class=\"portfolio-cover\" id=\"cover-{name}-{c}\" src=\"images/{name}-{c}.jpg\" alt=\"{name} {c}\"></div>"
                );
            }
            html.push_str("    </div>\n");
            if self.arrows {
                let _ = writeln!(html, "    <button class=\"carousel-nav-right\" id=\"next-{name}\">&rsaquo;</button>");
            }
            html.push_str("  </div>\n");
            if self.dots {
                let _ = writeln!(html, "  <div class=\"carousel-dots\" data-carousel=\"{name}\">");
                for c in 0..*cards {
                    let _ = writeln!(html, "    <span class=\"carousel-dot\" id=\"dot-{name}-{c}\"></span>");
                }
                html.push_str("  </div>\n");
            }
            html.push_str("</div>\n");
            let _ = writeln!(html, "<a class=\"portfolio-cta{active}\" id=\"cta-{name}\" href=\"#booking\">Book</a>");
        }

        if self.certificates > 0 {
            html.push_str("<section id=\"certificates\">\n  <div class=\"certificate-grid\" id=\"certificate-grid\">\n");
            for c in 0..self.certificates {
                let _ = writeln!(
                    html,
                    "    <div class=\"certificate-item\" id=\"certificate-{c}\"><img src=\"images/certificate-{c}.jpg\" alt=\"Certificate {c}\"></div>"
                );
            }
            html.push_str("  </div>\n</section>\n");
        }

        if self.nav {
            html.push_str("<section id=\"booking\"></section>\n");
        }

        if self.modal {
            html.push_str(concat!(
                "<div class=\"portfolio-modal\" id=\"portfolioModal\">\n",
                "  <div class=\"modal-content\">\n",
                "    <span class=\"modal-close\" id=\"modal-close\">&times;</span>\n",
                "    <img id=\"modalImage\" src=\"\" alt=\"\">\n",
                "  </div>\n",
                "</div>\n",
            ));
        }

        html.push_str("<script>console.log('<not markup>');</script>\n</body>\n</html>\n");
        html
    }
}

impl Default for PortfolioFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The two-service page used across the test suite: six brows cards, four
/// sugaring cards, the navigation bar and three certificates.
pub fn studio_page() -> String {
    PortfolioFixture::new()
        .with_nav()
        .group("brows", 6)
        .group("sugaring", 4)
        .certificates(3)
        .render()
}
