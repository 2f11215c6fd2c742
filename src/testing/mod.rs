//! Headless testing framework: Pilot and page fixtures.
//!
//! Use the [`Pilot`] to drive a [`Page`](crate::page::Page) with simulated
//! input on a virtual clock. Use [`PortfolioFixture`] to generate pages with
//! any number of carousels, with or without their optional parts.

pub mod fixture;
pub mod pilot;

pub use fixture::{studio_page, PortfolioFixture};
pub use pilot::Pilot;
