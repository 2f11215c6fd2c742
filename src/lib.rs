//! # studio-site
//!
//! The website of a brows & sugaring studio: a static file server for the
//! page assets, plus a headless runtime for the page's interactive parts.
//!
//! The runtime loads the page markup into a DOM arena and wires behaviour
//! onto it. Its output is only ever class names on nodes; the stylesheet in
//! `public/styles.css` turns those into positions and visibility. The host
//! (a browser shim, the CLI, or a test) delivers input events and moves the
//! page clock.
//!
//! ## Core Systems
//!
//! - **[`dom`]**: Slotmap-backed DOM arena with tree operations and selector queries
//! - **[`markup`]**: Logos-based HTML tokenizer, tree builder and class writer
//! - **[`event`]**: Host input events, key bindings, capability dispatch
//! - **[`time`]**: Virtual-clock timer queue and debouncer
//! - **[`carousel`]**: Role table, viewport tiers and the carousel controller
//! - **[`page`]**: Page coordinator with portfolio tabs, image modal, mobile menu
//!   and certificate fan
//! - **[`server`]**: Axum static file server that pre-renders served HTML
//! - **[`config`]**: TOML site configuration
//! - **[`testing`]**: Headless `Pilot` and page fixtures

// Foundation
pub mod dom;
pub mod error;
pub mod markup;
pub mod time;

// Behaviour
pub mod carousel;
pub mod event;
pub mod page;

// Hosting
pub mod config;
pub mod server;

// Test support
pub mod testing;

pub use error::{Error, Result};
