//! Browser entry point.
//!
//! Compiled for `wasm32` only. [`boot`] runs once when the module is
//! instantiated: it reads [`crate::config::PageConfig`] from `<body>`,
//! installs logging, builds the DOM adapters and binds every feature whose
//! elements are on the page.
//!
//! # Modules
//!
//! - [`boot`] - `#[wasm_bindgen(start)]` and page-ready orchestration
//! - [`events`] - Event listener wiring for forms, captcha and password toggles

pub mod boot;
pub mod events;
