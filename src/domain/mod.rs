//! Domain layer: page entities, validation rules and the ports the page talks through.
//!
//! Nothing in this module touches the DOM or the network directly. Every
//! browser capability the services need is expressed as a trait in [`ports`],
//! implemented for real in `crate::infrastructure` and by mocks in tests.
//!
//! # Architecture
//!
//! - [`entities`] - Field keys, form kinds, captcha challenges, chart series, image lists
//! - [`validation`] - Per-field validation rules
//! - [`footer`] - Footer text date arithmetic
//! - [`ports`] - DOM, HTTP, object URL and widget traits

pub mod entities;
pub mod footer;
pub mod ports;
pub mod validation;
