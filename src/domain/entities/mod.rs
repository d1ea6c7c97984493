//! Transient, page-scoped data structures.
//!
//! None of these outlive the page: they are created from markup or from a
//! network response, mutated by events, and discarded on navigation.
//!
//! # Entity Types
//!
//! - [`FieldKey`] / [`FormKind`] - Which fields a form validates, in which order
//! - [`CaptchaChallenge`] - Token and image of one captcha fetch
//! - [`UsageSeries`] - Points of the dashboard usage chart
//! - [`ImageList`] - Candidate background images

pub mod background;
pub mod captcha;
pub mod chart;
pub mod field;

pub use background::{ImageEntry, ImageList};
pub use captcha::CaptchaChallenge;
pub use chart::{MONTH_LABELS, UsagePoint, UsageSeries, month_label};
pub use field::{FieldKey, FormKind};
