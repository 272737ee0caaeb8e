//! Client-side state models.
//!
//! Plain structs with synchronous transitions so pages can keep them in
//! signals and tests can drive them directly.

pub mod browser;
pub mod star_form;
pub mod stars;
