//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Primitives (`dropdown`, `input_label`, `input_error`, `secondary_button`)
//! carry styling only. `stars_table` and `nav_bar` read page state and
//! context and are composed by the pages.

pub mod dropdown;
pub mod input_error;
pub mod input_label;
pub mod nav_bar;
pub mod secondary_button;
pub mod stars_table;
