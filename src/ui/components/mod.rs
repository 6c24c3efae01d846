//! Reusable UI components shared across screens.

pub mod input_field;
pub mod tab_selector;
