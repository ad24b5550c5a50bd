//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so controllers can run against in-memory stand-ins in tests.

pub mod class_list;
pub mod form_fields;
pub mod label;
pub mod theme;
