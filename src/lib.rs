//! Localized string tables for generated documentation.
//!
//! Every piece of text a documentation generator emits ("Class Hierarchy",
//! "Inherits @0, @1, and @2.", ...) is looked up here by [`i18n::MessageKey`]
//! and rendered for the selected output language.

pub mod config;
pub mod i18n;
