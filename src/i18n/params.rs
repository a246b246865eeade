//! Per-call format parameters.
//!
//! A `FormatParams` carries everything a single `localize` call may need:
//! boolean flags, an optional count, an optional compound kind and named
//! string arguments. Flags and the count turn into *tags* that select a
//! template variant; named arguments fill `{placeholders}`.

use crate::i18n::CompoundKind;
use std::collections::{BTreeMap, BTreeSet};

/// Variable inputs for one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatParams {
    pub first_capital: bool,
    pub singular: bool,
    pub optimize_c: bool,
    pub extract_all: bool,
    pub single: bool,
    pub template: bool,
    pub enable: bool,
    pub include_time: bool,
    pub count: Option<usize>,
    pub compound: Option<CompoundKind>,
    args: BTreeMap<String, String>,
}

impl FormatParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_capital(mut self, value: bool) -> Self {
        self.first_capital = value;
        self
    }

    pub fn singular(mut self, value: bool) -> Self {
        self.singular = value;
        self
    }

    /// Struct/field wording instead of class/member wording.
    pub fn optimize_c(mut self, value: bool) -> Self {
        self.optimize_c = value;
        self
    }

    /// "All" wording instead of "all documented" wording.
    pub fn extract_all(mut self, value: bool) -> Self {
        self.extract_all = value;
        self
    }

    /// Exactly one source file.
    pub fn single(mut self, value: bool) -> Self {
        self.single = value;
        self
    }

    pub fn template(mut self, value: bool) -> Self {
        self.template = value;
        self
    }

    pub fn enable(mut self, value: bool) -> Self {
        self.enable = value;
        self
    }

    pub fn include_time(mut self, value: bool) -> Self {
        self.include_time = value;
        self
    }

    pub fn count(mut self, value: usize) -> Self {
        self.count = Some(value);
        self
    }

    pub fn compound(mut self, kind: CompoundKind) -> Self {
        self.compound = Some(kind);
        self
    }

    /// Set a named argument for a `{name}` placeholder.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    pub fn name(self, value: impl Into<String>) -> Self {
        self.arg("name", value)
    }

    pub fn project(self, value: impl Into<String>) -> Self {
        self.arg("project", value)
    }

    pub fn date(self, value: impl Into<String>) -> Self {
        self.arg("date", value)
    }

    pub fn members(self, value: impl Into<String>) -> Self {
        self.arg("members", value)
    }

    pub fn what(self, value: impl Into<String>) -> Self {
        self.arg("what", value)
    }

    /// Image format for the graph legend (`png`, `svg`, ...).
    pub fn format(self, value: impl Into<String>) -> Self {
        self.arg("format", value)
    }

    pub fn number(self, value: impl Into<String>) -> Self {
        self.arg("number", value)
    }

    /// Look up a named argument.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }

    /// Tags that are active for this call.
    pub fn tags(&self) -> BTreeSet<&'static str> {
        let flags = [
            (self.first_capital, "capital"),
            (self.singular, "singular"),
            (self.optimize_c, "optimize_c"),
            (self.extract_all, "extract_all"),
            (self.single, "single"),
            (self.template, "template"),
            (self.enable, "enable"),
            (self.include_time, "include_time"),
        ];

        let mut tags: BTreeSet<&'static str> = flags
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, tag)| *tag)
            .collect();

        match self.count {
            Some(0) => {
                tags.insert("none");
            }
            Some(1) => {
                tags.insert("one");
            }
            _ => {}
        }

        if let Some(tag) = self.compound.and_then(|kind| kind.tag()) {
            tags.insert(tag);
        }

        if self.get("project").is_some_and(|p| !p.is_empty()) {
            tags.insert("project");
        }

        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Builder Tests ====================

    #[test]
    fn test_default_has_no_tags() {
        assert!(FormatParams::new().tags().is_empty());
    }

    #[test]
    fn test_builder_sets_args() {
        let params = FormatParams::new().name("QString").arg("custom", "x");
        assert_eq!(params.get("name"), Some("QString"));
        assert_eq!(params.get("custom"), Some("x"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_arg_overwrites() {
        let params = FormatParams::new().name("a").name("b");
        assert_eq!(params.get("name"), Some("b"));
    }

    // ==================== Tag Tests ====================

    #[test]
    fn test_flag_tags() {
        let tags = FormatParams::new()
            .first_capital(true)
            .singular(true)
            .optimize_c(true)
            .extract_all(true)
            .tags();
        assert!(tags.contains("capital"));
        assert!(tags.contains("singular"));
        assert!(tags.contains("optimize_c"));
        assert!(tags.contains("extract_all"));
        assert!(!tags.contains("single"));
    }

    #[test]
    fn test_count_tags() {
        assert!(FormatParams::new().count(0).tags().contains("none"));
        assert!(FormatParams::new().count(1).tags().contains("one"));
        let many = FormatParams::new().count(7).tags();
        assert!(!many.contains("none"));
        assert!(!many.contains("one"));
    }

    #[test]
    fn test_compound_tag() {
        let tags = FormatParams::new().compound(CompoundKind::Struct).tags();
        assert!(tags.contains("struct"));
    }

    #[test]
    fn test_other_compound_adds_nothing() {
        let tags = FormatParams::new().compound(CompoundKind::Other).tags();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_project_tag_requires_non_empty() {
        assert!(FormatParams::new().project("Qt").tags().contains("project"));
        assert!(!FormatParams::new().project("").tags().contains("project"));
    }
}
