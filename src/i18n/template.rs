//! Message templates: variant selection and placeholder interpolation.
//!
//! A template is either a plain text or a map from a tag condition to a
//! nested template:
//!
//! ```json
//! "CompoundMembers": { "optimize_c": "Data Fields", "_": "Class Members" }
//! ```
//!
//! A condition is `_` (always matches), one tag, or several tags joined by
//! `+`. Among the conditions whose tags are all active, the one with the most
//! tags wins; ties go to the first in key order.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Condition that always matches.
pub const DEFAULT_BRANCH: &str = "_";

/// A localized message, possibly with variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Template {
    Text(String),
    Select(BTreeMap<String, Template>),
}

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap())
}

fn marker_regex() -> &'static Regex {
    MARKER_REGEX.get_or_init(|| Regex::new(r"@\d+").unwrap())
}

/// Tags required by a condition; `_` requires none.
fn condition_tags(condition: &str) -> Vec<&str> {
    if condition == DEFAULT_BRANCH {
        Vec::new()
    } else {
        condition.split('+').collect()
    }
}

impl Template {
    /// Pick the text for the active tags.
    ///
    /// Returns `None` when a select map has no branch matching the tags,
    /// which callers treat as "not translated here".
    pub fn select(&self, tags: &BTreeSet<&str>) -> Option<&str> {
        match self {
            Template::Text(text) => Some(text),
            Template::Select(branches) => {
                let mut best: Option<(usize, &Template)> = None;
                for (condition, branch) in branches {
                    let required = condition_tags(condition);
                    if !required.iter().all(|tag| tags.contains(tag)) {
                        continue;
                    }
                    if best.map_or(true, |(size, _)| required.len() > size) {
                        best = Some((required.len(), branch));
                    }
                }
                best.and_then(|(_, branch)| branch.select(tags))
            }
        }
    }

    /// Every text variant, depth first.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Template::Text(text) => vec![text.as_str()],
            Template::Select(branches) => branches.values().flat_map(|b| b.texts()).collect(),
        }
    }

    /// Every tag mentioned by any condition.
    pub fn tags(&self) -> BTreeSet<&str> {
        match self {
            Template::Text(_) => BTreeSet::new(),
            Template::Select(branches) => branches
                .iter()
                .flat_map(|(condition, branch)| {
                    let mut tags: BTreeSet<&str> = condition_tags(condition).into_iter().collect();
                    tags.extend(branch.tags());
                    tags
                })
                .collect(),
        }
    }

    /// Whether any condition mentions `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().contains(tag)
    }

    /// Whether every select map (nested ones included) has a default branch.
    pub fn has_defaults(&self) -> bool {
        match self {
            Template::Text(_) => true,
            Template::Select(branches) => {
                branches.contains_key(DEFAULT_BRANCH) && branches.values().all(Template::has_defaults)
            }
        }
    }

    /// Placeholder names used by any variant.
    pub fn placeholders(&self) -> BTreeSet<String> {
        self.texts().into_iter().flat_map(placeholders).collect()
    }

    /// `@N` markers used by any variant.
    pub fn markers(&self) -> BTreeSet<String> {
        self.texts()
            .into_iter()
            .flat_map(|text| marker_regex().find_iter(text).map(|m| m.as_str().to_string()))
            .collect()
    }
}

/// Placeholder names in one text.
pub fn placeholders(text: &str) -> BTreeSet<String> {
    placeholder_regex()
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Replace `{name}` placeholders in a single pass.
///
/// Values are never re-scanned, so a value containing `{name}` is inserted
/// literally. Returns the first placeholder `lookup` has no value for.
pub fn interpolate<F>(text: &str, mut lookup: F) -> Result<String, String>
where
    F: FnMut(&str) -> Option<String>,
{
    let regex = placeholder_regex();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for cap in regex.captures_iter(text) {
        let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        let value = lookup(name.as_str()).ok_or_else(|| name.as_str().to_string())?;
        out.push_str(&text[last..whole.start()]);
        out.push_str(&value);
        last = whole.end();
    }

    out.push_str(&text[last..]);
    Ok(out)
}
