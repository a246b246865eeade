//! Compound kinds: which kind of entity a message describes.

use std::str::FromStr;

/// The kind of documented compound.
///
/// Messages such as `CompoundReference` pick kind-specific wording through
/// the kind's tag. `Other` carries no tag, so those messages fall through to
/// their generic wording instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompoundKind {
    #[default]
    Class,
    Struct,
    Union,
    Interface,
    Protocol,
    Category,
    Exception,
    Service,
    Singleton,
    Other,
}

impl CompoundKind {
    /// Every kind with wording of its own.
    pub const NAMED: &'static [CompoundKind] = &[
        CompoundKind::Class,
        CompoundKind::Struct,
        CompoundKind::Union,
        CompoundKind::Interface,
        CompoundKind::Protocol,
        CompoundKind::Category,
        CompoundKind::Exception,
        CompoundKind::Service,
        CompoundKind::Singleton,
    ];

    /// Selection tag used by locale tables, `None` for `Other`.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            CompoundKind::Class => Some("class"),
            CompoundKind::Struct => Some("struct"),
            CompoundKind::Union => Some("union"),
            CompoundKind::Interface => Some("interface"),
            CompoundKind::Protocol => Some("protocol"),
            CompoundKind::Category => Some("category"),
            CompoundKind::Exception => Some("exception"),
            CompoundKind::Service => Some("service"),
            CompoundKind::Singleton => Some("singleton"),
            CompoundKind::Other => None,
        }
    }
}

impl FromStr for CompoundKind {
    type Err = std::convert::Infallible;

    /// Case-insensitive; anything unrecognized is `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Ok(CompoundKind::NAMED
            .iter()
            .copied()
            .find(|kind| kind.tag() == Some(lower.as_str()))
            .unwrap_or(CompoundKind::Other))
    }
}
