//! Status classification types.

use crate::scanner::types::RepoRoot;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Working-tree state of a repository.
///
/// Serialized as the lowercase tags `clean`/`dirty`/`inaccessible`. Earlier
/// history files stored the display glyphs instead, so deserialization
/// accepts those too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatusClass {
    /// Status query succeeded and reported no pending changes.
    Clean,
    /// Status query succeeded and reported pending changes.
    Dirty,
    /// Status query failed, timed out or could not be run.
    Inaccessible,
}

impl StatusClass {
    /// Presentation rank: Clean(0) < Dirty(1) < Inaccessible(2).
    pub fn rank(self) -> u8 {
        match self {
            StatusClass::Clean => 0,
            StatusClass::Dirty => 1,
            StatusClass::Inaccessible => 2,
        }
    }

    /// Glyph shown on the interactive surface.
    pub fn glyph(self) -> &'static str {
        match self {
            StatusClass::Clean => "🟢",
            StatusClass::Dirty => "🔴",
            StatusClass::Inaccessible => "⚪",
        }
    }

    fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "🟢" => Some(StatusClass::Clean),
            "🔴" => Some(StatusClass::Dirty),
            "⚪" => Some(StatusClass::Inaccessible),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for StatusClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        StatusClass::from_str(&tag)
            .ok()
            .or_else(|| StatusClass::from_glyph(&tag))
            .ok_or_else(|| serde::de::Error::custom(format!("unknown status tag '{}'", tag)))
    }
}

/// One repository together with its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRepo {
    pub root: RepoRoot,
    pub class: StatusClass,
}
