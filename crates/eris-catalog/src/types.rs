//! Command record and argument descriptor types.

use serde::{Deserialize, Serialize};

/// Metadata for one command parameter.
///
/// Entries come straight from the catalog data file; a missing `name` marks
/// a malformed entry that display code skips, and a missing `type` falls
/// back to the generic `"text"` type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ArgumentSpec {
    /// Argument name as shown on the command card.
    #[serde(default)]
    pub name: Option<String>,

    /// Argument type label, e.g. `"mention"` or `"number"`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// One command in the catalog.
///
/// The combination of `category` and `name` is the display key and is
/// expected to be unique across the catalog; that is a precondition on the
/// supplied data, not something this crate enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Command name; a flat identifier, there is no command hierarchy.
    pub name: String,

    /// Grouping tag used for tab filtering and display styling.
    pub category: String,

    /// Free-text description shown on the command card.
    pub description: String,

    /// Alternate invocation names.
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Required arguments, in invocation order.
    #[serde(default)]
    pub required_args: Vec<ArgumentSpec>,

    /// Optional arguments, in invocation order.
    #[serde(default)]
    pub optional_args: Vec<ArgumentSpec>,

    /// Discord permission tags required to use the command.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl CommandRecord {
    /// Display key for this record, `"category:name"`.
    pub fn display_key(&self) -> String {
        format!("{}:{}", self.category, self.name)
    }

    /// Whether this record matches a lower-cased search needle.
    ///
    /// The needle is matched as a substring of the lower-cased name,
    /// description, or any alias. An empty needle matches everything.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase().contains(needle_lower))
    }
}
