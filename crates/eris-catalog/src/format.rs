//! Display formatting for argument and permission metadata.

use crate::types::ArgumentSpec;
use eris_common::text::title_case_tag;
use serde::Serialize;

/// Fallback argument type when the catalog omits one.
const DEFAULT_ARGUMENT_KIND: &str = "text";

/// One argument row on a command card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentDisplay {
    /// Argument name.
    pub name: String,
    /// Argument type label, defaulted to `"text"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the argument is required.
    pub required: bool,
}

/// Formatted argument block for a command card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentSummary {
    /// Count summary, e.g. `"1 required, 2 optional"`, or `"None"`.
    pub summary: String,
    /// Per-argument rows, required before optional.
    pub details: Vec<ArgumentDisplay>,
}

/// Formats required and optional argument descriptors for display.
///
/// The summary counts the raw input sequences; the detail rows list required
/// arguments before optional ones and skip entries without a name. Both
/// sequences empty yields the `"None"` summary with no rows.
pub fn format_arguments(required: &[ArgumentSpec], optional: &[ArgumentSpec]) -> ArgumentSummary {
    if required.is_empty() && optional.is_empty() {
        return ArgumentSummary {
            summary: "None".to_string(),
            details: Vec::new(),
        };
    }

    let mut details = Vec::with_capacity(required.len() + optional.len());
    push_details(&mut details, required, true);
    push_details(&mut details, optional, false);

    let mut parts = Vec::new();
    if !required.is_empty() {
        parts.push(format!("{} required", required.len()));
    }
    if !optional.is_empty() {
        parts.push(format!("{} optional", optional.len()));
    }

    ArgumentSummary {
        summary: parts.join(", "),
        details,
    }
}

fn push_details(details: &mut Vec<ArgumentDisplay>, specs: &[ArgumentSpec], required: bool) {
    for spec in specs {
        // Entries without a name are malformed and skipped, not an error.
        let Some(name) = &spec.name else {
            continue;
        };
        details.push(ArgumentDisplay {
            name: name.clone(),
            kind: spec
                .kind
                .clone()
                .unwrap_or_else(|| DEFAULT_ARGUMENT_KIND.to_string()),
            required,
        });
    }
}

/// Formats permission tags for display.
///
/// Returns `"None"` for an empty sequence, otherwise a comma-joined list of
/// title-cased tags: `["manage_roles"]` renders as `"Manage Roles"`.
pub fn format_permissions(permissions: &[String]) -> String {
    if permissions.is_empty() {
        return "None".to_string();
    }
    permissions
        .iter()
        .map(|tag| title_case_tag(tag))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: Option<&str>, kind: Option<&str>) -> ArgumentSpec {
        ArgumentSpec {
            name: name.map(str::to_string),
            kind: kind.map(str::to_string),
        }
    }

    #[test]
    fn test_format_arguments_empty() {
        let out = format_arguments(&[], &[]);
        assert_eq!(out.summary, "None");
        assert!(out.details.is_empty());
    }

    #[test]
    fn test_format_arguments_required_before_optional() {
        let out = format_arguments(
            &[spec(Some("user"), Some("mention"))],
            &[spec(Some("reason"), None)],
        );
        assert_eq!(out.summary, "1 required, 1 optional");
        assert_eq!(
            out.details,
            vec![
                ArgumentDisplay {
                    name: "user".to_string(),
                    kind: "mention".to_string(),
                    required: true,
                },
                ArgumentDisplay {
                    name: "reason".to_string(),
                    kind: "text".to_string(),
                    required: false,
                },
            ]
        );
    }

    #[test]
    fn test_format_arguments_skips_unnamed_but_counts_them() {
        let out = format_arguments(&[spec(None, Some("number")), spec(Some("count"), None)], &[]);
        // The summary reflects the raw sequence length.
        assert_eq!(out.summary, "2 required");
        assert_eq!(out.details.len(), 1);
        assert_eq!(out.details[0].name, "count");
    }

    #[test]
    fn test_format_arguments_only_optional() {
        let out = format_arguments(&[], &[spec(Some("user"), Some("mention"))]);
        assert_eq!(out.summary, "1 optional");
    }

    #[test]
    fn test_format_permissions() {
        assert_eq!(format_permissions(&[]), "None");
        assert_eq!(
            format_permissions(&["manage_roles".to_string(), "ban_members".to_string()]),
            "Manage Roles, Ban Members"
        );
    }
}
