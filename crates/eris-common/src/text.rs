//! Small string helpers shared across the workspace.

/// Turns a snake_case tag into a human-readable label.
///
/// Underscores become spaces and the first letter of each word is
/// upper-cased; the remainder of each word is preserved as-is. Used for
/// rendering permission tags like `"manage_roles"` as `"Manage Roles"`.
pub fn title_case_tag(tag: &str) -> String {
    tag.split('_')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
