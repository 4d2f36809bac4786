//! Display metadata for command categories.

use serde::Serialize;

/// Icon name shown for categories without a dedicated style.
const DEFAULT_ICON: &str = "Package";

/// Gradient token shown for categories without a dedicated style.
const DEFAULT_GRADIENT: &str = "from-gray-500 to-gray-600";

/// Display metadata for one category tab.
///
/// `icon` is a Lucide icon name and `gradient` a Tailwind gradient token;
/// both are consumed verbatim by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    /// Icon identifier.
    pub icon: &'static str,
    /// Gradient/color token.
    pub gradient: &'static str,
    /// Human description of the category.
    pub description: String,
}

/// Resolves the display style for a category tag.
///
/// Known tags map to a fixed entry; unrecognized tags fall back to the
/// generic package icon and gray gradient, echoing the tag itself as the
/// description.
pub fn category_style(category: &str) -> CategoryStyle {
    let (icon, gradient, description) = match category {
        "moderation" => ("Shield", "from-red-500 to-rose-600", "Keep your server safe"),
        "fun" => ("Sparkles", "from-pink-500 to-purple-600", "Games and party tricks"),
        "utility" => ("Wrench", "from-blue-500 to-cyan-600", "Server and user lookups"),
        "music" => ("Music", "from-green-500 to-emerald-600", "Voice channel playback"),
        "levels" => ("TrendingUp", "from-yellow-500 to-amber-600", "XP and leaderboards"),
        other => return CategoryStyle {
            icon: DEFAULT_ICON,
            gradient: DEFAULT_GRADIENT,
            description: other.to_string(),
        },
    };

    CategoryStyle {
        icon,
        gradient,
        description: description.to_string(),
    }
}
