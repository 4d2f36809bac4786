//! The command catalog and its filtering operations.

use crate::types::CommandRecord;
use eris_common::ErisError;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

/// Embedded catalog data for the Eris bot.
const BUILTIN_CATALOG_JSON: &str = include_str!("../assets/commands.json");

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(BUILTIN_CATALOG_JSON).expect("embedded commands.json is well-formed")
});

/// Category selection for the command reference page.
///
/// The `"all"` tab maps to [`CategoryFilter::All`], every other tab to
/// [`CategoryFilter::Only`] with the category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category filtering; every record passes.
    All,
    /// Only records whose `category` equals the given name pass.
    Only(String),
}

impl CategoryFilter {
    /// Parses the query-string form used by the page: `"all"`
    /// (case-insensitive) is the sentinel, anything else names a category.
    pub fn from_query(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Whether a record with the given category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::All
    }
}

/// The static set of command records shown on the reference page.
///
/// Records are keyed by their `"category:name"` display key. The catalog is
/// loaded once and never mutated; every query takes a fresh snapshot of the
/// values, so queries are pure and safe to repeat with different inputs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    commands: HashMap<String, CommandRecord>,
}

impl Catalog {
    /// Builds a catalog from a list of records.
    ///
    /// Duplicate display keys collapse last-wins; unique keys are a
    /// precondition on the supplied data.
    pub fn from_records(records: impl IntoIterator<Item = CommandRecord>) -> Self {
        let commands = records
            .into_iter()
            .map(|record| (record.display_key(), record))
            .collect();
        Self { commands }
    }

    /// Parses a catalog from a JSON array of command records.
    pub fn from_json(json: &str) -> Result<Self, ErisError> {
        let records: Vec<CommandRecord> =
            serde_json::from_str(json).map_err(ErisError::catalog)?;
        Ok(Self::from_records(records))
    }

    /// The embedded Eris bot catalog.
    pub fn builtin() -> &'static Self {
        &BUILTIN_CATALOG
    }

    /// Number of commands in the catalog.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the catalog has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over all records in unspecified order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandRecord> {
        self.commands.values()
    }

    /// Distinct non-empty category tags, ascending lexicographic.
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .commands
            .values()
            .map(|record| record.category.as_str())
            .filter(|category| !category.is_empty())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Number of commands carrying the given category tag.
    pub fn category_count(&self, category: &str) -> usize {
        self.commands
            .values()
            .filter(|record| record.category == category)
            .count()
    }

    /// Filters the catalog by category and free-text search, then sorts.
    ///
    /// A record is retained iff its category passes `filter` and the
    /// lower-cased `search_term` is empty or a substring of its lower-cased
    /// name, description, or any alias. Results are ordered by `category`
    /// ascending, then `name` ascending.
    pub fn filter_and_sort(
        &self,
        search_term: &str,
        filter: &CategoryFilter,
    ) -> Vec<&CommandRecord> {
        let needle = search_term.to_lowercase();

        let mut matches: Vec<&CommandRecord> = self
            .commands
            .values()
            .filter(|record| filter.matches(&record.category))
            .filter(|record| record.matches_search(&needle))
            .collect();

        matches.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.name.cmp(&b.name))
        });
        matches
    }
}
