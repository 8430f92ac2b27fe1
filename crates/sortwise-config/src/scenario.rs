//! Scenario definitions: which table to open and what to assert about it.

use serde::{Deserialize, Serialize};
use sortwise_core::Direction;

/// One named acceptance case against a single table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,

    /// Path relative to `base_url`
    #[serde(default = "default_path")]
    pub path: String,

    /// Element id of the table
    #[serde(default = "default_table")]
    pub table: String,

    /// Link texts followed in order after the page loads
    #[serde(default)]
    pub links: Vec<String>,

    /// Texts that must appear on the page before the table is checked
    #[serde(default)]
    pub expect_text: Vec<String>,

    #[serde(flatten)]
    pub kind: ScenarioKind,
}

impl Scenario {
    /// A scenario on the default table at the root path.
    pub fn new(name: impl Into<String>, kind: ScenarioKind) -> Self {
        Self {
            name: name.into(),
            path: default_path(),
            table: default_table(),
            links: Vec::new(),
            expect_text: Vec::new(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Click each heading twice; the second click must flip the order.
    Sort { columns: Vec<SortColumn> },

    /// The column must already be sorted when the page loads.
    DefaultOrder {
        /// 1-based column index
        column: usize,
        direction: Direction,
    },

    /// Search for each pattern. Every cell left in the column must contain
    /// it, and clearing the search must restore the column.
    Search {
        /// Class carried by the searched column's cells
        class: String,
        patterns: Vec<String>,
        #[serde(default)]
        form: SearchForm,
    },

    /// The table must show exactly as many rows as the page-size selector.
    PageSize {
        #[serde(default = "default_page_size")]
        selector: String,
    },

    /// Toggle columns from the edit-columns menu, then check the headings.
    Columns {
        /// Element id of the button opening the menu
        #[serde(default = "default_columns_menu")]
        menu: String,
        /// Element ids of the checkboxes to click
        toggle: Vec<String>,
        #[serde(default)]
        expect_headings: Vec<String>,
        #[serde(default)]
        absent_headings: Vec<String>,
    },
}

/// A sortable column: the heading link to click and the class its cells carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortColumn {
    pub heading: String,
    pub class: String,
}

impl SortColumn {
    pub fn new(heading: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            class: class.into(),
        }
    }
}

/// CSS selectors of the table's search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub input: String,
    pub submit: String,
    /// Control that clears an active search
    pub clear: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            input: "#search".to_string(),
            submit: "#search-button".to_string(),
            clear: "i.icon-remove".to_string(),
        }
    }
}

fn default_path() -> String {
    "/".to_string()
}

fn default_table() -> String {
    "otable".to_string()
}

fn default_page_size() -> String {
    "select.pagesize".to_string()
}

fn default_columns_menu() -> String {
    "edit-columns-button".to_string()
}
