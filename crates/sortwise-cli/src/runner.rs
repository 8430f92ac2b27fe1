//! Scenario execution against a table.
//!
//! The runner only talks to a [`ColumnProbe`], so the ordering logic is
//! exercised in tests with in-memory tables and in production with a
//! browser [`Table`].

use async_trait::async_trait;
use sortwise_browser::{BrowserError, Table};
use sortwise_config::{Scenario, ScenarioKind, SearchForm, SortColumn};
use sortwise_core::{
    extract_numbers, observe, verify_default_order, verify_toggle, Direction, Observed, Verdict,
};
use tracing::{debug, info};

use crate::error::Result;
use crate::results::CaseOutcome;

/// Reads and drives one table and the controls around it.
#[async_trait]
pub trait ColumnProbe: Send + Sync {
    /// Clicks the sortable heading labelled `heading`.
    async fn click_heading(&self, heading: &str) -> Result<(), BrowserError>;

    /// Cells carrying the class `class`, top to bottom.
    async fn column(&self, class: &str) -> Result<Vec<String>, BrowserError>;

    /// Cells of column `number` (1-based), top to bottom.
    async fn column_number(&self, number: usize) -> Result<Vec<String>, BrowserError>;

    /// Number of body rows.
    async fn row_count(&self) -> Result<usize, BrowserError>;

    /// Non-empty heading texts, left to right.
    async fn head_text(&self) -> Result<Vec<String>, BrowserError>;

    /// Whether body row `number` (1-based) exists.
    async fn has_row(&self, number: usize) -> Result<bool, BrowserError>;

    /// Submits `pattern` through the search form.
    async fn search(&self, form: &SearchForm, pattern: &str) -> Result<(), BrowserError>;

    /// Clears the active search.
    async fn clear_search(&self, form: &SearchForm) -> Result<(), BrowserError>;

    /// Label of the selected option in the page-size control.
    async fn page_size_label(&self, selector: &str) -> Result<String, BrowserError>;

    /// Opens the column menu, clicks each toggle, and closes the menu.
    async fn toggle_columns(&self, menu: &str, toggles: &[String]) -> Result<(), BrowserError>;

    /// Follows the link whose text is `text`.
    async fn follow_link(&self, text: &str) -> Result<(), BrowserError>;

    /// Whether `text` appears on the page.
    async fn text_present(&self, text: &str) -> Result<bool, BrowserError>;
}

#[async_trait]
impl<'a> ColumnProbe for Table<'a> {
    async fn click_heading(&self, heading: &str) -> Result<(), BrowserError> {
        Table::click_heading(self, heading).await
    }

    async fn column(&self, class: &str) -> Result<Vec<String>, BrowserError> {
        self.column_by_class(class).await
    }

    async fn column_number(&self, number: usize) -> Result<Vec<String>, BrowserError> {
        self.column_by_number(number).await
    }

    async fn row_count(&self) -> Result<usize, BrowserError> {
        Table::row_count(self).await
    }

    async fn head_text(&self) -> Result<Vec<String>, BrowserError> {
        Table::head_text(self).await
    }

    async fn has_row(&self, number: usize) -> Result<bool, BrowserError> {
        Table::has_row(self, number).await
    }

    async fn search(&self, form: &SearchForm, pattern: &str) -> Result<(), BrowserError> {
        let page = self.page();
        page.fill(&form.input, pattern).await?;
        page.click(&form.submit).await?;
        page.wait_for_load(page.wait_config()).await
    }

    async fn clear_search(&self, form: &SearchForm) -> Result<(), BrowserError> {
        let page = self.page();
        page.click(&form.clear).await?;
        page.wait_for_load(page.wait_config()).await
    }

    async fn page_size_label(&self, selector: &str) -> Result<String, BrowserError> {
        self.page().selected_option_text(selector).await
    }

    async fn toggle_columns(&self, menu: &str, toggles: &[String]) -> Result<(), BrowserError> {
        let page = self.page();
        let menu = format!("#{menu}");
        page.click(&menu).await?;
        for toggle in toggles {
            page.click(&format!("#{toggle}")).await?;
        }
        page.click(&menu).await
    }

    async fn follow_link(&self, text: &str) -> Result<(), BrowserError> {
        let page = self.page();
        page.click_text(text).await?;
        page.wait_for_load(page.wait_config()).await
    }

    async fn text_present(&self, text: &str) -> Result<bool, BrowserError> {
        self.page().is_text_present(&[text]).await
    }
}

/// Result of toggling one sortable column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReport {
    pub heading: String,
    pub first: Observed,
    pub second: Observed,
    pub verdict: Verdict,
}

/// Clicks `column`'s heading twice, reading the column after each click.
///
/// # Errors
///
/// Returns browser failures and order-check errors.
pub async fn toggle_column(probe: &dyn ColumnProbe, column: &SortColumn) -> Result<ColumnReport> {
    probe.click_heading(&column.heading).await?;
    let first = observe(&probe.column(&column.class).await?)?;

    probe.click_heading(&column.heading).await?;
    let second = observe(&probe.column(&column.class).await?)?;

    let verdict = verify_toggle(first, second);
    debug!(
        "Column '{}': first {}, second {}, {}",
        column.heading, first, second, verdict
    );

    Ok(ColumnReport {
        heading: column.heading.clone(),
        first,
        second,
        verdict,
    })
}

/// Runs every column of a sort scenario, collecting all failures.
///
/// # Errors
///
/// Returns browser failures and order-check errors.
pub async fn run_sort(probe: &dyn ColumnProbe, columns: &[SortColumn]) -> Result<CaseOutcome> {
    let mut failures = Vec::new();
    for column in columns {
        let report = toggle_column(probe, column).await?;
        if !report.verdict.is_pass() {
            failures.push(format!("column '{}': {}", report.heading, report.verdict));
        }
    }
    Ok(outcome(failures))
}

/// Checks that column `number` is already sorted in `direction`.
///
/// # Errors
///
/// Returns browser failures and order-check errors.
pub async fn run_default_order(
    probe: &dyn ColumnProbe,
    number: usize,
    direction: Direction,
) -> Result<CaseOutcome> {
    let cells = probe.column_number(number).await?;
    Ok(match verify_default_order(&cells, direction)? {
        Verdict::Pass => CaseOutcome::Passed,
        verdict => CaseOutcome::Failed(format!("column {number}: {verdict}")),
    })
}

/// Searches for each pattern in turn.
///
/// Every cell of `class` left after a search must contain the pattern,
/// ignoring case; no matches at all is fine. Clearing the search must bring
/// back the column as it was.
///
/// # Errors
///
/// Returns browser failures.
pub async fn run_search(
    probe: &dyn ColumnProbe,
    class: &str,
    patterns: &[String],
    form: &SearchForm,
) -> Result<CaseOutcome> {
    let mut failures = Vec::new();
    for pattern in patterns {
        let before = probe.column(class).await?;

        probe.search(form, pattern).await?;
        let found = probe.column(class).await?;
        debug!("Search '{}' left {} cell(s) in {}", pattern, found.len(), class);

        let needle = pattern.to_lowercase();
        let strays: Vec<&String> = found
            .iter()
            .filter(|cell| !cell.to_lowercase().contains(&needle))
            .collect();
        if !strays.is_empty() {
            failures.push(format!(
                "search '{pattern}': {} cell(s) without it, first '{}'",
                strays.len(),
                strays[0]
            ));
        }

        probe.clear_search(form).await?;
        if probe.column(class).await? != before {
            failures.push(format!(
                "search '{pattern}': clearing did not restore column '{class}'"
            ));
        }
    }
    Ok(outcome(failures))
}

/// Checks that the table shows exactly the rows the page-size control
/// promises.
///
/// # Errors
///
/// Returns browser failures.
pub async fn run_page_size(probe: &dyn ColumnProbe, selector: &str) -> Result<CaseOutcome> {
    let label = probe.page_size_label(selector).await?;
    let Some(size) = extract_numbers(&label)
        .first()
        .and_then(|digits| digits.parse::<usize>().ok())
    else {
        return Ok(CaseOutcome::Failed(format!(
            "page size '{label}' shows no row count"
        )));
    };

    Ok(if !probe.has_row(size).await? {
        CaseOutcome::Failed(format!("page size {size}: fewer rows displayed"))
    } else if probe.has_row(size + 1).await? {
        CaseOutcome::Failed(format!("page size {size}: more rows displayed"))
    } else {
        CaseOutcome::Passed
    })
}

/// Toggles columns from the menu, then checks which headings are shown.
///
/// # Errors
///
/// Returns browser failures.
pub async fn run_columns(
    probe: &dyn ColumnProbe,
    menu: &str,
    toggle: &[String],
    expect: &[String],
    absent: &[String],
) -> Result<CaseOutcome> {
    probe.toggle_columns(menu, toggle).await?;
    let headings = probe.head_text().await?;
    debug!("Headings after toggling: {:?}", headings);

    let mut failures: Vec<String> = expect
        .iter()
        .filter(|heading| !headings.contains(heading))
        .map(|heading| format!("heading '{heading}' is not shown"))
        .collect();
    failures.extend(
        absent
            .iter()
            .filter(|heading| headings.contains(heading))
            .map(|heading| format!("heading '{heading}' is still shown")),
    );
    Ok(outcome(failures))
}

/// Runs one scenario. An empty table is skipped rather than judged.
///
/// # Errors
///
/// Returns browser failures and order-check errors.
pub async fn run_scenario(probe: &dyn ColumnProbe, scenario: &Scenario) -> Result<CaseOutcome> {
    for link in &scenario.links {
        probe.follow_link(link).await?;
    }

    let mut missing = Vec::new();
    for text in &scenario.expect_text {
        if !probe.text_present(text).await? {
            missing.push(format!("'{text}'"));
        }
    }
    if !missing.is_empty() {
        return Ok(CaseOutcome::Failed(format!(
            "page is missing {}",
            missing.join(", ")
        )));
    }

    if probe.row_count().await? == 0 {
        return Ok(CaseOutcome::Skipped(format!(
            "table #{} has no rows",
            scenario.table
        )));
    }

    info!("Running case {}", scenario.name);
    match &scenario.kind {
        ScenarioKind::Sort { columns } => run_sort(probe, columns).await,
        ScenarioKind::DefaultOrder { column, direction } => {
            run_default_order(probe, *column, *direction).await
        }
        ScenarioKind::Search {
            class,
            patterns,
            form,
        } => run_search(probe, class, patterns, form).await,
        ScenarioKind::PageSize { selector } => run_page_size(probe, selector).await,
        ScenarioKind::Columns {
            menu,
            toggle,
            expect_headings,
            absent_headings,
        } => run_columns(probe, menu, toggle, expect_headings, absent_headings).await,
    }
}

fn outcome(failures: Vec<String>) -> CaseOutcome {
    if failures.is_empty() {
        CaseOutcome::Passed
    } else {
        CaseOutcome::Failed(failures.join("\n"))
    }
}
