//! Reading and sorting an HTML data table.
//!
//! Every query runs one script against the table located by element id. A
//! missing table surfaces as [`BrowserError::ElementNotFound`].

use crate::error::{BrowserError, Result};
use crate::page::{js_string, Page};
use crate::wait::settle;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// A table on a page, identified by its element id.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    page: &'a Page,
    id: &'a str,
}

impl<'a> Table<'a> {
    pub(crate) fn new(page: &'a Page, id: &'a str) -> Self {
        Self { page, id }
    }

    /// The page holding the table.
    #[must_use]
    pub fn page(&self) -> &'a Page {
        self.page
    }

    /// Text of every `td` carrying `class`, in document order.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the table does not exist.
    pub async fn column_by_class(&self, class: &str) -> Result<Vec<String>> {
        let body = format!(
            "return Array.from(table.getElementsByTagName('td')) \
               .filter(td => td.classList.contains({})) \
               .map(td => td.innerText.trim());",
            js_string(class)?
        );
        let cells: Vec<String> = self.query(&body).await?;
        debug!("Read {} cells from #{} td.{}", cells.len(), self.id, class);
        Ok(cells)
    }

    /// Text of column `number` (1-based) for every body row.
    ///
    /// Rows shorter than `number` contribute an empty string.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` for column 0 or a missing table.
    pub async fn column_by_number(&self, number: usize) -> Result<Vec<String>> {
        if number == 0 {
            return Err(BrowserError::ElementNotFound(format!(
                "column 0 in #{} (columns are numbered from 1)",
                self.id
            )));
        }
        let body = format!(
            "return Array.from(table.querySelectorAll('tbody tr')) \
               .map(tr => tr.cells[{}] ? tr.cells[{}].innerText.trim() : '');",
            number - 1,
            number - 1
        );
        self.query(&body).await
    }

    /// Non-empty heading texts from `thead th`.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the table does not exist.
    pub async fn head_text(&self) -> Result<Vec<String>> {
        self.query(
            "return Array.from(table.querySelectorAll('thead th')) \
               .map(th => th.innerText.trim()) \
               .filter(t => t.length > 0);",
        )
        .await
    }

    /// Whether body row `number` (1-based) exists.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the table does not exist.
    pub async fn has_row(&self, number: usize) -> Result<bool> {
        if number == 0 {
            return Ok(false);
        }
        Ok(self.row_count().await? >= number)
    }

    /// Number of body rows.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the table does not exist.
    pub async fn row_count(&self) -> Result<usize> {
        self.query("return table.querySelectorAll('tbody tr').length;")
            .await
    }

    /// Clicks the link in the table whose text is `heading`, then settles.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the table has no such link.
    pub async fn click_heading(&self, heading: &str) -> Result<()> {
        let body = format!(
            "const want = {}; \
             const link = Array.from(table.getElementsByTagName('a')) \
               .find(a => a.innerText.trim() === want); \
             if (!link) return false; link.click(); return true;",
            js_string(heading)?
        );
        let clicked: bool = self.query(&body).await?;
        if !clicked {
            return Err(BrowserError::ElementNotFound(format!(
                "heading '{heading}' in #{}",
                self.id
            )));
        }
        debug!("Clicked heading '{}' in #{}", heading, self.id);
        settle(self.page.settle_delay()).await;
        Ok(())
    }

    async fn query<T: DeserializeOwned>(&self, body: &str) -> Result<T> {
        let script = table_script(self.id, body)?;
        let reply: Reply<T> = self.page.evaluate(&script).await?;
        match reply {
            Reply {
                found: true,
                value: Some(value),
            } => Ok(value),
            _ => Err(BrowserError::ElementNotFound(format!("table #{}", self.id))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Reply<T> {
    found: bool,
    value: Option<T>,
}

/// Wraps `body` so it runs with `table` bound, reporting whether the table
/// exists alongside the result.
#[allow(clippy::result_large_err)]
fn table_script(id: &str, body: &str) -> Result<String> {
    Ok(format!(
        "(() => {{ const table = document.getElementById({}); \
         if (!table) return {{ found: false }}; \
         return {{ found: true, value: (() => {{ {body} }})() }}; }})()",
        js_string(id)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_binds_escaped_id() {
        let script = table_script("otable", "return 1;").unwrap();
        assert!(script.starts_with("(() => {"));
        assert!(script.contains(r#"document.getElementById("otable")"#));
        assert!(script.contains("if (!table) return { found: false };"));
        assert!(script.contains("value: (() => { return 1; })()"));
        assert!(script.ends_with("})()"));
    }

    #[test]
    fn hostile_id_stays_inside_the_literal() {
        let script = table_script(r#"x"); alert(1); ("#, "return 1;").unwrap();
        assert!(script.contains(r#"getElementById("x\"); alert(1); (")"#));
    }

    #[test]
    fn reply_without_table_has_no_value() {
        let reply: Reply<Vec<String>> = serde_json::from_str(r#"{"found":false}"#).unwrap();
        assert!(!reply.found);
        assert!(reply.value.is_none());

        let reply: Reply<usize> = serde_json::from_str(r#"{"found":true,"value":3}"#).unwrap();
        assert_eq!(reply.value, Some(3));
    }
}
