//! Schema validation for loaded configuration.

use std::collections::HashSet;

use crate::config::SuiteConfig;
use crate::error::{ConfigError, Result};
use crate::scenario::ScenarioKind;
use crate::settings::LoggingSettings;

/// Checks a configuration for values the runner cannot work with.
///
/// # Example
///
/// ```
/// use sortwise_config::{validate, SuiteConfig};
///
/// let mut config = SuiteConfig::default();
/// assert!(validate(&config).is_err());
///
/// config.base_url = "http://localhost:8000/toastergui/builds/".to_string();
/// validate(&config).unwrap();
/// ```
pub fn validate(config: &SuiteConfig) -> Result<()> {
    if config.base_url.trim().is_empty() {
        return Err(ConfigError::invalid(
            "base_url",
            "set base_url to the application under test",
        ));
    }

    if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
        return Err(ConfigError::invalid(
            "base_url",
            format!("'{}' must start with http:// or https://", config.base_url),
        ));
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LoggingSettings::LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::invalid(
            "logging.level",
            format!(
                "'{}' is not one of {}",
                config.logging.level,
                LoggingSettings::LEVELS.join(", ")
            ),
        ));
    }

    if config.wait.timeout_secs == 0 {
        return Err(ConfigError::invalid("wait.timeout_secs", "must be at least 1"));
    }

    if config.wait.poll_interval_ms == 0 {
        return Err(ConfigError::invalid(
            "wait.poll_interval_ms",
            "must be at least 1",
        ));
    }

    let mut names = HashSet::new();
    for scenario in &config.scenarios {
        if !names.insert(scenario.name.as_str()) {
            return Err(ConfigError::DuplicateScenario(scenario.name.clone()));
        }

        if scenario.table.trim().is_empty() {
            return Err(ConfigError::invalid(
                format!("scenarios.{}.table", scenario.name),
                "give the element id of the table",
            ));
        }

        match &scenario.kind {
            ScenarioKind::Sort { columns } if columns.is_empty() => {
                return Err(ConfigError::invalid(
                    format!("scenarios.{}.columns", scenario.name),
                    "list at least one sortable column",
                ));
            }
            ScenarioKind::DefaultOrder { column: 0, .. } => {
                return Err(ConfigError::invalid(
                    format!("scenarios.{}.column", scenario.name),
                    "columns are numbered from 1",
                ));
            }
            ScenarioKind::Search { patterns, .. }
                if patterns.iter().all(|p| p.trim().is_empty()) =>
            {
                return Err(ConfigError::invalid(
                    format!("scenarios.{}.patterns", scenario.name),
                    "list at least one non-empty search pattern",
                ));
            }
            ScenarioKind::PageSize { selector } if selector.trim().is_empty() => {
                return Err(ConfigError::invalid(
                    format!("scenarios.{}.selector", scenario.name),
                    "give the CSS selector of the page-size control",
                ));
            }
            ScenarioKind::Columns {
                toggle,
                expect_headings,
                absent_headings,
                ..
            } => {
                if toggle.is_empty() {
                    return Err(ConfigError::invalid(
                        format!("scenarios.{}.toggle", scenario.name),
                        "list at least one column to toggle",
                    ));
                }
                if let Some(both) = expect_headings
                    .iter()
                    .find(|heading| absent_headings.contains(heading))
                {
                    return Err(ConfigError::invalid(
                        format!("scenarios.{}.absent_headings", scenario.name),
                        format!("'{both}' is also listed in expect_headings"),
                    ));
                }
            }
            _ => {}
        }
    }

    if let Some(unknown) = config.cases.iter().find(|case| !names.contains(case.as_str())) {
        return Err(ConfigError::UnknownCase(unknown.clone()));
    }

    Ok(())
}
