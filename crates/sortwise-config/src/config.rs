//! Top-level suite configuration and scenario selection.

use serde::{Deserialize, Serialize};

use crate::scenario::Scenario;
use crate::settings::{BrowserSettings, LoggingSettings, WaitSettings};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Root URL of the application under test
    #[serde(default)]
    pub base_url: String,

    #[serde(default)]
    pub browser: BrowserSettings,

    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub wait: WaitSettings,

    /// Scenario names to run; empty runs all of them
    #[serde(default)]
    pub cases: Vec<String>,

    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl SuiteConfig {
    /// Scenarios to run, in declaration order.
    ///
    /// `requested` (typically from the command line) wins over the configured
    /// `cases` list; when both are empty every scenario is selected.
    pub fn selected<'a>(&'a self, requested: &[String]) -> Vec<&'a Scenario> {
        let wanted = if requested.is_empty() {
            self.cases.as_slice()
        } else {
            requested
        };

        self.scenarios
            .iter()
            .filter(|scenario| wanted.is_empty() || wanted.contains(&scenario.name))
            .collect()
    }

    pub fn scenario(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{ScenarioKind, SortColumn};

    fn scenario(name: &str) -> Scenario {
        Scenario::new(
            name,
            ScenarioKind::Sort {
                columns: vec![SortColumn::new("Outcome", "outcome")],
            },
        )
    }

    #[test]
    fn selects_everything_by_default() {
        let config = SuiteConfig {
            scenarios: vec![scenario("builds"), scenario("tasks")],
            ..SuiteConfig::default()
        };
        assert_eq!(config.selected(&[]).len(), 2);
    }

    #[test]
    fn configured_cases_filter_scenarios() {
        let config = SuiteConfig {
            cases: vec!["tasks".to_string()],
            scenarios: vec![scenario("builds"), scenario("tasks")],
            ..SuiteConfig::default()
        };
        let names: Vec<_> = config.selected(&[]).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["tasks"]);
    }

    #[test]
    fn requested_cases_override_configured_ones() {
        let config = SuiteConfig {
            cases: vec!["tasks".to_string()],
            scenarios: vec![scenario("builds"), scenario("tasks")],
            ..SuiteConfig::default()
        };
        let names: Vec<_> = config
            .selected(&["builds".to_string()])
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["builds"]);
    }
}
