//! Run command implementation.
//!
//! Loads the suite configuration, launches one browser session and runs each
//! selected scenario on a fresh page. Every case is recorded in the results
//! log; a failed case also leaves a screenshot under `<log_dir>/<case>/`.

use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use crate::results::{CaseOutcome, ResultsLog};
use crate::runner::run_scenario;
use crate::{logger, ui};
use sortwise_browser::{
    BrowserError, BrowserSession, Page, ScreenshotLog, SessionConfig, StaticTarget, WaitConfig,
};
use sortwise_config::{ConfigDiscovery, ConfigError, Scenario, SuiteConfig};
use tracing::{info, warn};

/// Browser name used in screenshot file names.
const BROWSER: &str = "chrome";

/// Screenshot kind for page captures.
const SCREENSHOT_KIND: &str = "page";

/// Executes the run command.
///
/// # Errors
///
/// Returns configuration and launch errors, or `CasesFailed` when any case
/// failed.
pub async fn execute(args: RunArgs) -> Result<()> {
    let config = load_config(&args)?;
    logger::apply_config_level(&config.logging.level);
    logger::attach_case_log(&config.logging.tmp_dir())?;

    let scenarios = select(&config, &args.cases)?;
    if scenarios.is_empty() {
        ui::warning("No scenarios selected");
        return Ok(());
    }

    let mut results = ResultsLog::open(&config.logging.dir)?;
    let mut screenshots = ScreenshotLog::new(&config.logging.dir, BROWSER);

    ui::info(&format!(
        "Running {} case(s) against {}",
        scenarios.len(),
        config.base_url
    ));
    let session = BrowserSession::launch(session_config(&config)).await?;
    let target = StaticTarget::new(config.base_url.as_str());

    let mut failed = 0;
    for scenario in &scenarios {
        let outcome = run_case(&session, &target, &mut screenshots, scenario).await;
        if outcome.is_failure() {
            failed += 1;
        }
        results.record(&scenario.name, &outcome)?;
    }

    if let Err(e) = session.close().await {
        warn!("Browser did not close cleanly: {}", e);
    }

    if failed > 0 {
        ui::error(&format!("{failed} of {} case(s) failed", scenarios.len()));
        return Err(CliError::CasesFailed {
            failed,
            total: scenarios.len(),
            results: results.path().to_path_buf(),
        });
    }

    ui::success(&format!("All {} case(s) passed", scenarios.len()));
    Ok(())
}

/// Runs one case on its own page. Errors become a failed outcome so the
/// remaining cases still run.
async fn run_case(
    session: &BrowserSession,
    target: &StaticTarget,
    screenshots: &mut ScreenshotLog,
    scenario: &Scenario,
) -> CaseOutcome {
    let page = match session.new_page().await {
        Ok(page) => page,
        Err(e) => return CaseOutcome::Failed(e.to_string()),
    };

    let outcome = match open_table(&page, target, scenario).await {
        Ok(()) => {
            let table = page.table(&scenario.table);
            run_scenario(&table, scenario)
                .await
                .unwrap_or_else(|e| CaseOutcome::Failed(e.to_string()))
        }
        Err(e) => CaseOutcome::Failed(e.to_string()),
    };

    if outcome.is_failure() {
        if let (Ok(title), Ok(url)) = (page.title().await, page.url().await) {
            info!("{} failed on '{}' ({})", scenario.name, title, url);
        }
        match screenshots
            .capture(&page, &scenario.name, SCREENSHOT_KIND, "failure")
            .await
        {
            Ok(path) => info!("Failure screenshot for {}: {}", scenario.name, path.display()),
            Err(e) => warn!("Could not capture screenshot for {}: {}", scenario.name, e),
        }
    }

    if let Err(e) = page.close().await {
        warn!("Could not close page for {}: {}", scenario.name, e);
    }
    outcome
}

/// Loads the scenario's page and waits for its table to render.
async fn open_table(
    page: &Page,
    target: &StaticTarget,
    scenario: &Scenario,
) -> Result<(), BrowserError> {
    page.navigate_to(target, &scenario.path).await?;
    page.wait_for_selector(&format!("#{}", scenario.table), page.wait_config())
        .await
}

fn load_config(args: &RunArgs) -> Result<SuiteConfig> {
    let cwd = std::env::current_dir()?;
    let mut discovery = ConfigDiscovery::new(&cwd);
    if let Some(profile) = &args.profile {
        discovery = discovery.with_profile(profile);
    }

    let config = match &args.config {
        Some(path) => discovery.load_from(path)?,
        None => discovery.load()?,
    };
    Ok(config)
}

/// Scenarios to run; names given on the command line must exist.
fn select<'a>(config: &'a SuiteConfig, requested: &[String]) -> Result<Vec<&'a Scenario>> {
    if let Some(unknown) = requested.iter().find(|name| config.scenario(name).is_none()) {
        return Err(ConfigError::UnknownCase(unknown.clone()).into());
    }
    Ok(config.selected(requested))
}

/// Maps the suite settings onto a browser session.
pub(crate) fn session_config(config: &SuiteConfig) -> SessionConfig {
    let browser = &config.browser;
    let mut session = SessionConfig::new()
        .with_window_size(browser.window_width, browser.window_height)
        .with_args(browser.args.clone())
        .with_wait(WaitConfig::new(
            config.wait.timeout(),
            config.wait.poll_interval(),
        ))
        .with_settle(config.wait.settle());

    if let Some(path) = &browser.chrome_path {
        session = session.with_chrome_path(path);
    }

    if !browser.headless {
        if ui::is_ci() {
            ui::warning("Ignoring browser.headless = false on CI");
        } else {
            session = session.visible();
        }
    }
    session
}
