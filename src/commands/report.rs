//! Report command handler
//!
//! Builds a registry from a catalog script and prints the catalog report.

use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use tomerater::config::Config;
use tomerater::domain::entities::Registry;
use tomerater::domain::ports::{ContactPrompt, NoCorrection};
use tomerater::infrastructure::{load_script, InteractiveContactPrompt};
use tomerater::presentation::create_renderer;
use tomerater::{CatalogReport, OutputFormat, ScriptUseCase};

pub fn cmd_report(
    script_path: &Path,
    top: Option<u32>,
    interactive: bool,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            for warning in &warnings {
                warning.log();
            }
            config.with_env_overrides()
        }
        None => {
            let cwd = std::env::current_dir()?;
            Config::load_or_default(Some(&cwd))
        }
    };

    let format = if json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let top = top.unwrap_or(config.report.top);

    let script = load_script(script_path)?;
    let mut registry = Registry::new().with_duplicate_check(config.catalog.duplicate_check);

    let mut prompt: Box<dyn ContactPrompt> = if interactive && std::io::stdin().is_terminal() {
        Box::new(InteractiveContactPrompt::new(config.prompt.max_attempts))
    } else {
        if interactive {
            tracing::warn!("stdin is not a terminal, contact corrections disabled");
        }
        Box::new(NoCorrection)
    };

    let summary = ScriptUseCase::new(&mut registry, prompt.as_mut()).apply(&script);
    tracing::info!(
        works = summary.works_created,
        readers = summary.readers_registered,
        readings = summary.readings_linked,
        warnings = summary.warnings.len(),
        "script applied"
    );

    let report = CatalogReport::build(&registry, top);
    let renderer = create_renderer(format, std::io::stdout().is_terminal());
    println!("{}", renderer.render(&summary, &report));

    Ok(())
}
