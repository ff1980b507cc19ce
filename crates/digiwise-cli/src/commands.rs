use std::io::Write;
use std::path::{Path, PathBuf};

use digiwise_core::models::answer::{Answer, parse_answers};
use digiwise_core::models::session::SessionResult;
use digiwise_export::render::{ResultReport, render_report, render_template};
use digiwise_scoring::catalogs::QuestionCatalog;
use digiwise_scoring::config::ScoringConfig;
use digiwise_scoring::session::AssessmentSession;
use digiwise_scoring::{Catalog, all_catalogs, get_catalog};

use crate::cli::{Cli, Command, OutputFormat};
use crate::config::{self, DigiwiseConfig};

/// Dispatch a parsed command line, writing results to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> eyre::Result<()> {
    if let Command::Config { init: true } = cli.command {
        let path = init_config(cli.config.as_deref())?;
        writeln!(out, "{}", path.display())?;
        return Ok(());
    }

    let config = config::load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Score {
            answers,
            catalog,
            format,
            name,
        } => {
            let catalog = load_catalog(catalog.as_deref(), &config)?;
            let contents = std::fs::read_to_string(&answers)
                .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", answers.display()))?;
            let answers = parse_answers(&contents)?;
            let record = score_answers(catalog.as_ref(), answers, &config.scoring)?;
            let output = render_output(&record, format, &name, &config)?;
            writeln!(out, "{output}")?;
        }
        Command::Catalog { id: None } => {
            for catalog in all_catalogs() {
                writeln!(out, "{}\t{}", catalog.id(), catalog.name())?;
            }
        }
        Command::Catalog { id: Some(id) } => {
            let catalog =
                get_catalog(&id).ok_or_else(|| eyre::eyre!("catalog not found: {id}"))?;
            let snapshot = QuestionCatalog::from_catalog(catalog.as_ref());
            writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
        }
        Command::Config { .. } => {
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        }
    }
    Ok(())
}

/// Use the catalog file when given, else the configured built-in catalog.
pub fn load_catalog(
    path: Option<&Path>,
    config: &DigiwiseConfig,
) -> eyre::Result<Box<dyn Catalog>> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| eyre::eyre!("failed to read catalog at {}: {e}", path.display()))?;
            let catalog: QuestionCatalog = serde_json::from_str(&contents)?;
            catalog.validate()?;
            tracing::debug!(catalog = %catalog.id, path = %path.display(), "catalog loaded");
            Ok(Box::new(catalog))
        }
        None => get_catalog(&config.catalog_id)
            .ok_or_else(|| eyre::eyre!("catalog not found: {}", config.catalog_id)),
    }
}

/// Run the answers through a fresh session and submit it.
///
/// A later answer to the same question replaces an earlier one.
pub fn score_answers(
    catalog: &dyn Catalog,
    answers: Vec<Answer>,
    scoring: &ScoringConfig,
) -> eyre::Result<SessionResult> {
    let mut session = AssessmentSession::start(catalog);
    for answer in answers {
        if let Some(previous) = session.record(answer)? {
            tracing::warn!(
                question = answer.question_id,
                previous,
                value = answer.value,
                "answer replaced"
            );
        }
    }
    Ok(session.submit(scoring)?)
}

pub fn render_output(
    record: &SessionResult,
    format: OutputFormat,
    name: &str,
    config: &DigiwiseConfig,
) -> eyre::Result<String> {
    match format {
        OutputFormat::Json => Ok(record.to_json()?),
        OutputFormat::Text => {
            let report = ResultReport {
                examinee_name: name.to_string(),
                completed_on: record
                    .completed_at
                    .to_zoned(jiff::tz::TimeZone::system())
                    .date(),
                result: record.result.clone(),
            };
            let rendered = match &config.report_template {
                Some(path) => {
                    let template = std::fs::read_to_string(path).map_err(|e| {
                        eyre::eyre!("failed to read report template at {}: {e}", path.display())
                    })?;
                    render_template(&path.display().to_string(), &template, &report)?
                }
                None => render_report(&report)?,
            };
            Ok(rendered)
        }
    }
}

/// Write a default config file, refusing to overwrite an existing one.
pub fn init_config(path: Option<&Path>) -> eyre::Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config::default_config_path()?,
    };
    if path.exists() {
        return Err(eyre::eyre!("config already exists at {}", path.display()));
    }
    config::save_config(&path, &DigiwiseConfig::default())?;
    Ok(path)
}
