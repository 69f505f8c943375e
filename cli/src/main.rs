//! CLI entrypoint for tumor-board
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use board_application::{
    CompositeTranscript, ConsultationController, PlaybackConfig, PlaybackSequencer,
    StartConsultationInput, StartConsultationUseCase, SuggestSpecialistsUseCase, TranscriptSink,
};
use board_domain::{CaseInput, OutputFormat, Severity, Specialist, SpecialistKind};
use board_infrastructure::{ConfigLoader, FileConfig, JsonlTranscriptLogger, RandomPacing};
use board_presentation::{Cli, ConsoleFormatter, ConsoleTranscript, OutputConfig};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting tumor-board");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    report_config_issues(&file_config)?;

    if cli.list_specialists {
        println!("{}", ConsoleFormatter::format_specialists(Specialist::all()));
        return Ok(());
    }

    let case = CaseInput::from(cli.case.clone().unwrap_or_default());

    if cli.suggest {
        let suggested = SuggestSpecialistsUseCase::new().execute(&case);
        print!("{}", ConsoleFormatter::format_suggestion(&suggested));
        return Ok(());
    }

    let specialists = resolve_panel(&cli, &file_config, &case);
    if specialists.is_empty() {
        if !cli.allow_empty {
            bail!(
                "No specialists selected. Pass --specialist, a case description, or --allow-empty."
            );
        }
        warn!("Starting an empty consultation");
    }

    let output = OutputConfig::default()
        .with_format(
            cli.output
                .map(OutputFormat::from)
                .unwrap_or_else(|| file_config.output.format_or_default()),
        )
        .with_color(file_config.output.color)
        .with_progress(!cli.quiet);
    output.apply_color();

    // === Dependency Injection ===
    let pacing = Arc::new(RandomPacing::new(playback_config(&cli, &file_config)));
    let mut controller = ConsultationController::new(
        StartConsultationUseCase::new(pacing.clone()),
        PlaybackSequencer::new(pacing),
    );

    let sink = build_transcript(&cli, &output);
    let run = controller.begin(StartConsultationInput::new(case, specialists), sink);

    // Ctrl-C cancels the playback; the report is skipped
    if let Some(token) = controller.cancellation_token() {
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        });
    }

    let consensus = match controller.wait().await {
        Ok(consensus) => consensus,
        Err(e) if e.is_cancelled() => {
            eprintln!("\nConsultation cancelled.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let report = match output.format {
        OutputFormat::Full => ConsoleFormatter::format_report(&consensus),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&consensus),
        OutputFormat::Json => ConsoleFormatter::format_json(&run),
    };
    println!("{}", report);

    Ok(())
}

/// Initialize logging based on verbosity level, or `RUST_LOG` when set
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let Some(file_name) = path.file_name() else {
        bail!("Invalid log file path: {}", path.display());
    };
    let dir = dir.unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking)
        .init();

    Ok(Some(guard))
}

/// Print config issues; any error-level issue aborts
fn report_config_issues(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("error: {}", issue.message),
            Severity::Warning => eprintln!("warning: {}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }
    Ok(())
}

/// Explicit picks, then configured defaults, then triage of the case text
fn resolve_panel(cli: &Cli, config: &FileConfig, case: &CaseInput) -> Vec<SpecialistKind> {
    if !cli.specialist.is_empty() {
        return cli.specialist.clone();
    }

    let (defaults, _) = config.consultation.parse_default_specialists();
    if !defaults.is_empty() {
        info!("Using configured default panel");
        return defaults;
    }

    if case.is_blank() {
        return Vec::new();
    }

    SuggestSpecialistsUseCase::new()
        .execute(case)
        .into_iter()
        .map(|s| s.kind)
        .collect()
}

fn playback_config(cli: &Cli, config: &FileConfig) -> PlaybackConfig {
    let (file_playback, _) = config.playback.to_playback_config();
    let seed = cli.seed.or(file_playback.seed);

    if cli.instant {
        PlaybackConfig::instant().with_seed(seed)
    } else {
        file_playback.with_seed(seed)
    }
}

fn build_transcript(cli: &Cli, output: &OutputConfig) -> Arc<dyn TranscriptSink> {
    let mut sinks: Vec<Arc<dyn TranscriptSink>> = Vec::new();

    if output.plays_live() {
        let console = if output.show_progress {
            ConsoleTranscript::new()
        } else {
            ConsoleTranscript::quiet()
        };
        sinks.push(Arc::new(console));
    }

    if let Some(path) = &cli.transcript_log {
        match JsonlTranscriptLogger::new(path) {
            Some(logger) => {
                info!("Recording transcript to {}", logger.path().display());
                sinks.push(Arc::new(logger));
            }
            None => warn!("Transcript log disabled"),
        }
    }

    Arc::new(CompositeTranscript::new(sinks))
}
