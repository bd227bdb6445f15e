// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use resume_sift::exporter::json::to_json;
use resume_sift::utils::logging::{format_error, format_info, format_success, format_warning};
use resume_sift::{
    BatchRunner, CareerRecommender, Config, FileScanner, HealthReport, HealthStatus,
    JsonExporter, OperationTimer, ResumeInput, ResumeProcessor, SkillCareerMap,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "resume_sift")]
#[command(version)]
#[command(about = "Extracts, scores and classifies resumes", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one resume (pdf, docx/doc, image) and print its JSON report
    Parse {
        file: PathBuf,

        /// File name to report instead of the path's own name
        #[arg(long, value_name = "NAME")]
        name: Option<String>,

        #[arg(long)]
        grammar: bool,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Run extraction and scoring over an already-extracted plain text file
    Analyze {
        text_file: PathBuf,

        #[arg(long)]
        grammar: bool,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Parse every resume under a directory and write one report per file
    Batch {
        dir: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_name = "NUM")]
        limit: Option<usize>,

        #[arg(long)]
        grammar: bool,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Suggest careers for a list of skills
    Recommend {
        #[arg(required = true)]
        skills: Vec<String>,
    },

    /// Check OCR tools, the career table and the grammar service
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    resume_sift::utils::logging::set_color(cli.color);
    resume_sift::utils::logging::init_logger(cli.color, cli.verbose);

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Parse {
            file,
            name,
            grammar,
            pretty,
        } => {
            config.grammar.enabled |= grammar;
            cmd_parse(&config, &file, name.as_deref(), pretty)?;
        }
        Commands::Analyze {
            text_file,
            grammar,
            pretty,
        } => {
            config.grammar.enabled |= grammar;
            cmd_analyze(&config, &text_file, pretty)?;
        }
        Commands::Batch {
            dir,
            output,
            limit,
            grammar,
            pretty,
        } => {
            config.grammar.enabled |= grammar;
            let output = output.unwrap_or_else(|| config.pipeline.output_dir.clone());
            cmd_batch(&config, &dir, &output, limit, pretty, cli.color)?;
        }
        Commands::Recommend { skills } => {
            cmd_recommend(&config, &skills)?;
        }
        Commands::Doctor => {
            cmd_doctor(&config)?;
        }
    }

    Ok(())
}

fn build_processor(config: &Config) -> Result<ResumeProcessor> {
    config.validate().context("Invalid configuration")?;
    ResumeProcessor::from_config(config).context("Failed to initialize resume processor")
}

fn cmd_parse(config: &Config, file: &Path, name: Option<&str>, pretty: bool) -> Result<()> {
    let processor = build_processor(config)?;
    let timer = OperationTimer::new("parse");

    let report = processor
        .parse_resume(&ResumeInput::from_path(file), name)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    timer.finish();
    println!("{}", to_json(&report, pretty)?);
    Ok(())
}

fn cmd_analyze(config: &Config, text_file: &Path, pretty: bool) -> Result<()> {
    let processor = build_processor(config)?;

    let text = std::fs::read_to_string(text_file)
        .with_context(|| format!("Failed to read {}", text_file.display()))?;
    let file_name = text_file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| text_file.display().to_string());

    let report = processor
        .analyze_text(&file_name, &text)
        .context("Failed to analyze text")?;

    println!("{}", to_json(&report, pretty)?);
    Ok(())
}

fn cmd_batch(
    config: &Config,
    dir: &Path,
    output: &Path,
    limit: Option<usize>,
    pretty: bool,
    color: bool,
) -> Result<()> {
    let processor = Arc::new(build_processor(config)?);

    let scanner = FileScanner::new(
        config.pipeline.skip_patterns.clone(),
        config.acquisition.max_file_size_mb,
    );
    let mut files = scanner
        .scan_directory(dir)
        .context("Failed to scan directory")?;

    if let Some(limit) = limit {
        files.truncate(limit);
    }

    if files.is_empty() {
        println!("{}", format_warning("No resumes found"));
        return Ok(());
    }

    let exporter = JsonExporter::new(output).context("Failed to create output directory")?;

    // The blocking grammar client must not be created or dropped on a runtime
    // thread, so the runtime only lives for the fan-out.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let runner = BatchRunner::new(Arc::clone(&processor), config.pipeline.parallel_workers)
        .with_progress(true, color);
    let outcome = runtime.block_on(runner.run(files));
    drop(runtime);

    let mut written = Vec::new();
    for (file, report) in outcome.reports() {
        written.push(
            exporter
                .export_report(report, &file.relative_path, pretty)
                .with_context(|| format!("Failed to export {}", file.relative_path))?,
        );
    }
    exporter.write_manifest(written)?;

    for (file, err) in outcome.failures() {
        println!("{}", format_error(&format!("{}: {}", file.relative_path, err)));
    }
    println!("{}", format_info(&outcome.stats.format_breakdown()));

    println!(
        "{}",
        format_success(&format!(
            "{} -> {}",
            outcome.stats.summary_line(),
            exporter.output_dir().display()
        ))
    );
    Ok(())
}

fn cmd_recommend(config: &Config, skills: &[String]) -> Result<()> {
    let table = match &config.careers.map_path {
        Some(path) => SkillCareerMap::from_json_file(path).context("Failed to load career table")?,
        None => SkillCareerMap::builtin(),
    };
    let recommender = CareerRecommender::new(Arc::new(table));

    let skills: Vec<String> = skills.iter().map(|s| s.trim().to_lowercase()).collect();
    let recommendation = recommender.recommend(&skills);

    if recommendation.fallback {
        println!("{}", format_warning("No known skills; general recommendation"));
    }
    for career in &recommendation.careers {
        println!("{}", format_info(career));
    }
    Ok(())
}

fn cmd_doctor(config: &Config) -> Result<()> {
    let report = HealthReport::collect(config);
    print!("{}", report.format());

    if report.overall_status == HealthStatus::Unhealthy {
        anyhow::bail!("One or more required components are unhealthy");
    }
    Ok(())
}
