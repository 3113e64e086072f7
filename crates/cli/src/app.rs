//! CLI application entry point and command dispatch.

use crate::commands::{AnalyzeArgs, Cli, Commands, OutputFormat, ServeArgs};
use crate::error::Result;
use crate::export;
use clap::Parser;
use moodline_analysis::AnalysisContext;
use moodline_api::{ApiConfig, ApiServer};
use moodline_core::config::MoodlineConfig;
use moodline_core::types::ChatReport;
use std::sync::Arc;

/// Main CLI application.
#[derive(Debug)]
pub struct App {
    /// Loaded configuration.
    pub config: MoodlineConfig,
    /// Parsed CLI arguments.
    pub cli: Cli,
}

impl App {
    /// Create a new application instance from command line arguments.
    pub fn new() -> Result<Self> {
        let cli = Cli::parse();
        let config = match &cli.config {
            Some(path) => MoodlineConfig::load(path)?,
            None => MoodlineConfig::default(),
        };
        Ok(Self { config, cli })
    }

    /// Run the application.
    pub fn run(self) -> Result<()> {
        self.setup_logging();

        match &self.cli.command {
            Commands::Analyze(args) => self.handle_analyze(args),
            Commands::Serve(args) => self.handle_serve(args),
        }
    }

    /// Set up logging based on verbosity level.
    fn setup_logging(&self) {
        let level = match self.cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .ok();
    }

    fn handle_analyze(&self, args: &AnalyzeArgs) -> Result<()> {
        let mut config = self.config.clone();
        if let Some(dir) = &args.model_dir {
            config.model.model_dir = dir.clone();
        }
        config.pipeline.policy = args.policy.into();

        let context = AnalysisContext::from_config(&config)?;
        let bytes = std::fs::read(&args.file)?;
        let results = context.score_bytes(&bytes, None)?;
        let report = moodline_analysis::report::build_report(&results)?;

        match args.output {
            OutputFormat::Text => print_summary(&report),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }

        if let Some(csv_path) = &args.csv {
            export::write_csv(csv_path, &results)?;
            tracing::info!(path = %csv_path.display(), "wrote per-message CSV");
        }

        Ok(())
    }

    fn handle_serve(&self, args: &ServeArgs) -> Result<()> {
        let mut config = self.config.clone();
        if let Some(dir) = &args.model_dir {
            config.model.model_dir = dir.clone();
        }
        if let Some(host) = &args.host {
            config.http.host = host.clone();
        }
        if let Some(port) = args.port {
            config.http.port = port;
        }

        let context = Arc::new(AnalysisContext::from_config(&config)?);
        let api_config = ApiConfig::from_config(&config)?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let server = ApiServer::new(api_config, context);
        runtime.block_on(server.run())?;
        Ok(())
    }
}

/// Prints the human-readable report summary.
fn print_summary(report: &ChatReport) {
    println!("--- CHAT SENTIMENT SUMMARY ---");
    println!("Messages analyzed: {}", report.total);
    println!();
    println!(
        "Positive: {:>5} ({:.2}%)",
        report.counts.positive, report.percentages.positive
    );
    println!(
        "Neutral:  {:>5} ({:.2}%)",
        report.counts.neutral, report.percentages.neutral
    );
    println!(
        "Negative: {:>5} ({:.2}%)",
        report.counts.negative, report.percentages.negative
    );
    println!();
    println!("Overall mood: {}", report.overall_mood);
    println!("Health score: {}/100", report.health_score);

    if !report.top_negative.is_empty() {
        println!();
        println!("Most negative messages:");
        for result in &report.top_negative {
            println!("  [{:.2}] {}", result.confidence, result.message.text);
        }
    }
}

/// Parse command line arguments and run the application.
pub fn run() -> Result<()> {
    let app = App::new()?;
    app.run()
}
