//! Aegong CLI - command-line interface for the agent artifact audit engine.

use aegong_core::{AuditEngine, AuditEngineConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aegong")]
#[command(about = "Aegong - Agent Artifact Audit Engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Audit an artifact file and persist the resulting report.
    Audit {
        /// Path to the artifact to audit.
        path: PathBuf,
        /// Print a human narrative instead of pretty JSON.
        #[arg(long)]
        human: bool,
    },
    /// List persisted audit reports.
    List,
    /// Show one persisted report by its hash prefix.
    Show {
        /// First 8 hex characters of the artifact's SHA-256 digest.
        hash_prefix: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let engine = AuditEngine::new(AuditEngineConfig::from_env())?;

    match cli.command {
        Commands::Audit { path, human } => {
            let bytes = std::fs::read(&path)?;
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("artifact")
                .to_string();

            let report = engine.audit(&bytes, &filename)?;
            engine.save_report(&report)?;

            if human {
                println!("{}", report.narrative);
                println!("risk: {:?} ({:.2})", report.risk_level, report.overall_risk);
                for recommendation in &report.recommendations {
                    println!("- {recommendation}");
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Commands::List => {
            for summary in engine.list_reports()? {
                println!(
                    "{}  {:<24} {:?}  risk={:.2}  threats={}",
                    summary.hash_prefix,
                    summary.agent_name,
                    summary.risk_level,
                    summary.overall_risk,
                    summary.threat_count
                );
            }
        }
        Commands::Show { hash_prefix } => {
            let report = engine.load_report(&hash_prefix)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
