//! The Audit Engine: validates the artifact, runs it through a sandboxed
//! static and dynamic detector pass, evaluates the shield validators,
//! scores risk, synthesizes recommendations and a narrative, then appends
//! the result to the immutable audit log.

use crate::config::AuditEngineConfig;
use crate::error::{AuditError, Result};
use crate::narrative;
use crate::persistence;
use crate::recommendations;
use crate::report::{AuditReport, ReportSummary, RiskLevel};
use crate::risk;
use aegong_sandbox::{simulate_execution_log, SandboxRegistry};
use aegong_shields::ShieldOutcome;
use aegong_threats::{detect_all, ThreatDetection};
use aegong_validator::AgentValidator;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{debug, error, info, warn};

/// The unified Audit Engine facade.
pub struct AuditEngine {
    config: AuditEngineConfig,
    validator: AgentValidator,
    sandboxes: SandboxRegistry,
    log: aegong_log::AuditLogWriter,
}

impl AuditEngine {
    /// Opens the audit log at `config.storage.log_path` and constructs the
    /// engine. Fallible only because the log file must be opened eagerly.
    pub fn new(config: AuditEngineConfig) -> Result<Self> {
        let log = aegong_log::AuditLogWriter::open(&config.storage.log_path)?;
        Ok(Self {
            config,
            validator: AgentValidator::new(),
            sandboxes: SandboxRegistry::new(),
            log,
        })
    }

    pub fn config(&self) -> &AuditEngineConfig {
        &self.config
    }

    /// Runs the full audit pipeline over `bytes`, identified to the
    /// operator as `filename`.
    pub fn audit(&self, bytes: &[u8], filename: &str) -> Result<AuditReport> {
        if bytes.is_empty() {
            return Err(AuditError::Input("artifact is empty".to_string()));
        }

        let agent_hash = hex_digest(bytes);
        info!(agent_hash = %agent_hash, filename, "starting audit");

        let validation = self.validator.validate(bytes, filename, false)?;

        let mut sandbox = if self.config.global.test_mode {
            self.sandboxes.create_test_mode(&agent_hash)?
        } else {
            self.sandboxes.create(&agent_hash, self.config.global.dev_mode)?
        };
        debug!(sandbox_id = sandbox.id(), "sandbox acquired");

        // `sandbox` is torn down on every exit from this function, success
        // or error, by its own `Drop` impl; this closure is the single
        // place that builds the report so the teardown happens regardless
        // of which branch below returns.
        let result = self.run_pipeline(bytes, filename, &agent_hash, &validation, &sandbox);

        self.sandboxes.destroy(&mut sandbox).ok();
        debug!(sandbox_id = sandbox.id(), "sandbox destroyed");

        let report = result?;

        if let Err(e) = self.log.append(&report) {
            // The report still reaches the caller; a log failure goes out
            // this separate side channel instead.
            error!(error = %e, "failed to append audit log entry");
        }

        Ok(report)
    }

    fn run_pipeline(
        &self,
        bytes: &[u8],
        filename: &str,
        agent_hash: &str,
        validation: &aegong_validator::ValidationResult,
        sandbox: &aegong_sandbox::Sandbox,
    ) -> Result<AuditReport> {
        if !validation.is_agent {
            return Ok(self.non_agent_report(bytes, filename, agent_hash, validation, sandbox));
        }

        let (threats, shields) = rayon::join(
            || self.run_detectors(bytes, sandbox),
            || aegong_shields::validate_all(bytes, &sandbox.info),
        );

        let overall_risk = risk::overall_risk(&threats);
        let risk_level = RiskLevel::from_risk(overall_risk);
        let recommendations = recommendations::build(&threats, &shields);
        let narrative = narrative::build(risk_level, filename, &threats);
        let shield_results = shields.into_iter().map(|s| (s.name.clone(), s)).collect();

        Ok(AuditReport {
            agent_hash: agent_hash.to_string(),
            agent_name: filename.to_string(),
            timestamp: chrono::Utc::now(),
            threats,
            shield_results,
            overall_risk,
            risk_level,
            recommendations,
            narrative,
            validation: validation.clone(),
        })
    }

    /// Static pass over the raw bytes, dynamic pass over a simulated
    /// execution log, merged in detector-registration order with the
    /// static detection preceding the dynamic one for any vector both
    /// passes triggered.
    fn run_detectors(&self, bytes: &[u8], sandbox: &aegong_sandbox::Sandbox) -> Vec<ThreatDetection> {
        let static_text = String::from_utf8_lossy(bytes);
        let dynamic_text = simulate_execution_log(sandbox, bytes.len());

        let (static_threats, dynamic_threats) =
            rayon::join(|| detect_all(&static_text), || detect_all(&dynamic_text));

        let mut combined: Vec<(ThreatDetection, u8)> = static_threats
            .into_iter()
            .map(|t| (t, 0u8))
            .chain(dynamic_threats.into_iter().map(|t| (t, 1u8)))
            .collect();
        combined.sort_by_key(|(t, phase)| (t.vector.index(), *phase));
        combined.into_iter().map(|(t, _)| t).collect()
    }

    /// A non-agent artifact short-circuits to a report with only the
    /// segmentation shield evaluated, no detectors run, and minimal risk.
    fn non_agent_report(
        &self,
        bytes: &[u8],
        filename: &str,
        agent_hash: &str,
        validation: &aegong_validator::ValidationResult,
        sandbox: &aegong_sandbox::Sandbox,
    ) -> AuditReport {
        warn!(agent_hash, "artifact failed the agent predicate; short-circuiting audit");
        let segmentation = aegong_shields::validate_all(bytes, &sandbox.info)
            .into_iter()
            .find(|s| s.name == "segmentation")
            .expect("segmentation shield is always registered");

        let shields = vec![segmentation];
        let recommendations = recommendations::build(&[], &shields);
        let narrative = narrative::build(RiskLevel::Minimal, filename, &[]);
        let shield_results = shields.into_iter().map(|s| (s.name.clone(), s)).collect();

        AuditReport {
            agent_hash: agent_hash.to_string(),
            agent_name: filename.to_string(),
            timestamp: chrono::Utc::now(),
            threats: Vec::new(),
            shield_results,
            overall_risk: 0.0,
            risk_level: RiskLevel::Minimal,
            recommendations,
            narrative,
            validation: validation.clone(),
        }
    }

    pub fn save_report(&self, report: &AuditReport) -> Result<()> {
        persistence::save_report(&self.config.storage.reports_dir, report)
    }

    pub fn load_report(&self, hash_prefix: &str) -> Result<AuditReport> {
        persistence::load_report(&self.config.storage.reports_dir, hash_prefix)
    }

    pub fn list_reports(&self) -> Result<Vec<ReportSummary>> {
        persistence::list_reports(&self.config.storage.reports_dir)
    }

    pub fn log_path(&self) -> &Path {
        self.log.path()
    }
}

fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes).iter().map(|b| format!("{b:02x}")).collect()
}
