//! Deterministic "execution log" synthesis for the dynamic detector pass.
//!
//! The dynamic pass re-runs every detector over a simulated execution-log
//! string rather than a real sandboxed run. The log always opens with
//! `Container: <id>` and `Binary Size: <n>`; further deterministic lines
//! follow.

use crate::models::Sandbox;

pub fn simulate_execution_log(sandbox: &Sandbox, artifact_len: usize) -> String {
    format!(
        "Container: {}\nBinary Size: {}\nNetwork: {}\nIsolation: {}\n",
        sandbox.id(),
        artifact_len,
        sandbox.info.network_ns,
        if sandbox.info.isolation_full { "full" } else { "degraded" },
    )
}
