//! Host probe backed by macOS system commands.
//!
//! `sw_vers -productVersion` gives the OS version and `sysctl -n hw.model`
//! the hardware model identifier.

use std::process::Command;

use sofa_core::{HostFacts, HostProbe, HostProbeError, HostProbeResult};

/// Probes the host by running `sw_vers` and `sysctl`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandHostProbe;

impl CommandHostProbe {
    pub const fn new() -> Self {
        Self
    }
}

impl HostProbe for CommandHostProbe {
    fn host_facts(&self) -> HostProbeResult<HostFacts> {
        let system_version = run("sw_vers", &["-productVersion"])?;
        let model_identifier = run("sysctl", &["-n", "hw.model"])?;
        Ok(HostFacts::new(system_version, model_identifier))
    }
}

/// Combine explicit overrides with probed facts.
///
/// The probe only runs when at least one fact is missing.
pub fn resolve_host_facts(
    probe: &dyn HostProbe,
    system_version: Option<String>,
    model_identifier: Option<String>,
) -> HostProbeResult<HostFacts> {
    if let (Some(version), Some(model)) = (&system_version, &model_identifier) {
        return Ok(HostFacts::new(version.clone(), model.clone()));
    }

    let probed = probe.host_facts()?;
    Ok(HostFacts::new(
        system_version.unwrap_or(probed.system_version),
        model_identifier.unwrap_or(probed.model_identifier),
    ))
}

/// Run a command and return the first non-empty line of its stdout.
fn run(program: &str, args: &[&str]) -> HostProbeResult<String> {
    let command = format!("{program} {}", args.join(" "));
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| HostProbeError::CommandFailed {
            command: command.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(HostProbeError::CommandFailed {
            command,
            reason: output.status.to_string(),
        });
    }

    first_line(&output.stdout).ok_or(HostProbeError::EmptyOutput { command })
}

fn first_line(stdout: &[u8]) -> Option<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
