//! Host probe port.
//!
//! Abstracts how the OS version and hardware model are discovered. The CLI
//! implements it by running system commands; tests supply fixed facts.

use thiserror::Error;

use crate::domain::HostFacts;

/// Errors that can occur while probing the host.
#[derive(Debug, Error)]
pub enum HostProbeError {
    /// A probe command could not be executed or exited unsuccessfully.
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// A probe command succeeded but printed nothing.
    #[error("Command `{command}` produced no output")]
    EmptyOutput { command: String },
}

/// Result type for host probe operations.
pub type HostProbeResult<T> = Result<T, HostProbeError>;

/// Port for discovering the host facts.
pub trait HostProbe: Send + Sync {
    /// Return the OS version and hardware model of this host.
    fn host_facts(&self) -> HostProbeResult<HostFacts>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe(HostFacts);

    impl HostProbe for FixedProbe {
        fn host_facts(&self) -> HostProbeResult<HostFacts> {
            Ok(self.0.clone())
        }
    }

    struct BrokenProbe;

    impl HostProbe for BrokenProbe {
        fn host_facts(&self) -> HostProbeResult<HostFacts> {
            Err(HostProbeError::EmptyOutput {
                command: "sysctl -n hw.model".to_string(),
            })
        }
    }

    #[test]
    fn test_probe_as_trait_object() {
        let probes: Vec<Box<dyn HostProbe>> = vec![
            Box::new(FixedProbe(HostFacts::new("14.5", "Mac14,7"))),
            Box::new(BrokenProbe),
        ];

        let facts = probes[0].host_facts().unwrap();
        assert_eq!(facts.system_version, "14.5");

        let err = probes[1].host_facts().unwrap_err();
        assert!(err.to_string().contains("hw.model"));
    }

    #[test]
    fn test_command_failed_message() {
        let err = HostProbeError::CommandFailed {
            command: "sw_vers -productVersion".to_string(),
            reason: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sw_vers"));
        assert!(msg.contains("No such file"));
    }
}
