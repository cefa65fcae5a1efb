//! Emulator container configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use pgadapter_samples_core::error::SampleError;

/// Image running PGAdapter and the Cloud Spanner emulator.
pub const PGADAPTER_EMULATOR_IMAGE: &str = "gcr.io/cloud-spanner-pg-adapter/pgadapter-emulator";

/// Image tag that is started.
pub const PGADAPTER_EMULATOR_TAG: &str = "latest";

/// Port PGAdapter listens on inside the container.
pub const PGADAPTER_PORT: u16 = 5432;

/// Default bound on waiting for the container to accept connections.
pub const DEFAULT_STARTUP_TIMEOUT: Duration = Duration::from_secs(60);

/// When the image is pulled before the container starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PullPolicy {
    /// Pull on every start so the latest tag is used.
    #[default]
    Always,
    /// Only pull when the image is not available locally.
    IfMissing,
}

impl fmt::Display for PullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("always"),
            Self::IfMissing => f.write_str("if-missing"),
        }
    }
}

impl FromStr for PullPolicy {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "if-missing" | "if_missing" | "missing" => Ok(Self::IfMissing),
            other => Err(SampleError::Config(format!(
                "unknown pull policy '{other}', expected 'always' or 'if-missing'"
            ))),
        }
    }
}

/// Settings for starting the emulator container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// Image name without tag.
    pub image: String,
    /// Image tag.
    pub tag: String,
    /// Container port PGAdapter listens on.
    pub container_port: u16,
    /// Pull policy applied before start.
    pub pull_policy: PullPolicy,
    /// How long to wait for the mapped port to accept connections.
    pub startup_timeout: Duration,
}

impl EmulatorConfig {
    /// Full image reference, `name:tag`.
    #[must_use]
    pub fn image_reference(&self) -> String {
        format!("{}:{}", self.image, self.tag)
    }
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            image: PGADAPTER_EMULATOR_IMAGE.to_owned(),
            tag: PGADAPTER_EMULATOR_TAG.to_owned(),
            container_port: PGADAPTER_PORT,
            pull_policy: PullPolicy::Always,
            startup_timeout: DEFAULT_STARTUP_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_pulls_latest_emulator_image() {
        let config = EmulatorConfig::default();

        assert_eq!(
            config.image_reference(),
            "gcr.io/cloud-spanner-pg-adapter/pgadapter-emulator:latest"
        );
        assert_eq!(config.container_port, 5432);
        assert_eq!(config.pull_policy, PullPolicy::Always);
    }

    #[test]
    fn test_pull_policy_parses_known_values() {
        assert_eq!("always".parse::<PullPolicy>().unwrap(), PullPolicy::Always);
        assert_eq!(" ALWAYS ".parse::<PullPolicy>().unwrap(), PullPolicy::Always);
        assert_eq!(
            "if-missing".parse::<PullPolicy>().unwrap(),
            PullPolicy::IfMissing
        );
        assert_eq!(
            "if_missing".parse::<PullPolicy>().unwrap(),
            PullPolicy::IfMissing
        );
    }

    #[test]
    fn test_pull_policy_rejects_unknown_value() {
        match "never".parse::<PullPolicy>() {
            Err(SampleError::Config(msg)) => assert!(msg.contains("'never'")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_pull_policy_display_round_trips() {
        for policy in [PullPolicy::Always, PullPolicy::IfMissing] {
            assert_eq!(policy.to_string().parse::<PullPolicy>().unwrap(), policy);
        }
    }
}
