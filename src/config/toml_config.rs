use crate::app::runner::{Invocation, SERVICE_NAMES};
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A batch of service invocations described in TOML.
///
/// ```toml
/// [runner]
/// name = "smoke"
/// stop_on_error = true
///
/// [[invocations]]
/// service = "echo"
/// args = "hello ${USER}"
///
/// [[invocations]]
/// service = "fail"
/// mode = "bang"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub runner: Option<RunnerSection>,
    #[serde(default)]
    pub invocations: Vec<Invocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerSection {
    pub name: Option<String>,
    pub stop_on_error: Option<bool>,
}

impl RunnerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> &str {
        self.runner
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .unwrap_or("default")
    }

    pub fn stop_on_error(&self) -> bool {
        self.runner
            .as_ref()
            .and_then(|r| r.stop_on_error)
            .unwrap_or(false)
    }
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = self.runner.as_ref().and_then(|r| r.name.as_deref()) {
            validate_non_empty_string("runner.name", name)?;
        }

        if self.invocations.is_empty() {
            return Err(ServiceError::ConfigError {
                message: "At least one [[invocations]] entry is required".to_string(),
            });
        }

        for (index, invocation) in self.invocations.iter().enumerate() {
            validate_one_of(
                &format!("invocations[{}].service", index),
                &invocation.service,
                SERVICE_NAMES,
            )?;
        }

        Ok(())
    }
}
