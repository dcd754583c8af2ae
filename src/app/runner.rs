use crate::app::services::{
    EchoService, FailingService, PanickingService, ParseNumberService, UnimplementedService,
};
use crate::core::{Outcome, PerformCall, ServiceBase};
use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};

/// Names the runner can resolve.
pub const SERVICE_NAMES: &[&str] = &["echo", "fail", "unimplemented", "parse-number", "panic"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallMode {
    #[default]
    Safe,
    Bang,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation {
    pub service: String,
    #[serde(default)]
    pub args: Option<String>,
    #[serde(default)]
    pub mode: CallMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvocationReport {
    pub service: String,
    pub mode: CallMode,
    pub outcome: Outcome<serde_json::Value, String>,
}

impl InvocationReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn summary(&self) -> String {
        match &self.outcome {
            Outcome::Success { value } => format!("✅ {} -> {}", self.service, value),
            Outcome::Failure { error } => format!("❌ {} -> {}", self.service, error),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Runner {
    stop_on_error: bool,
}

impl Runner {
    pub fn new(stop_on_error: bool) -> Self {
        Self { stop_on_error }
    }

    /// Runs one invocation. In bang mode the service error is returned as `Err`.
    pub fn invoke(&self, invocation: &Invocation) -> Result<InvocationReport> {
        let args = invocation.args.clone().unwrap_or_default();
        let outcome = match invocation.service.as_str() {
            "echo" => run::<EchoService>(invocation.mode, args)?,
            "fail" => run::<FailingService>(invocation.mode, no_args(invocation))?,
            "unimplemented" => run::<UnimplementedService>(invocation.mode, no_args(invocation))?,
            "parse-number" => run::<ParseNumberService>(invocation.mode, args)?,
            "panic" => run::<PanickingService>(invocation.mode, args)?,
            other => {
                return Err(ServiceError::UnknownServiceError {
                    name: other.to_string(),
                })
            }
        };

        Ok(InvocationReport {
            service: invocation.service.clone(),
            mode: invocation.mode,
            outcome,
        })
    }

    /// Runs a batch in order. A bang-mode failure aborts the batch; a
    /// safe-mode failure only does so when `stop_on_error` is set. Reports of
    /// invocations that ran before the abort are kept.
    pub fn run_all(&self, invocations: &[Invocation]) -> BatchReport {
        let mut reports = Vec::with_capacity(invocations.len());

        for (index, invocation) in invocations.iter().enumerate() {
            tracing::info!(
                "▶️  [{}/{}] {} ({:?})",
                index + 1,
                invocations.len(),
                invocation.service,
                invocation.mode
            );
            let report = match self.invoke(invocation) {
                Ok(report) => report,
                Err(error) => {
                    tracing::warn!("Aborting batch at {}: {}", invocation.service, error);
                    return BatchReport {
                        reports,
                        error: Some(error),
                    };
                }
            };
            let failed = !report.is_success();
            reports.push(report);

            if failed && self.stop_on_error {
                tracing::warn!("Stopping batch after failed invocation of {}", invocation.service);
                break;
            }
        }

        BatchReport {
            reports,
            error: None,
        }
    }
}

/// Reports gathered by [`Runner::run_all`], plus the error that aborted the
/// batch, if any.
#[derive(Debug)]
pub struct BatchReport {
    pub reports: Vec<InvocationReport>,
    pub error: Option<ServiceError>,
}

impl BatchReport {
    pub fn is_aborted(&self) -> bool {
        self.error.is_some()
    }

    /// Drops the partial reports when the batch was aborted.
    pub fn into_result(self) -> Result<Vec<InvocationReport>> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.reports),
        }
    }
}

fn no_args(invocation: &Invocation) {
    if let Some(args) = &invocation.args {
        tracing::debug!("{} takes no arguments, discarding {:?}", invocation.service, args);
    }
}

fn run<S>(mode: CallMode, args: S::Args) -> Result<Outcome<serde_json::Value, String>>
where
    S: PerformCall,
    S::Output: Serialize,
    S::Error: Into<ServiceError>,
{
    match mode {
        CallMode::Safe => match S::call(args).map_error(|error| error.to_string()) {
            Outcome::Success { value } => Ok(Outcome::success(serde_json::to_value(value)?)),
            Outcome::Failure { error } => Ok(Outcome::failure(error)),
        },
        CallMode::Bang => {
            let value = S::try_call(args).map_err(Into::into)?;
            Ok(Outcome::success(serde_json::to_value(value)?))
        }
    }
}
