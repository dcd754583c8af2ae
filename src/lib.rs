//! Service objects: one unit of business logic behind a uniform call interface.
//!
//! Implement [`PerformCall`] for a type, then invoke it either through the
//! safe call, which returns an [`Outcome`], or the bang call, which returns
//! a `Result` for `?` propagation:
//!
//! ```
//! use service_object::{Outcome, PerformCall, ServiceBase, ServiceError};
//!
//! struct FailureService;
//!
//! impl PerformCall for FailureService {
//!     type Args = ();
//!     type Output = ();
//!     type Error = ServiceError;
//!
//!     fn perform_call(_args: &()) -> Result<(), ServiceError> {
//!         Err(ServiceError::failed("Oops :/"))
//!     }
//! }
//!
//! match FailureService::call(()) {
//!     Outcome::Failure { error } => assert_eq!(error.to_string(), "Oops :/"),
//!     Outcome::Success { .. } => unreachable!(),
//! }
//! assert!(FailureService::try_call(()).is_err());
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{BatchReport, CallMode, Invocation, InvocationReport, Runner};
pub use config::toml_config::RunnerConfig;
pub use core::{Callable, Outcome, PerformCall, SafeCallable, ServiceBase};
pub use utils::error::{Result, ServiceError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
