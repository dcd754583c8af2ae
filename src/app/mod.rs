pub mod runner;
pub mod services;

pub use runner::{BatchReport, CallMode, Invocation, InvocationReport, Runner, SERVICE_NAMES};
