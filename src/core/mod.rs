pub mod callable;
pub mod safe_callable;
pub mod service;

pub use crate::domain::model::Outcome;
pub use crate::domain::ports::PerformCall;
pub use crate::utils::error::Result;
pub use callable::Callable;
pub use safe_callable::SafeCallable;
pub use service::ServiceBase;
