use crate::utils::error::ServiceError;
use std::fmt::Display;

/// The single unit of business logic behind a service object.
///
/// Implementors pick their argument, output and error types and override
/// [`PerformCall::perform_call`]. The default body fails with
/// [`ServiceError::NotImplemented`], so the error type has to be buildable
/// from a `ServiceError`; `ServiceError` itself and `anyhow::Error` both are.
pub trait PerformCall {
    type Args;
    type Output;
    type Error: From<ServiceError> + Display;

    /// Name used in logs and in the not-implemented error.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }

    fn perform_call(_args: &Self::Args) -> std::result::Result<Self::Output, Self::Error> {
        Err(ServiceError::not_implemented(Self::name()).into())
    }
}
