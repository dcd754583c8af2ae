//! Small services used by the CLI and as usage examples.

use crate::core::PerformCall;
use crate::utils::error::ServiceError;
use anyhow::Context;

/// Returns its argument unchanged.
pub struct EchoService;

impl PerformCall for EchoService {
    type Args = String;
    type Output = String;
    type Error = ServiceError;

    fn name() -> &'static str {
        "echo"
    }

    fn perform_call(args: &String) -> Result<String, ServiceError> {
        Ok(args.clone())
    }
}

/// Always fails with `Oops :/`.
pub struct FailingService;

impl PerformCall for FailingService {
    type Args = ();
    type Output = String;
    type Error = ServiceError;

    fn name() -> &'static str {
        "fail"
    }

    fn perform_call(_args: &()) -> Result<String, ServiceError> {
        Err(ServiceError::failed("Oops :/"))
    }
}

/// Never overrides `perform_call`.
pub struct UnimplementedService;

impl PerformCall for UnimplementedService {
    type Args = ();
    type Output = String;
    type Error = ServiceError;

    fn name() -> &'static str {
        "unimplemented"
    }
}

pub struct ParseNumberService;

impl PerformCall for ParseNumberService {
    type Args = String;
    type Output = i64;
    type Error = anyhow::Error;

    fn name() -> &'static str {
        "parse-number"
    }

    fn perform_call(args: &String) -> anyhow::Result<i64> {
        args.trim()
            .parse::<i64>()
            .with_context(|| format!("'{args}' is not an integer"))
    }
}

pub struct PanickingService;

impl PerformCall for PanickingService {
    type Args = String;
    type Output = String;
    type Error = ServiceError;

    fn name() -> &'static str {
        "panic"
    }

    fn perform_call(args: &String) -> Result<String, ServiceError> {
        panic!("panicked with '{args}'");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ServiceBase;

    #[test]
    fn test_parse_number_keeps_source_error() {
        let error = ParseNumberService::call("12x".to_string())
            .into_error()
            .expect("should fail");
        assert_eq!(error.to_string(), "'12x' is not an integer");
        assert!(error.downcast_ref::<std::num::ParseIntError>().is_some());
    }

    #[test]
    fn test_parse_number_trims_input() {
        assert_eq!(ParseNumberService::try_call(" 42 ".to_string()).unwrap(), 42);
    }

    #[test]
    fn test_unimplemented_uses_its_name() {
        match UnimplementedService::try_call(()) {
            Err(ServiceError::NotImplemented { service }) => assert_eq!(service, "unimplemented"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
