use crate::core::{Outcome, PerformCall, SafeCallable};

/// Construct-and-invoke helpers, available on every [`PerformCall`] type.
///
/// ```
/// use service_object::{PerformCall, ServiceBase, ServiceError};
///
/// struct Greet;
///
/// impl PerformCall for Greet {
///     type Args = String;
///     type Output = String;
///     type Error = ServiceError;
///
///     fn perform_call(name: &String) -> Result<String, ServiceError> {
///         Ok(format!("hello {name}"))
///     }
/// }
///
/// let outcome = Greet::call("ada".to_string());
/// assert_eq!(outcome.value().map(String::as_str), Some("hello ada"));
/// assert_eq!(Greet::try_call("bob".to_string()).unwrap(), "hello bob");
/// ```
pub trait ServiceBase: PerformCall + Sized {
    fn instance(args: Self::Args) -> SafeCallable<Self> {
        SafeCallable::new(args)
    }

    /// Safe call: never fails, the outcome carries success or failure.
    fn call(args: Self::Args) -> Outcome<Self::Output, Self::Error> {
        Self::instance(args).call()
    }

    /// Bang call: the error from `perform_call` propagates to the caller.
    fn try_call(args: Self::Args) -> std::result::Result<Self::Output, Self::Error> {
        Self::instance(args).try_call()
    }
}

impl<S: PerformCall> ServiceBase for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ServiceError;

    #[derive(Debug, Clone, PartialEq)]
    struct Transfer {
        from: String,
        to: String,
        cents: u64,
    }

    struct Echo;

    impl PerformCall for Echo {
        type Args = Transfer;
        type Output = Transfer;
        type Error = ServiceError;

        fn perform_call(args: &Transfer) -> Result<Transfer, ServiceError> {
            Ok(args.clone())
        }
    }

    fn transfer() -> Transfer {
        Transfer {
            from: "alice".to_string(),
            to: "bob".to_string(),
            cents: 1250,
        }
    }

    #[test]
    fn test_call_forwards_structured_args() {
        assert_eq!(Echo::call(transfer()).into_value(), Some(transfer()));
    }

    #[test]
    fn test_try_call_forwards_structured_args() {
        assert_eq!(Echo::try_call(transfer()).unwrap(), transfer());
    }

    #[test]
    fn test_instance_holds_args() {
        let instance = Echo::instance(transfer());
        assert_eq!(instance.args().cents, 1250);
    }
}
