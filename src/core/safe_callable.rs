use crate::core::{Callable, Outcome, PerformCall};
use crate::utils::error::ServiceError;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// A [`Callable`] with a non-raising `call`.
///
/// `call` runs the bang call inside a single failure boundary. Errors come
/// back as `Outcome::Failure` exactly as `perform_call` produced them, and a
/// panic unwinding out of `perform_call` is turned into
/// [`ServiceError::Panicked`]. Nothing is retried.
pub struct SafeCallable<S: PerformCall> {
    inner: Callable<S>,
}

impl<S: PerformCall> SafeCallable<S> {
    pub fn new(args: S::Args) -> Self {
        Self {
            inner: Callable::new(args),
        }
    }

    pub fn args(&self) -> &S::Args {
        self.inner.args()
    }

    pub fn into_args(self) -> S::Args {
        self.inner.into_args()
    }

    pub fn try_call(&self) -> std::result::Result<S::Output, S::Error> {
        self.inner.try_call()
    }

    /// Captured panics still go through the installed panic hook first, so
    /// the default hook prints its `thread '…' panicked at …` line to stderr.
    pub fn call(&self) -> Outcome<S::Output, S::Error> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.inner.try_call())) {
            Ok(Ok(value)) => {
                tracing::debug!(service = S::name(), "call succeeded");
                Outcome::Success { value }
            }
            Ok(Err(error)) => {
                tracing::warn!(service = S::name(), error = %error, "call failed");
                Outcome::Failure { error }
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(service = S::name(), %message, "call panicked");
                Outcome::Failure {
                    error: ServiceError::Panicked { message }.into(),
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl<S: PerformCall> From<Callable<S>> for SafeCallable<S> {
    fn from(inner: Callable<S>) -> Self {
        Self { inner }
    }
}

impl<S: PerformCall> Default for SafeCallable<S>
where
    S::Args: Default,
{
    fn default() -> Self {
        Self {
            inner: Callable::default(),
        }
    }
}

impl<S: PerformCall> fmt::Debug for SafeCallable<S>
where
    S::Args: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeCallable")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Halve;

    impl PerformCall for Halve {
        type Args = u32;
        type Output = u32;
        type Error = ServiceError;

        fn perform_call(args: &u32) -> Result<u32, ServiceError> {
            if args % 2 == 0 {
                Ok(args / 2)
            } else {
                Err(ServiceError::failed(format!("{args} is odd")))
            }
        }
    }

    struct Boom;

    impl PerformCall for Boom {
        type Args = String;
        type Output = ();
        type Error = anyhow::Error;

        fn perform_call(args: &String) -> anyhow::Result<()> {
            panic!("boom: {args}");
        }
    }

    #[test]
    fn test_call_wraps_value_in_success() {
        let outcome = SafeCallable::<Halve>::new(8).call();
        assert!(outcome.is_success());
        assert_eq!(outcome.into_value(), Some(4));
    }

    #[test]
    fn test_call_captures_error_unchanged() {
        let outcome = SafeCallable::<Halve>::new(3).call();
        assert!(!outcome.is_success());
        match outcome {
            Outcome::Failure {
                error: ServiceError::Failed { message },
            } => assert_eq!(message, "3 is odd"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_try_call_still_propagates() {
        let err = SafeCallable::<Halve>::new(5).try_call().unwrap_err();
        assert_eq!(err.to_string(), "5 is odd");
    }

    #[test]
    fn test_call_captures_panic() {
        let outcome = SafeCallable::<Boom>::new("fuse".to_string()).call();
        let error = outcome.into_error().expect("panic should be captured");
        match error.downcast_ref::<ServiceError>() {
            Some(ServiceError::Panicked { message }) => assert_eq!(message, "boom: fuse"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_callable_keeps_args() {
        let safe: SafeCallable<Halve> = Callable::new(10).into();
        assert_eq!(*safe.args(), 10);
        assert_eq!(safe.into_args(), 10);
    }
}
