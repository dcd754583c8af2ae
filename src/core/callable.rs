use crate::core::PerformCall;
use std::fmt;

/// Holds the arguments of one service invocation and runs the bang call.
pub struct Callable<S: PerformCall> {
    args: S::Args,
}

impl<S: PerformCall> Callable<S> {
    pub fn new(args: S::Args) -> Self {
        Self { args }
    }

    pub fn args(&self) -> &S::Args {
        &self.args
    }

    pub fn into_args(self) -> S::Args {
        self.args
    }

    /// Runs `perform_call` and hands back its result untouched.
    pub fn try_call(&self) -> std::result::Result<S::Output, S::Error> {
        tracing::debug!(service = S::name(), "performing call");
        S::perform_call(&self.args)
    }
}

/// Builds an instance with the "no arguments" value, `()` for most services.
impl<S: PerformCall> Default for Callable<S>
where
    S::Args: Default,
{
    fn default() -> Self {
        Self::new(S::Args::default())
    }
}

impl<S: PerformCall> Clone for Callable<S>
where
    S::Args: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.args.clone())
    }
}

impl<S: PerformCall> fmt::Debug for Callable<S>
where
    S::Args: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("service", &S::name())
            .field("args", &self.args)
            .finish()
    }
}
