use serde::Serialize;

/// Outcome of a safe service call.
///
/// Exactly one variant is populated. `is_success()` is the discriminant:
/// true for `Success`, false for `Failure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T, E> {
    Success { value: T },
    Failure { error: E },
}

impl<T, E> Outcome<T, E> {
    pub fn success(value: T) -> Self {
        Self::Success { value }
    }

    pub fn failure(error: E) -> Self {
        Self::Failure { error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success { value } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Success { value } => Outcome::Success { value: f(value) },
            Self::Failure { error } => Outcome::Failure { error },
        }
    }

    pub fn map_error<G, F: FnOnce(E) -> G>(self, f: F) -> Outcome<T, G> {
        match self {
            Self::Success { value } => Outcome::Success { value },
            Self::Failure { error } => Outcome::Failure { error: f(error) },
        }
    }

    /// Turns the outcome back into a `Result`, e.g. to re-enter `?` chains.
    pub fn into_result(self) -> std::result::Result<T, E> {
        self.into()
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success { value },
            Err(error) => Self::Failure { error },
        }
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success { value } => Ok(value),
            Outcome::Failure { error } => Err(error),
        }
    }
}
