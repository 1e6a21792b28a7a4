// ABOUTME: Local mirror of one remote fetch

/// The lifecycle of one fetched view: loading until the first answer,
/// then either data or a user-facing error string.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
}

impl<T> Resource<T> {
    /// A fetch in flight. This is also the `Default`.
    pub fn pending() -> Self {
        Self {
            data: None,
            error: None,
            loading: true,
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            loading: false,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(error.into()),
            loading: false,
        }
    }

    /// Settles a fetch result into the resource shape, stringifying
    /// the error for display.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ready(data),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::pending()
    }
}
