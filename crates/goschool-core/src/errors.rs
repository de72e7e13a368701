use std::fmt;

use anyhow::Error;

/// Broad category of a provisioning failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connecting to or querying the database failed.
    Database,
    /// The registration endpoint could not be used.
    Network,
    /// Reading or writing a local file failed.
    Io,
    /// Key generation, encoding or verification failed.
    Key,
    /// Operator input or configuration was unusable.
    Input,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Database => "database error",
            ErrorKind::Network => "network error",
            ErrorKind::Io => "io error",
            ErrorKind::Key => "key error",
            ErrorKind::Input => "input error",
            ErrorKind::Internal => "internal error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct ProvisionError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl ProvisionError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Database, err)
    }

    pub fn network<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Network, err)
    }

    pub fn io<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Io, err)
    }

    pub fn key<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Key, err)
    }

    pub fn input<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Input, err)
    }

    /// Adds a leading context line to the wrapped error, keeping the kind.
    pub fn context<C>(self, context: C) -> Self
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        Self {
            kind: self.kind,
            error: self.error.context(context),
        }
    }
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#}", self.kind, self.error)
    }
}

impl<E> From<E> for ProvisionError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        ProvisionError::internal(err)
    }
}
