use std::fmt;

use crate::chain::{Causer, Error, Failure, Location, Locationer, Wrapper};

/// One link of an annotation chain.
///
/// Links are never mutated after construction; annotating creates a new link
/// that owns the previous one.
#[derive(Debug)]
pub struct Annotated {
    message: String,
    previous: Option<Error>,
    cause: Option<Error>,
    location: Location,
}

impl Annotated {
    pub(crate) fn link(
        message: String,
        previous: Option<Error>,
        cause: Option<Error>,
        location: Location,
    ) -> Self {
        Self {
            message,
            previous,
            cause,
            location,
        }
    }

    pub fn previous(&self) -> Option<&Error> {
        self.previous.as_ref()
    }

    /// Picks what this link renders after its own message.
    ///
    /// A cause that differs from the cause of `previous` is surfaced in place
    /// of the previous text; otherwise the previous link is rendered.
    fn next_for_render(&self) -> Option<&Error> {
        match (&self.cause, &self.previous) {
            (Some(cause), previous)
                if !previous.as_ref().is_some_and(|prev| prev.cause().same_as(cause)) =>
            {
                Some(cause)
            }
            (_, previous) => previous.as_ref(),
        }
    }
}

impl fmt::Display for Annotated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.next_for_render() {
            None => f.write_str(&self.message),
            Some(next) if self.message.is_empty() => write!(f, "{next}"),
            Some(next) => write!(f, "{}: {next}", self.message),
        }
    }
}

impl Causer for Annotated {
    fn cause(&self) -> Option<&Error> {
        self.cause.as_ref()
    }
}

impl Wrapper for Annotated {
    fn message(&self) -> &str {
        &self.message
    }

    fn underlying(&self) -> Option<&Error> {
        self.previous.as_ref()
    }
}

impl Locationer for Annotated {
    fn location(&self) -> Option<Location> {
        Some(self.location)
    }
}

impl Failure for Annotated {
    fn as_causer(&self) -> Option<&dyn Causer> {
        Some(self)
    }

    fn as_wrapper(&self) -> Option<&dyn Wrapper> {
        Some(self)
    }

    fn as_locationer(&self) -> Option<&dyn Locationer> {
        Some(self)
    }
}

/// A fresh single-link chain with no cause.
#[track_caller]
pub fn new(message: impl Into<String>) -> Error {
    Error::from_failure(Annotated::link(
        message.into(),
        None,
        None,
        Location::caller(),
    ))
}

/// Adds context to `other` while keeping its cause.
#[track_caller]
pub fn annotate(other: impl Into<Error>, message: impl Into<String>) -> Error {
    let other = other.into();
    let cause = cause(&other);
    Error::from_failure(Annotated::link(
        message.into(),
        Some(other),
        Some(cause),
        Location::caller(),
    ))
}

/// Replaces the cause of `other` with `new_cause`, keeping `other` as context.
#[track_caller]
pub fn wrap(other: impl Into<Error>, new_cause: impl Into<Error>) -> Error {
    Error::from_failure(Annotated::link(
        String::new(),
        Some(other.into()),
        Some(new_cause.into()),
        Location::caller(),
    ))
}

/// [`wrap`] that also records a message on the new link.
#[track_caller]
pub fn wrapf(
    other: impl Into<Error>,
    new_cause: impl Into<Error>,
    message: impl Into<String>,
) -> Error {
    Error::from_failure(Annotated::link(
        message.into(),
        Some(other.into()),
        Some(new_cause.into()),
        Location::caller(),
    ))
}

/// The designated root error of `err`.
///
/// Follows attached causes until reaching a value that names no other cause,
/// so `cause(&cause(e))` is the same error as `cause(e)`. Values without the
/// cause capability are their own cause.
pub fn cause(err: &Error) -> Error {
    let mut current = err.clone();
    while let Some(next) = current.failure().as_causer().and_then(Causer::cause) {
        if next.same_as(&current) {
            break;
        }
        let next = next.clone();
        current = next;
    }
    current
}
