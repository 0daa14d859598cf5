pub mod annotated;
pub mod stack;

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::classify::Classification;

/// Source position recorded when a chain link is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

pub trait Causer {
    fn cause(&self) -> Option<&Error>;
}

pub trait Wrapper {
    fn message(&self) -> &str;
    fn underlying(&self) -> Option<&Error>;
}

pub trait Locationer {
    fn location(&self) -> Option<Location>;
}

/// Object-safe base of every value reachable through [`Error`]. Capability
/// accessors return `None` unless the concrete type opts in.
pub trait Failure: fmt::Display + fmt::Debug + Send + Sync + 'static {
    fn as_causer(&self) -> Option<&dyn Causer> {
        None
    }

    fn as_wrapper(&self) -> Option<&dyn Wrapper> {
        None
    }

    fn as_locationer(&self) -> Option<&dyn Locationer> {
        None
    }

    fn classification(&self) -> Option<&Classification> {
        None
    }

    fn as_std(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        None
    }
}

/// Shared handle to an error value. Cloning is a reference-count bump.
///
/// `{}` renders the message; `{:#}` renders the multi-line stack trace.
#[derive(Clone)]
pub struct Error(Arc<dyn Failure>);

impl Error {
    pub fn from_failure<F: Failure>(failure: F) -> Self {
        Self(Arc::new(failure))
    }

    pub fn failure(&self) -> &dyn Failure {
        &*self.0
    }

    pub fn cause(&self) -> Error {
        annotated::cause(self)
    }

    /// Message of this link alone, when the value is a chain link.
    pub fn message(&self) -> Option<&str> {
        self.0.as_wrapper().map(Wrapper::message)
    }

    pub fn underlying(&self) -> Option<&Error> {
        self.0.as_wrapper().and_then(Wrapper::underlying)
    }

    pub fn location(&self) -> Option<Location> {
        self.0.as_locationer().and_then(Locationer::location)
    }

    /// Classification of [`Error::cause`], ignoring every annotation above it.
    pub fn classification(&self) -> Option<Classification> {
        self.cause().0.classification().copied()
    }

    pub fn stack_trace(&self) -> Vec<String> {
        stack::stack_trace(self)
    }

    /// Two handles are the same error when they share an allocation, or when
    /// both are classified with equal kind, business code and own message.
    pub fn same_as(&self, other: &Error) -> bool {
        if std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0)) {
            return true;
        }
        match (self.0.classification(), other.0.classification()) {
            (Some(a), Some(b)) => {
                a.kind == b.kind
                    && a.business_code == b.business_code
                    && self.message() == other.message()
            }
            _ => false,
        }
    }

    /// Whether the cause of this error is `target`.
    pub fn is(&self, target: &Error) -> bool {
        self.cause().same_as(target)
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.as_std()?.downcast_ref::<E>()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&stack::error_stack(self));
        }
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

#[derive(Debug)]
pub struct Foreign(Box<dyn StdError + Send + Sync + 'static>);

impl fmt::Display for Foreign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl Failure for Foreign {
    fn as_std(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        Some(&*self.0)
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self::from_failure(Foreign(Box::new(err)))
    }
}

struct StdAdapter(Error);

impl fmt::Debug for StdAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for StdAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for StdAdapter {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let std = self.0.failure().as_std()?;
        Some(std)
    }
}

impl From<Error> for Box<dyn StdError + Send + Sync + 'static> {
    fn from(err: Error) -> Self {
        Box::new(StdAdapter(err))
    }
}
