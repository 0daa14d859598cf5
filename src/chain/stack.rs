use crate::chain::Error;
use crate::chain::Location;
use crate::chain::annotated::{self, Annotated};

/// One line per link, originating error first.
///
/// Each line is `file:line: message`, followed by `: <cause>` when the link
/// designates a cause that the link below it does not already carry.
/// Trailing whitespace is trimmed, so a link with an empty message renders
/// as `file:line:` with no space after the colon.
pub fn stack_trace(err: &Error) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = Some(err.clone());

    while let Some(link) = current.take() {
        let mut line = String::new();
        if let Some(loc) = link.location().filter(|l| !l.file.is_empty()) {
            line.push_str(&format!("{loc}: "));
        }

        let failure = link.failure();
        if let Some(wrapper) = failure.as_wrapper() {
            let message = wrapper.message();
            line.push_str(message);

            let previous = wrapper.underlying().cloned();
            let cause = failure.as_causer().and_then(|c| c.cause()).cloned();
            if let Some(cause) = cause {
                let distinct = match &previous {
                    Some(prev) => !prev.same_as(&cause) && !prev.cause().same_as(&cause),
                    None => true,
                };
                if distinct {
                    if !message.is_empty() {
                        line.push_str(": ");
                    }
                    line.push_str(&cause.to_string());
                }
            }
            current = previous;
        } else {
            line.push_str(&link.to_string());
        }

        lines.push(line.trim_end().to_string());
    }

    lines.reverse();
    lines
}

/// [`stack_trace`] joined with newlines.
pub fn error_stack(err: &Error) -> String {
    stack_trace(err).join("\n")
}

/// Chain operations on fallible results. `Ok` values pass through untouched.
pub trait ResultExt<T> {
    #[track_caller]
    fn annotate<M>(self, message: M) -> Result<T, Error>
    where
        M: Into<String>;

    #[track_caller]
    fn with_annotation<M, F>(self, message: F) -> Result<T, Error>
    where
        F: FnOnce() -> M,
        M: Into<String>;

    #[track_caller]
    fn wrap_cause<C>(self, cause: C) -> Result<T, Error>
    where
        C: Into<Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    #[track_caller]
    fn annotate<M>(self, message: M) -> Result<T, Error>
    where
        M: Into<String>,
    {
        self.with_annotation(|| message)
    }

    #[track_caller]
    fn with_annotation<M, F>(self, message: F) -> Result<T, Error>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        let location = Location::caller();
        self.map_err(|err| {
            let previous = err.into();
            let cause = annotated::cause(&previous);
            Error::from_failure(Annotated::link(
                message().into(),
                Some(previous),
                Some(cause),
                location,
            ))
        })
    }

    #[track_caller]
    fn wrap_cause<C>(self, cause: C) -> Result<T, Error>
    where
        C: Into<Error>,
    {
        let location = Location::caller();
        self.map_err(|err| {
            Error::from_failure(Annotated::link(
                String::new(),
                Some(err.into()),
                Some(cause.into()),
                location,
            ))
        })
    }
}
