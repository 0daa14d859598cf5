//! Formatting front-ends for the chain and classification constructors.
//!
//! Each macro expands at the call site, so the recorded location is the
//! macro invocation.

/// Creates a single-link chain from a format string.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::new(::std::format!($($arg)*))
    };
}

/// Annotates an error with a formatted message.
#[macro_export]
macro_rules! annotatef {
    ($err:expr, $($arg:tt)*) => {
        $crate::annotate($err, ::std::format!($($arg)*))
    };
}

/// Replaces the cause of an error and records a formatted message.
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $cause:expr, $($arg:tt)*) => {
        $crate::wrapf($err, $cause, ::std::format!($($arg)*))
    };
}

/// Creates an `Ok`-kind error carrying a business code and formatted message.
#[macro_export]
macro_rules! business_code_error {
    ($code:expr) => {
        $crate::new_business_code_error($code)
    };
    ($code:expr, $($arg:tt)*) => {
        $crate::new_business_code_errorf($code, ::std::format!($($arg)*))
    };
}

/// Formatted `InvalidArgument` error, see [`not_valid`](fn@crate::not_valid).
#[macro_export]
macro_rules! not_valid {
    () => {
        $crate::not_valid("")
    };
    ($($arg:tt)*) => {
        $crate::not_valid(::std::format!($($arg)*))
    };
}

/// Formatted `NotFound` error, see [`not_found`](fn@crate::not_found).
#[macro_export]
macro_rules! not_found {
    () => {
        $crate::not_found("")
    };
    ($($arg:tt)*) => {
        $crate::not_found(::std::format!($($arg)*))
    };
}

/// Formatted `AlreadyExists` error, see [`already_exists`](fn@crate::already_exists).
#[macro_export]
macro_rules! already_exists {
    () => {
        $crate::already_exists("")
    };
    ($($arg:tt)*) => {
        $crate::already_exists(::std::format!($($arg)*))
    };
}

/// Formatted `PermissionDenied` error, see [`forbidden`](fn@crate::forbidden).
#[macro_export]
macro_rules! forbidden {
    () => {
        $crate::forbidden("")
    };
    ($($arg:tt)*) => {
        $crate::forbidden(::std::format!($($arg)*))
    };
}

/// Formatted `FailedPrecondition` error, see [`failed_precondition`](fn@crate::failed_precondition).
#[macro_export]
macro_rules! failed_precondition {
    () => {
        $crate::failed_precondition("")
    };
    ($($arg:tt)*) => {
        $crate::failed_precondition(::std::format!($($arg)*))
    };
}

/// Formatted `Aborted` error, see [`aborted`](fn@crate::aborted).
#[macro_export]
macro_rules! aborted {
    () => {
        $crate::aborted("")
    };
    ($($arg:tt)*) => {
        $crate::aborted(::std::format!($($arg)*))
    };
}

/// Formatted `Unimplemented` error, see [`not_implemented`](fn@crate::not_implemented).
#[macro_export]
macro_rules! not_implemented {
    () => {
        $crate::not_implemented("")
    };
    ($($arg:tt)*) => {
        $crate::not_implemented(::std::format!($($arg)*))
    };
}

/// Formatted `Internal` error, see [`internal`](fn@crate::internal).
#[macro_export]
macro_rules! internal {
    () => {
        $crate::internal("")
    };
    ($($arg:tt)*) => {
        $crate::internal(::std::format!($($arg)*))
    };
}

/// Formatted `Unavailable` error, see [`unavailable`](fn@crate::unavailable).
#[macro_export]
macro_rules! unavailable {
    () => {
        $crate::unavailable("")
    };
    ($($arg:tt)*) => {
        $crate::unavailable(::std::format!($($arg)*))
    };
}

/// Formatted `Unauthenticated` error, see [`unauthorized`](fn@crate::unauthorized).
#[macro_export]
macro_rules! unauthorized {
    () => {
        $crate::unauthorized("")
    };
    ($($arg:tt)*) => {
        $crate::unauthorized(::std::format!($($arg)*))
    };
}

/// Formatted `DeadlineExceeded` error, see [`timeout`](fn@crate::timeout).
#[macro_export]
macro_rules! timeout {
    () => {
        $crate::timeout("")
    };
    ($($arg:tt)*) => {
        $crate::timeout(::std::format!($($arg)*))
    };
}

/// Formatted `ResourceExhausted` error, see [`resource_exhausted`](fn@crate::resource_exhausted).
#[macro_export]
macro_rules! resource_exhausted {
    () => {
        $crate::resource_exhausted("")
    };
    ($($arg:tt)*) => {
        $crate::resource_exhausted(::std::format!($($arg)*))
    };
}
