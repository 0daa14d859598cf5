use crate::chain::{Error, Location};
use crate::classify::codes::BusinessCode;
use crate::classify::mapping::{self, HTTP_OK};
use crate::classify::{Classification, Classified, Kind, is_business_code_error, kind_of};

/// A classified error with no message and no chain below it.
#[track_caller]
pub fn new_classified(kind: Kind, http_status: u32, business_code: impl Into<BusinessCode>) -> Error {
    new_classified_msg(kind, http_status, business_code, String::new())
}

#[track_caller]
pub fn new_classified_msg(
    kind: Kind,
    http_status: u32,
    business_code: impl Into<BusinessCode>,
    message: impl Into<String>,
) -> Error {
    let classification = Classification {
        kind,
        http_status,
        business_code: business_code.into(),
    };
    Error::from_failure(Classified::new(
        message.into(),
        None,
        classification,
        Location::caller(),
    ))
}

/// Soft outcome riding on a success transport status.
#[track_caller]
pub fn new_business_code_error(code: impl Into<BusinessCode>) -> Error {
    new_classified_msg(Kind::Ok, HTTP_OK, code, String::new())
}

#[track_caller]
pub fn new_business_code_errorf(code: impl Into<BusinessCode>, message: impl Into<String>) -> Error {
    new_classified_msg(Kind::Ok, HTTP_OK, code, message)
}

/// Fresh error of `kind` whose message ends with the HTTP reason phrase.
#[track_caller]
fn leaf(kind: Kind, message: String) -> Error {
    let classification = mapping::canonical(kind);
    let reason = mapping::status_text(classification.http_status);
    let message = match (message.is_empty(), reason.is_empty()) {
        (_, true) => message,
        (true, false) => reason.to_string(),
        (false, false) => format!("{message} {reason}"),
    };
    Error::from_failure(Classified::new(
        message,
        None,
        classification,
        Location::caller(),
    ))
}

/// Reclassifies `wrapped` as `kind`, keeping it as context below the new link.
#[track_caller]
fn reclassify(kind: Kind, wrapped: Error, message: String, business_code: BusinessCode) -> Error {
    let classification = Classification {
        business_code,
        ..mapping::canonical(kind)
    };
    Error::from_failure(Classified::new(
        message,
        Some(wrapped),
        classification,
        Location::caller(),
    ))
}

macro_rules! kind_constructors {
    ($( $kind:ident => $leaf:ident, $new:ident, $is:ident; )*) => {
        $(
            #[doc = concat!("A fresh `", stringify!($kind), "` error; the message gets the HTTP reason phrase appended.")]
            #[track_caller]
            pub fn $leaf(message: impl Into<String>) -> Error {
                leaf(Kind::$kind, message.into())
            }

            #[doc = concat!("Reclassifies `wrapped` as `", stringify!($kind), "`.")]
            #[track_caller]
            pub fn $new(wrapped: impl Into<Error>, message: impl Into<String>) -> Error {
                reclassify(
                    Kind::$kind,
                    wrapped.into(),
                    message.into(),
                    mapping::kind_to_business_code(Kind::$kind),
                )
            }

            pub fn $is<'a>(err: impl Into<Option<&'a Error>>) -> bool {
                kind_of(err) == Some(Kind::$kind)
            }
        )*
    };
}

kind_constructors! {
    InvalidArgument => not_valid, new_not_valid, is_not_valid;
    NotFound => not_found, new_not_found, is_not_found;
    AlreadyExists => already_exists, new_already_exists, is_already_exists;
    PermissionDenied => forbidden, new_forbidden, is_forbidden;
    FailedPrecondition => failed_precondition, new_failed_precondition, is_failed_precondition;
    Aborted => aborted, new_aborted, is_aborted;
    Unimplemented => not_implemented, new_not_implemented, is_not_implemented;
    Unavailable => unavailable, new_unavailable, is_unavailable;
    Unauthenticated => unauthorized, new_unauthorized, is_unauthorized;
    DeadlineExceeded => timeout, new_timeout, is_timeout;
    ResourceExhausted => resource_exhausted, new_resource_exhausted, is_resource_exhausted;
}

/// A fresh `Internal` error; the message gets the HTTP reason phrase appended.
#[track_caller]
pub fn internal(message: impl Into<String>) -> Error {
    leaf(Kind::Internal, message.into())
}

/// Reclassifies `wrapped` as `Internal`.
///
/// A `wrapped` error already carrying [`BusinessCode::DATASTORE`] keeps that
/// code instead of the generic internal one.
#[track_caller]
pub fn new_internal(wrapped: impl Into<Error>, message: impl Into<String>) -> Error {
    let wrapped = wrapped.into();
    let business_code = if is_business_code_error(&wrapped, BusinessCode::DATASTORE) {
        BusinessCode::DATASTORE
    } else {
        mapping::kind_to_business_code(Kind::Internal)
    };
    reclassify(Kind::Internal, wrapped, message.into(), business_code)
}

pub fn is_internal<'a>(err: impl Into<Option<&'a Error>>) -> bool {
    kind_of(err) == Some(Kind::Internal)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::chain::annotated::{annotate, new};

    #[test]
    fn not_found_formats_message_and_classifies() {
        let err = crate::not_found!("x: {}", "y");
        assert!(is_not_found(&err));
        assert!(!is_forbidden(&err));
        assert!(err.to_string().contains("x: y"));
        assert!(err.to_string().ends_with(" Not Found"));
        assert_eq!(err.http_status(), Some(404));
        assert_eq!(err.business_code(), Some(BusinessCode::NOT_FOUND));
    }

    #[test]
    fn empty_message_is_just_the_reason_phrase() {
        assert_eq!(already_exists("").to_string(), "Conflict");
        assert_eq!(crate::unauthorized!().to_string(), "Unauthorized");
    }

    #[test]
    fn every_leaf_constructor_matches_its_predicate() {
        let cases: [(Error, fn(&Error) -> bool); 12] = [
            (not_valid("a"), |e| is_not_valid(e)),
            (not_found("a"), |e| is_not_found(e)),
            (already_exists("a"), |e| is_already_exists(e)),
            (forbidden("a"), |e| is_forbidden(e)),
            (failed_precondition("a"), |e| is_failed_precondition(e)),
            (aborted("a"), |e| is_aborted(e)),
            (not_implemented("a"), |e| is_not_implemented(e)),
            (internal("a"), |e| is_internal(e)),
            (unavailable("a"), |e| is_unavailable(e)),
            (unauthorized("a"), |e| is_unauthorized(e)),
            (timeout("a"), |e| is_timeout(e)),
            (resource_exhausted("a"), |e| is_resource_exhausted(e)),
        ];
        for (err, predicate) in &cases {
            assert!(predicate(err), "predicate failed for {err}");
            assert!(predicate(&annotate(err.clone(), "ctx")));
        }
    }

    #[test]
    fn new_kind_wraps_without_reason_suffix() {
        let low = new("unique constraint violated");
        let err = new_already_exists(low, "duplicate email");
        assert!(is_already_exists(&err));
        assert_eq!(
            err.to_string(),
            "duplicate email: unique constraint violated"
        );
        assert_eq!(err.stack_trace().len(), 2);
    }

    #[test]
    fn new_internal_preserves_datastore_code() {
        let db = new_classified_msg(
            Kind::Internal,
            500,
            BusinessCode::DATASTORE,
            "datastore error",
        );
        let err = new_internal(annotate(db, "query"), "db failed");
        assert!(is_internal(&err));
        assert_eq!(err.business_code(), Some(BusinessCode::DATASTORE));
    }

    #[test]
    fn new_internal_defaults_to_generic_code() {
        let err = new_internal(new("boom"), "db failed");
        assert_eq!(
            err.business_code(),
            Some(BusinessCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[test]
    fn aborted_reports_internal_status() {
        let c = aborted("tx").classification().unwrap();
        assert_eq!(c.kind, Kind::Aborted);
        assert_eq!(c.http_status, 500);
        assert_eq!(c.business_code, BusinessCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn business_code_errorf_keeps_message() {
        let err = new_business_code_errorf(10_086_u32, "quota reached");
        assert_eq!(err.to_string(), "quota reached");
        assert_eq!(err.kind(), Some(Kind::Ok));
        assert_eq!(err.http_status(), Some(200));
    }
}
