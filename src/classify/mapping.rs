use crate::classify::codes::BusinessCode;
use crate::classify::{Classification, Kind};

pub const HTTP_OK: u32 = 200;
pub const HTTP_INTERNAL_SERVER_ERROR: u32 = 500;

/// HTTP status used when only the kind survived a boundary.
pub fn kind_to_http(kind: Kind) -> u32 {
    match kind {
        Kind::Ok => HTTP_OK,
        Kind::Cancelled | Kind::DeadlineExceeded => 408,
        Kind::Unknown | Kind::Internal | Kind::Aborted => HTTP_INTERNAL_SERVER_ERROR,
        Kind::InvalidArgument => 400,
        Kind::NotFound => 404,
        Kind::AlreadyExists => 409,
        Kind::PermissionDenied => 403,
        Kind::ResourceExhausted | Kind::DataLoss => 410,
        Kind::FailedPrecondition | Kind::OutOfRange => 412,
        Kind::Unimplemented => 501,
        Kind::Unavailable => 503,
        Kind::Unauthenticated => 401,
    }
}

/// Reserved business code for kinds that carry one by default.
pub fn kind_to_business_code(kind: Kind) -> BusinessCode {
    match kind {
        Kind::InvalidArgument => BusinessCode::BAD_REQUEST,
        Kind::DeadlineExceeded => BusinessCode::TIMEOUT,
        Kind::NotFound => BusinessCode::NOT_FOUND,
        Kind::AlreadyExists => BusinessCode::CONFLICT,
        Kind::PermissionDenied => BusinessCode::FORBIDDEN,
        Kind::ResourceExhausted => BusinessCode::RESOURCE_EXHAUSTED,
        Kind::FailedPrecondition => BusinessCode::PRECONDITION_FAILED,
        Kind::Unimplemented => BusinessCode::NOT_IMPLEMENTED,
        Kind::Internal | Kind::Aborted => BusinessCode::INTERNAL_SERVER_ERROR,
        Kind::Unavailable => BusinessCode::SERVICE_UNAVAILABLE,
        Kind::Unauthenticated => BusinessCode::UNAUTHORIZED,
        Kind::Ok | Kind::Cancelled | Kind::Unknown | Kind::OutOfRange | Kind::DataLoss => {
            BusinessCode::NONE
        }
    }
}

/// The `(kind, http_status, business_code)` triple a kind gets by default.
pub fn canonical(kind: Kind) -> Classification {
    Classification {
        kind,
        http_status: kind_to_http(kind),
        business_code: kind_to_business_code(kind),
    }
}

/// Reason phrase for an HTTP status, empty when the status is not standard.
pub fn status_text(http_status: u32) -> &'static str {
    u16::try_from(http_status)
        .ok()
        .and_then(|code| http::StatusCode::from_u16(code).ok())
        .and_then(|status| status.canonical_reason())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn kind_to_http_covers_canonical_kinds() {
        assert_eq!(kind_to_http(Kind::InvalidArgument), 400);
        assert_eq!(kind_to_http(Kind::NotFound), 404);
        assert_eq!(kind_to_http(Kind::AlreadyExists), 409);
        assert_eq!(kind_to_http(Kind::PermissionDenied), 403);
        assert_eq!(kind_to_http(Kind::FailedPrecondition), 412);
        assert_eq!(kind_to_http(Kind::Unimplemented), 501);
        assert_eq!(kind_to_http(Kind::Internal), 500);
        assert_eq!(kind_to_http(Kind::Unavailable), 503);
        assert_eq!(kind_to_http(Kind::Unauthenticated), 401);
        assert_eq!(kind_to_http(Kind::DeadlineExceeded), 408);
        assert_eq!(kind_to_http(Kind::ResourceExhausted), 410);
        assert_eq!(kind_to_http(Kind::Aborted), 500);
        assert_eq!(kind_to_http(Kind::Ok), 200);
        assert_eq!(kind_to_http(Kind::Unknown), 500);
    }

    #[test]
    fn no_kind_maps_to_zero_status() {
        for kind in Kind::iter() {
            assert_ne!(kind_to_http(kind), 0, "{kind} has no http status");
            assert!(!status_text(kind_to_http(kind)).is_empty());
        }
    }

    #[test]
    fn canonical_triples_pair_status_with_reserved_code() {
        let nf = canonical(Kind::NotFound);
        assert_eq!(nf.http_status, 404);
        assert_eq!(nf.business_code, BusinessCode::NOT_FOUND);

        let aborted = canonical(Kind::Aborted);
        assert_eq!(aborted.http_status, 500);
        assert_eq!(aborted.business_code, BusinessCode::INTERNAL_SERVER_ERROR);

        assert_eq!(canonical(Kind::Ok).business_code, BusinessCode::NONE);
    }

    #[test]
    fn status_text_uses_reason_phrase() {
        assert_eq!(status_text(404), "Not Found");
        assert_eq!(status_text(409), "Conflict");
        assert_eq!(status_text(599), "");
        assert_eq!(status_text(u32::MAX), "");
    }
}
