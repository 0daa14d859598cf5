pub mod codes;
pub mod constructors;
pub mod mapping;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chain::annotated::{Annotated, cause};
use crate::chain::{Causer, Error, Failure, Location, Locationer, Wrapper};
use crate::classify::codes::BusinessCode;
use crate::error::ParseError;

/// Canonical semantic kind of a failure, numbered like the RPC status codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[repr(i32)]
pub enum Kind {
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl Kind {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Unmapped numeric codes become [`Kind::Unknown`].
    pub fn from_code(code: i32) -> Self {
        use strum::IntoEnumIterator;
        Self::iter()
            .find(|k| k.code() == code)
            .unwrap_or(Self::Unknown)
    }

    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        name.parse::<Self>().map_err(|_| ParseError::UnknownKind {
            name: name.to_string(),
        })
    }

    pub fn http_status(self) -> u32 {
        mapping::kind_to_http(self)
    }
}

/// The classification attached to exactly one link of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub kind: Kind,
    pub http_status: u32,
    pub business_code: BusinessCode,
}

impl Classification {
    /// A success transport status carrying only a business-level outcome.
    pub fn is_business_only(&self) -> bool {
        self.kind == Kind::Ok
            && self.http_status == mapping::HTTP_OK
            && !self.business_code.is_none()
    }

    /// Kind to emit on an outbound failure status. An `Ok` kind with a
    /// business code is reported as [`Kind::Unknown`].
    pub fn outbound_kind(&self) -> Kind {
        if self.kind == Kind::Ok && !self.business_code.is_none() {
            Kind::Unknown
        } else {
            self.kind
        }
    }

    /// Body-level code for HTTP replies: the business code when set, else
    /// the HTTP status.
    pub fn reply_code(&self) -> u32 {
        if self.business_code.is_none() {
            self.http_status
        } else {
            self.business_code.get()
        }
    }
}

/// A chain link that carries a [`Classification`].
#[derive(Debug)]
pub struct Classified {
    link: Annotated,
    classification: Classification,
}

impl Classified {
    pub(crate) fn new(
        message: String,
        previous: Option<Error>,
        classification: Classification,
        location: Location,
    ) -> Self {
        Self {
            link: Annotated::link(message, previous, None, location),
            classification,
        }
    }
}

impl fmt::Display for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.link, f)
    }
}

impl Failure for Classified {
    fn as_causer(&self) -> Option<&dyn Causer> {
        Some(&self.link)
    }

    fn as_wrapper(&self) -> Option<&dyn Wrapper> {
        Some(&self.link)
    }

    fn as_locationer(&self) -> Option<&dyn Locationer> {
        Some(&self.link)
    }

    fn classification(&self) -> Option<&Classification> {
        Some(&self.classification)
    }
}

/// Kind of the cause of `err`; `None` for unclassified errors or no error.
pub fn kind_of<'a>(err: impl Into<Option<&'a Error>>) -> Option<Kind> {
    classification_of(err).map(|c| c.kind)
}

pub fn classification_of<'a>(err: impl Into<Option<&'a Error>>) -> Option<Classification> {
    err.into().and_then(|e| cause(e).failure().classification().copied())
}

/// Whether the cause of `err` carries exactly `code`.
pub fn is_business_code_error<'a>(
    err: impl Into<Option<&'a Error>>,
    code: impl Into<BusinessCode>,
) -> bool {
    let code = code.into();
    classification_of(err).is_some_and(|c| c.business_code == code)
}

pub fn is_any_business_code_error<'a>(err: impl Into<Option<&'a Error>>) -> bool {
    classification_of(err).is_some_and(|c| c.is_business_only())
}

impl Error {
    pub fn kind(&self) -> Option<Kind> {
        kind_of(self)
    }

    pub fn http_status(&self) -> Option<u32> {
        classification_of(self).map(|c| c.http_status)
    }

    pub fn business_code(&self) -> Option<BusinessCode> {
        classification_of(self).map(|c| c.business_code)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::chain::annotated::{annotate, new, wrap};
    use crate::classify::constructors::{new_business_code_error, new_classified, not_found};

    #[test]
    fn kind_codes_roundtrip() {
        for kind in Kind::iter() {
            assert_eq!(Kind::from_code(kind.code()), kind);
        }
        assert_eq!(Kind::from_code(99), Kind::Unknown);
        assert_eq!(Kind::from_code(-1), Kind::Unknown);
    }

    #[test]
    fn kind_names_parse() {
        assert_eq!(Kind::from_name("NotFound").unwrap(), Kind::NotFound);
        assert_eq!(Kind::AlreadyExists.to_string(), "AlreadyExists");
        assert!(matches!(
            Kind::from_name("Teapot"),
            Err(ParseError::UnknownKind { .. })
        ));
    }

    #[test]
    fn classification_survives_any_annotation_depth() {
        let mut err = not_found("user 7");
        for depth in 0..10 {
            err = annotate(err, format!("layer {depth}"));
            assert_eq!(err.kind(), Some(Kind::NotFound));
            assert_eq!(err.business_code(), Some(BusinessCode::NOT_FOUND));
        }
    }

    #[test]
    fn unclassified_and_absent_errors_have_no_kind() {
        assert_eq!(kind_of(&new("plain")), None);
        assert_eq!(kind_of(None::<&Error>), None);
        assert!(!is_any_business_code_error(None::<&Error>));
        assert_eq!(Error::from(std::io::Error::other("x")).http_status(), None);
    }

    #[test]
    fn classification_is_read_from_cause_not_intermediate_links() {
        let classified = new_classified(Kind::PermissionDenied, 403, 7_u32);
        let err = annotate(wrap(classified, not_found("dir")), "listing");
        assert_eq!(err.kind(), Some(Kind::NotFound));
    }

    #[test]
    fn business_only_classification() {
        let err = new_business_code_error(10_086_u32);
        assert!(is_any_business_code_error(&err));
        assert!(is_business_code_error(&err, 10_086_u32));
        assert!(!is_business_code_error(&err, 10_087_u32));
        let c = err.classification().unwrap();
        assert_eq!(c.outbound_kind(), Kind::Unknown);
        assert_eq!(c.reply_code(), 10_086);
    }

    #[test]
    fn reply_code_prefers_business_code() {
        let none = Classification {
            kind: Kind::Internal,
            http_status: 500,
            business_code: BusinessCode::NONE,
        };
        assert_eq!(none.reply_code(), 500);
        assert!(!none.is_business_only());
        assert_eq!(none.outbound_kind(), Kind::Internal);
    }
}
