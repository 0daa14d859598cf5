use serde::{Deserialize, Serialize};

/// Organization-wide reserved business codes.
///
/// Standard codes are `12_000_000` plus the numeric value of the matching
/// [`Kind`](crate::Kind). Every other non-zero value is free for callers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[repr(u32)]
pub enum ReservedCode {
    BadRequest = 12_000_003,
    Timeout = 12_000_004,
    NotFound = 12_000_005,
    Conflict = 12_000_006,
    Forbidden = 12_000_007,
    ResourceExhausted = 12_000_008,
    PreconditionFailed = 12_000_009,
    NotImplemented = 12_000_012,
    InternalServerError = 12_000_013,
    ServiceUnavailable = 12_000_014,
    Unauthorized = 12_000_016,
    /// Failures raised by the datastore layer. Survives reclassification as
    /// internal.
    Datastore = 1_200_001_301,
}

impl ReservedCode {
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Fine-grained numeric code layered under the transport status.
///
/// `0` means "no business code".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessCode(u32);

impl BusinessCode {
    pub const NONE: Self = Self(0);
    pub const BAD_REQUEST: Self = Self(ReservedCode::BadRequest as u32);
    pub const TIMEOUT: Self = Self(ReservedCode::Timeout as u32);
    pub const NOT_FOUND: Self = Self(ReservedCode::NotFound as u32);
    pub const CONFLICT: Self = Self(ReservedCode::Conflict as u32);
    pub const FORBIDDEN: Self = Self(ReservedCode::Forbidden as u32);
    pub const RESOURCE_EXHAUSTED: Self = Self(ReservedCode::ResourceExhausted as u32);
    pub const PRECONDITION_FAILED: Self = Self(ReservedCode::PreconditionFailed as u32);
    pub const NOT_IMPLEMENTED: Self = Self(ReservedCode::NotImplemented as u32);
    pub const INTERNAL_SERVER_ERROR: Self = Self(ReservedCode::InternalServerError as u32);
    pub const SERVICE_UNAVAILABLE: Self = Self(ReservedCode::ServiceUnavailable as u32);
    pub const UNAUTHORIZED: Self = Self(ReservedCode::Unauthorized as u32);
    pub const DATASTORE: Self = Self(ReservedCode::Datastore as u32);

    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// The reserved name for this code, if it is one of the standard codes.
    pub fn reserved(self) -> Option<ReservedCode> {
        use strum::IntoEnumIterator;
        ReservedCode::iter().find(|r| r.code() == self.0)
    }

    /// Translation key for this code: its decimal form.
    pub fn key(self) -> String {
        self.0.to_string()
    }
}

impl From<u32> for BusinessCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<ReservedCode> for BusinessCode {
    fn from(code: ReservedCode) -> Self {
        Self(code.code())
    }
}

impl std::fmt::Display for BusinessCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_codes_follow_kind_numbering() {
        assert_eq!(BusinessCode::BAD_REQUEST.get(), 12_000_003);
        assert_eq!(BusinessCode::NOT_FOUND.get(), 12_000_005);
        assert_eq!(BusinessCode::UNAUTHORIZED.get(), 12_000_016);
        assert_eq!(BusinessCode::DATASTORE.get(), 1_200_001_301);
    }

    #[test]
    fn reserved_lookup_distinguishes_custom_codes() {
        assert_eq!(
            BusinessCode::new(12_000_005).reserved(),
            Some(ReservedCode::NotFound)
        );
        assert_eq!(BusinessCode::new(10_086).reserved(), None);
        assert_eq!(BusinessCode::NONE.reserved(), None);
    }

    #[test]
    fn zero_means_no_code() {
        assert!(BusinessCode::NONE.is_none());
        assert!(BusinessCode::default().is_none());
        assert!(!BusinessCode::from(ReservedCode::Conflict).is_none());
        assert_eq!(BusinessCode::CONFLICT.key(), "12000006");
    }
}
