use serde::{Deserialize, Serialize};

use crate::chain::{Error, Location};
use crate::classify::codes::BusinessCode;
use crate::classify::constructors::{new_already_exists, new_not_found};
use crate::classify::mapping::HTTP_INTERNAL_SERVER_ERROR;
use crate::classify::{Classification, Classified, Kind};

/// Message of the link added to datastore failures without a finer kind.
pub const DATASTORE_MESSAGE: &str = "datastore error";

/// What a persistence layer reports about a failed operation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DatastoreFailure {
    RecordNotFound,
    DuplicateKey,
    Other,
}

/// Classifies a datastore error, keeping it below the new link.
///
/// `Other` failures become `Internal` with [`BusinessCode::DATASTORE`], which
/// [`new_internal`](crate::new_internal) keeps when wrapping further up.
#[track_caller]
pub fn classify_datastore(err: impl Into<Error>, failure: DatastoreFailure) -> Error {
    let err = err.into();
    match failure {
        DatastoreFailure::RecordNotFound => new_not_found(err, ""),
        DatastoreFailure::DuplicateKey => new_already_exists(err, ""),
        DatastoreFailure::Other => {
            tracing::debug!(error = %err, "datastore failure");
            let classification = Classification {
                kind: Kind::Internal,
                http_status: HTTP_INTERNAL_SERVER_ERROR,
                business_code: BusinessCode::DATASTORE,
            };
            Error::from_failure(Classified::new(
                DATASTORE_MESSAGE.to_string(),
                Some(err),
                classification,
                Location::caller(),
            ))
        }
    }
}
