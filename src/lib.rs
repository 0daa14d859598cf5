#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod boundary;
pub mod chain;
pub mod classify;
pub mod error;
pub mod i18n;
mod macros;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use boundary::datastore::{DATASTORE_MESSAGE, DatastoreFailure, classify_datastore};
pub use boundary::http::{
    HttpBody, HttpReply, OK_CODE, reply, reply_for_error, reply_for_error_with, reply_ok,
    reply_with,
};
pub use boundary::rpc::{
    BUSINESS_CODE_TYPE_URL, RpcStatus, StatusDetail, from_rpc_result, from_rpc_status,
    to_rpc_result, to_rpc_status,
};
pub use chain::annotated::{Annotated, annotate, cause, new, wrap, wrapf};
pub use chain::stack::{ResultExt, error_stack, stack_trace};
pub use chain::{Causer, Error, Failure, Foreign, Location, Locationer, Wrapper};
pub use classify::codes::{BusinessCode, ReservedCode};
pub use classify::constructors::{
    aborted, already_exists, failed_precondition, forbidden, internal, is_aborted,
    is_already_exists, is_failed_precondition, is_forbidden, is_internal, is_not_found,
    is_not_implemented, is_not_valid, is_resource_exhausted, is_timeout, is_unauthorized,
    is_unavailable, new_aborted, new_already_exists, new_business_code_error,
    new_business_code_errorf, new_classified, new_classified_msg, new_failed_precondition,
    new_forbidden, new_internal, new_not_found, new_not_implemented, new_not_valid,
    new_resource_exhausted, new_timeout, new_unauthorized, new_unavailable, not_found,
    not_implemented, not_valid, resource_exhausted, timeout, unauthorized, unavailable,
};
pub use classify::mapping::{canonical, kind_to_business_code, kind_to_http, status_text};
pub use classify::{
    Classification, Classified, Kind, classification_of, is_any_business_code_error,
    is_business_code_error, kind_of,
};
pub use error::ParseError;
pub use i18n::catalog::{Catalog, Registry, TransInfo, default_translations, translate};
pub use i18n::{LANGUAGE_HEADER, Locale};
