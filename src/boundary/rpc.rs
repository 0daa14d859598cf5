use serde::{Deserialize, Serialize};

use crate::chain::{Error, Location};
use crate::classify::codes::BusinessCode;
use crate::classify::mapping::kind_to_http;
use crate::classify::{Classification, Classified, Kind};
use crate::error::ParseError;

/// Type URL of the structured detail that carries a business code.
pub const BUSINESS_CODE_TYPE_URL: &str = "type.googleapis.com/errors.BizErrorCode";

/// One structured detail attached to a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDetail {
    #[serde(rename = "@type")]
    pub type_url: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl StatusDetail {
    pub fn business_code(code: BusinessCode) -> Self {
        Self {
            type_url: BUSINESS_CODE_TYPE_URL.to_string(),
            value: serde_json::json!({ "code": code.get() }),
        }
    }

    /// The business code, if this detail has the business-code shape.
    pub fn as_business_code(&self) -> Option<BusinessCode> {
        if self.type_url != BUSINESS_CODE_TYPE_URL {
            return None;
        }
        self.value
            .get("code")
            .and_then(serde_json::Value::as_u64)
            .and_then(|code| u32::try_from(code).ok())
            .map(BusinessCode::new)
    }
}

/// Wire-level RPC status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcStatus {
    pub code: Kind,
    pub message: String,
    #[serde(default)]
    pub details: Vec<StatusDetail>,
}

impl RpcStatus {
    /// Builds a status from a raw numeric code; unmapped codes become
    /// [`Kind::Unknown`].
    pub fn from_raw(code: i32, message: impl Into<String>, details: Vec<StatusDetail>) -> Self {
        let kind = Kind::from_code(code);
        if kind == Kind::Unknown && code != Kind::Unknown.code() {
            tracing::warn!(code, "unmapped rpc status code, treating as Unknown");
        }
        Self {
            code: kind,
            message: message.into(),
            details,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ParseError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The first business code carried in the details.
    pub fn business_code(&self) -> Option<BusinessCode> {
        self.details.iter().find_map(StatusDetail::as_business_code)
    }
}

/// Outbound conversion of an error into an RPC status.
///
/// The kind comes from the cause of `err`; the message is the full rendered
/// chain. Unclassified errors are reported as [`Kind::Unknown`].
pub fn to_rpc_status(err: &Error) -> RpcStatus {
    let message = err.to_string();
    let Some(classification) = err.classification() else {
        tracing::debug!("unclassified error crossing rpc boundary");
        return RpcStatus {
            code: Kind::Unknown,
            message,
            details: Vec::new(),
        };
    };

    let details = if classification.business_code.is_none() {
        Vec::new()
    } else {
        vec![StatusDetail::business_code(classification.business_code)]
    };
    RpcStatus {
        code: classification.outbound_kind(),
        message,
        details,
    }
}

/// Inbound conversion of an RPC status into a classified error.
#[track_caller]
pub fn from_rpc_status(status: RpcStatus) -> Error {
    inbound(status, Location::caller())
}

fn inbound(status: RpcStatus, location: Location) -> Error {
    for detail in &status.details {
        if detail.as_business_code().is_none() {
            tracing::warn!(type_url = %detail.type_url, "ignoring unrecognized status detail");
        }
    }
    let classification = Classification {
        kind: status.code,
        http_status: kind_to_http(status.code),
        business_code: status.business_code().unwrap_or_default(),
    };
    Error::from_failure(Classified::new(
        status.message,
        None,
        classification,
        location,
    ))
}

/// Maps the error side of a result to an outbound status.
pub fn to_rpc_result<T>(result: Result<T, Error>) -> Result<T, RpcStatus> {
    result.map_err(|err| to_rpc_status(&err))
}

#[track_caller]
pub fn from_rpc_result<T>(result: Result<T, RpcStatus>) -> Result<T, Error> {
    let location = Location::caller();
    result.map_err(|status| inbound(status, location))
}
