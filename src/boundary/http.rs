use serde::{Deserialize, Serialize};

use crate::chain::Error;
use crate::classify::mapping::{HTTP_INTERNAL_SERVER_ERROR, HTTP_OK};
use crate::i18n::Locale;
use crate::i18n::catalog::{self, Registry};

/// Body-level code of a successful reply.
pub const OK_CODE: u32 = 0;

/// JSON body of every reply: `{"code", "message", "data"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpBody {
    pub code: u32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Transport status plus body, ready for any web framework to send.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: HttpBody,
}

impl HttpReply {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.body.code,
            "message": self.body.message,
            "data": self.body.data,
        })
    }
}

/// Builds a reply whose message is replaced by the translation of `code`
/// when one exists.
pub fn reply_with(
    registry: &Registry,
    http_status: u32,
    code: u32,
    data: Option<serde_json::Value>,
    message: impl Into<String>,
    language: &str,
) -> HttpReply {
    let message = registry
        .lookup(Locale::negotiate(language), &code.to_string())
        .unwrap_or_else(|| message.into());
    let status = u16::try_from(http_status)
        .ok()
        .and_then(|code| ::http::StatusCode::from_u16(code).ok())
        .map_or_else(
            || {
                tracing::debug!(http_status, "invalid http status, replying 500");
                500
            },
            |status| status.as_u16(),
        );
    HttpReply {
        status,
        body: HttpBody {
            code,
            message,
            data,
        },
    }
}

/// [`reply_with`] against the process-wide registry.
pub fn reply(
    http_status: u32,
    code: u32,
    data: Option<serde_json::Value>,
    message: impl Into<String>,
    language: &str,
) -> HttpReply {
    reply_with(catalog::global(), http_status, code, data, message, language)
}

pub fn reply_ok(data: Option<serde_json::Value>, message: Option<&str>) -> HttpReply {
    reply(
        HTTP_OK,
        OK_CODE,
        data,
        message.unwrap_or_default(),
        Locale::default().as_ref(),
    )
}

/// Reply for the outcome of a handler.
///
/// Classified errors reply with their own HTTP status and
/// [`reply_code`](crate::Classification::reply_code); unclassified ones fall
/// back to 500 with code 0. No error is a plain success reply.
pub fn reply_for_error_with(registry: &Registry, err: Option<&Error>, language: &str) -> HttpReply {
    let Some(err) = err else {
        return reply_with(registry, HTTP_OK, OK_CODE, None, "", language);
    };
    let message = err.to_string();
    match err.classification() {
        Some(c) => reply_with(
            registry,
            c.http_status,
            c.reply_code(),
            None,
            message,
            language,
        ),
        None => {
            tracing::debug!(error = %message, "unclassified error at http boundary");
            reply_with(
                registry,
                HTTP_INTERNAL_SERVER_ERROR,
                OK_CODE,
                None,
                message,
                language,
            )
        }
    }
}

pub fn reply_for_error(err: Option<&Error>, language: &str) -> HttpReply {
    reply_for_error_with(catalog::global(), err, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::annotated::{annotate, new};
    use crate::classify::codes::BusinessCode;
    use crate::classify::constructors::{new_business_code_errorf, not_found};

    #[test]
    fn classified_error_uses_business_code_and_translation() {
        let registry = Registry::with_defaults();
        let err = annotate(not_found("user 7"), "profile");
        let reply = reply_for_error_with(&registry, Some(&err), "zh_CN");
        assert_eq!(reply.status, 404);
        assert_eq!(reply.body.code, BusinessCode::NOT_FOUND.get());
        assert_eq!(reply.body.message, "未找到");
    }

    #[test]
    fn untranslated_code_keeps_rendered_message() {
        let registry = Registry::new();
        let err = new_business_code_errorf(10_086_u32, "quota reached");
        let reply = reply_for_error_with(&registry, Some(&err), "en");
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body.code, 10_086);
        assert_eq!(reply.body.message, "quota reached");
    }

    #[test]
    fn unclassified_error_is_500_with_zero_code() {
        let registry = Registry::new();
        let reply = reply_for_error_with(&registry, Some(&new("panic in handler")), "en");
        assert_eq!(reply.status, 500);
        assert_eq!(reply.body.code, OK_CODE);
        assert_eq!(reply.body.message, "panic in handler");
    }

    #[test]
    fn no_error_is_success() {
        let reply = reply_for_error_with(&Registry::new(), None, "en");
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body.code, 0);
        assert_eq!(
            reply.to_json(),
            serde_json::json!({ "code": 0, "message": "", "data": null })
        );
    }

    #[test]
    fn ok_reply_carries_data() {
        let reply = reply_ok(Some(serde_json::json!({ "id": 1 })), Some("done"));
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body.data, Some(serde_json::json!({ "id": 1 })));
        assert_eq!(reply.body.message, "done");
    }

    #[test]
    fn invalid_http_status_falls_back_to_500() {
        let registry = Registry::new();
        for bad in [1000, 70_000, 42] {
            let reply = reply_with(&registry, bad, 7, None, "odd", "en");
            assert_eq!(reply.status, 500, "{bad}");
            assert_eq!(reply.body.code, 7);
        }
        assert_eq!(reply_with(&registry, 418, 0, None, "", "en").status, 418);
    }
}
