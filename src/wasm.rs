use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::boundary::http::{HttpReply, reply_for_error};
use crate::boundary::rpc::{RpcStatus, from_rpc_status};
use crate::classify::Kind;
use crate::classify::mapping::{self, HTTP_INTERNAL_SERVER_ERROR};
use crate::i18n::{Locale, catalog};

fn to_js(value: &serde_json::Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn error_result(msg: &str) -> JsValue {
    to_js(&serde_json::json!({ "error": msg }))
}

/// HTTP status for a kind name such as `"NotFound"`; unknown names map to 500.
#[wasm_bindgen(js_name = kindToHttp)]
pub fn kind_to_http(kind: &str) -> u32 {
    Kind::from_name(kind)
        .map(mapping::kind_to_http)
        .unwrap_or(HTTP_INTERNAL_SERVER_ERROR)
}

/// Canonical locale tag for a raw language token.
#[wasm_bindgen(js_name = negotiateLanguage)]
pub fn negotiate_language(language: &str) -> String {
    Locale::negotiate(language).to_string()
}

/// Translation of `key` through the process-wide registry.
#[wasm_bindgen]
pub fn translate(language: &str, key: &str) -> String {
    catalog::translate(language, key, &[])
}

/// HTTP reply for an inbound RPC status given as JSON.
#[wasm_bindgen(js_name = replyForStatus)]
pub fn reply_for_status(status_json: &str, language: &str) -> JsValue {
    let status = match RpcStatus::from_json(status_json) {
        Ok(status) => status,
        Err(err) => return error_result(&err.to_string()),
    };
    let err = from_rpc_status(status);
    let reply: HttpReply = reply_for_error(Some(&err), language);
    to_js(&serde_json::json!({
        "status": reply.status,
        "body": reply.to_json(),
    }))
}
