use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::classify::codes::ReservedCode;
use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransInfo {
    pub tag: String,
    pub key: String,
    pub message: String,
}

impl TransInfo {
    pub fn new(locale: Locale, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tag: locale.to_string(),
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Immutable snapshot of every registered translation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.messages
            .get(&locale)
            .and_then(|by_key| by_key.get(key))
            .map(String::as_str)
    }

    pub fn languages(&self) -> Vec<Locale> {
        let mut languages: Vec<Locale> = self.messages.keys().copied().collect();
        languages.sort_by_key(|l| l.to_string());
        languages
    }

    pub fn len(&self) -> usize {
        self.messages.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, locale: Locale, key: String, message: String) {
        self.messages
            .entry(locale)
            .or_default()
            .insert(key, message);
    }
}

/// Translation registry. Readers always see a complete snapshot; every
/// registration builds a new [`Catalog`] and swaps it in.
#[derive(Debug, Default)]
pub struct Registry {
    catalog: ArcSwap<Catalog>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with [`default_translations`].
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register_all(default_translations());
        registry
    }

    /// Registers one message. The last write for a `(locale, key)` wins.
    pub fn register(&self, locale: Locale, key: impl Into<String>, message: impl Into<String>) {
        let key = key.into();
        let message = message.into();
        self.catalog.rcu(|current| {
            let mut next = Catalog::clone(current);
            next.insert(locale, key.clone(), message.clone());
            next
        });
        tracing::debug!(%locale, %key, "translation registered");
    }

    pub fn register_all(&self, entries: impl IntoIterator<Item = TransInfo>) {
        let entries: Vec<(Locale, String, String)> = entries
            .into_iter()
            .map(|t| (Locale::negotiate(&t.tag), t.key, t.message))
            .collect();
        if entries.is_empty() {
            return;
        }
        self.catalog.rcu(|current| {
            let mut next = Catalog::clone(current);
            for (locale, key, message) in &entries {
                next.insert(*locale, key.clone(), message.clone());
            }
            next
        });
        tracing::debug!(count = entries.len(), "translations registered");
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        self.catalog.load_full()
    }

    /// The message for `key` in `locale`, falling back to the default locale.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<String> {
        let catalog = self.catalog.load();
        catalog
            .get(locale, key)
            .or_else(|| catalog.get(Locale::default(), key))
            .map(str::to_string)
    }

    /// Translates `key` for a raw language token. Unknown keys come back as
    /// the key itself, with `args` filled in.
    pub fn translate(&self, language: &str, key: &str, args: &[&dyn Display]) -> String {
        self.translate_locale(Locale::negotiate(language), key, args)
    }

    pub fn translate_locale(&self, locale: Locale, key: &str, args: &[&dyn Display]) -> String {
        match self.lookup(locale, key) {
            Some(message) => fill(&message, args),
            None => fill(key, args),
        }
    }
}

/// Replaces each `{}` in `template` with the next argument. Placeholders
/// without an argument are kept verbatim.
fn fill(template: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        return template.to_string();
    }
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(&arg.to_string()),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

/// English and Chinese messages for every reserved business code.
pub fn default_translations() -> Vec<TransInfo> {
    let table: [(ReservedCode, &str, &str, &str); 12] = [
        (ReservedCode::BadRequest, "parameter error", "参数错误", "參數錯誤"),
        (ReservedCode::Timeout, "request timeout", "请求超时", "請求超時"),
        (ReservedCode::NotFound, "record not found", "未找到", "未找到"),
        (ReservedCode::Conflict, "record already exists", "记录已存在", "記錄已存在"),
        (ReservedCode::Forbidden, "forbidden", "没有权限,禁止访问", "沒有權限,禁止訪問"),
        (
            ReservedCode::ResourceExhausted,
            "resource exhausted",
            "资源耗尽",
            "資源耗盡",
        ),
        (
            ReservedCode::PreconditionFailed,
            "precondition error",
            "前置条件错误",
            "前置條件錯誤",
        ),
        (ReservedCode::NotImplemented, "not implemented", "未实现", "未實現"),
        (
            ReservedCode::InternalServerError,
            "internal server error",
            "内部错误,请稍后重试,或者联系管理员",
            "內部錯誤,請稍後重試,或者聯繫管理員",
        ),
        (
            ReservedCode::ServiceUnavailable,
            "service unavailable",
            "服务不可用",
            "服務不可用",
        ),
        (ReservedCode::Unauthorized, "Unauthorized", "未登录", "未登錄"),
        (ReservedCode::Datastore, "network error", "网络错误", "網絡錯誤"),
    ];

    table
        .into_iter()
        .flat_map(|(code, en, zh, tw)| {
            let key = code.code().to_string();
            [
                TransInfo::new(Locale::EnUs, key.clone(), en),
                TransInfo::new(Locale::ZhCn, key.clone(), zh),
                TransInfo::new(Locale::ZhTw, key, tw),
            ]
        })
        .collect()
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::with_defaults);

/// The process-wide registry, seeded with [`default_translations`].
pub fn global() -> &'static Registry {
    &GLOBAL
}

pub fn register(locale: Locale, key: impl Into<String>, message: impl Into<String>) {
    global().register(locale, key, message);
}

pub fn register_all(entries: impl IntoIterator<Item = TransInfo>) {
    global().register_all(entries);
}

pub fn translate(language: &str, key: &str, args: &[&dyn Display]) -> String {
    global().translate(language, key, args)
}

pub fn translate_locale(locale: Locale, key: &str, args: &[&dyn Display]) -> String {
    global().translate_locale(locale, key, args)
}
