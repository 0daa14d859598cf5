pub mod catalog;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Request header that carries the caller's language.
pub const LANGUAGE_HEADER: &str = "LANGUAGE-TYPE";

/// Supported locale tags.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
pub enum Locale {
    #[strum(serialize = "zh-CN")]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[default]
    #[strum(serialize = "en-US")]
    #[serde(rename = "en-US")]
    EnUs,
    #[strum(serialize = "ru-RU")]
    #[serde(rename = "ru-RU")]
    RuRu,
    #[strum(serialize = "zh-TW")]
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[strum(serialize = "ja-JP")]
    #[serde(rename = "ja-JP")]
    JaJp,
    #[strum(serialize = "ko-KR")]
    #[serde(rename = "ko-KR")]
    KoKr,
    #[strum(serialize = "es-ES")]
    #[serde(rename = "es-ES")]
    EsEs,
    #[strum(serialize = "de-DE")]
    #[serde(rename = "de-DE")]
    DeDe,
}

impl Locale {
    /// Normalizes a raw language token from a request.
    ///
    /// Accepts either separator, any letter case, the bare language or
    /// region for the three primary locales, and the numeric short codes
    /// `0` (zh-CN), `1` (en-US), `2` (ru-RU) and `5` (zh-TW). Anything else
    /// falls back to the default locale.
    pub fn negotiate(raw: &str) -> Self {
        Self::from_token(raw).unwrap_or_default()
    }

    /// Strict form of [`Locale::negotiate`] that reports unrecognized tokens.
    pub fn from_tag(raw: &str) -> Result<Self, ParseError> {
        Self::from_token(raw).ok_or_else(|| ParseError::UnknownLocale {
            tag: raw.to_string(),
        })
    }

    fn from_token(raw: &str) -> Option<Self> {
        let token = raw.trim().replace('_', "-").to_ascii_lowercase();
        match token.as_str() {
            "0" | "zh-cn" | "zh" | "cn" => Some(Self::ZhCn),
            "1" | "en-us" | "en" | "us" => Some(Self::EnUs),
            "2" | "ru-ru" | "ru" => Some(Self::RuRu),
            "5" | "zh-tw" => Some(Self::ZhTw),
            "ja-jp" => Some(Self::JaJp),
            "ko-kr" => Some(Self::KoKr),
            "es-es" => Some(Self::EsEs),
            "de-de" => Some(Self::DeDe),
            _ => None,
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn negotiates_case_and_separator_variants() {
        assert_eq!(Locale::negotiate("zh_CN"), Locale::ZhCn);
        assert_eq!(Locale::negotiate("ZH"), Locale::ZhCn);
        assert_eq!(Locale::negotiate("cn"), Locale::ZhCn);
        assert_eq!(Locale::negotiate("en_us"), Locale::EnUs);
        assert_eq!(Locale::negotiate("RU"), Locale::RuRu);
        assert_eq!(Locale::negotiate("zh-tw"), Locale::ZhTw);
        assert_eq!(Locale::negotiate("de_DE"), Locale::DeDe);
    }

    #[test]
    fn negotiates_numeric_short_codes() {
        assert_eq!(Locale::negotiate("0"), Locale::ZhCn);
        assert_eq!(Locale::negotiate("1"), Locale::EnUs);
        assert_eq!(Locale::negotiate("2"), Locale::RuRu);
        assert_eq!(Locale::negotiate("5"), Locale::ZhTw);
    }

    #[test]
    fn unknown_tokens_fall_back_to_english() {
        assert_eq!(Locale::negotiate("xx-unknown"), Locale::EnUs);
        assert_eq!(Locale::negotiate(""), Locale::EnUs);
        assert_eq!(Locale::negotiate("3"), Locale::EnUs);
        assert!(matches!(
            Locale::from_tag("klingon"),
            Err(ParseError::UnknownLocale { .. })
        ));
    }

    #[test]
    fn every_tag_negotiates_to_itself() {
        for locale in Locale::iter() {
            assert_eq!(Locale::from_tag(locale.as_ref()).unwrap(), locale);
            assert_eq!(
                serde_json::to_string(&locale).unwrap(),
                format!("\"{locale}\"")
            );
        }
    }
}
