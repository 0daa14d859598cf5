#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("unknown kind: {name}")]
    UnknownKind { name: String },

    #[error("unknown locale tag: {tag}")]
    UnknownLocale { tag: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
