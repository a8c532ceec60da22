use std::collections::BTreeMap;

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::i18n::{get_translation, translations_for, Language};

#[derive(Debug, Serialize)]
pub struct TranslationTableResponse {
    /// The language actually served; unsupported codes resolve to `en`.
    pub language: Language,
    pub entries: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    pub key: String,
    pub value: String,
}

/// GET /api/i18n/:lang
pub async fn handle_table(Path(lang): Path<String>) -> Json<TranslationTableResponse> {
    let language = Language::from_code(&lang).unwrap_or(Language::DEFAULT);
    Json(TranslationTableResponse {
        language,
        entries: translations_for(language),
    })
}

/// GET /api/i18n/:lang/:key
pub async fn handle_lookup(Path((lang, key)): Path<(String, String)>) -> Json<TranslationResponse> {
    let value = get_translation(&lang, &key).to_string();
    Json(TranslationResponse { key, value })
}
