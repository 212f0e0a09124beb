//! JSON documents served by the verse API, and the range join built from them.

use std::collections::HashMap;

use serde::Deserialize;

use crate::foundation::{
    core::{Collection, Item},
    error::{ChiasmError, ChiasmResult},
};

/// Every response wraps its payload in `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) data: T,
}

/// One entry of `GET /surah`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SurahSummary {
    pub(crate) number: u32,
    pub(crate) english_name: String,
}

impl From<SurahSummary> for Collection {
    fn from(s: SurahSummary) -> Self {
        Collection {
            id: s.number,
            name: s.english_name,
        }
    }
}

/// Payload of `GET /surah/{id}/{edition}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Edition {
    pub(crate) ayahs: Vec<Ayah>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Ayah {
    pub(crate) number_in_surah: u32,
    pub(crate) text: String,
}

pub(crate) fn decode<T: for<'de> Deserialize<'de>>(what: &str, bytes: &[u8]) -> ChiasmResult<T> {
    let envelope: Envelope<T> = serde_json::from_slice(bytes)
        .map_err(|e| ChiasmError::source(format!("decode {what}: {e}")))?;
    Ok(envelope.data)
}

/// Keep source ayahs numbered `from..=to` (in delivered order) and attach the translation
/// with the same number. A missing translation becomes an empty string.
pub(crate) fn assemble_range(source: Vec<Ayah>, translation: Vec<Ayah>, from: u32, to: u32) -> Vec<Item> {
    let mut by_number: HashMap<u32, String> = translation
        .into_iter()
        .map(|a| (a.number_in_surah, a.text))
        .collect();

    source
        .into_iter()
        .filter(|a| (from..=to).contains(&a.number_in_surah))
        .map(|a| {
            let translation = by_number.remove(&a.number_in_surah).unwrap_or_default();
            Item::new(a.number_in_surah, a.text, translation)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/source/wire.rs"]
mod tests;
