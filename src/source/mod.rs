//! Verse data: collection listing and verse ranges with aligned translations.
//!
//! [`VerseSource`] has two layers. The `try_*` methods report failures as
//! [`ChiasmError::Source`]; the plain methods log the failure and return an empty vector, which
//! callers treat as "nothing to render".

mod transport;
mod wire;

pub use transport::{DirTransport, HttpTransport, Transport};

use std::{path::PathBuf, time::Duration};

use crate::foundation::{
    config::Config,
    core::{Collection, Item},
    error::{ChiasmError, ChiasmResult},
};

use wire::{Edition, SurahSummary, assemble_range, decode};

/// Where verses come from.
pub trait VerseSource: Send + Sync {
    /// All collections, in source order.
    fn try_list_collections(&self) -> ChiasmResult<Vec<Collection>>;

    /// Items numbered `from..=to` of `collection`, each with its translation.
    fn try_fetch_range(&self, collection: u32, from: u32, to: u32) -> ChiasmResult<Vec<Item>>;

    /// [`Self::try_list_collections`], degrading to an empty list.
    fn list_collections(&self) -> Vec<Collection> {
        self.try_list_collections().unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to fetch collection list");
            Vec::new()
        })
    }

    /// [`Self::try_fetch_range`], degrading to an empty list.
    fn fetch_range(&self, collection: u32, from: u32, to: u32) -> Vec<Item> {
        self.try_fetch_range(collection, from, to)
            .unwrap_or_else(|err| {
                tracing::error!(collection, from, to, error = %err, "failed to fetch verse range");
                Vec::new()
            })
    }
}

/// Verse source speaking the alquran.cloud document layout over some [`Transport`].
///
/// Each range load fetches the source-script edition and the translation edition in
/// parallel; if either fails the whole load fails.
#[derive(Debug, Clone)]
pub struct EditionSource<T> {
    transport: T,
    source_edition: String,
    translation_edition: String,
}

/// The public API at `Config::api_base_url`.
pub type AlQuranCloud = EditionSource<HttpTransport>;

/// API documents mirrored in a local directory.
pub type JsonDirSource = EditionSource<DirTransport>;

impl<T: Transport> EditionSource<T> {
    /// Source over `transport` using the given edition codes.
    pub fn new(
        transport: T,
        source_edition: impl Into<String>,
        translation_edition: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            source_edition: source_edition.into(),
            translation_edition: translation_edition.into(),
        }
    }

    fn edition(&self, collection: u32, edition: &str) -> ChiasmResult<Edition> {
        let path = format!("surah/{collection}/{edition}");
        let bytes = self.transport.get(&path)?;
        decode(&path, &bytes)
    }
}

impl AlQuranCloud {
    /// HTTP source configured from `cfg`.
    pub fn from_config(cfg: &Config) -> ChiasmResult<Self> {
        let transport =
            HttpTransport::new(cfg.api_base_url.as_str(), Duration::from_secs(cfg.timeout_secs))?;
        Ok(Self::new(
            transport,
            cfg.source_edition.as_str(),
            cfg.translation_edition.as_str(),
        ))
    }
}

impl JsonDirSource {
    /// Directory source rooted at `dir`, editions taken from `cfg`.
    pub fn open(dir: impl Into<PathBuf>, cfg: &Config) -> Self {
        Self::new(
            DirTransport::new(dir),
            cfg.source_edition.as_str(),
            cfg.translation_edition.as_str(),
        )
    }
}

impl<T: Transport> VerseSource for EditionSource<T> {
    #[tracing::instrument(skip(self))]
    fn try_list_collections(&self) -> ChiasmResult<Vec<Collection>> {
        let bytes = self.transport.get("surah")?;
        let list: Vec<SurahSummary> = decode("surah", &bytes)?;
        Ok(list.into_iter().map(Collection::from).collect())
    }

    #[tracing::instrument(skip(self))]
    fn try_fetch_range(&self, collection: u32, from: u32, to: u32) -> ChiasmResult<Vec<Item>> {
        if from > to {
            return Err(ChiasmError::validation(format!(
                "range start {from} is after end {to}"
            )));
        }
        let (source, translation) = rayon::join(
            || self.edition(collection, &self.source_edition),
            || self.edition(collection, &self.translation_edition),
        );
        let items = assemble_range(source?.ayahs, translation?.ayahs, from, to);
        tracing::info!(collection, count = items.len(), "fetched verse range");
        Ok(items)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/verse_source.rs"]
mod tests;
