//! The five listing collections and how they are loaded.
//!
//! A failed collection never aborts a refresh: it is empty in the snapshot
//! and listed in [`LoadReport::failures`], so the app can keep whatever it
//! had cached for that collection and say what went wrong.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{DataSource, FileSource, HttpSource};
use crate::error::LoadError;
use crate::feed::{Category, FeedSnapshot};

/// Fixture file name for each collection.
pub fn fixture_name(category: Category) -> &'static str {
    match category {
        Category::PlainAd => "masonryAds.json",
        Category::PaidAd => "paidAds.json",
        Category::LiveTrade => "liveTrades.json",
        Category::Auction => "auctions.json",
        Category::AiSuggestion => "aiFeed.json",
    }
}

/// Parse one collection document.
///
/// Pure (no I/O) so tests can exercise parsing without fixtures on disk.
pub fn parse_collection<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<Arc<T>>, LoadError> {
    let items: Vec<T> = serde_json::from_slice(bytes)?;
    Ok(items.into_iter().map(Arc::new).collect())
}

/// A collection that could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub category: Category,
    pub message: String,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Outcome of one catalog load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Failed collections are empty here; see [`failures`](Self::failures).
    pub snapshot: FeedSnapshot,
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn failed(&self, category: Category) -> bool {
        self.failures.iter().any(|f| f.category == category)
    }
}

/// One [`DataSource`] per collection.
pub struct Catalog {
    sources: Vec<(Category, Box<dyn DataSource>)>,
}

impl Catalog {
    pub fn new(sources: Vec<(Category, Box<dyn DataSource>)>) -> Self {
        Self { sources }
    }

    /// Build the catalog from a fixture directory or an `http(s)://` base URL.
    pub fn from_base(base: &str) -> Result<Self, LoadError> {
        let mut sources: Vec<(Category, Box<dyn DataSource>)> = Vec::with_capacity(Category::ALL.len());

        for category in Category::ALL {
            let name = fixture_name(category);
            let source: Box<dyn DataSource> = if base.starts_with("http://") || base.starts_with("https://") {
                let url = format!("{}/{}", base.trim_end_matches('/'), name);
                Box::new(HttpSource::new(url)?)
            } else {
                Box::new(FileSource::new(Path::new(base).join(name)))
            };
            sources.push((category, source));
        }

        Ok(Self::new(sources))
    }

    /// Fetch and parse every collection.
    pub fn load(&self) -> LoadReport {
        let mut report = LoadReport::default();

        for (category, source) in &self.sources {
            let result = source
                .fetch()
                .and_then(|bytes| fill(&mut report.snapshot, *category, &bytes));

            match result {
                Ok(count) => {
                    tracing::debug!(source = source.name(), %category, count, "loaded collection");
                }
                Err(e) => {
                    tracing::warn!(source = source.name(), %category, error = %e, "collection failed to load");
                    report.failures.push(LoadFailure {
                        category: *category,
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            items = report.snapshot.len(),
            failures = report.failures.len(),
            "catalog loaded"
        );
        report
    }
}

/// Parse `bytes` into the snapshot field for `category`.
///
/// The field is only written on success, so a broken document leaves the
/// collection empty.
fn fill(snapshot: &mut FeedSnapshot, category: Category, bytes: &[u8]) -> Result<usize, LoadError> {
    let count = match category {
        Category::PlainAd => {
            snapshot.ads = parse_collection(bytes)?;
            snapshot.ads.len()
        }
        Category::PaidAd => {
            snapshot.paid_ads = parse_collection(bytes)?;
            snapshot.paid_ads.len()
        }
        Category::LiveTrade => {
            snapshot.live_trades = parse_collection(bytes)?;
            snapshot.live_trades.len()
        }
        Category::Auction => {
            snapshot.auctions = parse_collection(bytes)?;
            snapshot.auctions.len()
        }
        Category::AiSuggestion => {
            snapshot.ai_suggestions = parse_collection(bytes)?;
            snapshot.ai_suggestions.len()
        }
    };
    Ok(count)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
