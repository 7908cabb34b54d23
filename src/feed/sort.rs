//! Sort modes and their orderings.
//!
//! Every mode sorts with a *stable* sort over an already-shuffled list, so
//! entries with equal keys keep the shuffle's random order.

use std::cmp::Ordering;
use std::fmt;

use super::entry::FeedEntry;

/// How the feed is ordered before promotional interleaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Random order; the shuffle is the ordering.
    #[default]
    Popular,
    PriceAscending,
    PriceDescending,
    /// Descending id, a stand-in for recency since listings carry no
    /// creation timestamp.
    Newest,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Popular,
        SortMode::PriceAscending,
        SortMode::PriceDescending,
        SortMode::Newest,
    ];

    /// Lenient parse: unknown names fall back to [`SortMode::Popular`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "price_asc" | "price_ascending" => SortMode::PriceAscending,
            "price_desc" | "price_descending" => SortMode::PriceDescending,
            "newest" => SortMode::Newest,
            "popular" => SortMode::Popular,
            other => {
                tracing::debug!(mode = other, "unknown sort mode, using popular");
                SortMode::Popular
            }
        }
    }

    /// The mode after this one, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Popular => "popular",
            SortMode::PriceAscending => "price ↑",
            SortMode::PriceDescending => "price ↓",
            SortMode::Newest => "newest",
        }
    }

    /// Order `entries` in place.  `Popular` leaves them untouched.
    pub fn apply(self, entries: &mut [FeedEntry]) {
        match self {
            SortMode::Popular => {}
            SortMode::PriceAscending => entries.sort_by(cmp_price_ascending),
            SortMode::PriceDescending => entries.sort_by(cmp_price_descending),
            SortMode::Newest => entries.sort_by(|a, b| b.id().cmp(a.id())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Orderings: unpriced entries sink to the bottom in both directions
// ---------------------------------------------------------------------------

fn cmp_price_ascending(a: &FeedEntry, b: &FeedEntry) -> Ordering {
    match (a.price(), b.price()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_price_descending(a: &FeedEntry, b: &FeedEntry) -> Ordering {
    match (a.price(), b.price()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
