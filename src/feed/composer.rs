//! Flatten, shuffle and sort the cached collections into one list.
//!
//! [`compose`] is a pure function of the snapshot, the sort mode and the
//! random source: it never touches the snapshot and returns a fresh list on
//! every call.  Promotional interleaving is a separate pass, see
//! [`Interleaver`](super::Interleaver).

use rand::seq::SliceRandom;
use rand::Rng;

use super::entry::FeedEntry;
use super::item::{Category, ItemData};
use super::snapshot::FeedSnapshot;
use super::sort::SortMode;

/// Tag every item with its collection, in collection order.
pub fn flatten(snapshot: &FeedSnapshot) -> Vec<FeedEntry> {
    let mut entries = Vec::with_capacity(snapshot.len());

    entries.extend(
        snapshot
            .ads
            .iter()
            .map(|ad| FeedEntry::new(Category::PlainAd, ItemData::Ad(ad.clone()))),
    );
    entries.extend(
        snapshot
            .paid_ads
            .iter()
            .map(|paid| FeedEntry::new(Category::PaidAd, ItemData::Paid(paid.clone()))),
    );
    entries.extend(
        snapshot
            .live_trades
            .iter()
            .map(|trade| FeedEntry::new(Category::LiveTrade, ItemData::Trade(trade.clone()))),
    );
    entries.extend(
        snapshot
            .auctions
            .iter()
            .map(|auction| FeedEntry::new(Category::Auction, ItemData::Auction(auction.clone()))),
    );
    entries.extend(snapshot.ai_suggestions.iter().map(|suggestion| {
        FeedEntry::new(Category::AiSuggestion, ItemData::Suggestion(suggestion.clone()))
    }));

    entries
}

/// Build the sorted (not yet interleaved) feed.
///
/// The shuffle always runs first so that ties under a sort key come out in
/// random order.  The result holds every item of the snapshot exactly once.
pub fn compose<R>(snapshot: &FeedSnapshot, mode: SortMode, rng: &mut R) -> Vec<FeedEntry>
where
    R: Rng + ?Sized,
{
    let mut entries = flatten(snapshot);
    entries.shuffle(rng);
    mode.apply(&mut entries);

    tracing::debug!(entries = entries.len(), mode = %mode, "composed feed");
    entries
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
