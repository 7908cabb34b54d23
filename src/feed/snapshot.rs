use std::sync::Arc;

use super::item::{Ad, AiSuggestion, Auction, Category, LiveTrade, PaidAd};

/// The five cached collections the composer reads from.
///
/// Produced by the loader on every refresh; the composer only ever borrows
/// it.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub ads: Vec<Arc<Ad>>,
    pub paid_ads: Vec<Arc<PaidAd>>,
    pub live_trades: Vec<Arc<LiveTrade>>,
    pub auctions: Vec<Arc<Auction>>,
    pub ai_suggestions: Vec<Arc<AiSuggestion>>,
}

impl FeedSnapshot {
    /// Total number of items across all collections.
    pub fn len(&self) -> usize {
        self.ads.len()
            + self.paid_ads.len()
            + self.live_trades.len()
            + self.auctions.len()
            + self.ai_suggestions.len()
    }

    /// Replace one collection with `previous`'s copy of it.
    ///
    /// Used when a refresh fails for `category` so the last good data
    /// survives.  Items are `Arc`s; nothing is deep-copied.
    pub fn keep_collection(&mut self, previous: &FeedSnapshot, category: Category) {
        match category {
            Category::PlainAd => self.ads = previous.ads.clone(),
            Category::PaidAd => self.paid_ads = previous.paid_ads.clone(),
            Category::LiveTrade => self.live_trades = previous.live_trades.clone(),
            Category::Auction => self.auctions = previous.auctions.clone(),
            Category::AiSuggestion => self.ai_suggestions = previous.ai_suggestions.clone(),
        }
    }
}
