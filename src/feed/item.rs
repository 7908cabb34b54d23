//! Listing payloads, one struct per collection.
//!
//! Every collection in the catalog deserializes into its own payload type
//! (the JSON shapes differ: a live trade has an `itemName` where an ad has a
//! `title`, AI suggestions carry no price at all).  [`ItemData`] wraps the
//! payloads behind `Arc` so a recomposed feed shares them with the cached
//! snapshot instead of copying.
//!
//! ## For contributors
//!
//! If the fixtures grow a new field, add it here with `#[serde(default)]` so
//! older fixture files keep parsing.  Only `id` is mandatory.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The collection an entry was flattened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    PlainAd,
    PaidAd,
    LiveTrade,
    Auction,
    AiSuggestion,
}

impl Category {
    /// All categories in flattening order.
    pub const ALL: [Category; 5] = [
        Category::PlainAd,
        Category::PaidAd,
        Category::LiveTrade,
        Category::Auction,
        Category::AiSuggestion,
    ];

    /// Sponsored content that the interleaver inserts between organic
    /// entries.
    pub fn is_promotional(self) -> bool {
        matches!(self, Category::PaidAd | Category::AiSuggestion)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::PlainAd => "plain-ad",
            Category::PaidAd => "paid-ad",
            Category::LiveTrade => "live-trade",
            Category::Auction => "auction",
            Category::AiSuggestion => "ai-suggestion",
        }
    }

    /// Short badge shown in front of each card.
    pub fn badge(self) -> &'static str {
        match self {
            Category::PlainAd => "AD",
            Category::PaidAd => "SPONSORED",
            Category::LiveTrade => "TRADE",
            Category::Auction => "AUCTION",
            Category::AiSuggestion => "AI PICK",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seller shown on ad and auction cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seller {
    pub name: String,
    pub avatar_url: String,
}

/// A plain classified ad.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Decimal numeral as a string, e.g. `"149.99"`.
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Marketplace category of the listing ("Electronics", ...), unrelated
    /// to the feed [`Category`].
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub user: Seller,
}

/// A sponsored ad: an [`Ad`] plus the sponsorship flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaidAd {
    #[serde(flatten)]
    pub ad: Ad,
    #[serde(default)]
    pub sponsored: bool,
}

/// A completed trade between two users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveTrade {
    pub id: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub price: Option<String>,
    /// RFC 3339 when the fixture provides one; shown raw otherwise.
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub buyer: String,
    #[serde(default)]
    pub seller: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Current bid.
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub time_left: String,
    #[serde(default)]
    pub user: Seller,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Why the suggestion was made ("Because you viewed ...").
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub category: String,
}

/// The payload of a feed entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemData {
    Ad(Arc<Ad>),
    Paid(Arc<PaidAd>),
    Trade(Arc<LiveTrade>),
    Auction(Arc<Auction>),
    Suggestion(Arc<AiSuggestion>),
}

impl ItemData {
    pub fn id(&self) -> &str {
        match self {
            ItemData::Ad(ad) => &ad.id,
            ItemData::Paid(paid) => &paid.ad.id,
            ItemData::Trade(trade) => &trade.id,
            ItemData::Auction(auction) => &auction.id,
            ItemData::Suggestion(suggestion) => &suggestion.id,
        }
    }

    /// Display title; live trades use their item name.
    pub fn title(&self) -> &str {
        match self {
            ItemData::Ad(ad) => &ad.title,
            ItemData::Paid(paid) => &paid.ad.title,
            ItemData::Trade(trade) => &trade.item_name,
            ItemData::Auction(auction) => &auction.title,
            ItemData::Suggestion(suggestion) => &suggestion.title,
        }
    }

    /// The raw price string, if this payload kind carries one.
    pub fn price(&self) -> Option<&str> {
        match self {
            ItemData::Ad(ad) => ad.price.as_deref(),
            ItemData::Paid(paid) => paid.ad.price.as_deref(),
            ItemData::Trade(trade) => trade.price.as_deref(),
            ItemData::Auction(auction) => auction.price.as_deref(),
            ItemData::Suggestion(_) => None,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ItemData::Ad(ad) => &ad.description,
            ItemData::Paid(paid) => &paid.ad.description,
            ItemData::Trade(_) => "",
            ItemData::Auction(auction) => &auction.description,
            ItemData::Suggestion(suggestion) => &suggestion.description,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
