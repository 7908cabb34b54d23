//! Promotional cadence.
//!
//! The composed feed is split into organic and promotional entries.  The
//! organic entries keep their sorted order; one promotional entry is placed
//! right after every [`DEFAULT_CADENCE`]th plain ad.  Live trades and
//! auctions are organic but do not advance the count.

use rand::seq::SliceRandom;
use rand::Rng;

use super::entry::FeedEntry;
use super::item::Category;

/// Plain ads between two promotional slots.
pub const DEFAULT_CADENCE: usize = 8;

/// What happens to promotional entries that never got a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeftoverPolicy {
    /// Leave them out of the feed.
    #[default]
    Drop,
    /// Put them after the last organic entry.
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interleaver {
    pub cadence: usize,
    pub leftovers: LeftoverPolicy,
}

impl Default for Interleaver {
    fn default() -> Self {
        Self {
            cadence: DEFAULT_CADENCE,
            leftovers: LeftoverPolicy::Drop,
        }
    }
}

impl Interleaver {
    pub fn new(leftovers: LeftoverPolicy) -> Self {
        Self {
            leftovers,
            ..Self::default()
        }
    }

    /// Merge promotional entries into the organic sequence.
    ///
    /// Promotional entries are reshuffled with a fresh draw from `rng`
    /// before placement.  A cadence of zero never opens a slot.
    pub fn interleave<R>(&self, entries: Vec<FeedEntry>, rng: &mut R) -> Vec<FeedEntry>
    where
        R: Rng + ?Sized,
    {
        let (organic, mut promos): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|e| !e.is_promotional());
        promos.shuffle(rng);

        let mut promos = promos.into_iter();
        let mut out = Vec::with_capacity(organic.len() + promos.len());
        let mut plain_ads = 0usize;
        let mut inserted = 0usize;

        for entry in organic {
            let is_plain_ad = entry.category == Category::PlainAd;
            out.push(entry);

            if !is_plain_ad || self.cadence == 0 {
                continue;
            }
            plain_ads += 1;
            if plain_ads % self.cadence == 0 {
                if let Some(promo) = promos.next() {
                    out.push(promo);
                    inserted += 1;
                }
            }
        }

        let leftover = promos.len();
        if self.leftovers == LeftoverPolicy::Append {
            out.extend(promos);
        }

        tracing::debug!(
            plain_ads,
            inserted,
            leftover,
            policy = ?self.leftovers,
            "interleaved promotional entries"
        );
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::feed::composer::compose;
    use crate::feed::item::{Ad, AiSuggestion, Auction, ItemData, LiveTrade, PaidAd};
    use crate::feed::snapshot::FeedSnapshot;
    use crate::feed::sort::SortMode;

    fn plain(id: &str) -> FeedEntry {
        FeedEntry::new(
            Category::PlainAd,
            ItemData::Ad(Arc::new(Ad {
                id: id.to_string(),
                ..Default::default()
            })),
        )
    }

    fn paid(id: &str) -> FeedEntry {
        FeedEntry::new(
            Category::PaidAd,
            ItemData::Paid(Arc::new(PaidAd {
                ad: Ad {
                    id: id.to_string(),
                    ..Default::default()
                },
                sponsored: true,
            })),
        )
    }

    fn suggestion(id: &str) -> FeedEntry {
        FeedEntry::new(
            Category::AiSuggestion,
            ItemData::Suggestion(Arc::new(AiSuggestion {
                id: id.to_string(),
                ..Default::default()
            })),
        )
    }

    fn trade(id: &str) -> FeedEntry {
        FeedEntry::new(
            Category::LiveTrade,
            ItemData::Trade(Arc::new(LiveTrade {
                id: id.to_string(),
                ..Default::default()
            })),
        )
    }

    fn plain_ads(n: usize) -> Vec<FeedEntry> {
        (0..n).map(|i| plain(&format!("a{i:02}"))).collect()
    }

    /// Index (in the output) of every promotional entry.
    fn promo_positions(feed: &[FeedEntry]) -> Vec<usize> {
        feed.iter()
            .enumerate()
            .filter(|(_, e)| e.is_promotional())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of plain ads that precede each promotional entry.
    fn plain_ads_before_promos(feed: &[FeedEntry]) -> Vec<usize> {
        let mut seen = 0;
        let mut out = Vec::new();
        for entry in feed {
            match entry.category {
                Category::PlainAd => seen += 1,
                c if c.is_promotional() => out.push(seen),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn inserts_after_every_eighth_plain_ad() {
        let mut input = plain_ads(24);
        input.extend([paid("p1"), paid("p2"), suggestion("s1")]);

        let feed = Interleaver::default().interleave(input, &mut StdRng::seed_from_u64(1));

        assert_eq!(feed.len(), 27);
        assert_eq!(promo_positions(&feed), vec![8, 17, 26]);
        assert_eq!(plain_ads_before_promos(&feed), vec![8, 16, 24]);
    }

    #[test]
    fn stops_inserting_when_promos_run_out() {
        let mut input = plain_ads(24);
        input.push(paid("p1"));

        let feed = Interleaver::default().interleave(input, &mut StdRng::seed_from_u64(2));

        assert_eq!(feed.len(), 25);
        assert_eq!(plain_ads_before_promos(&feed), vec![8]);
    }

    #[test]
    fn no_promos_before_the_eighth_plain_ad() {
        let mut input = plain_ads(7);
        input.extend([paid("p1"), suggestion("s1")]);

        let feed = Interleaver::default().interleave(input, &mut StdRng::seed_from_u64(3));

        assert_eq!(feed.len(), 7);
        assert!(promo_positions(&feed).is_empty());
    }

    #[test]
    fn leftovers_are_appended_when_asked() {
        let mut input = plain_ads(9);
        input.extend([paid("p1"), suggestion("s1"), paid("p2")]);

        let feed = Interleaver::new(LeftoverPolicy::Append).interleave(input, &mut StdRng::seed_from_u64(4));

        assert_eq!(feed.len(), 12);
        assert_eq!(promo_positions(&feed), vec![8, 10, 11]);
    }

    #[test]
    fn organic_order_is_preserved() {
        let input = vec![
            plain("a1"),
            trade("t1"),
            paid("p1"),
            plain("a2"),
            trade("t2"),
            suggestion("s1"),
            plain("a3"),
        ];
        let organic_before: Vec<String> = input
            .iter()
            .filter(|e| !e.is_promotional())
            .map(|e| e.id().to_string())
            .collect();

        let feed = Interleaver::new(LeftoverPolicy::Append).interleave(input, &mut StdRng::seed_from_u64(5));
        let organic_after: Vec<String> = feed
            .iter()
            .filter(|e| !e.is_promotional())
            .map(|e| e.id().to_string())
            .collect();

        assert_eq!(organic_before, organic_after);
    }

    #[test]
    fn trades_and_auctions_do_not_advance_the_count() {
        let mut input: Vec<FeedEntry> = (0..8).map(|i| trade(&format!("t{i}"))).collect();
        input.extend(plain_ads(7));
        input.push(paid("p1"));

        let feed = Interleaver::default().interleave(input, &mut StdRng::seed_from_u64(6));
        assert!(promo_positions(&feed).is_empty());
    }

    #[test]
    fn zero_cadence_never_inserts() {
        let mut input = plain_ads(16);
        input.push(paid("p1"));

        let interleaver = Interleaver {
            cadence: 0,
            leftovers: LeftoverPolicy::Drop,
        };
        let feed = interleaver.interleave(input, &mut StdRng::seed_from_u64(7));
        assert_eq!(feed.len(), 16);
    }

    #[test]
    fn empty_input_gives_empty_feed() {
        let feed = Interleaver::default().interleave(Vec::new(), &mut StdRng::seed_from_u64(8));
        assert!(feed.is_empty());
    }

    /// Ten plain ads priced 5..50, two unpriced paid ads, price ascending.
    #[test]
    fn ten_ads_two_sponsored_price_ascending() {
        let snapshot = FeedSnapshot {
            ads: (0..10)
                .map(|i| {
                    Arc::new(Ad {
                        id: format!("a{i}"),
                        price: Some(((i + 1) * 5).to_string()),
                        ..Default::default()
                    })
                })
                .collect(),
            paid_ads: (0..2)
                .map(|i| {
                    Arc::new(PaidAd {
                        ad: Ad {
                            id: format!("p{i}"),
                            ..Default::default()
                        },
                        sponsored: true,
                    })
                })
                .collect(),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(10);

        let composed = compose(&snapshot, SortMode::PriceAscending, &mut rng);
        assert_eq!(composed.len(), 12);
        let first_ten: Vec<&str> = composed[..10].iter().map(FeedEntry::id).collect();
        assert_eq!(first_ten, vec!["a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8", "a9"]);

        let feed = Interleaver::default().interleave(composed.clone(), &mut rng);
        assert_eq!(feed.len(), 11);
        assert_eq!(promo_positions(&feed), vec![8]);
        assert_eq!(feed[9].id(), "a8");
        assert_eq!(feed[10].id(), "a9");

        let appended = Interleaver::new(LeftoverPolicy::Append).interleave(composed, &mut rng);
        assert_eq!(appended.len(), 12);
        assert_eq!(promo_positions(&appended), vec![8, 11]);
    }

    #[test]
    fn auctions_stay_in_place_between_promos() {
        let auction = FeedEntry::new(
            Category::Auction,
            ItemData::Auction(Arc::new(Auction {
                id: "u1".into(),
                ..Default::default()
            })),
        );
        let mut input = plain_ads(8);
        input.insert(4, auction);
        input.push(suggestion("s1"));

        let feed = Interleaver::default().interleave(input, &mut StdRng::seed_from_u64(12));
        assert_eq!(feed[4].category, Category::Auction);
        assert_eq!(promo_positions(&feed), vec![9]);
    }
}
