//! Feed composition.
//!
//! Turns the five cached collections into the order the UI renders:
//!
//! 1. [`compose`] flattens the [`FeedSnapshot`], shuffles it and applies the
//!    requested [`SortMode`].
//! 2. [`Interleaver::interleave`] pulls the promotional entries (paid ads
//!    and AI suggestions) out and re-inserts them after every eighth plain
//!    ad.
//!
//! Both steps take the random source as a parameter; nothing in here holds
//! state between calls.  [`recompose`] runs the two in sequence.
//!
//! ## For contributors
//!
//! Adding a new collection means a new [`Category`] variant, a payload type
//! in `item.rs`, an [`ItemData`] variant, a field on [`FeedSnapshot`] and a
//! line in [`composer::flatten`].  Decide whether it is promotional in
//! [`Category::is_promotional`].

pub mod composer;
mod entry;
mod interleave;
mod item;
mod snapshot;
mod sort;

pub use composer::compose;
pub use entry::{EntryKey, FeedEntry};
pub use interleave::{Interleaver, LeftoverPolicy};
pub use item::{Ad, AiSuggestion, Auction, Category, ItemData, LiveTrade, PaidAd};
pub use snapshot::FeedSnapshot;
pub use sort::SortMode;

use rand::Rng;

/// Compose and interleave in one go: the list the UI shows.
pub fn recompose<R>(
    snapshot: &FeedSnapshot,
    mode: SortMode,
    interleaver: &Interleaver,
    rng: &mut R,
) -> Vec<FeedEntry>
where
    R: Rng + ?Sized,
{
    let sorted = compose(snapshot, mode, rng);
    interleaver.interleave(sorted, rng)
}
