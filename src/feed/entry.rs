//! The unit the composer produces and the UI renders.

use super::item::{Category, ItemData};

/// An item tagged with the collection it came from.
///
/// Entries are rebuilt on every recomposition; only the underlying item's
/// id (together with its category, see [`EntryKey`]) identifies an entry
/// across recompositions.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub category: Category,
    pub data: ItemData,
}

impl FeedEntry {
    pub fn new(category: Category, data: ItemData) -> Self {
        Self { category, data }
    }

    pub fn id(&self) -> &str {
        self.data.id()
    }

    pub fn title(&self) -> &str {
        self.data.title()
    }

    /// Parsed numeric price.
    ///
    /// `None` when the payload has no price or the string is not a finite
    /// decimal numeral.
    pub fn price(&self) -> Option<f64> {
        self.data
            .price()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .filter(|p| p.is_finite())
    }

    pub fn is_promotional(&self) -> bool {
        self.category.is_promotional()
    }

    pub fn key(&self) -> EntryKey {
        EntryKey {
            category: self.category,
            id: self.id().to_string(),
        }
    }
}

/// Globally unique identity of an entry.
///
/// Ids are only unique within a collection in the fixtures, so internal
/// lookups key on the pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub category: Category,
    pub id: String,
}
