//! Application state.
//!
//! [`App`] owns the cached [`FeedSnapshot`], the composed feed currently on
//! screen, and the UI state around it (selection, overlay, theme).  It is
//! the only place that decides *when* to recompose:
//!
//! * the first snapshot is composed as soon as it arrives,
//! * later snapshots only replace the cache and mark it pending,
//! * a collection that failed to load keeps its previously cached items,
//! * a sort change or an explicit refresh (`r`) recomposes from the cache.

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use ratatui::widgets::ListState;

use crate::feed::{self, Category, EntryKey, FeedEntry, FeedSnapshot, Interleaver, SortMode};
use crate::source::LoadReport;
use crate::theme::{Theme, ThemeStore};

pub struct App {
    /// Latest loaded collections; `None` until the first load arrives.
    snapshot: Option<FeedSnapshot>,
    /// A snapshot newer than what is on screen is cached.
    pub pending: bool,
    /// Composed and interleaved feed, in display order.
    pub entries: Vec<FeedEntry>,
    pub sort: SortMode,
    interleaver: Interleaver,
    rng: StdRng,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the detail overlay for the selected entry is shown.
    pub detail_open: bool,
    pub theme: Theme,
    theme_store: Option<ThemeStore>,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last status message.
    pub status: String,
    pub last_refresh: Option<DateTime<Local>>,
}

impl App {
    pub fn new(sort: SortMode, interleaver: Interleaver, rng: StdRng) -> Self {
        Self {
            snapshot: None,
            pending: false,
            entries: Vec::new(),
            sort,
            interleaver,
            rng,
            list_state: ListState::default(),
            detail_open: false,
            theme: Theme::default(),
            theme_store: None,
            quit: false,
            status: "Loading listings…".into(),
            last_refresh: None,
        }
    }

    /// Load the saved theme and persist future toggles to `store`.
    pub fn with_theme_store(mut self, store: ThemeStore) -> Self {
        self.theme = store.load();
        self.theme_store = Some(store);
        self
    }

    // -- data ----------------------------------------------------------------

    /// Cache a freshly loaded snapshot.
    ///
    /// Only the first one is shown right away; later ones wait for
    /// [`recompose`](Self::recompose) so the feed does not reshuffle under
    /// the user.  Collections listed in the report's failures keep what
    /// the previous snapshot had for them.
    pub fn apply_snapshot(&mut self, report: LoadReport) {
        let first = self.snapshot.is_none();
        let failed: Vec<Category> = Category::ALL.into_iter().filter(|c| report.failed(*c)).collect();
        let LoadReport { mut snapshot, failures } = report;
        if let Some(previous) = &self.snapshot {
            for category in failed {
                snapshot.keep_collection(previous, category);
            }
        }
        let count = snapshot.len();

        self.snapshot = Some(snapshot);
        self.last_refresh = Some(Local::now());

        let mut status = if first {
            self.recompose();
            format!("Loaded {count} listings")
        } else {
            self.pending = true;
            format!("{count} listings available, press r to refresh")
        };
        if let Some(first_failure) = failures.first() {
            status.push_str(&format!(
                " ({} failed: {first_failure})",
                failures.len()
            ));
        }
        self.status = status;
    }

    /// Rebuild the feed from the cached snapshot.
    ///
    /// The selection follows its entry when that entry is still present.
    pub fn recompose(&mut self) {
        let Some(snapshot) = self.snapshot.as_ref() else {
            return;
        };

        let selected_key = self.selected_key();
        self.entries = feed::recompose(snapshot, self.sort, &self.interleaver, &mut self.rng);
        self.pending = false;

        let index = selected_key.and_then(|key| self.entries.iter().position(|e| e.key() == key));
        match (index, self.list_state.selected()) {
            (Some(i), _) => self.list_state.select(Some(i)),
            (None, Some(_)) if !self.entries.is_empty() => {
                self.list_state.select(Some(0));
                self.detail_open = false;
            }
            (None, Some(_)) => {
                self.list_state.select(None);
                self.detail_open = false;
            }
            (None, None) => {}
        }

        tracing::info!(entries = self.entries.len(), sort = %self.sort, "recomposed feed");
    }

    /// Explicit refresh request from the user.
    pub fn refresh(&mut self) {
        if self.snapshot.is_none() {
            return;
        }
        self.recompose();
        self.status = format!("Showing {} listings", self.entries.len());
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        if mode == self.sort {
            return;
        }
        self.sort = mode;
        self.recompose();
        self.status = format!("Sorted by {mode}");
    }

    pub fn cycle_sort(&mut self) {
        self.set_sort(self.sort.next());
    }

    // -- selection & overlay -------------------------------------------------

    pub fn selected_entry(&self) -> Option<&FeedEntry> {
        self.list_state.selected().and_then(|i| self.entries.get(i))
    }

    fn selected_key(&self) -> Option<EntryKey> {
        self.selected_entry().map(FeedEntry::key)
    }

    pub fn toggle_details(&mut self) {
        if self.detail_open {
            self.detail_open = false;
        } else if self.selected_entry().is_some() {
            self.detail_open = true;
        }
    }

    /// `Esc` closes the overlay first; only a second press quits.
    pub fn back(&mut self) {
        if self.detail_open {
            self.detail_open = false;
        } else {
            self.quit = true;
        }
    }

    // -- theme ---------------------------------------------------------------

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Some(store) = &self.theme_store {
            if let Err(e) = store.save(self.theme) {
                tracing::warn!(error = %e, "could not save theme");
                self.status = format!("Theme not saved: {e}");
            }
        }
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.entries.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.entries.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.entries.is_empty() {
            self.list_state.select(Some(self.entries.len() - 1));
        }
    }
}
