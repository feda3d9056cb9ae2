//! Name filtering and batch pagination for the gallery.

use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::catalog::{CATALOG, CelestialBody};

/// Entries revealed per "load more" press.
pub const PAGE_SIZE: usize = 6;

fn non_alnum() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static pattern"))
}

/// Lowercases, strips diacritics (NFKD + combining-mark removal), and
/// collapses runs of non-alphanumerics into single spaces.
pub fn normalize_term(input: &str) -> String {
    let lower = input.trim().to_lowercase();
    let no_diacritics: String = lower.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    non_alnum()
        .replace_all(&no_diacritics, " ")
        .trim()
        .to_string()
}

/// All catalog entries whose display name contains `term`
/// (case-insensitively), in catalog order. An empty term matches everything.
pub fn filter_bodies(term: &str) -> Vec<&'static CelestialBody> {
    let needle = normalize_term(term);
    if needle.is_empty() {
        return CATALOG.iter().collect();
    }
    CATALOG
        .iter()
        .filter(|b| normalize_term(b.name).contains(&needle))
        .collect()
}

/// Search term plus batch counter for the gallery view.
///
/// The filtered subsequence is revealed as a growing prefix of
/// `batch * PAGE_SIZE` entries; editing the term snaps the batch back to 1.
/// An empty filtered result is the valid "not found" state, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryQuery {
    term: String,
    batch: usize,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            batch: 1,
        }
    }
}

impl GalleryQuery {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn batch(&self) -> usize {
        self.batch
    }

    /// Updates the search term; resets the batch counter to 1 when the term
    /// actually changed.
    pub fn set_term(&mut self, term: &str) {
        if self.term != term {
            self.term = term.to_string();
            self.batch = 1;
        }
    }

    /// Reveals the next batch. No-op once the whole filtered subsequence is
    /// already visible.
    pub fn load_more(&mut self) {
        if self.has_more() {
            self.batch += 1;
        }
    }

    pub fn filtered(&self) -> Vec<&'static CelestialBody> {
        filter_bodies(&self.term)
    }

    /// The currently revealed prefix: `min(batch * PAGE_SIZE, filtered len)`
    /// entries.
    pub fn visible(&self) -> Vec<&'static CelestialBody> {
        let mut out = self.filtered();
        out.truncate(self.batch * PAGE_SIZE);
        out
    }

    pub fn has_more(&self) -> bool {
        self.filtered().len() > self.batch * PAGE_SIZE
    }
}
