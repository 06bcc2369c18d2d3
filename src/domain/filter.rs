// src/domain/filter.rs

use std::collections::BTreeSet;

use serde::Serialize;

use super::listing::ListingItem;
use super::rating::{star_bucket, RATING_CHOICES};

/// What the user has chosen in the filter panel.
///
/// Ratings are multi-select, the category is single-select. Toggles return a
/// new value instead of mutating in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub selected_ratings: BTreeSet<u8>,
    pub selected_category: Option<String>,
}

impl FilterSelection {
    pub fn is_rating_selected(&self, rating: u8) -> bool {
        self.selected_ratings.contains(&rating)
    }

    pub fn is_category_selected(&self, category: &str) -> bool {
        self.selected_category.as_deref() == Some(category)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ratings.is_empty() && self.selected_category.is_none()
    }

    /// Adds or removes one star row. Values outside 1..=5 are ignored.
    pub fn toggle_rating(&self, rating: u8) -> FilterSelection {
        let mut next = self.clone();
        if !RATING_CHOICES.contains(&rating) {
            log::debug!("Ignoring rating outside 1..=5: {rating}");
            return next;
        }
        if next.selected_ratings.remove(&rating) {
            log::debug!("Deselected rating: {rating}");
        } else {
            next.selected_ratings.insert(rating);
            log::debug!("Selected rating: {rating}");
        }
        next
    }

    /// Single-select toggle: picks `category`, or clears it if already picked.
    pub fn toggle_category(&self, category: &str) -> FilterSelection {
        let mut next = self.clone();
        if self.is_category_selected(category) {
            next.selected_category = None;
            log::debug!("Deselected category: {category}");
        } else {
            next.selected_category = Some(category.to_string());
            log::debug!("Selected category: {category}");
        }
        next
    }

    /// Whether a listing passes both the rating and the category filter.
    pub fn matches(&self, item: &ListingItem) -> bool {
        let rating_ok = self.selected_ratings.is_empty()
            || self.selected_ratings.contains(&star_bucket(item.rating));
        let category_ok = self
            .selected_category
            .as_deref()
            .map_or(true, |c| item.has_category(c));
        rating_ok && category_ok
    }
}
