use serde::{Deserialize, Serialize};

use super::rating::{format_rating, generate_stars};
use super::text::{truncate, truncate_url, DESCRIPTION_LIMIT, WEBSITE_LABEL_LIMIT};

/// One product entry of the directory, as supplied by the catalog.
///
/// Read-only input for the card: nothing here is validated, so broken URLs
/// and out-of-range ratings are rendered as they come.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    pub heading: String,
    pub photo_url: String,
    pub description: String,
    pub rating: f64,
    #[serde(default)]
    pub similar_products: Vec<String>,
    pub contact_mail: String,
    pub website: String,
    #[serde(default)]
    pub category: Vec<String>,
    pub additional_info: String,
}

impl ListingItem {
    /// Description as shown on the tile.
    pub fn tile_description(&self) -> String {
        truncate(&self.description, DESCRIPTION_LIMIT)
    }

    /// Link text for the website; the link itself keeps the full URL.
    pub fn website_label(&self) -> String {
        truncate_url(&self.website, WEBSITE_LABEL_LIMIT)
    }

    /// `★★★★½ (4.5)`
    pub fn rating_label(&self) -> String {
        format!(
            "{} ({})",
            generate_stars(self.rating),
            format_rating(self.rating)
        )
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c == category)
    }
}
