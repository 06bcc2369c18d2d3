use crate::domain::rating::{filter_row_stars, RATING_CHOICES};
use crate::domain::view_state::{Intent, ViewState};
use maud::{html, Markup};

/// Categories shown while the list is collapsed.
pub const COLLAPSED_CATEGORY_COUNT: usize = 3;

/// Filter sidebar: star rows (multi-select) and categories (single-select).
///
/// On mobile the panel sits behind a toggle button; on desktop it is always
/// shown and the button is not rendered.
pub fn filter_panel(state: &ViewState, categories: &[&str]) -> Markup {
    let visible_categories = if state.show_all_categories {
        categories
    } else {
        &categories[..categories.len().min(COLLAPSED_CATEGORY_COUNT)]
    };

    html! {
        aside class="filter" {
            @if state.shows_filter_toggle() {
                a class="filter-toggle" href=(state.link(Intent::ToggleFilterPanel)) {
                    @if state.filter_visible() { "✕" } @else { "Show Filter" }
                }
            }
            @if state.filter_visible() {
                div class="filter-panel" {
                    h2 class="filter-title" { "Filter" }

                    section class="filter-group" {
                        h3 { "Based on Star Rating" }
                        ul class="filter-options" {
                            @for rating in RATING_CHOICES {
                                (rating_row(rating, state))
                            }
                        }
                    }

                    section class="filter-group" {
                        h3 { "Categories" }
                        ul class="filter-options" {
                            @for category in visible_categories {
                                (category_row(category, state))
                            }
                        }
                        @if categories.len() > COLLAPSED_CATEGORY_COUNT {
                            a class="link" href=(state.link(Intent::ToggleCategoryList)) {
                                @if state.show_all_categories {
                                    "Show less categories"
                                } @else {
                                    "Show more categories"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// The whole row is one link, so any star in it toggles the row's rating.
fn rating_row(rating: u8, state: &ViewState) -> Markup {
    let selected = state.selection.is_rating_selected(rating);
    html! {
        li {
            a class="filter-option"
                href=(state.link(Intent::ToggleRating(rating)))
                role="checkbox"
                aria-checked=(if selected { "true" } else { "false" })
                aria-label=(format!("{rating} stars"))
            {
                input type="checkbox" tabindex="-1" checked[selected];
                span class="filter-stars" {
                    @for (glyph, filled) in filter_row_stars(rating) {
                        span class=(if filled { "star star-filled" } else { "star" }) { (glyph) }
                    }
                }
            }
        }
    }
}

fn category_row(category: &str, state: &ViewState) -> Markup {
    let selected = state.selection.is_category_selected(category);
    html! {
        li {
            a class="filter-option"
                href=(state.link(Intent::ToggleCategory(category.to_string())))
                role="checkbox"
                aria-checked=(if selected { "true" } else { "false" })
            {
                input type="checkbox" tabindex="-1" checked[selected];
                span { (category) }
            }
        }
    }
}
