use crate::domain::listing::ListingItem;
use crate::domain::text::{exceeds, truncate, ADDITIONAL_INFO_LIMIT};
use crate::domain::view_state::{Intent, Overlay, OverlaySection, ViewState};
use maud::{html, Markup};

/// Compact tile for one listing. `index` is its catalog position.
pub fn card_tile(index: usize, item: &ListingItem, state: &ViewState) -> Markup {
    html! {
        article class="card" id=(format!("listing-{index}")) {
            div class="card-head" {
                img class="card-thumb" src=(item.photo_url) alt=(item.heading);
                h2 class="card-title" { (item.heading) }
            }
            p class="card-description" { (item.tile_description()) }
            div class="card-chips" {
                @for tag in &item.category {
                    (chip(tag, state))
                }
            }
            div class="card-actions" {
                a class="btn btn-outline"
                    href=(state.link(Intent::OpenOverlay { index, section: OverlaySection::Details }))
                { "Know More" }
                a class="btn btn-primary"
                    href=(state.link(Intent::OpenOverlay { index, section: OverlaySection::Contact }))
                { "Contact" }
            }
        }
    }
}

/// Full-detail modal for the listing in `overlay`.
///
/// The section picked by the opening button gets the initial focus; the
/// markup is the same for both.
pub fn card_overlay(item: &ListingItem, overlay: &Overlay, state: &ViewState) -> Markup {
    let contact_first = overlay.section == OverlaySection::Contact;
    let info_is_long = exceeds(&item.additional_info, ADDITIONAL_INFO_LIMIT);
    let info = if info_is_long && !overlay.show_more_info {
        truncate(&item.additional_info, ADDITIONAL_INFO_LIMIT)
    } else {
        item.additional_info.clone()
    };

    html! {
        div class="overlay" role="dialog" aria-modal="true" aria-labelledby="overlay-title" {
            div class="overlay-panel" {
                div class="overlay-head" {
                    h2 id="overlay-title" { (item.heading) }
                    a class="overlay-close" href=(state.link(Intent::CloseOverlay)) aria-label="Close" {
                        svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" {
                            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" {}
                        }
                    }
                }
                div class="overlay-grid" id=(OverlaySection::Details.anchor()) tabindex="-1" autofocus[!contact_first] {
                    div {
                        img class="overlay-photo" src=(item.photo_url) alt=(item.heading);
                    }
                    div {
                        p class="muted" {
                            "Rating: "
                            span class="rating" { (item.rating_label()) }
                        }
                        p class="muted" { "Similar Products:" }
                        ul class="similar-products" {
                            @for product in &item.similar_products {
                                li { (product) }
                            }
                        }
                        p class="muted" { "Categories:" }
                        div class="card-chips" {
                            @for tag in &item.category {
                                (chip(tag, state))
                            }
                        }
                        div class="overlay-contact" id=(OverlaySection::Contact.anchor()) tabindex="-1" autofocus[contact_first] {
                            p class="muted" { "Contact Mail: " (item.contact_mail) }
                            p class="muted" {
                                "Website: "
                                a class="website" href=(item.website) target="_blank" rel="noopener noreferrer" {
                                    (item.website_label())
                                }
                            }
                        }
                    }
                }
                div class="overlay-info" {
                    p class="overlay-info-title" { "Additional Information:" }
                    p class="overlay-info-body" { (info) }
                    @if info_is_long {
                        a class="link" href=(state.link(Intent::ToggleMoreInfo)) {
                            @if overlay.show_more_info { "Show less" } @else { "Show more" }
                        }
                    }
                }
            }
        }
    }
}

/// Category tag; clicking it filters the directory by that tag.
fn chip(tag: &str, state: &ViewState) -> Markup {
    let active = state.selection.is_category_selected(tag);
    let href = state
        .apply(Intent::CloseOverlay)
        .link(Intent::ToggleCategory(tag.to_string()));

    html! {
        a class=(if active { "chip chip-active" } else { "chip" })
            href=(href)
            aria-pressed=(if active { "true" } else { "false" })
        { (tag) }
    }
}
