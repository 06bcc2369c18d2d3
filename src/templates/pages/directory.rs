use crate::catalog::Catalog;
use crate::domain::view_state::ViewState;
use crate::templates::base_layout;
use crate::templates::components::header::SITE_TITLE;
use crate::templates::components::{card_overlay, card_tile, filter_panel, site_header};
use maud::{html, Markup};

pub struct DirectoryVm<'a> {
    pub state: &'a ViewState,
    pub catalog: &'a Catalog,
}

pub fn directory_page(vm: &DirectoryVm) -> Markup {
    base_layout(
        SITE_TITLE,
        html! {
            (site_header())
            (directory_region(vm))
        },
    )
}

/// Filter, tiles and the open overlay.
///
/// This is the only element listening for window resizes: it re-fetches
/// itself with the new width and every component below renders from that
/// one viewport value. The listener goes away with the element on swap.
pub fn directory_region(vm: &DirectoryVm) -> Markup {
    let state = vm.state;
    let listings = vm.catalog.filtered(&state.selection);
    let categories = vm.catalog.categories();

    let overlay = state.overlay.as_ref().and_then(|overlay| {
        let item = vm.catalog.get(overlay.index);
        if item.is_none() {
            log::debug!("No listing at index {}, overlay skipped", overlay.index);
        }
        item.map(|item| (item, overlay))
    });

    // Without a known width, measure once on load.
    let trigger = if state.viewport.width().is_none() {
        "load, resize from:window throttle:200ms"
    } else {
        "resize from:window throttle:200ms"
    };

    html! {
        main id="directory"
            class="directory"
            hx-get=(state.without_viewport().href("/directory"))
            hx-trigger=(trigger)
            hx-vals="js:{vw: window.innerWidth}"
            hx-swap="outerHTML"
        {
            (filter_panel(state, &categories))

            section class="listings" {
                p class="listings-count" {
                    (listings.len()) " of " (vm.catalog.len()) " products"
                }
                @if listings.is_empty() {
                    p class="listings-empty" {
                        @if state.selection.is_empty() {
                            "No products listed yet."
                        } @else {
                            "No products match these filters."
                        }
                    }
                }
                div class="card-grid" {
                    @for (index, item) in &listings {
                        (card_tile(*index, item, state))
                    }
                }
            }

            @if let Some((item, overlay)) = overlay {
                (card_overlay(item, overlay, state))
            }
        }
    }
}
