use crate::assets::{LOGO_SVG, MAIN_CSS};
use crate::catalog::Catalog;
use crate::domain::filter::FilterSelection;
use crate::domain::listing::ListingItem;
use crate::domain::view_state::ViewState;
use crate::domain::viewport::{LEGACY_VIEWPORT_HINT, VIEWPORT_HINT};
use crate::errors::ServerError;
use crate::responses::{asset_response, html_response, json_response, ResultResp};
use crate::templates::pages::{directory_page, directory_region, DirectoryVm};
use astra::Request;
use serde::Serialize;

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub catalog: Catalog,
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    log::debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => {
            let state = view_state(&req);
            html_response(directory_page(&DirectoryVm {
                state: &state,
                catalog: &app.catalog,
            }))
        }
        // htmx swaps this in on resize.
        ("GET", "/directory") => {
            let state = view_state(&req);
            html_response(directory_region(&DirectoryVm {
                state: &state,
                catalog: &app.catalog,
            }))
        }
        ("GET", "/api/listings") => listings_json(&view_state(&req), &app.catalog),
        ("GET", "/static/main.css") => asset_response(MAIN_CSS, &mime::TEXT_CSS_UTF_8),
        ("GET", "/static/logo.svg") => asset_response(LOGO_SVG, &mime::IMAGE_SVG),
        _ => Err(ServerError::NotFound),
    }
}

/// Current selection plus the listings it lets through.
#[derive(Serialize)]
struct ListingsPayload<'a> {
    selection: &'a FilterSelection,
    total: usize,
    items: Vec<&'a ListingItem>,
}

fn listings_json(state: &ViewState, catalog: &Catalog) -> ResultResp {
    let items: Vec<&ListingItem> = catalog
        .filtered(&state.selection)
        .into_iter()
        .map(|(_, item)| item)
        .collect();

    json_response(&ListingsPayload {
        selection: &state.selection,
        total: items.len(),
        items,
    })
}

fn view_state(req: &Request) -> ViewState {
    ViewState::from_query(
        req.uri().query().unwrap_or(""),
        header_str(req, VIEWPORT_HINT),
        header_str(req, LEGACY_VIEWPORT_HINT),
    )
}

fn header_str<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}
