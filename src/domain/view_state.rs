// src/domain/view_state.rs

use url::form_urlencoded;

use super::filter::FilterSelection;
use super::rating::RATING_CHOICES;
use super::viewport::Viewport;

/// Which part of the overlay gets the initial focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlaySection {
    #[default]
    Details,
    Contact,
}

impl OverlaySection {
    pub fn anchor(self) -> &'static str {
        match self {
            OverlaySection::Details => "listing-details",
            OverlaySection::Contact => "listing-contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    /// Catalog position of the listing shown.
    pub index: usize,
    pub section: OverlaySection,
    pub show_more_info: bool,
}

/// A user action on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ToggleRating(u8),
    ToggleCategory(String),
    ToggleCategoryList,
    ToggleFilterPanel,
    OpenOverlay {
        index: usize,
        section: OverlaySection,
    },
    CloseOverlay,
    ToggleMoreInfo,
}

/// Everything the directory page needs to render one request.
///
/// The state travels in the query string; every control on the page links to
/// `state.apply(intent)`, so rendering is a pure function of the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selection: FilterSelection,
    pub show_all_categories: bool,
    /// Mobile only: the panel was opened with the toggle button.
    pub filter_open: bool,
    pub viewport: Viewport,
    pub overlay: Option<Overlay>,
}

impl ViewState {
    /// Reads the state from a query string plus the viewport hint headers.
    ///
    /// Unknown keys and bad values are dropped, never rejected.
    pub fn from_query(query: &str, hint: Option<&str>, legacy_hint: Option<&str>) -> Self {
        let mut state = ViewState::default();
        let mut vw: Option<String> = None;
        let mut open: Option<usize> = None;
        let mut section = OverlaySection::Details;
        let mut show_more_info = false;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "rating" => match value.parse::<u8>() {
                    Ok(r) if RATING_CHOICES.contains(&r) => {
                        state.selection.selected_ratings.insert(r);
                    }
                    _ => log::debug!("Ignoring rating param {value:?}"),
                },
                "category" if !value.is_empty() => {
                    state.selection.selected_category = Some(value.into_owned());
                }
                "more" => state.show_all_categories = value == "1",
                "filter" => state.filter_open = value == "open",
                "vw" => vw = Some(value.into_owned()),
                "open" => open = value.parse().ok(),
                "section" if value == "contact" => section = OverlaySection::Contact,
                "info" => show_more_info = value == "1",
                _ => log::debug!("Ignoring query param {key}={value}"),
            }
        }

        state.viewport = Viewport::from_hints(vw.as_deref(), hint, legacy_hint);
        state.overlay = open.map(|index| Overlay {
            index,
            section,
            show_more_info,
        });
        state
    }

    /// Next state after `intent`. `self` is left untouched.
    pub fn apply(&self, intent: Intent) -> ViewState {
        let mut next = self.clone();
        match intent {
            Intent::ToggleRating(rating) => next.selection = self.selection.toggle_rating(rating),
            Intent::ToggleCategory(category) => {
                next.selection = self.selection.toggle_category(&category)
            }
            Intent::ToggleCategoryList => next.show_all_categories = !self.show_all_categories,
            Intent::ToggleFilterPanel => next.filter_open = !self.filter_open,
            Intent::OpenOverlay { index, section } => {
                next.overlay = Some(Overlay {
                    index,
                    section,
                    show_more_info: false,
                })
            }
            Intent::CloseOverlay => next.overlay = None,
            Intent::ToggleMoreInfo => {
                if let Some(overlay) = next.overlay.as_mut() {
                    overlay.show_more_info = !overlay.show_more_info;
                }
            }
        }
        next
    }

    /// Same state without the viewport width, for requests whose width is
    /// supplied separately.
    pub fn without_viewport(&self) -> ViewState {
        ViewState {
            viewport: Viewport::unknown(),
            ..self.clone()
        }
    }

    pub fn filter_visible(&self) -> bool {
        !self.viewport.is_mobile() || self.filter_open
    }

    pub fn shows_filter_toggle(&self) -> bool {
        self.viewport.is_mobile()
    }

    pub fn to_query(&self) -> String {
        let mut q = form_urlencoded::Serializer::new(String::new());
        for rating in &self.selection.selected_ratings {
            q.append_pair("rating", &rating.to_string());
        }
        if let Some(category) = &self.selection.selected_category {
            q.append_pair("category", category);
        }
        if self.show_all_categories {
            q.append_pair("more", "1");
        }
        if self.filter_open {
            q.append_pair("filter", "open");
        }
        if let Some(width) = self.viewport.width() {
            q.append_pair("vw", &width.to_string());
        }
        if let Some(overlay) = &self.overlay {
            q.append_pair("open", &overlay.index.to_string());
            if overlay.section == OverlaySection::Contact {
                q.append_pair("section", "contact");
            }
            if overlay.show_more_info {
                q.append_pair("info", "1");
            }
        }
        q.finish()
    }

    pub fn href(&self, path: &str) -> String {
        let query = self.to_query();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }

    /// Link on the full page to the state after `intent`.
    ///
    /// Opening the overlay at the contact section also jumps to it.
    pub fn link(&self, intent: Intent) -> String {
        let next = self.apply(intent);
        let mut href = next.href("/");
        if let Some(overlay) = &next.overlay {
            if overlay.section == OverlaySection::Contact {
                href.push('#');
                href.push_str(overlay.section.anchor());
            }
        }
        href
    }
}
