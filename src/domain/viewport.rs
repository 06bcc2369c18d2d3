// src/domain/viewport.rs

/// Widest viewport, in logical pixels, that still gets the mobile layout.
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Client hint header carrying the layout viewport width.
pub const VIEWPORT_HINT: &str = "Sec-CH-Viewport-Width";
/// Pre-standard spelling of the same hint.
pub const LEGACY_VIEWPORT_HINT: &str = "Viewport-Width";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

/// The width the page is being rendered for.
///
/// One value per request, handed to every component, so all of them agree on
/// the breakpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    width: Option<u32>,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width: Some(width) }
    }

    pub fn unknown() -> Self {
        Self { width: None }
    }

    /// Resolves the width from an explicit `vw` value first, then the hint
    /// headers. Unparsable values are skipped.
    pub fn from_hints(explicit: Option<&str>, hint: Option<&str>, legacy: Option<&str>) -> Self {
        [explicit, hint, legacy]
            .into_iter()
            .flatten()
            .find_map(parse_width)
            .map_or_else(Self::unknown, Self::new)
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Unknown widths render as desktop.
    pub fn breakpoint(&self) -> Breakpoint {
        match self.width {
            Some(w) if w <= MOBILE_MAX_WIDTH => Breakpoint::Mobile,
            _ => Breakpoint::Desktop,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.breakpoint() == Breakpoint::Mobile
    }
}

fn parse_width(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    // Hints may arrive as decimals ("412.5").
    let parsed = trimmed.parse::<u32>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w >= 0.0)
            .map(|w| w as u32)
    });
    if parsed.is_none() {
        log::debug!("Ignoring unparsable viewport width: {raw:?}");
    }
    parsed
}
