// src/domain/rating.rs

pub const MAX_STARS: u8 = 5;

/// The star rows offered by the filter, lowest first.
pub const RATING_CHOICES: [u8; 5] = [1, 2, 3, 4, 5];

const FILLED: char = '★';
const HALF: char = '½';
const EMPTY: char = '☆';

/// Clamps a raw rating into `[0, 5]`; NaN counts as zero.
fn clamped(rating: f64) -> f64 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, f64::from(MAX_STARS))
    }
}

/// Star glyphs for a listing rating.
///
/// `⌊r⌋` filled stars, one half glyph when `r` has a fractional part, then
/// `⌊5 - r⌋` empty stars. Any rating in `[0, 5]` yields exactly five glyphs.
/// Ratings outside that range are clamped for the glyphs only.
pub fn generate_stars(rating: f64) -> String {
    let r = clamped(rating);
    let filled = r.floor() as usize;
    let half = r.fract() != 0.0;
    let empty = (f64::from(MAX_STARS) - r).floor() as usize;

    let mut out = String::with_capacity((filled + empty + 1) * 3);
    out.extend(std::iter::repeat(FILLED).take(filled));
    if half {
        out.push(HALF);
    }
    out.extend(std::iter::repeat(EMPTY).take(empty));
    out
}

/// Shortest textual form of a rating: `4.5`, `3`, `-1`.
pub fn format_rating(rating: f64) -> String {
    format!("{rating}")
}

/// The whole-star bucket a rating falls in, used by the rating filter.
pub fn star_bucket(rating: f64) -> u8 {
    clamped(rating).floor() as u8
}

/// Glyphs for one filter row: `row` filled stars padded with empty ones.
pub fn filter_row_stars(row: u8) -> Vec<(char, bool)> {
    (0..MAX_STARS)
        .map(|i| if i < row { (FILLED, true) } else { (EMPTY, false) })
        .collect()
}
