// Static assets, embedded at build time.
pub const MAIN_CSS: &str = include_str!("../static/main.css");
pub const LOGO_SVG: &str = include_str!("../static/logo.svg");
