pub mod card;
pub mod error;
pub mod filter;
pub mod header;

pub use card::{card_overlay, card_tile};
pub use error::error_page;
pub use filter::filter_panel;
pub use header::site_header;
