pub mod filter;
pub mod listing;
pub mod rating;
pub mod text;
pub mod view_state;
pub mod viewport;
