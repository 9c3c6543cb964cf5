pub mod items;

pub use items::{api_items, list_items};
