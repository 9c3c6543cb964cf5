pub mod config;
pub mod handlers;
pub mod models;
pub mod pagination;

pub use pagination::{Options, PageSet, Paginator, PinMode};
