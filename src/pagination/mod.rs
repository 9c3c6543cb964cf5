//! Offset/limit derivation and page number strips for paginated listings.
//!
//! A [`Paginator`] is configured once and shared; each request turns its query
//! parameters into a [`PageSet`], runs its data query with `offset`/`limit`,
//! then hands the total count back with [`PageSet::set_total`] before
//! rendering or serializing the set.

pub mod options;
pub mod paginator;
pub mod params;
pub mod render;
pub mod set;
pub mod window;

pub use options::{Options, OptionsError, PinMode};
pub use paginator::Paginator;
pub use params::QueryParams;
pub use render::PageLinks;
pub use set::PageSet;
pub use window::Window;
