pub mod item;

pub use item::{Catalog, Item};
