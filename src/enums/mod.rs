//! Enumerated types.

mod tag_category;

pub use tag_category::TagCategory;
