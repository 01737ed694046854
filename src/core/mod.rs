//! Core feed types and transformations

pub mod config;
pub mod currency;
pub mod document;
pub mod error;
pub mod item;
pub mod log;

// Re-export main types for cleaner imports
pub use currency::{CurrencyDocument, CurrencyTable};
pub use document::Document;
pub use error::FeedError;
pub use item::ItemDocument;
