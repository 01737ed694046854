//! Typed failures for malformed or incomplete feed input

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Malformed currency XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("<{element}> element is missing the '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Invalid rate '{value}' for {from} -> {to}")]
    InvalidRate {
        from: String,
        to: String,
        value: String,
    },

    #[error("No USD factor for currency: {0}")]
    MissingFactor(String),

    #[error("No rate map for currency: {0}")]
    MissingRates(String),

    #[error("Malformed document on line {line}: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Item '{id}' has no '{field}' field")]
    MissingField { id: String, field: &'static str },

    #[error("Item '{id}' has a per_market_price entry at {index} that is not an object")]
    MalformedEntry { id: String, index: usize },
}
