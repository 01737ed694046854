//! Per-market price enrichment of item documents

use super::document::Document;
use super::error::FeedError;
use serde_json::{Map, Value, json};
use tracing::debug;

pub const CURRENCY_REF: &str = "currency_ref";
pub const PRICE: &str = "price";
pub const PER_MARKET_PRICE: &str = "per_market_price";

const MARKET_SEPARATOR: &str = "::";

pub type ItemDocument = Document<Map<String, Value>>;

/// Lowercased segment after the last `::` of a currency reference.
///
/// A reference without a separator is taken whole.
pub fn native_market(currency_ref: &str) -> String {
    currency_ref
        .rsplit(MARKET_SEPARATOR)
        .next()
        .unwrap_or(currency_ref)
        .to_lowercase()
}

/// Adds the item's native `{market, price}` entry to `per_market_price` unless one
/// for that market is already present. Returns whether the document changed.
///
/// A missing or non-list `per_market_price` is replaced by an empty list first.
/// Entries inside an existing list must be objects.
pub fn enrich(item: &mut ItemDocument) -> Result<bool, FeedError> {
    let market = item
        .fields
        .get(CURRENCY_REF)
        .and_then(Value::as_str)
        .map(native_market)
        .ok_or_else(|| FeedError::MissingField {
            id: item.put.clone(),
            field: CURRENCY_REF,
        })?;
    let price = item
        .fields
        .get(PRICE)
        .cloned()
        .ok_or_else(|| FeedError::MissingField {
            id: item.put.clone(),
            field: PRICE,
        })?;

    let slot = item.fields.entry(PER_MARKET_PRICE).or_insert(Value::Null);
    let mut entries = match slot.take() {
        Value::Array(entries) => entries,
        _ => Vec::new(),
    };
    if let Some(index) = entries.iter().position(|e| !e.is_object()) {
        *slot = Value::Array(entries);
        return Err(FeedError::MalformedEntry {
            id: item.put.clone(),
            index,
        });
    }
    let priced = entries
        .iter()
        .any(|e| e.get("market").and_then(Value::as_str) == Some(market.as_str()));
    if priced {
        debug!(id = %item.put, %market, "Native market already priced");
    } else {
        debug!(id = %item.put, %market, "Adding native market price");
        entries.push(json!({ "market": market, "price": price }));
    }
    *slot = Value::Array(entries);

    Ok(!priced)
}
