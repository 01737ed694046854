//! Currency tables built from an exchange-rate XML description

use super::document::Document;
use super::error::FeedError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Target code whose rates define each currency's USD factor. Compared case-sensitively.
pub const USD_TARGET: &str = "USD";
pub const USD: &str = "usd";

const DOCUMENT_ID_PREFIX: &str = "id:shopping:currency::";

/// A single `<rate from=".." to=".." rate=".."/>` entry, codes as written in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Rate {
    pub from: String,
    pub to: String,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyFields {
    pub code: String,
    pub idx: usize,
    pub factor: f64,
    pub factor_map: BTreeMap<String, f64>,
}

pub type CurrencyDocument = Document<CurrencyFields>;

#[derive(Debug, Default)]
pub struct CurrencyTable {
    pub currencies: Vec<String>,
    pub rate_map: HashMap<String, BTreeMap<String, f64>>,
    pub usd_factor: HashMap<String, f64>,
}

impl CurrencyTable {
    pub fn from_xml(xml: &str) -> Result<Self, FeedError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = roxmltree::Document::parse_with_options(xml, options)?;
        let currencies = parse_currencies(&doc)?;
        let rates = parse_rates(&doc)?;
        debug!(
            currencies = currencies.len(),
            rates = rates.len(),
            "Parsed currency XML"
        );

        Ok(Self {
            currencies,
            rate_map: build_rate_map(&rates),
            usd_factor: build_usd_factor(&rates),
        })
    }

    /// Builds one document per currency in sorted code order.
    ///
    /// Fails on the first currency lacking a USD factor or a rate map, so either
    /// every document is produced or none is.
    pub fn documents(&self) -> Result<Vec<CurrencyDocument>, FeedError> {
        self.currencies
            .iter()
            .enumerate()
            .map(|(idx, code)| {
                let factor = *self
                    .usd_factor
                    .get(code)
                    .ok_or_else(|| FeedError::MissingFactor(code.clone()))?;
                let factor_map = self
                    .rate_map
                    .get(code)
                    .cloned()
                    .ok_or_else(|| FeedError::MissingRates(code.clone()))?;

                Ok(Document::new(
                    format!("{DOCUMENT_ID_PREFIX}{code}"),
                    CurrencyFields {
                        code: code.clone(),
                        idx,
                        factor,
                        factor_map,
                    },
                ))
            })
            .collect()
    }
}

/// Lowercased `code` of every `<currency>` element at any depth, sorted ascending.
pub fn parse_currencies(doc: &roxmltree::Document) -> Result<Vec<String>, FeedError> {
    let mut codes = doc
        .descendants()
        .filter(|n| n.has_tag_name("currency"))
        .map(|n| required_attribute(n, "currency", "code").map(str::to_lowercase))
        .collect::<Result<Vec<_>, _>>()?;
    codes.sort();
    Ok(codes)
}

/// Every `<rate>` element at any depth, in document order.
pub fn parse_rates(doc: &roxmltree::Document) -> Result<Vec<Rate>, FeedError> {
    doc.descendants()
        .filter(|n| n.has_tag_name("rate"))
        .map(|n| {
            let from = required_attribute(n, "rate", "from")?;
            let to = required_attribute(n, "rate", "to")?;
            let value = required_attribute(n, "rate", "rate")?;
            let rate = value
                .trim()
                .parse::<f64>()
                .map_err(|_| FeedError::InvalidRate {
                    from: from.to_string(),
                    to: to.to_string(),
                    value: value.to_string(),
                })?;
            Ok(Rate {
                from: from.to_string(),
                to: to.to_string(),
                rate,
            })
        })
        .collect()
}

/// `from -> to -> rate` with both codes lowercased. Later entries overwrite earlier ones.
pub fn build_rate_map(rates: &[Rate]) -> HashMap<String, BTreeMap<String, f64>> {
    let mut rate_map: HashMap<String, BTreeMap<String, f64>> = HashMap::new();
    for r in rates {
        rate_map
            .entry(r.from.to_lowercase())
            .or_default()
            .insert(r.to.to_lowercase(), r.rate);
    }
    rate_map
}

/// Value of one unit of each currency in USD, taken from the rates quoted against `USD`.
///
/// `usd` is pinned at 1.0; a quoted `USD -> USD` rate does not replace it.
pub fn build_usd_factor(rates: &[Rate]) -> HashMap<String, f64> {
    let mut usd_factor = HashMap::from([(USD.to_string(), 1.0)]);
    for r in rates.iter().filter(|r| r.to == USD_TARGET) {
        let code = r.from.to_lowercase();
        if code == USD {
            continue;
        }
        usd_factor.insert(code, r.rate);
    }
    usd_factor
}

fn required_attribute<'a>(
    node: roxmltree::Node<'a, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str, FeedError> {
    node.attribute(attribute)
        .ok_or(FeedError::MissingAttribute { element, attribute })
}
