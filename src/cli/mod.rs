pub mod currencies;
pub mod enrich;
pub mod setup;
pub mod ui;
