//! Pricing core for the Coches de Bodas Aranjuez quote generator.
//!
//! Computes wedding car rental quotes from a validated price table and the
//! customer's selections. The crate is the calculation boundary only: an
//! input collector feeds it [`pricing::QuoteRequest`] values and a display
//! renderer consumes [`pricing::QuoteResponse`] values. The price table is
//! sourced once per session through [`config`] and passed into the
//! calculator by reference, never held as global state.

pub mod config;
pub mod error;
pub mod pricing;

// Re-export the session entry points and the quote pipeline
pub use config::{load_price_table, price_table_from_env};
pub use error::ConfigError;
pub use pricing::{
    compute_quote, round_money, PriceTable, PricingError, Quote, QuoteRequest, QuoteResponse,
    Selection,
};
