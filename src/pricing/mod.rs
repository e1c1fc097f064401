//! Pricing engine for wedding car quotes.
//!
//! Pure quote computation over an explicitly passed price table, plus the
//! serde DTOs for the form/renderer boundary.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;

// Re-export commonly used items
pub use calculators::{compute_quote, round_money, LineItem, PricingError, Quote, QuoteLine};
pub use models::{CarModel, PriceTable, Selection, WeddingService, WeddingType};
pub use requests::QuoteRequest;
pub use responses::{MoneyResponse, QuoteLineResponse, QuoteResponse, SelectionSummary};
