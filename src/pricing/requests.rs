//! Request DTOs for the quote boundary.
//!
//! The input collector submits its flat form state as one document; the
//! defaults mirror the form's initial widget values.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{CarModel, Selection, WeddingService, WeddingType};

/// Form state for one quote calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub wedding_type: WeddingType,
    pub car: CarModel,
    /// The form pre-selects decorations.
    #[serde(default = "default_include_decor")]
    pub include_decor: bool,
    /// Only meaningful for full weddings; dropped otherwise.
    #[serde(default)]
    pub pickup_groom: bool,
    pub distance_km: Decimal,
    /// Only meaningful for civil weddings; dropped otherwise.
    #[serde(default = "default_duration_hours")]
    pub duration_hours: Decimal,
}

fn default_include_decor() -> bool {
    true
}

fn default_duration_hours() -> Decimal {
    Decimal::ONE
}

impl QuoteRequest {
    /// Collapse the flat form state into a selection, keeping only the
    /// tier-specific field that applies to the chosen wedding type.
    pub fn into_selection(self) -> Selection {
        let service = match self.wedding_type {
            WeddingType::Full => WeddingService::Full {
                pickup_groom: self.pickup_groom,
            },
            WeddingType::Civil => WeddingService::Civil {
                duration_hours: self.duration_hours,
            },
        };
        Selection {
            service,
            car: self.car,
            include_decor: self.include_decor,
            distance_km: self.distance_km,
        }
    }
}
