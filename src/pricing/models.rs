//! Domain model for wedding car pricing.
//!
//! The price table structs mirror the external configuration shape exactly,
//! so a table deserializes straight from its source. The selection is a
//! tagged union: tier-specific inputs (groom pickup, ceremony duration)
//! cannot be read for the wrong tier.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Service tier offered by the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeddingType {
    #[serde(rename = "boda_completa")]
    Full,
    #[serde(rename = "boda_civil")]
    Civil,
}

impl WeddingType {
    /// Section key of this tier in the price table.
    pub fn table_key(&self) -> &'static str {
        match self {
            WeddingType::Full => "boda_completa",
            WeddingType::Civil => "boda_civil",
        }
    }
}

impl fmt::Display for WeddingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeddingType::Full => write!(f, "Boda completa"),
            WeddingType::Civil => write!(f, "Boda civil"),
        }
    }
}

/// Car offered by the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarModel {
    RollsRoyce,
    Mercedes,
    Bentley,
}

impl CarModel {
    /// Every car the quote form offers. Validation checks the table prices
    /// all of them under both tiers.
    pub const ALL: [CarModel; 3] = [CarModel::RollsRoyce, CarModel::Mercedes, CarModel::Bentley];

    /// Name shown to customers.
    pub fn display_name(&self) -> &'static str {
        match self {
            CarModel::RollsRoyce => "Rolls Royce",
            CarModel::Mercedes => "Mercedes",
            CarModel::Bentley => "Bentley",
        }
    }

    /// Key under which the car is priced in the table: the display name
    /// lowercased, with spaces as underscores.
    pub fn price_key(&self) -> String {
        self.display_name().to_lowercase().replace(' ', "_")
    }
}

impl fmt::Display for CarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Tier-specific part of a selection. Groom pickup only exists for full
/// weddings, ceremony duration only for civil ones.
#[derive(Debug, Clone, PartialEq)]
pub enum WeddingService {
    Full { pickup_groom: bool },
    Civil { duration_hours: Decimal },
}

impl WeddingService {
    pub fn wedding_type(&self) -> WeddingType {
        match self {
            WeddingService::Full { .. } => WeddingType::Full,
            WeddingService::Civil { .. } => WeddingType::Civil,
        }
    }
}

/// One quote's worth of user input. Built fresh from the form state on
/// every recalculation, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub service: WeddingService,
    pub car: CarModel,
    pub include_decor: bool,
    pub distance_km: Decimal,
}

/// Rates for a full wedding: car bases plus the two flat add-ons.
#[derive(Debug, Clone, Deserialize)]
pub struct FullWeddingRates {
    pub adornos: Decimal,
    pub recogida_novio: Decimal,
    /// Base price per car, keyed by [`CarModel::price_key`]. Flattened so
    /// the car keys sit beside the add-on keys, as the configuration does.
    #[serde(flatten)]
    pub cars: BTreeMap<String, Decimal>,
}

impl FullWeddingRates {
    pub fn car_price(&self, car: CarModel) -> Option<Decimal> {
        self.cars.get(&car.price_key()).copied()
    }
}

/// Rates for a civil ceremony: car bases, decorations, and the half-hour
/// rate for time past the first hour.
#[derive(Debug, Clone, Deserialize)]
pub struct CivilWeddingRates {
    pub adornos: Decimal,
    pub hora_extra_media: Decimal,
    #[serde(flatten)]
    pub cars: BTreeMap<String, Decimal>,
}

impl CivilWeddingRates {
    pub fn car_price(&self, car: CarModel) -> Option<Decimal> {
        self.cars.get(&car.price_key()).copied()
    }
}

/// Distance surcharge: free up to `limite_km`, billed per km beyond it.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceSurcharge {
    pub limite_km: Decimal,
    pub precio_km_extra: Decimal,
}

/// The whole pricing configuration. Loaded once per session, validated,
/// and passed by reference into the calculator.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceTable {
    pub boda_completa: FullWeddingRates,
    pub boda_civil: CivilWeddingRates,
    pub suplemento_distancia: DistanceSurcharge,
}

impl PriceTable {
    /// Check that the table prices every offered car under both tiers and
    /// contains no negative amounts.
    ///
    /// Returns every finding, not just the first, so an operator can fix
    /// the configuration in one pass. A table that fails here must never
    /// reach the calculator.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        check_cars(&mut errors, "boda_completa", &self.boda_completa.cars);
        check_non_negative(&mut errors, "boda_completa.adornos", self.boda_completa.adornos);
        check_non_negative(
            &mut errors,
            "boda_completa.recogida_novio",
            self.boda_completa.recogida_novio,
        );

        check_cars(&mut errors, "boda_civil", &self.boda_civil.cars);
        check_non_negative(&mut errors, "boda_civil.adornos", self.boda_civil.adornos);
        check_non_negative(
            &mut errors,
            "boda_civil.hora_extra_media",
            self.boda_civil.hora_extra_media,
        );

        check_non_negative(
            &mut errors,
            "suplemento_distancia.limite_km",
            self.suplemento_distancia.limite_km,
        );
        check_non_negative(
            &mut errors,
            "suplemento_distancia.precio_km_extra",
            self.suplemento_distancia.precio_km_extra,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_cars(errors: &mut Vec<String>, tier: &str, cars: &BTreeMap<String, Decimal>) {
    for car in CarModel::ALL {
        let key = car.price_key();
        match cars.get(&key) {
            None => errors.push(format!("{}: missing price for '{}'", tier, key)),
            Some(price) if *price < Decimal::ZERO => {
                errors.push(format!("{}.{}: negative price {}", tier, key, price))
            }
            Some(_) => {}
        }
    }
}

fn check_non_negative(errors: &mut Vec<String>, field: &str, value: Decimal) {
    if value < Decimal::ZERO {
        errors.push(format!("{}: negative value {}", field, value));
    }
}
