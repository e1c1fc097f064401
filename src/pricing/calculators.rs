//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no clock, no ambient
//! configuration. The price table comes in as an argument so every quote is
//! exactly reproducible.

use std::fmt;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{CarModel, PriceTable, Selection, WeddingService, WeddingType};

/// Billing increment for ceremony time past the first hour.
const HALF_HOUR: Decimal = dec!(0.5);

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use cochesbodas_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Quote-time failure: the table does not price the selected car for the
/// selected tier. Tables coming through the loader are validated up front,
/// so this only fires for tables assembled by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("price table has no '{}' entry under '{}'", .price_key, .tier.table_key())]
    MissingCarPrice { tier: WeddingType, price_key: String },
}

impl PricingError {
    fn missing_car(tier: WeddingType, car: CarModel) -> Self {
        PricingError::MissingCarPrice {
            tier,
            price_key: car.price_key(),
        }
    }
}

/// One applied contribution in a quote breakdown.
#[derive(Debug, Clone, PartialEq)]
pub enum LineItem {
    /// Base rate for the selected car under the selected tier.
    CarBase { tier: WeddingType, car: CarModel },
    /// Flat decoration add-on.
    Decor,
    /// Flat groom pickup add-on (full weddings only).
    GroomPickup,
    /// Ceremony time past the first hour, billed per half hour.
    ExtraDuration { half_hour_units: Decimal },
    /// Kilometres past the free-distance threshold.
    DistanceSurcharge { extra_km: Decimal },
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineItem::CarBase { tier, car } => write!(f, "{} - {}", tier, car),
            LineItem::Decor => f.write_str("Adornos"),
            LineItem::GroomPickup => f.write_str("Recogida del novio"),
            LineItem::ExtraDuration { half_hour_units } => {
                write!(f, "Horas extra ({} medias horas)", half_hour_units)
            }
            LineItem::DistanceSurcharge { extra_km } => {
                write!(f, "Suplemento por distancia ({} km extra)", extra_km)
            }
        }
    }
}

/// One line of a quote breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLine {
    pub item: LineItem,
    pub amount: Decimal,
}

/// A computed quote: exact total plus the contributions that produced it.
///
/// Amounts are unrounded; display rounding happens in the response layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub total: Decimal,
    pub lines: Vec<QuoteLine>,
}

/// Compute a quote for one selection against the given price table.
///
/// Deterministic and side-effect free: the same table and selection always
/// produce the same total and the same breakdown lines, in the same order
/// (car base, decorations, groom pickup, extra duration, distance). A
/// condition that does not apply contributes no line.
pub fn compute_quote(table: &PriceTable, selection: &Selection) -> Result<Quote, PricingError> {
    let mut lines = Vec::new();

    match &selection.service {
        WeddingService::Full { pickup_groom } => {
            let rates = &table.boda_completa;
            let base = rates
                .car_price(selection.car)
                .ok_or_else(|| PricingError::missing_car(WeddingType::Full, selection.car))?;
            lines.push(QuoteLine {
                item: LineItem::CarBase {
                    tier: WeddingType::Full,
                    car: selection.car,
                },
                amount: base,
            });
            if selection.include_decor {
                lines.push(QuoteLine {
                    item: LineItem::Decor,
                    amount: rates.adornos,
                });
            }
            if *pickup_groom {
                lines.push(QuoteLine {
                    item: LineItem::GroomPickup,
                    amount: rates.recogida_novio,
                });
            }
        }
        WeddingService::Civil { duration_hours } => {
            let rates = &table.boda_civil;
            let base = rates
                .car_price(selection.car)
                .ok_or_else(|| PricingError::missing_car(WeddingType::Civil, selection.car))?;
            lines.push(QuoteLine {
                item: LineItem::CarBase {
                    tier: WeddingType::Civil,
                    car: selection.car,
                },
                amount: base,
            });
            if selection.include_decor {
                lines.push(QuoteLine {
                    item: LineItem::Decor,
                    amount: rates.adornos,
                });
            }
            if *duration_hours > Decimal::ONE {
                // Fractional half hours bill proportionally, no rounding.
                let half_hour_units = (*duration_hours - Decimal::ONE) / HALF_HOUR;
                lines.push(QuoteLine {
                    item: LineItem::ExtraDuration { half_hour_units },
                    amount: rates.hora_extra_media * half_hour_units,
                });
            }
        }
    }

    let surcharge = &table.suplemento_distancia;
    if selection.distance_km > surcharge.limite_km {
        let extra_km = selection.distance_km - surcharge.limite_km;
        lines.push(QuoteLine {
            item: LineItem::DistanceSurcharge { extra_km },
            amount: extra_km * surcharge.precio_km_extra,
        });
    }

    let total = lines.iter().map(|line| line.amount).sum();
    Ok(Quote { total, lines })
}
