//! Response DTOs for the quote boundary.
//!
//! Presentation rounding lives here: amounts leave the crate rounded to two
//! decimals while the calculator keeps exact values.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{round_money, Quote};
use super::models::{Selection, WeddingService};

/// Currency every quote is denominated in.
pub const QUOTE_CURRENCY: &str = "EUR";

/// Money value for JSON responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    /// A euro amount rounded to two decimals for display.
    fn eur(amount: Decimal) -> Self {
        let mut amount = round_money(amount, 2);
        amount.rescale(2);
        Self {
            amount,
            currency: QUOTE_CURRENCY.to_string(),
        }
    }

    /// Render for display, e.g. `310.00 €`.
    pub fn formatted(&self) -> String {
        format!("{} €", self.amount)
    }
}

/// One rendered breakdown line.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteLineResponse {
    pub label: String,
    pub amount: MoneyResponse,
}

/// Echo of the inputs a quote was computed from, shown next to the
/// breakdown. Tier-specific fields are present only for their tier.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionSummary {
    pub wedding_type: String,
    pub car: String,
    pub include_decor: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_groom: Option<bool>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_hours: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_km: Decimal,
}

/// Renderer-facing quote: rounded total, labeled lines, input summary.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub total: MoneyResponse,
    pub lines: Vec<QuoteLineResponse>,
    pub selection: SelectionSummary,
}

impl QuoteResponse {
    /// Build the renderer-facing view of a computed quote: labels from the
    /// line items, every amount rounded to two decimals.
    pub fn from_quote(quote: &Quote, selection: &Selection) -> Self {
        let lines = quote
            .lines
            .iter()
            .map(|line| QuoteLineResponse {
                label: line.item.to_string(),
                amount: MoneyResponse::eur(line.amount),
            })
            .collect();

        let (pickup_groom, duration_hours) = match &selection.service {
            WeddingService::Full { pickup_groom } => (Some(*pickup_groom), None),
            WeddingService::Civil { duration_hours } => (None, Some(*duration_hours)),
        };

        Self {
            total: MoneyResponse::eur(quote.total),
            lines,
            selection: SelectionSummary {
                wedding_type: selection.service.wedding_type().to_string(),
                car: selection.car.display_name().to_string(),
                include_decor: selection.include_decor,
                pickup_groom,
                duration_hours,
                distance_km: selection.distance_km,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::pricing::calculators::{LineItem, QuoteLine};
    use crate::pricing::models::{CarModel, WeddingType};

    fn civil_selection() -> Selection {
        Selection {
            service: WeddingService::Civil {
                duration_hours: dec!(2),
            },
            car: CarModel::RollsRoyce,
            include_decor: false,
            distance_km: dec!(30),
        }
    }

    fn civil_quote() -> Quote {
        Quote {
            total: dec!(310),
            lines: vec![
                QuoteLine {
                    item: LineItem::CarBase {
                        tier: WeddingType::Civil,
                        car: CarModel::RollsRoyce,
                    },
                    amount: dec!(250),
                },
                QuoteLine {
                    item: LineItem::ExtraDuration {
                        half_hour_units: dec!(2),
                    },
                    amount: dec!(30),
                },
                QuoteLine {
                    item: LineItem::DistanceSurcharge {
                        extra_km: dec!(15),
                    },
                    amount: dec!(30),
                },
            ],
        }
    }

    #[test]
    fn test_amounts_are_rendered_with_two_decimals() {
        let response = QuoteResponse::from_quote(&civil_quote(), &civil_selection());

        assert_eq!(response.total.amount, dec!(310.00));
        assert_eq!(response.total.formatted(), "310.00 €");
        assert_eq!(response.lines[0].amount.formatted(), "250.00 €");
        assert_eq!(response.total.currency, QUOTE_CURRENCY);
    }

    #[test]
    fn test_presentation_rounding_is_half_even() {
        // 0.005 sits exactly between 0.00 and 0.01; half-even picks 0.00,
        // matching how the renderer's two-decimal format behaves.
        assert_eq!(MoneyResponse::eur(dec!(1.005)).formatted(), "1.00 €");
        assert_eq!(MoneyResponse::eur(dec!(1.015)).formatted(), "1.02 €");
    }

    #[test]
    fn test_lines_carry_human_readable_labels() {
        let response = QuoteResponse::from_quote(&civil_quote(), &civil_selection());

        let labels: Vec<&str> = response.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Boda civil - Rolls Royce",
                "Horas extra (2 medias horas)",
                "Suplemento por distancia (15 km extra)",
            ]
        );
    }

    #[test]
    fn test_summary_only_carries_the_applicable_tier_field() {
        let response = QuoteResponse::from_quote(&civil_quote(), &civil_selection());
        assert_eq!(response.selection.wedding_type, "Boda civil");
        assert_eq!(response.selection.pickup_groom, None);
        assert_eq!(response.selection.duration_hours, Some(dec!(2)));

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["selection"].get("pickup_groom").is_none());
        assert_eq!(json["selection"]["duration_hours"], "2");
    }

    #[test]
    fn test_amounts_serialize_as_strings() {
        let response = QuoteResponse::from_quote(&civil_quote(), &civil_selection());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["total"]["amount"], "310.00");
        assert_eq!(json["total"]["currency"], "EUR");
        assert_eq!(json["lines"][1]["amount"]["amount"], "30.00");
    }
}
