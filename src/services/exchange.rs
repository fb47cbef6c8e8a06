//! Currency conversion
//!
//! Pure conversion between currencies at the session's fixed rates,
//! normalized through the base currency. Unknown codes are an explicit
//! error rather than a silent NaN.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, RateTable};

/// The result of one conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Converted amount, rounded to the nearest cent
    pub converted: Money,
    /// Effective rate: units of `to` per unit of `from`
    pub rate: f64,
}

/// Convert a positive amount between two currencies in the table
///
/// Cross-rates go through the base currency:
/// `converted = amount / rate[from] * rate[to]`.
pub fn convert(
    amount: Money,
    from: &str,
    to: &str,
    rates: &RateTable,
) -> LedgerResult<Conversion> {
    if !amount.is_positive() {
        return Err(LedgerError::invalid_amount(amount.to_string()));
    }

    let from_rate = rates.get(from)?.rate;
    let to_rate = rates.get(to)?.rate;

    let converted = Money::from_float(amount.as_float() / from_rate * to_rate);
    let rate = to_rate / from_rate;

    Ok(Conversion { converted, rate })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RateTable {
        RateTable::default()
    }

    #[test]
    fn test_usd_to_eur_at_fixed_rate() {
        let conversion = convert(Money::from_cents(10000), "USD", "EUR", &table()).unwrap();
        assert_eq!(conversion.converted.cents(), 9250);
        assert!((conversion.rate - 0.9250).abs() < 1e-9);
    }

    #[test]
    fn test_identity_conversion() {
        let conversion = convert(Money::from_cents(12345), "GBP", "GBP", &table()).unwrap();
        assert_eq!(conversion.converted.cents(), 12345);
        assert!((conversion.rate - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_within_rounding_tolerance() {
        let table = table();
        let amount = Money::from_cents(10000);

        for from in ["USD", "EUR", "GBP", "JPY", "CAD"] {
            for to in ["USD", "EUR", "GBP", "JPY", "CAD"] {
                let there = convert(amount, from, to, &table).unwrap();
                let back = convert(there.converted, to, from, &table).unwrap();
                let drift = (back.converted - amount).abs();
                assert!(
                    drift.cents() <= 2,
                    "{} -> {} -> {} drifted {} cents",
                    from,
                    to,
                    from,
                    drift.cents()
                );
            }
        }
    }

    #[test]
    fn test_transitivity_through_intermediate() {
        let table = table();
        let amount = Money::from_cents(50000);

        let direct = convert(amount, "USD", "GBP", &table).unwrap().converted;
        let via_eur = convert(amount, "USD", "EUR", &table)
            .and_then(|c| convert(c.converted, "EUR", "GBP", &table))
            .unwrap()
            .converted;

        assert!((direct - via_eur).abs().cents() <= 2);
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(matches!(
            convert(Money::zero(), "USD", "EUR", &table()),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            convert(Money::from_cents(-100), "USD", "EUR", &table()),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_currency() {
        let err = convert(Money::from_cents(100), "USD", "BTC", &table()).unwrap_err();
        assert!(matches!(err, LedgerError::UnknownCurrency(ref code) if code == "BTC"));

        let err = convert(Money::from_cents(100), "XYZ", "USD", &table()).unwrap_err();
        assert!(matches!(err, LedgerError::UnknownCurrency(ref code) if code == "XYZ"));
    }

    #[test]
    fn test_swap_is_convert_with_arguments_exchanged() {
        let table = table();
        let forward = convert(Money::from_cents(10000), "EUR", "JPY", &table).unwrap();
        let swapped = convert(Money::from_cents(10000), "JPY", "EUR", &table).unwrap();
        assert!((forward.rate * swapped.rate - 1.0).abs() < 1e-9);
    }
}
