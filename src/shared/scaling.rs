//! Conversion between chain amounts and human-readable prices/quantities.
//!
//! Chain prices are quote base-units per base base-unit, so a human price
//! is `raw * 10^(base - quote)` and a human quantity is `raw / 10^base`.
//! All math uses `rust_decimal::Decimal`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::denom::Denom;

/// Errors that can occur during scaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    InvalidDecimal { input: String, reason: String },
    Overflow { context: String },
    NonPositive(String),
    /// Rounding down to the market tick left nothing.
    BelowTick { value: String, tick: String },
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::InvalidDecimal { input, reason } => {
                write!(f, "Invalid decimal '{}': {}", input, reason)
            }
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
            ScalingError::NonPositive(v) => write!(f, "Value must be positive, got {}", v),
            ScalingError::BelowTick { value, tick } => {
                write!(f, "{} is below the minimum tick {}", value, tick)
            }
        }
    }
}

impl std::error::Error for ScalingError {}

/// Parse a decimal string as sent by the exchange API.
pub fn parse_decimal(input: &str) -> Result<Decimal, ScalingError> {
    Decimal::from_str(input.trim())
        .or_else(|_| Decimal::from_scientific(input.trim()))
        .map_err(|e| ScalingError::InvalidDecimal {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// `10^exp` for any exponent `Decimal` can represent.
fn pow10(exp: i64) -> Result<Decimal, ScalingError> {
    let overflow = || ScalingError::Overflow {
        context: format!("10^{}", exp),
    };
    if exp >= 0 {
        let n = u32::try_from(exp).map_err(|_| overflow())?;
        let value = 10i128.checked_pow(n).ok_or_else(overflow)?;
        Decimal::try_from_i128_with_scale(value, 0).map_err(|_| overflow())
    } else {
        let scale = u32::try_from(-exp).map_err(|_| overflow())?;
        Decimal::try_new(1, scale).map_err(|_| overflow())
    }
}

fn mul(a: Decimal, b: Decimal, context: &str) -> Result<Decimal, ScalingError> {
    a.checked_mul(b).ok_or_else(|| ScalingError::Overflow {
        context: context.to_string(),
    })
}

/// Round `value` down to a multiple of `tick`.
fn floor_to_tick(value: Decimal, tick: Decimal) -> Result<Decimal, ScalingError> {
    if tick <= Decimal::ZERO {
        return Ok(value);
    }
    let steps = value
        .checked_div(tick)
        .ok_or_else(|| ScalingError::Overflow {
            context: "value / tick".to_string(),
        })?
        .floor();
    let floored = mul(steps, tick, "steps * tick")?;
    if floored.is_zero() {
        return Err(ScalingError::BelowTick {
            value: value.to_string(),
            tick: tick.to_string(),
        });
    }
    Ok(floored.normalize())
}

impl Denom {
    /// Human price from a chain price.
    pub fn price_to_human(&self, raw: Decimal) -> Result<Decimal, ScalingError> {
        let exp = i64::from(self.base) - i64::from(self.quote);
        Ok(mul(raw, pow10(exp)?, "price * 10^(base - quote)")?.normalize())
    }

    /// Human quantity from a chain quantity.
    pub fn quantity_to_human(&self, raw: Decimal) -> Result<Decimal, ScalingError> {
        Ok(mul(raw, pow10(-i64::from(self.base))?, "quantity / 10^base")?.normalize())
    }

    /// Chain price for a human price, rounded down to the market's price tick.
    pub fn price_to_chain(&self, price: Decimal) -> Result<Decimal, ScalingError> {
        if price <= Decimal::ZERO {
            return Err(ScalingError::NonPositive(price.to_string()));
        }
        let exp = i64::from(self.quote) - i64::from(self.base);
        let raw = mul(price, pow10(exp)?, "price * 10^(quote - base)")?;
        floor_to_tick(raw, self.min_price_tick_size)
    }

    /// Chain quantity for a human quantity, rounded down to the market's
    /// quantity tick.
    pub fn quantity_to_chain(&self, quantity: Decimal) -> Result<Decimal, ScalingError> {
        if quantity <= Decimal::ZERO {
            return Err(ScalingError::NonPositive(quantity.to_string()));
        }
        let raw = mul(quantity, pow10(i64::from(self.base))?, "quantity * 10^base")?;
        floor_to_tick(raw, self.min_quantity_tick_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inj_usdt() -> Denom {
        Denom {
            description: "Mainnet Spot INJ/USDT".to_string(),
            base: 18,
            quote: 6,
            min_price_tick_size: parse_decimal("0.000000000000001").unwrap(),
            min_quantity_tick_size: parse_decimal("1000000000000000").unwrap(),
        }
    }

    fn d(s: &str) -> Decimal {
        parse_decimal(s).unwrap()
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(d("1.50"), Decimal::new(150, 2));
        assert_eq!(d(" 42 "), Decimal::from(42));
        assert_eq!(d("1e-3"), Decimal::new(1, 3));
        assert!(matches!(
            parse_decimal("abc"),
            Err(ScalingError::InvalidDecimal { .. })
        ));
    }

    #[test]
    fn test_price_round_trip() {
        let denom = inj_usdt();
        // 25.5 USDT per INJ
        let raw = denom.price_to_chain(d("25.5")).unwrap();
        assert_eq!(raw, d("0.0000000000255"));
        assert_eq!(denom.price_to_human(raw).unwrap(), d("25.5"));
    }

    #[test]
    fn test_quantity_round_trip() {
        let denom = inj_usdt();
        let raw = denom.quantity_to_chain(d("1.25")).unwrap();
        assert_eq!(raw, d("1250000000000000000"));
        assert_eq!(denom.quantity_to_human(raw).unwrap(), d("1.25"));
    }

    #[test]
    fn test_rounds_down_to_tick() {
        let denom = inj_usdt();
        // 0.0012345 INJ -> 1234500000000000, tick 10^15 -> 1000000000000000
        let raw = denom.quantity_to_chain(d("0.0012345")).unwrap();
        assert_eq!(raw, d("1000000000000000"));
    }

    #[test]
    fn test_below_tick_is_rejected() {
        let denom = inj_usdt();
        assert!(matches!(
            denom.quantity_to_chain(d("0.0000001")),
            Err(ScalingError::BelowTick { .. })
        ));
        assert!(matches!(
            denom.price_to_chain(Decimal::ZERO),
            Err(ScalingError::NonPositive(_))
        ));
    }

    #[test]
    fn test_pow10_bounds() {
        assert_eq!(pow10(0).unwrap(), Decimal::ONE);
        assert_eq!(pow10(3).unwrap(), Decimal::from(1000));
        assert_eq!(pow10(-2).unwrap(), Decimal::new(1, 2));
        assert!(pow10(40).is_err());
        assert!(pow10(-40).is_err());
    }
}
