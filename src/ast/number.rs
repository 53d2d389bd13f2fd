use std::cmp::Ordering;
use std::fmt;

use num_bigint::{BigInt, Sign};
use rust_decimal::Decimal;

/// Exact numeric literal.
///
/// Numerals that fit a 96-bit mantissa (28 or so significant digits) are kept
/// as a [`Decimal`]; anything longer is kept as an unbounded mantissa and a
/// decimal scale. Equality compares values, so `2.50 == 2.5` whichever form
/// either side is in.
#[derive(Debug, Clone)]
pub enum Number {
    Decimal(Decimal),
    /// `mantissa * 10^-scale`
    Big { mantissa: BigInt, scale: u32 },
}

impl Number {
    fn parts(&self) -> (BigInt, u32) {
        match self {
            Number::Decimal(value) => (BigInt::from(value.mantissa()), value.scale()),
            Number::Big { mantissa, scale } => (mantissa.clone(), *scale),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Number::Decimal(value) => value.is_sign_negative(),
            Number::Big { mantissa, .. } => mantissa.sign() == Sign::Minus,
        }
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        if let (Number::Decimal(a), Number::Decimal(b)) = (self, other) {
            return a == b;
        }
        let (a, a_scale) = self.parts();
        let (b, b_scale) = other.parts();
        let ten = BigInt::from(10u32);
        match a_scale.cmp(&b_scale) {
            Ordering::Equal => a == b,
            Ordering::Less => a * ten.pow(b_scale - a_scale) == b,
            Ordering::Greater => a == b * ten.pow(a_scale - b_scale),
        }
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mantissa, scale) = match self {
            Number::Decimal(value) => return write!(f, "{}", value),
            Number::Big { mantissa, scale } => (mantissa, *scale as usize),
        };

        if mantissa.sign() == Sign::Minus {
            f.write_str("-")?;
        }
        let digits = mantissa.magnitude().to_string();
        if scale == 0 {
            return f.write_str(&digits);
        }
        let digits = format!("{:0>width$}", digits, width = scale + 1);
        let (int, frac) = digits.split_at(digits.len() - scale);
        write!(f, "{}.{}", int, frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn big(mantissa: &str, scale: u32) -> Number {
        Number::Big {
            mantissa: BigInt::from_str(mantissa).unwrap(),
            scale,
        }
    }

    #[test]
    fn test_big_display() {
        assert_eq!(big("123", 0).to_string(), "123");
        assert_eq!(big("123", 5).to_string(), "0.00123");
        assert_eq!(big("-123", 2).to_string(), "-1.23");
        assert_eq!(big("0", 3).to_string(), "0.000");
    }

    #[test]
    fn test_equality_ignores_form_and_trailing_zeros() {
        assert_eq!(big("250", 2), Number::Decimal(Decimal::new(25, 1)));
        assert_eq!(Number::Decimal(Decimal::new(7, 0)), big("7000", 3));
        assert_ne!(big("1", 0), big("1", 1));
    }
}
