use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Exact scalar used throughout the solver. Pivot arithmetic must not round,
/// so coefficients are arbitrary-precision rationals kept in lowest terms
/// (`Ratio` reduces on every operation).
pub type Rational = BigRational;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRationalError {
    pub literal: String,
}

impl fmt::Display for ParseRationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a decimal literal: '{}'", self.literal)
    }
}

fn pow10(exponent: usize) -> BigInt {
    num_traits::pow(BigInt::from(10), exponent)
}

/// Converts a decimal literal (`3`, `-4.5`, `.25`, `2.5e-2`) to an exact
/// rational: the digits over the matching power of ten, reduced.
pub fn parse_decimal(literal: &str) -> Result<Rational, ParseRationalError> {
    let bad = || ParseRationalError {
        literal: literal.to_string(),
    };

    let mut rest = literal;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    let (mantissa_part, exponent_part) = match rest.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (rest, None),
    };
    let (int_part, frac_part) = match mantissa_part.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (mantissa_part, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(bad());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(bad());
    }

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);
    let mantissa: BigInt = digits.parse().map_err(|_| bad())?;
    let mantissa = if negative { -mantissa } else { mantissa };

    let mut scale = frac_part.len() as i64;
    if let Some(exponent) = exponent_part {
        let exponent: i64 = exponent.parse().map_err(|_| bad())?;
        scale -= exponent;
    }

    if scale >= 0 {
        Ok(Rational::new(mantissa, pow10(scale as usize)))
    } else {
        Ok(Rational::from_integer(mantissa * pow10(-scale as usize)))
    }
}

/// `value >= 10^exponent`, for positive `value`.
fn ge_pow10(value: &Rational, exponent: i64) -> bool {
    if exponent >= 0 {
        *value.numer() >= value.denom() * pow10(exponent as usize)
    } else {
        value.numer() * pow10(-exponent as usize) >= *value.denom()
    }
}

/// Decimal exponent `e` with `10^e <= value < 10^(e+1)`, for positive `value`.
fn decimal_exponent(value: &Rational) -> i64 {
    let numer_digits = value.numer().to_string().len() as i64;
    let denom_digits = value.denom().to_string().len() as i64;
    let mut exponent = numer_digits - denom_digits;
    while ge_pow10(value, exponent + 1) {
        exponent += 1;
    }
    while !ge_pow10(value, exponent) {
        exponent -= 1;
    }
    exponent
}

fn div_round_half_up(numer: &BigInt, denom: &BigInt) -> BigInt {
    let two = BigInt::from(2);
    (numer * &two + denom) / (denom * &two)
}

/// Renders `value` with at most `digits` significant digits, `%g`-style:
/// trailing zeros stripped, fixed notation while the exponent fits in
/// `[-4, digits)`, scientific notation otherwise.
pub fn format_significant(value: &Rational, digits: usize) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let mut exponent = decimal_exponent(&magnitude);

    let shift = digits as i64 - 1 - exponent;
    let (scaled_numer, scaled_denom) = if shift >= 0 {
        (magnitude.numer() * pow10(shift as usize), magnitude.denom().clone())
    } else {
        (magnitude.numer().clone(), magnitude.denom() * pow10(-shift as usize))
    };
    let mut rounded = div_round_half_up(&scaled_numer, &scaled_denom);
    if rounded == pow10(digits) {
        rounded = pow10(digits - 1);
        exponent += 1;
    }

    let mut mantissa = rounded.to_string();
    while mantissa.len() > 1 && mantissa.ends_with('0') {
        mantissa.pop();
    }

    let body = if exponent < -4 || exponent >= digits as i64 {
        let (head, tail) = mantissa.split_at(1);
        if tail.is_empty() {
            format!("{head}e{exponent:+03}")
        } else {
            format!("{head}.{tail}e{exponent:+03}")
        }
    } else if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if mantissa.len() > int_len {
            format!("{}.{}", &mantissa[..int_len], &mantissa[int_len..])
        } else {
            while mantissa.len() < int_len {
                mantissa.push('0');
            }
            mantissa
        }
    } else {
        format!("0.{}{}", "0".repeat(-exponent as usize - 1), mantissa)
    };

    if value.is_negative() {
        format!("-{body}")
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ratio(numer: i64, denom: i64) -> Rational {
        Rational::new(BigInt::from(numer), BigInt::from(denom))
    }

    #[test]
    fn parses_integers_and_fractions() {
        assert_eq!(parse_decimal("5").unwrap(), ratio(5, 1));
        assert_eq!(parse_decimal("0.25").unwrap(), ratio(1, 4));
        assert_eq!(parse_decimal("-4.5").unwrap(), ratio(-9, 2));
        assert_eq!(parse_decimal("+3.").unwrap(), ratio(3, 1));
        assert_eq!(parse_decimal(".5").unwrap(), ratio(1, 2));
    }

    #[test]
    fn parses_exponents() {
        assert_eq!(parse_decimal("1e3").unwrap(), ratio(1000, 1));
        assert_eq!(parse_decimal("2.5e-2").unwrap(), ratio(1, 40));
        assert_eq!(parse_decimal("12E+1").unwrap(), ratio(120, 1));
    }

    #[test]
    fn reduces_to_lowest_terms() {
        assert_eq!(parse_decimal("0.50").unwrap(), parse_decimal("0.5").unwrap());
        assert_eq!(*parse_decimal("0.50").unwrap().denom(), BigInt::from(2));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("abc").is_err());
        assert!(parse_decimal("1.2.3").is_err());
        assert!(parse_decimal("--1").is_err());
        assert!(parse_decimal("1e").is_err());
        assert!(parse_decimal(".").is_err());
    }

    #[test]
    fn formats_whole_numbers_without_point() {
        assert_eq!(format_significant(&ratio(13, 1), 7), "13");
        assert_eq!(format_significant(&ratio(1, 1), 7), "1");
        assert_eq!(format_significant(&ratio(100, 1), 7), "100");
        assert_eq!(format_significant(&Rational::zero(), 7), "0");
    }

    #[test]
    fn formats_fractions() {
        assert_eq!(format_significant(&ratio(3, 5), 7), "0.6");
        assert_eq!(format_significant(&ratio(14, 5), 7), "2.8");
        assert_eq!(format_significant(&ratio(1, 20), 7), "0.05");
        assert_eq!(format_significant(&ratio(-9, 2), 7), "-4.5");
        assert_eq!(format_significant(&ratio(1, 8000), 7), "0.000125");
    }

    #[test]
    fn rounds_to_seven_significant_digits() {
        assert_eq!(format_significant(&ratio(1, 3), 7), "0.3333333");
        assert_eq!(format_significant(&ratio(2, 3), 7), "0.6666667");
        assert_eq!(format_significant(&ratio(12345678, 1), 7), "1.234568e+07");
    }

    #[test]
    fn switches_to_scientific_notation() {
        assert_eq!(format_significant(&ratio(100_000_000, 1), 7), "1e+08");
        assert_eq!(format_significant(&ratio(1, 100_000), 7), "1e-05");
    }

    #[test]
    fn carries_rounding_overflow_into_the_exponent() {
        // 0.99999995 rounds up to 1 at seven significant digits
        assert_eq!(format_significant(&ratio(99_999_995, 100_000_000), 7), "1");
    }
}
