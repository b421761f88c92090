// ============================================================================
// Exact Decimal Value
// Arbitrary-precision significand with a non-negative decimal scale
// ============================================================================

use super::errors::{checked_scale, DecimalError, DecimalResult};
use crate::rounding::{self, RoundingMode};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// Largest scale `rust_decimal::Decimal` can carry.
const RUST_DECIMAL_MAX_SCALE: u32 = 28;

/// Exact decimal number.
///
/// Internally stores a signed arbitrary-precision significand and a scale so
/// that `value = significand × 10^(-scale)`. Nothing is ever routed through
/// `f32`/`f64`, so decimal literals such as `0.1` are held exactly.
///
/// Equality, ordering and hashing compare the numeric value: `1.50 == 1.5`.
/// Use [`scale`](Self::scale) when the number of fractional digits matters.
///
/// # Example
/// ```
/// use decimal_rounder::numeric::DecimalValue;
///
/// let a: DecimalValue = "0.1".parse().unwrap();
/// let b: DecimalValue = "0.2".parse().unwrap();
/// assert_eq!(&a + &b, "0.3".parse().unwrap());
/// ```
#[derive(Clone)]
pub struct DecimalValue {
    significand: BigInt,
    scale: u32,
}

/// Compute 10^n as an unsigned big integer.
pub(crate) fn pow10(n: u32) -> BigUint {
    BigUint::from(10u32).pow(n)
}

/// Number of decimal digits in `n` (`0` has one digit).
pub(crate) fn decimal_digits(n: &BigUint) -> usize {
    n.to_str_radix(10).len()
}

impl DecimalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a significand and a scale.
    ///
    /// # Errors
    /// Returns `NegativeScale` or `ScaleTooLarge` (both `InvalidArgument`)
    /// when `scale` does not fit `0..=u32::MAX`.
    pub fn new(significand: impl Into<BigInt>, scale: i64) -> DecimalResult<Self> {
        let scale = checked_scale(scale)?;
        Ok(Self::from_parts(significand.into(), scale))
    }

    /// Create from an already validated significand/scale pair.
    #[inline]
    pub fn from_parts(significand: BigInt, scale: u32) -> Self {
        Self { significand, scale }
    }

    /// Zero with scale 0.
    #[inline]
    pub fn zero() -> Self {
        Self::from_parts(BigInt::zero(), 0)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The signed significand (all digits, decimal point removed).
    #[inline]
    pub fn significand(&self) -> &BigInt {
        &self.significand
    }

    /// Number of digits to the right of the decimal point.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.significand.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.significand.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.significand.is_positive()
    }

    /// Returns -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        match self.significand.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Absolute value, scale preserved.
    pub fn abs(&self) -> Self {
        Self::from_parts(self.significand.abs(), self.scale)
    }

    /// Integer part, truncated toward zero, with scale 0.
    pub fn trunc(&self) -> Self {
        let divisor = BigInt::from(pow10(self.scale));
        Self::from_parts(&self.significand / divisor, 0)
    }

    /// Fractional part with the sign of `self`, scale preserved.
    pub fn fract(&self) -> Self {
        let divisor = BigInt::from(pow10(self.scale));
        Self::from_parts(&self.significand % divisor, self.scale)
    }

    // ========================================================================
    // Scale Adjustment
    // ========================================================================

    /// Significand expressed at a scale at least as large as `self.scale`.
    fn aligned(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);
        if scale == self.scale {
            self.significand.clone()
        } else {
            &self.significand * BigInt::from(pow10(scale - self.scale))
        }
    }

    /// Append trailing zero digits until the scale is at least `scale`.
    ///
    /// Never removes digits; use [`round`](Self::round) to shorten.
    pub fn pad_to_scale(&self, scale: u32) -> Self {
        if scale <= self.scale {
            return self.clone();
        }
        Self::from_parts(self.aligned(scale), scale)
    }

    /// Strip trailing fractional zeros (`1.500` becomes `1.5`, `2.00` becomes `2`).
    pub fn normalize(&self) -> Self {
        if self.significand.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10u32);
        let mut significand = self.significand.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (quotient, remainder) = significand.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            significand = quotient;
            scale -= 1;
        }
        Self::from_parts(significand, scale)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to `scale` fractional digits using `mode`.
    ///
    /// Values that already have `scale` or fewer fractional digits come back
    /// unchanged.
    ///
    /// # Errors
    /// Returns an `InvalidArgument` error for a negative `scale`.
    pub fn round(&self, scale: i64, mode: RoundingMode) -> DecimalResult<Self> {
        rounding::round(self, scale, mode)
    }

    /// Round half to even (bankers' rounding).
    pub fn round_half_even(&self, scale: i64) -> DecimalResult<Self> {
        rounding::round(self, scale, RoundingMode::HalfEven)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    fn cmp_value(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.significand.cmp(&other.significand);
        }
        // Signs decide before any scaling work is needed
        let by_sign = self.signum().cmp(&other.signum());
        if by_sign != Ordering::Equal {
            return by_sign;
        }
        let scale = self.scale.max(other.scale);
        self.aligned(scale).cmp(&other.aligned(scale))
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn write_plain(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.significand.magnitude().to_str_radix(10);
        let scale = self.scale as usize;

        if self.is_negative() {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }
        if digits.len() <= scale {
            write!(f, "0.{:0>width$}", digits, width = scale)
        } else {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{}.{}", int_part, frac_part)
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalValue {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for DecimalValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl Eq for DecimalValue {}

impl PartialOrd for DecimalValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_value(other))
    }
}

impl Ord for DecimalValue {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl Hash for DecimalValue {
    // Numerically equal values share a normalized form
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.significand.hash(state);
        normalized.scale.hash(state);
    }
}

impl Neg for DecimalValue {
    type Output = DecimalValue;

    #[inline]
    fn neg(self) -> Self::Output {
        DecimalValue::from_parts(-self.significand, self.scale)
    }
}

impl Neg for &DecimalValue {
    type Output = DecimalValue;

    #[inline]
    fn neg(self) -> Self::Output {
        DecimalValue::from_parts(-&self.significand, self.scale)
    }
}

// Exact: the result carries the larger of the two scales
impl Add<&DecimalValue> for &DecimalValue {
    type Output = DecimalValue;

    fn add(self, rhs: &DecimalValue) -> Self::Output {
        let scale = self.scale.max(rhs.scale);
        DecimalValue::from_parts(self.aligned(scale) + rhs.aligned(scale), scale)
    }
}

impl Add for DecimalValue {
    type Output = DecimalValue;

    #[inline]
    fn add(self, rhs: DecimalValue) -> Self::Output {
        &self + &rhs
    }
}

impl Sub<&DecimalValue> for &DecimalValue {
    type Output = DecimalValue;

    fn sub(self, rhs: &DecimalValue) -> Self::Output {
        let scale = self.scale.max(rhs.scale);
        DecimalValue::from_parts(self.aligned(scale) - rhs.aligned(scale), scale)
    }
}

impl Sub for DecimalValue {
    type Output = DecimalValue;

    #[inline]
    fn sub(self, rhs: DecimalValue) -> Self::Output {
        &self - &rhs
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DecimalValue {
                #[inline]
                fn from(value: $t) -> Self {
                    DecimalValue::from_parts(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, i128, u32, u64, u128);

impl From<BigInt> for DecimalValue {
    #[inline]
    fn from(value: BigInt) -> Self {
        DecimalValue::from_parts(value, 0)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecimalValue({}, significand={}, scale={})",
            self, self.significand, self.scale
        )
    }
}

impl fmt::Display for DecimalValue {
    /// Canonical decimal text. A precision (`{:.2}`) rounds half to even
    /// and pads with zeros to exactly that many fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => {
                let target = u32::try_from(precision).map_err(|_| fmt::Error)?;
                rounding::round_to_scale(self, target, RoundingMode::HalfEven)
                    .pad_to_scale(target)
                    .write_plain(f)
            }
            None => self.write_plain(f),
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for DecimalValue {
    type Err = DecimalError;

    /// Parse an exact decimal literal.
    ///
    /// Accepted: optional sign, one or more integer digits, optionally a
    /// `.` followed by one or more fractional digits. Surrounding whitespace
    /// is ignored.
    ///
    /// # Examples
    /// - "123" -> significand 123, scale 0
    /// - "2.535" -> significand 2535, scale 3
    /// - "-0.001" -> significand -1, scale 3
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        if s.is_empty() {
            return Err(DecimalError::malformed(input, "empty input"));
        }

        let (is_negative, body) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = match body.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (body, ""),
        };

        if int_str.is_empty() {
            return Err(DecimalError::malformed(input, "missing integer digits"));
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecimalError::malformed(input, "unexpected character"));
        }
        if body.len() > int_str.len() {
            if frac_str.is_empty() {
                return Err(DecimalError::malformed(
                    input,
                    "missing fractional digits after decimal point",
                ));
            }
            if frac_str.contains('.') {
                return Err(DecimalError::malformed(input, "more than one decimal point"));
            }
            if !frac_str.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DecimalError::malformed(input, "unexpected character"));
            }
        }

        let scale = u32::try_from(frac_str.len())
            .map_err(|_| DecimalError::malformed(input, "too many fractional digits"))?;

        let mut digits = String::with_capacity(int_str.len() + frac_str.len());
        digits.push_str(int_str);
        digits.push_str(frac_str);

        let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| DecimalError::malformed(input, "unexpected character"))?;
        let sign = if is_negative { Sign::Minus } else { Sign::Plus };

        Ok(Self::from_parts(BigInt::from_biguint(sign, magnitude), scale))
    }
}

impl TryFrom<&str> for DecimalValue {
    type Error = DecimalError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for DecimalValue {
    /// Exact: the mantissa and scale carry over unchanged.
    fn from(d: rust_decimal::Decimal) -> Self {
        DecimalValue::from_parts(BigInt::from(d.mantissa()), d.scale())
    }
}

impl TryFrom<&DecimalValue> for rust_decimal::Decimal {
    type Error = DecimalError;

    /// Convert without losing digits.
    ///
    /// # Errors
    /// `OutOfRange` when the significand needs more than 96 bits or more
    /// than 28 fractional digits remain after stripping trailing zeros.
    fn try_from(value: &DecimalValue) -> Result<Self, Self::Error> {
        let value = if value.scale > RUST_DECIMAL_MAX_SCALE {
            value.normalize()
        } else {
            value.clone()
        };

        if value.scale > RUST_DECIMAL_MAX_SCALE {
            return Err(DecimalError::OutOfRange(format!(
                "scale {} exceeds rust_decimal maximum of {}",
                value.scale, RUST_DECIMAL_MAX_SCALE
            )));
        }

        let mantissa = value.significand.to_i128().ok_or_else(|| {
            DecimalError::OutOfRange(format!("significand of {} exceeds 96 bits", value))
        })?;

        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, value.scale).map_err(|_| {
            DecimalError::OutOfRange(format!("significand of {} exceeds 96 bits", value))
        })
    }
}

impl TryFrom<DecimalValue> for rust_decimal::Decimal {
    type Error = DecimalError;

    #[inline]
    fn try_from(value: DecimalValue) -> Result<Self, Self::Error> {
        rust_decimal::Decimal::try_from(&value)
    }
}

// ============================================================================
// Serde (string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for DecimalValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecimalValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn dec(s: &str) -> DecimalValue {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_str() {
        let x = dec("123.456");
        assert_eq!(x.significand(), &BigInt::from(123_456));
        assert_eq!(x.scale(), 3);

        let y = dec("-0.001");
        assert!(y.is_negative());
        assert_eq!(y.significand(), &BigInt::from(-1));
        assert_eq!(y.scale(), 3);

        let z = dec("42");
        assert_eq!(z.significand(), &BigInt::from(42));
        assert_eq!(z.scale(), 0);

        let plus = dec(" +7.50 ");
        assert_eq!(plus.significand(), &BigInt::from(750));
        assert_eq!(plus.scale(), 2);
    }

    #[test]
    fn test_from_str_invalid() {
        let rejected = [
            "", "   ", "-", "abc", "1.2.3", ".5", "5.", "1,5", "1e5", "--1", "1_000", "0x10", "NaN",
        ];
        for bad in rejected {
            let err = bad.parse::<DecimalValue>().unwrap_err();
            assert!(err.is_invalid_argument(), "{:?} should be rejected", bad);
        }

        assert_eq!(
            "1.2.3".parse::<DecimalValue>(),
            Err(DecimalError::MalformedLiteral {
                input: "1.2.3".to_string(),
                reason: "more than one decimal point",
            })
        );
    }

    #[test]
    fn test_text_round_trip() {
        for literal in [
            "0",
            "7",
            "-7",
            "0.1",
            "0.30",
            "-0.001",
            "2.535",
            "123456789012345678901234567890.123456789",
            "1000",
            "0.000000000000000000000000000000000001",
        ] {
            assert_eq!(dec(literal).to_string(), literal);
        }
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        let z = dec("-0.00");
        assert!(z.is_zero());
        assert!(!z.is_negative());
        assert_eq!(z.to_string(), "0.00");
    }

    #[test]
    fn test_new_rejects_negative_scale() {
        assert_eq!(DecimalValue::new(5, -1), Err(DecimalError::NegativeScale(-1)));
        let v = DecimalValue::new(2535, 3).unwrap();
        assert_eq!(v, dec("2.535"));
    }

    #[test]
    fn test_exact_addition() {
        let sum = dec("0.1") + dec("0.2");
        assert_eq!(sum, dec("0.3"));
        assert_eq!(sum.to_string(), "0.3");
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_binary_float_addition_is_inexact() {
        let a: f64 = "0.1".parse().unwrap();
        let b: f64 = "0.2".parse().unwrap();
        let c: f64 = "0.3".parse().unwrap();
        assert_ne!(a + b, c);
    }

    #[test]
    fn test_add_sub_mixed_scale() {
        assert_eq!((&dec("1.5") + &dec("2.25")).to_string(), "3.75");
        assert_eq!((&dec("1") - &dec("0.001")).to_string(), "0.999");
        assert_eq!((dec("-2.5") + dec("2.5")).to_string(), "0.0");
        assert_eq!((-dec("3.10")).to_string(), "-3.10");
        assert_eq!((-&dec("-3.10")).to_string(), "3.10");
    }

    #[test]
    fn test_numeric_equality_and_hash() {
        assert_eq!(dec("1.50"), dec("1.5"));
        assert_eq!(dec("2"), dec("2.000"));
        assert_ne!(dec("2"), dec("2.001"));

        let set: HashSet<DecimalValue> = ["1.5", "1.50", "1.500", "-0", "0.0"]
            .iter()
            .map(|s| dec(s))
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ordering() {
        assert!(dec("2.54") > dec("2.535"));
        assert!(dec("-2.54") < dec("-2.535"));
        assert!(dec("-0.1") < dec("0"));
        assert!(dec("10") > dec("9.999"));
        assert_eq!(dec("1.0").min(dec("0.5")), dec("0.5"));
        assert_eq!(dec("1.0").max(dec("0.5")), dec("1"));
    }

    #[test]
    fn test_pad_and_normalize() {
        assert_eq!(dec("2.5").pad_to_scale(3).to_string(), "2.500");
        assert_eq!(dec("2.535").pad_to_scale(1).to_string(), "2.535");
        assert_eq!(dec("2.500").normalize().to_string(), "2.5");
        assert_eq!(dec("100").normalize().to_string(), "100");
        assert_eq!(dec("-3.000").normalize().to_string(), "-3");
        assert_eq!(dec("0.000").normalize().to_string(), "0");
    }

    #[test]
    fn test_trunc_and_fract() {
        assert_eq!(dec("-12.345").trunc().to_string(), "-12");
        assert_eq!(dec("-12.345").fract().to_string(), "-0.345");
        assert_eq!(dec("9.99").trunc().to_string(), "9");
        assert_eq!(dec("9.99").fract().to_string(), "0.99");
    }

    #[test]
    fn test_sign_helpers() {
        assert_eq!(dec("-1.5").signum(), -1);
        assert_eq!(dec("0.00").signum(), 0);
        assert_eq!(dec("3").signum(), 1);
        assert_eq!(dec("-1.5").abs().to_string(), "1.5");
        assert!(dec("0.01").is_positive());
    }

    #[test]
    fn test_display_with_precision() {
        assert_eq!(format!("{:.2}", dec("2.545")), "2.54");
        assert_eq!(format!("{:.2}", dec("2.535")), "2.54");
        assert_eq!(format!("{:.2}", dec("2.5")), "2.50");
        assert_eq!(format!("{:.0}", dec("-2.5")), "-2");
        assert_eq!(format!("{:.3}", dec("7")), "7.000");
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", dec("-1.25")),
            "DecimalValue(-1.25, significand=-125, scale=2)"
        );
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(DecimalValue::from(42i64).to_string(), "42");
        assert_eq!(DecimalValue::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(DecimalValue::from(BigInt::from(-9)).to_string(), "-9");
        assert_eq!(DecimalValue::default(), DecimalValue::zero());
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::new(12345, 2); // 123.45
        let x = DecimalValue::from(d);
        assert_eq!(x.significand(), &BigInt::from(12345));
        assert_eq!(x.scale(), 2);
        assert_eq!(x.to_string(), "123.45");
    }

    #[test]
    fn test_to_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::try_from(&dec("123.456")).unwrap();
        assert_eq!(d.to_string(), "123.456");

        // Trailing zeros beyond 28 digits are stripped before converting
        let wide = dec("1.000000000000000000000000000000");
        assert_eq!(Decimal::try_from(&wide).unwrap(), Decimal::ONE);

        let too_precise = dec("0.00000000000000000000000000001");
        assert_eq!(
            Decimal::try_from(&too_precise).unwrap_err().kind(),
            crate::numeric::ErrorKind::OutOfRange
        );

        let too_wide = dec("123456789012345678901234567890123");
        assert!(Decimal::try_from(too_wide).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_string_form() {
        let value = dec("-2.535");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-2.535\"");
        let back: DecimalValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), "-2.535");
        assert!(serde_json::from_str::<DecimalValue>("\"1..2\"").is_err());
    }
}
