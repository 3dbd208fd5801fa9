//! # BigInt
//! Arbitrary-precision signed integers stored as decimal digits, least significant digit first.
//! # Example
//! ```
//! use dec_big_int::BigInt;
//!
//! let a: BigInt = "86435927".parse().unwrap();
//! let b: BigInt = "-3694449856".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! assert_eq!((&a + &b).to_string(), "-3608013929");
//! ```
//!

use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use crate::big_int_constants::*;
use crate::big_int_cache::*;
use crate::error::ParseBigIntError;

macro_rules! skip_leading_zero {
    ($vec: expr) => {
        {
            let mut v: Vec<u8> = $vec;
            while v.len() > 1 && v.last() == Some(&0) {
                v.pop();
            }
            if v.is_empty() {
                v.push(0);
            }
            v
        }
    };
}

/// Arbitrary-precision signed integer.
///
/// The value is kept normalized at all times: the most significant digit is
/// nonzero unless the value is zero, and zero is never negative. Equality,
/// hashing and ordering rely on that.
#[derive(Debug, Clone)]
pub struct BigInt {
    negative: bool,
    mag: Vec<u8>,
}

// 实现构造
impl BigInt {
    /// Builds a value from a little-endian digit vector, trimming high zero
    /// digits and clearing the sign of zero.
    pub(crate) fn new(mag: Vec<u8>, negative: bool) -> Self {
        let mag = skip_leading_zero!(mag);
        let negative = negative && !(mag.len() == 1 && mag[0] == 0);
        BigInt { negative, mag }
    }

    /// The value zero.
    pub fn zero() -> Self {
        POS_CACHE[0].clone()
    }

    /// Returns `true` for zero, whichever way it was written.
    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }

    /// Returns `true` for values below zero. Zero is never negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of decimal digits in the magnitude. Zero has one digit.
    pub fn digit_count(&self) -> usize {
        self.mag.len()
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(!self.negative, "", &self.mag_to_string())
    }
}

impl BigInt {
    fn mag_to_string(&self) -> String {
        self.mag
            .iter()
            .rev()
            .map(|d| DIGITS[*d as usize])
            .collect()
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        BigInt::from_decimal_str(val).map_err(|err| {
            tracing::debug!(len = val.len(), %err, "Rejected decimal string");
            err
        })
    }
}

impl TryFrom<&str> for BigInt {
    type Error = ParseBigIntError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        val.parse()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            // unsigned_abs keeps MIN representable
            BigInt::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

impl BigInt {
    fn value_of(val: u128, negative: bool) -> BigInt {
        if val <= MAX_CONSTANT as u128 {
            if negative {
                return NEG_CACHE[val as usize].clone();
            } else {
                return POS_CACHE[val as usize].clone();
            }
        }
        BigInt::extract_digits(val, negative)
    }

    /// Uncached conversion: peels off decimal digits, lowest first.
    pub(crate) fn extract_digits(mut val: u128, negative: bool) -> BigInt {
        let radix = RADIX as u128;
        // u128::MAX has 39 decimal digits
        let mut mag = Vec::with_capacity(39);
        while val != 0 {
            mag.push((val % radix) as u8);
            val /= radix;
        }
        BigInt::new(mag, negative)
    }

    fn from_decimal_str(val: &str) -> Result<BigInt, ParseBigIntError> {
        if val.is_empty() {
            return Err(ParseBigIntError::Empty);
        }

        let (negative, cursor) = match val.as_bytes()[0] {
            b'-' => (true, 1),
            b'+' => (false, 1),
            _ => (false, 0),
        };

        // a lone sign is zero
        if cursor == val.len() {
            return Ok(BigInt::zero());
        }

        let digits = &val[cursor..];
        if let Some((pos, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit(c, cursor + pos));
        }

        let mag = digits.bytes().rev().map(|b| b - b'0').collect();
        Ok(BigInt::new(mag, negative))
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        let self_len = self.mag.len();
        let other_len = other.mag.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.mag.iter().rev().zip(other.mag.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.compare_mag(other).is_eq()
    }
}
impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.mag.hash(state);
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.compare_mag(other),
            (true, true) => self.compare_mag(other).reverse(),
        }
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        self.clone().abs_take()
    }
    fn abs_take(self) -> BigInt {
        let BigInt { mag, .. } = self;
        BigInt { negative: false, mag }
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { negative, mag } = self;
        BigInt::new(mag, !negative)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

/// Derives the owned and compound-assignment forms of a binary operator from
/// its `&BigInt op &BigInt` implementation.
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl $imp for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                <&BigInt as $imp<&BigInt>>::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                <&BigInt as $imp<&BigInt>>::$method(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                <&BigInt as $imp<&BigInt>>::$method(self, &rhs)
            }
        }

        impl $imp_assign for BigInt {
            fn $method_assign(&mut self, rhs: BigInt) {
                *self = <&BigInt as $imp<&BigInt>>::$method(&*self, &rhs);
            }
        }

        impl $imp_assign<&BigInt> for BigInt {
            fn $method_assign(&mut self, rhs: &BigInt) {
                *self = <&BigInt as $imp<&BigInt>>::$method(&*self, rhs);
            }
        }
    };
}

// 实现加法
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, val: &BigInt) -> Self::Output {
        if self.negative == val.negative {
            return BigInt::new(BigInt::add_mag(&self.mag, &val.mag), self.negative);
        }

        // Mixed signs cancel, which only subtraction handles.
        if self.negative {
            val - &(-self)
        } else {
            self - &(-val)
        }
    }
}

impl BigInt {
    fn add_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (x, y) = if x.len() < y.len() { (y, x) } else { (x, y) };

        let mut result = Vec::with_capacity(x.len() + 1);
        let mut carry = 0;
        for (i, x_digit) in x.iter().enumerate() {
            let sum = x_digit + y.get(i).copied().unwrap_or(0) + carry;
            result.push(sum % RADIX);
            carry = sum / RADIX;
        }

        if carry > 0 {
            result.push(carry);
        }

        result
    }
}

forward_binop!(Add, add, AddAssign, add_assign);

// 实现减法
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, val: &BigInt) -> Self::Output {
        if self.negative != val.negative {
            return self + &(-val);
        }

        if self == val {
            return BigInt::zero();
        }

        // Algebraic order, not magnitude order: for two negatives the
        // smaller one has the larger magnitude.
        let less = self < val;
        let (larger, smaller) = if less { (val, self) } else { (self, val) };
        let mag = if self.negative {
            BigInt::sub_mag(&smaller.mag, &larger.mag)
        } else {
            BigInt::sub_mag(&larger.mag, &smaller.mag)
        };

        BigInt::new(mag, less)
    }
}

impl BigInt {
    /// `big` must not be smaller than `little` in magnitude.
    fn sub_mag(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0;
        for (i, big_digit) in big.iter().enumerate() {
            let mut difference = *big_digit as i8 - little.get(i).copied().unwrap_or(0) as i8 - borrow;
            if difference < 0 {
                difference += RADIX as i8;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(difference as u8);
        }
        debug_assert_eq!(borrow, 0, "minuend smaller than subtrahend");

        result
    }
}

forward_binop!(Sub, sub, SubAssign, sub_assign);

// 实现乘法
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, val: &BigInt) -> Self::Output {
        BigInt::new(BigInt::mul_mag(&self.mag, &val.mag), self.negative != val.negative)
    }
}

impl BigInt {
    fn mul_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; x.len() + y.len()];
        for (i, x_digit) in x.iter().enumerate() {
            let mut carry = 0;
            for (j, y_digit) in y.iter().enumerate() {
                // at most 9 + 9 * 9 + 9
                let product = result[i + j] + x_digit * y_digit + carry;
                result[i + j] = product % RADIX;
                carry = product / RADIX;
            }
            result[i + y.len()] += carry;
        }
        result
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign);

// 实现自增自减
impl BigInt {
    /// Adds one in place and returns the updated value.
    pub fn increment(&mut self) -> &mut Self {
        *self += &POS_CACHE[1];
        self
    }

    /// Subtracts one in place and returns the updated value.
    pub fn decrement(&mut self) -> &mut Self {
        *self += &NEG_CACHE[1];
        self
    }

    /// Adds one in place and returns the value it had before.
    pub fn post_increment(&mut self) -> BigInt {
        let current = self.clone();
        self.increment();
        current
    }

    /// Subtracts one in place and returns the value it had before.
    pub fn post_decrement(&mut self) -> BigInt {
        let current = self.clone();
        self.decrement();
        current
    }
}

#[cfg(test)]
use claims::{assert_err_eq, assert_gt, assert_lt, assert_ok, assert_ok_eq};

#[cfg(test)]
fn big(val: &str) -> BigInt {
    val.parse().unwrap()
}

#[test]
fn test_from() {
    let big_int = BigInt::from(0_i32);
    assert_eq!(big_int.mag, vec![0]);
    assert!(!big_int.negative);

    let big_int = BigInt::from(-86132_i64);
    assert_eq!(big_int.mag, vec![2, 3, 1, 6, 8]);
    assert!(big_int.negative);

    let big_int = BigInt::from(5647431_i64);
    assert_eq!(big_int.to_string(), "5647431");

    // cached values
    assert_eq!(BigInt::from(16_u8).mag, vec![6, 1]);
    assert_eq!(BigInt::from(-7_i8).to_string(), "-7");
    assert_eq!(BigInt::from(17_u16).to_string(), "17");

    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(i64::MAX).to_string(), "9223372036854775807");
    assert_eq!(BigInt::from(i128::MIN).to_string(), "-170141183460469231731687303715884105728");
    assert_eq!(BigInt::from(u128::MAX).to_string(), "340282366920938463463374607431768211455");
    assert_eq!(BigInt::from(usize::MIN), BigInt::zero());
}

#[test]
fn test_from_str() {
    assert_ok_eq!("+100000000000000000000".parse::<BigInt>(), BigInt::from(100000000000000000000_u128));
    assert_eq!(big("-000100000000000000000000").to_string(), "-100000000000000000000");
    assert_eq!(big("-000100").mag, vec![0, 0, 1]);
    assert_eq!(big("0000").mag, vec![0]);

    // no negative zero
    let zero = big("-0");
    assert!(!zero.negative);
    assert_eq!(zero, BigInt::zero());
    assert_eq!(big("+0").to_string(), "0");
    assert_eq!(big("-").to_string(), "0");
    assert!(!big("-").negative);
    assert_eq!(big("+"), BigInt::zero());

    assert_ok!(BigInt::try_from("12345678909876543210"));
}

#[test]
fn test_from_str_invalid() {
    assert_err_eq!("".parse::<BigInt>(), ParseBigIntError::Empty);
    assert_err_eq!("gk%45#".parse::<BigInt>(), ParseBigIntError::InvalidDigit('g', 0));
    assert_err_eq!("gk%45#^$#!".parse::<BigInt>(), ParseBigIntError::InvalidDigit('g', 0));
    assert_err_eq!("-12a4".parse::<BigInt>(), ParseBigIntError::InvalidDigit('a', 3));
    assert_err_eq!("+-5".parse::<BigInt>(), ParseBigIntError::InvalidDigit('-', 1));
    assert_err_eq!("--".parse::<BigInt>(), ParseBigIntError::InvalidDigit('-', 1));
    assert_err_eq!(" 12".parse::<BigInt>(), ParseBigIntError::InvalidDigit(' ', 0));
    assert_err_eq!("12 ".parse::<BigInt>(), ParseBigIntError::InvalidDigit(' ', 2));
    assert_err_eq!("1٣".parse::<BigInt>(), ParseBigIntError::InvalidDigit('٣', 1));
    assert_err_eq!(BigInt::try_from("1_000"), ParseBigIntError::InvalidDigit('_', 1));

    assert_eq!(ParseBigIntError::Empty.to_string(), "Empty string");
    assert_eq!(
        ParseBigIntError::InvalidDigit('g', 0).to_string(),
        "Illegal character 'g' at position 0"
    );
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::zero().to_string(), "0");
    assert_eq!(BigInt::default().to_string(), "0");
    assert_eq!(big("-86132").to_string(), "-86132");

    let a = big("12345678909876523784950683472613487560983287654321");
    assert_eq!(a.mag_to_string(), "12345678909876523784950683472613487560983287654321");
    assert_eq!((-a).to_string(), "-12345678909876523784950683472613487560983287654321");

    assert_eq!(format!("{:>6}", big("-42")), "   -42");
    assert_eq!(format!("{:<5}|", big("42")), "42   |");
    assert_eq!(format!("{:05}", big("-42")), "-0042");
    assert_eq!(format!("{:+}", big("42")), "+42");
    assert_eq!(format!("{:+}", BigInt::zero()), "+0");
}

#[test]
fn test_compare() {
    let a = big("86360279");
    let b = big("-6532982385792");
    let c = big("86865279");

    assert_eq!(a, big("86360279"));
    assert_ne!(a, b);
    assert_ne!(a, -&a);

    assert_lt!(b, a);
    assert_lt!(a, -&b);
    assert_gt!(c, a);
    assert!(!(a < a.clone()));
    assert!(a <= a.clone());
    assert!(a >= b);

    // negatives invert both the length and the digit rule
    assert_lt!(big("-100"), big("-99"));
    assert_lt!(big("-95"), big("-94"));
    assert_gt!(big("100"), big("99"));
    assert_eq!(big("-0").cmp(&big("0")), Ordering::Equal);

    let mut values = vec![big("3"), big("-10"), big("0"), big("-2"), big("25")];
    values.sort();
    let sorted: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    assert_eq!(sorted, ["-10", "-2", "0", "3", "25"]);
}

#[test]
fn test_neg_abs() {
    assert_eq!((-big("86360279")).to_string(), "-86360279");
    assert_eq!((-big("-6532982385792")).to_string(), "6532982385792");
    assert!(!(-BigInt::zero()).negative);
    assert_eq!(big("-5").abs(), big("5"));
    assert_eq!(big("5").abs(), big("5"));
    assert!(big("-1").is_negative());
    assert!(big("-0").is_zero());
    assert!(BigInt::zero().is_zero() && !BigInt::zero().is_negative());
    assert!(!big("-1").is_zero());
    assert_eq!(big("-00123").digit_count(), 3);
}

#[test]
fn test_add() {
    assert_eq!((big("86435927") + big("265496872654")).to_string(), "265583308581");
    assert_eq!((big("86435927") + big("-3694449856")).to_string(), "-3608013929");
    assert_eq!((big("-75648") + big("-3694449856")).to_string(), "-3694525504");
    assert_eq!((big("-3694449856") + big("86435927")).to_string(), "-3608013929");
    assert_eq!((big("999") + big("1")).mag, vec![0, 0, 0, 1]);
    assert_eq!(big("-999") + big("999"), BigInt::zero());
    assert!(!(big("-999") + big("999")).negative);
    assert_eq!((big("-1000") + big("1")).mag, vec![9, 9, 9]);

    let mut a = big("86435927");
    a += big("-75648");
    assert_eq!(a.to_string(), "86360279");
    a += &big("1");
    assert_eq!(a.to_string(), "86360280");
}

#[test]
fn test_sub() {
    let a = big("86360279");
    let b = big("265496872654");
    let c = big("-75648");
    let d = big("-3694449856");

    assert_eq!((&a - &b).to_string(), "-265410512375");
    assert_eq!((&a - &c).to_string(), "86435927");
    assert_eq!((&d - &b).to_string(), "-269191322510");
    assert_eq!((&d - &c).to_string(), "-3694374208");
    assert_eq!((&c - &d).to_string(), "3694374208");
    assert_eq!(&a - &a, BigInt::zero());
    assert_eq!((big("-5") - big("-3")).to_string(), "-2");
    assert_eq!((big("-3") - big("-5")).to_string(), "2");

    // borrow runs through every digit and leaves high zeros behind
    let diff = big("10000") - big("9999");
    assert_eq!(diff.mag, vec![1]);

    let mut b = b;
    b -= &a;
    assert_eq!(b.to_string(), "265410512375");
    let same = b.clone();
    b -= same;
    assert!(b.is_zero());
    assert!(!b.negative);
}

#[test]
fn test_mul() {
    let a = big("86360279");
    assert_eq!((&a * big("265410512375")).to_string(), "22920925898237952625");
    assert_eq!((&a * big("-75648")).to_string(), "-6532982385792");
    assert_eq!((big("-75648") * big("-3694449856")).to_string(), "279477742706688");
    assert_eq!((big("99") * big("99")).mag, vec![1, 0, 8, 9]);
    assert_eq!(
        (big("123456789012345678901234567890") * big("987654321098765432109876543210")).to_string(),
        "121932631137021795226185032733622923332237463801111263526900"
    );

    // zero keeps a positive sign whatever the operand signs
    let zero = big("-12345") * BigInt::zero();
    assert_eq!(zero.mag, vec![0]);
    assert!(!zero.negative);

    let mut c = big("-75648");
    c *= &a;
    assert_eq!(c.to_string(), "-6532982385792");
    c *= big("-1");
    assert_eq!(c.to_string(), "6532982385792");
}

#[test]
fn test_increment_decrement() {
    let mut a = big("10");
    let mut b = big("-10");

    assert_eq!(a.post_increment(), big("10"));
    assert_eq!(a, big("11"));
    assert_eq!(b.post_increment(), big("-10"));
    assert_eq!(b, big("-9"));

    assert_eq!(*a.increment(), big("12"));
    assert_eq!(*b.increment(), big("-8"));

    assert_eq!(a.post_decrement(), big("12"));
    assert_eq!(a, big("11"));
    assert_eq!(b.post_decrement(), big("-8"));
    assert_eq!(b, big("-9"));

    assert_eq!(*a.decrement(), big("10"));
    assert_eq!(*b.decrement(), big("-10"));

    let mut c = big("-1");
    c.increment();
    assert!(c.is_zero() && !c.negative);
    c.decrement();
    assert_eq!(c.to_string(), "-1");

    let mut d = big("-100");
    d.increment();
    assert_eq!(d.mag, vec![9, 9]);
    d.increment().increment();
    assert_eq!(d.to_string(), "-97");
}
