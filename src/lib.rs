//! Dec Big Int \
//! This crate provides:
//! - [`BigInt`]: Arbitrary-precision signed integers backed by a vector of decimal digits,
//!   with addition, subtraction, multiplication, ordering and decimal parsing/printing.
//! - [`ParseBigIntError`]: The error returned when a string is not a decimal integer.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::BigInt;
pub use error::ParseBigIntError;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "-900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("-a = {}", -&a);
        assert_eq!((&a + &b).to_string(), "9100000000000");
        assert_eq!((&a - &b).to_string(), "10900000000000");
        assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
    }
}
