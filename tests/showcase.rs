//! Walks through the whole public surface with the same literals a reader
//! would try by hand, checking every printed result.

use claims::{assert_err_eq, assert_ge, assert_gt, assert_le, assert_lt, assert_ok};
use dec_big_int::{BigInt, ParseBigIntError};

fn big(val: &str) -> BigInt {
    val.parse().unwrap()
}

mod constructors {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(BigInt::default().to_string(), "0");
    }

    #[test]
    fn from_integer() {
        assert_eq!(BigInt::from(5647431_i64).to_string(), "5647431");
        assert_eq!(BigInt::from(-86132_i64).to_string(), "-86132");
    }

    #[test]
    fn from_string() {
        assert_eq!(big("+100000000000000000000").to_string(), "100000000000000000000");
        assert_eq!(big("-000100000000000000000000").to_string(), "-100000000000000000000");
    }

    #[test]
    fn from_string_invalid() {
        let err = "gk%45#^$#!".parse::<BigInt>();
        assert_err_eq!(&err, &ParseBigIntError::InvalidDigit('g', 0));
        assert_eq!(err.unwrap_err().to_string(), "Illegal character 'g' at position 0");

        assert_err_eq!("".parse::<BigInt>(), ParseBigIntError::Empty);
        assert_err_eq!(BigInt::try_from("gk%45#"), ParseBigIntError::InvalidDigit('g', 0));
        assert_ok!(BigInt::try_from("-"));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn addition() {
        let num_1 = big("86435927");
        let num_2 = big("265496872654");
        let num_3 = big("-75648");
        let num_4 = big("-3694449856");

        assert_eq!((&num_1 + &num_2).to_string(), "265583308581");
        assert_eq!((&num_1 + &num_4).to_string(), "-3608013929");
        assert_eq!((&num_3 + &num_4).to_string(), "-3694525504");

        let mut num_1 = num_1;
        num_1 += &num_3;
        assert_eq!(num_1.to_string(), "86360279");
    }

    #[test]
    fn subtraction() {
        let num_1 = big("86360279");
        let num_2 = big("265496872654");
        let num_3 = big("-75648");
        let num_4 = big("-3694449856");

        assert_eq!((&num_1 - &num_2).to_string(), "-265410512375");
        assert_eq!((&num_1 - &num_3).to_string(), "86435927");
        assert_eq!((&num_4 - &num_2).to_string(), "-269191322510");
        assert_eq!((&num_4 - &num_3).to_string(), "-3694374208");

        let mut num_2 = num_2;
        num_2 -= num_1;
        assert_eq!(num_2.to_string(), "265410512375");
    }

    #[test]
    fn multiplication() {
        let num_1 = big("86360279");
        let num_2 = big("265410512375");
        let num_3 = big("-75648");
        let num_4 = big("-3694449856");

        assert_eq!((&num_1 * &num_2).to_string(), "22920925898237952625");
        assert_eq!((&num_1 * &num_3).to_string(), "-6532982385792");
        assert_eq!((&num_3 * &num_4).to_string(), "279477742706688");

        let mut num_3 = num_3;
        num_3 *= &num_1;
        assert_eq!(num_3.to_string(), "-6532982385792");
    }

    #[test]
    fn negation() {
        assert_eq!((-big("86360279")).to_string(), "-86360279");
        assert_eq!((-big("-6532982385792")).to_string(), "6532982385792");
        assert_eq!((-BigInt::default()).to_string(), "0");
    }
}

mod relational {
    use super::*;

    #[test]
    fn equality() {
        let num_1 = big("86360279");
        let num_3 = big("-6532982385792");
        let num_5 = big("86360279");

        assert_eq!(num_1, num_5);
        assert_ne!(num_1, num_3);
        assert_ne!(num_1, -&num_1);
    }

    #[test]
    fn ordering() {
        let num_1 = big("86360279");
        let num_3 = big("-6532982385792");
        let num_5 = big("86360279");
        let num_6 = big("86865279");

        assert!(!(num_1 < num_5));
        assert_lt!(&num_1, &-&num_3);
        assert_lt!(&num_3, &num_1);
        assert!(!(num_6 < num_5));

        assert_le!(&num_1, &num_5);
        assert!(!(num_1 <= num_3));
        assert_le!(&num_3, &num_1);
        assert!(!(num_6 <= num_5));

        assert!(!(num_1 > num_5));
        assert_gt!(&num_1, &num_3);
        assert!(!(num_3 > num_1));
        assert_gt!(&num_6, &num_5);

        assert_ge!(&num_1, &num_5);
        assert_ge!(&num_1, &num_3);
        assert!(!(num_3 >= num_1));
        assert_ge!(&num_6, &num_5);
    }
}

mod increment_decrement {
    use super::*;

    #[test]
    fn walk() {
        let mut a = big("10");
        let mut b = big("-10");

        let c_1 = a.post_increment();
        let c_2 = b.post_increment();
        assert_eq!((c_1.to_string(), a.to_string()), ("10".to_owned(), "11".to_owned()));
        assert_eq!((c_2.to_string(), b.to_string()), ("-10".to_owned(), "-9".to_owned()));

        let d_1 = a.increment().clone();
        let d_2 = b.increment().clone();
        assert_eq!((d_1.to_string(), a.to_string()), ("12".to_owned(), "12".to_owned()));
        assert_eq!((d_2.to_string(), b.to_string()), ("-8".to_owned(), "-8".to_owned()));

        let e_1 = a.post_decrement();
        let e_2 = b.post_decrement();
        assert_eq!((e_1.to_string(), a.to_string()), ("12".to_owned(), "11".to_owned()));
        assert_eq!((e_2.to_string(), b.to_string()), ("-8".to_owned(), "-9".to_owned()));

        let h_1 = a.decrement().clone();
        let h_2 = b.decrement().clone();
        assert_eq!((h_1.to_string(), a.to_string()), ("10".to_owned(), "10".to_owned()));
        assert_eq!((h_2.to_string(), b.to_string()), ("-10".to_owned(), "-10".to_owned()));
    }
}
