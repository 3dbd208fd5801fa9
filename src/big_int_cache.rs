use lazy_static::*;

use crate::BigInt;
use crate::big_int_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::new(vec![0]   , false),
        BigInt::new(vec![1]   , false),
        BigInt::new(vec![2]   , false),
        BigInt::new(vec![3]   , false),
        BigInt::new(vec![4]   , false),
        BigInt::new(vec![5]   , false),
        BigInt::new(vec![6]   , false),
        BigInt::new(vec![7]   , false),
        BigInt::new(vec![8]   , false),
        BigInt::new(vec![9]   , false),
        BigInt::new(vec![0, 1], false),
        BigInt::new(vec![1, 1], false),
        BigInt::new(vec![2, 1], false),
        BigInt::new(vec![3, 1], false),
        BigInt::new(vec![4, 1], false),
        BigInt::new(vec![5, 1], false),
        BigInt::new(vec![6, 1], false),
    ];
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::new(vec![0]   , false),
        BigInt::new(vec![1]   , true),
        BigInt::new(vec![2]   , true),
        BigInt::new(vec![3]   , true),
        BigInt::new(vec![4]   , true),
        BigInt::new(vec![5]   , true),
        BigInt::new(vec![6]   , true),
        BigInt::new(vec![7]   , true),
        BigInt::new(vec![8]   , true),
        BigInt::new(vec![9]   , true),
        BigInt::new(vec![0, 1], true),
        BigInt::new(vec![1, 1], true),
        BigInt::new(vec![2, 1], true),
        BigInt::new(vec![3, 1], true),
        BigInt::new(vec![4, 1], true),
        BigInt::new(vec![5, 1], true),
        BigInt::new(vec![6, 1], true),
    ];
}

#[test]
fn test_cache_matches_digit_extraction() {
    for i in 0..=MAX_CONSTANT {
        let pos = BigInt::extract_digits(i as u128, false);
        let neg = BigInt::extract_digits(i as u128, true);
        assert_eq!(POS_CACHE[i], pos);
        assert_eq!(NEG_CACHE[i], neg);
        assert_eq!(POS_CACHE[i].to_string(), i.to_string());
    }
    assert!(!NEG_CACHE[0].is_negative());
    assert!(NEG_CACHE[0].is_zero());
}
