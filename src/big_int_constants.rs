pub const RADIX: u8 = 10;

pub const DIGITS: [char; RADIX as usize] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9'
];

/// Largest absolute value kept in the small-value cache.
pub const MAX_CONSTANT: usize = 16;
