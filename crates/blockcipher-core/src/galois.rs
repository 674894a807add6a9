//! GF(2^8) arithmetic modulo the Rijndael polynomial x^8 + x^4 + x^3 + x + 1.
//!
//! The MixColumns coefficient tables are built at compile time from [`gmul`],
//! so they are plain read-only data at runtime.

/// Low byte of the reducing polynomial 0x11b (the x^8 term falls off a `u8`).
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by x (that is, by 2) in the field.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements.
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

const fn mul_table(coefficient: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        table[x] = gmul(x as u8, coefficient);
        x += 1;
    }
    table
}

pub(crate) const MUL_2: [u8; 256] = mul_table(2);
pub(crate) const MUL_3: [u8; 256] = mul_table(3);
pub(crate) const MUL_9: [u8; 256] = mul_table(9);
pub(crate) const MUL_11: [u8; 256] = mul_table(11);
pub(crate) const MUL_13: [u8; 256] = mul_table(13);
pub(crate) const MUL_14: [u8; 256] = mul_table(14);
