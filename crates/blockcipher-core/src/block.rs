//! Block representation helpers.

use crate::error::{Error, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two equally sized byte arrays, writing the result into `dst`.
#[inline]
pub fn xor_in_place<const N: usize>(dst: &mut [u8; N], rhs: &[u8; N]) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a slice into a [`Block`], rejecting anything but exactly 16 bytes.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { actual: bytes.len() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_self_inverse() {
        let original = [0x5au8; 16];
        let mask: Block = core::array::from_fn(|i| i as u8);
        let mut data = original;
        xor_in_place(&mut data, &mask);
        assert_ne!(data, original);
        xor_in_place(&mut data, &mask);
        assert_eq!(data, original);
    }

    #[test]
    fn block_from_slice_checks_length() {
        assert_eq!(block_from_slice(&[7u8; 16]), Ok([7u8; 16]));
        assert_eq!(
            block_from_slice(&[0u8; 15]),
            Err(Error::InvalidBlockLength { actual: 15 })
        );
        assert_eq!(
            block_from_slice(&[0u8; 17]),
            Err(Error::InvalidBlockLength { actual: 17 })
        );
    }
}
