//! Boundary adapter between host-style integer collections and the block cipher.
//!
//! A host hands over a key, a block and a mode selector as plain integers.
//! Everything is validated here, before any round runs; the core crate only
//! ever sees fixed 16-byte buffers.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use blockcipher_core::{Aes128, Aes128Key, Block, Error, Result, BLOCK_SIZE, KEY_SIZE};
use log::debug;

/// Mode selector value requesting encryption.
pub const ENCRYPT: i64 = 0;
/// Mode selector value requesting decryption.
pub const DECRYPT: i64 = 1;

/// Direction of the block transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Forward cipher.
    Encrypt,
    /// Inverse cipher.
    Decrypt,
}

impl TryFrom<i64> for Mode {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            ENCRYPT => Ok(Mode::Encrypt),
            DECRYPT => Ok(Mode::Decrypt),
            other => Err(Error::InvalidMode { mode: other }),
        }
    }
}

impl From<Mode> for i64 {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Encrypt => ENCRYPT,
            Mode::Decrypt => DECRYPT,
        }
    }
}

impl Mode {
    /// Runs the transform for this direction on an already-typed block.
    pub fn apply(self, cipher: &Aes128, block: &Block) -> Block {
        match self {
            Mode::Encrypt => cipher.encrypt_block(block),
            Mode::Decrypt => cipher.decrypt_block(block),
        }
    }
}

fn to_bytes<const N: usize>(field: &'static str, values: &[i64]) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    for (index, (slot, &value)) in out.iter_mut().zip(values).enumerate() {
        *slot = u8::try_from(value).map_err(|_| Error::InvalidByteValue {
            field,
            index,
            value,
        })?;
    }
    Ok(out)
}

/// Validates host inputs into a typed key, block and mode.
///
/// Checks run in order: key length, block length, key elements, block
/// elements, mode selector. The first failure is returned.
pub fn validate(key: &[i64], block: &[i64], mode: i64) -> Result<(Aes128Key, Block, Mode)> {
    if key.len() != KEY_SIZE {
        return Err(Error::InvalidKeyLength { actual: key.len() });
    }
    if block.len() != BLOCK_SIZE {
        return Err(Error::InvalidBlockLength {
            actual: block.len(),
        });
    }
    let key = Aes128Key::from(to_bytes::<KEY_SIZE>("key", key)?);
    let block = to_bytes::<BLOCK_SIZE>("block", block)?;
    let mode = Mode::try_from(mode)?;
    Ok((key, block, mode))
}

/// Encrypts (`mode == 0`) or decrypts (`mode == 1`) one block given as integers.
///
/// The returned collection always holds 16 values in `0..=255`.
pub fn blockcipher(key: &[i64], block: &[i64], mode: i64) -> Result<Vec<i64>> {
    let (key, block, mode) = validate(key, block, mode).inspect_err(|err| {
        debug!("blockcipher: rejected input: {err}");
    })?;
    debug!("blockcipher: {mode:?} one block");

    let cipher = Aes128::new(&key);
    let output = mode.apply(&cipher, &block);
    Ok(output.iter().map(|&b| i64::from(b)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn ints(bytes: &[u8]) -> Vec<i64> {
        bytes.iter().map(|&b| i64::from(b)).collect()
    }

    fn nist_key() -> Vec<i64> {
        (0..16).collect()
    }

    fn nist_plain() -> Vec<i64> {
        (0..16).map(|i| i * 0x11).collect()
    }

    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn encrypts_and_decrypts_known_vector() {
        let ct = blockcipher(&nist_key(), &nist_plain(), ENCRYPT).expect("encrypt");
        assert_eq!(ct, ints(&NIST_CIPHER));
        let pt = blockcipher(&nist_key(), &ct, DECRYPT).expect("decrypt");
        assert_eq!(pt, nist_plain());
    }

    #[test]
    fn round_trips_random_inputs() {
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        for _ in 0..50 {
            let mut key = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);
            let ct = blockcipher(&ints(&key), &ints(&block), ENCRYPT).expect("encrypt");
            assert_eq!(ct.len(), 16);
            assert!(ct.iter().all(|v| (0..=255).contains(v)));
            let pt = blockcipher(&ints(&key), &ct, DECRYPT).expect("decrypt");
            assert_eq!(pt, ints(&block));
        }
    }

    #[test]
    fn rejects_bad_key_length() {
        for len in [0usize, 15, 17] {
            let key = vec![0i64; len];
            assert_eq!(
                blockcipher(&key, &nist_plain(), ENCRYPT),
                Err(Error::InvalidKeyLength { actual: len })
            );
        }
    }

    #[test]
    fn rejects_bad_block_length() {
        for len in [15usize, 17] {
            let block = vec![0i64; len];
            assert_eq!(
                blockcipher(&nist_key(), &block, DECRYPT),
                Err(Error::InvalidBlockLength { actual: len })
            );
        }
    }

    #[test]
    fn rejects_out_of_range_elements() {
        let mut key = nist_key();
        key[4] = 256;
        assert_eq!(
            blockcipher(&key, &nist_plain(), ENCRYPT),
            Err(Error::InvalidByteValue {
                field: "key",
                index: 4,
                value: 256
            })
        );

        let mut block = nist_plain();
        block[15] = -1;
        assert_eq!(
            blockcipher(&nist_key(), &block, ENCRYPT),
            Err(Error::InvalidByteValue {
                field: "block",
                index: 15,
                value: -1
            })
        );
    }

    #[test]
    fn rejects_unknown_mode() {
        for mode in [-1i64, 2, 42] {
            assert_eq!(
                blockcipher(&nist_key(), &nist_plain(), mode),
                Err(Error::InvalidMode { mode })
            );
        }
    }

    #[test]
    fn length_errors_win_over_value_errors() {
        let key = vec![300i64; 17];
        assert_eq!(
            blockcipher(&key, &nist_plain(), 9),
            Err(Error::InvalidKeyLength { actual: 17 })
        );
    }

    #[test]
    fn mode_round_trips_through_selector() {
        for mode in [Mode::Encrypt, Mode::Decrypt] {
            assert_eq!(Mode::try_from(i64::from(mode)), Ok(mode));
        }
    }
}
