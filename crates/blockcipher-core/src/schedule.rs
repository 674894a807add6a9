//! AES-128 key expansion.

use crate::block::xor_in_place;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::sbox::sbox;

/// Round constants, indexed by the 1-based round whose key is being derived.
/// Entry 0 is unused.
pub const RCON: [u8; ROUND_KEY_COUNT] = [
    0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36,
];

type Word = [u8; 4];

/// Rotates the word left by one byte, substitutes every byte and folds the
/// round constant into the first byte.
fn g(word: &Word, round: usize) -> Word {
    let mut out = *word;
    out.rotate_left(1);
    for byte in out.iter_mut() {
        *byte = sbox(*byte);
    }
    out[0] ^= RCON[round];
    out
}

fn words(round_key: &[u8; 16]) -> [Word; 4] {
    core::array::from_fn(|i| {
        let offset = i * 4;
        [
            round_key[offset],
            round_key[offset + 1],
            round_key[offset + 2],
            round_key[offset + 3],
        ]
    })
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut round_keys = RoundKeys([[0u8; 16]; ROUND_KEY_COUNT]);
    round_keys.0[0] = key.0;

    for round in 1..ROUND_KEY_COUNT {
        let prev = words(&round_keys.0[round - 1]);

        let mut next = [[0u8; 4]; 4];
        next[0] = g(&prev[3], round);
        xor_in_place(&mut next[0], &prev[0]);
        for i in 1..4 {
            next[i] = next[i - 1];
            xor_in_place(&mut next[i], &prev[i]);
        }

        for (chunk, word) in round_keys.0[round].chunks_exact_mut(4).zip(next.iter()) {
            chunk.copy_from_slice(word);
        }
    }

    round_keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois::xtime;

    fn hex_block(s: &str) -> [u8; 16] {
        hex::decode(s)
            .expect("valid hex")
            .try_into()
            .expect("16 bytes")
    }

    #[test]
    fn rcon_is_successive_powers_of_two() {
        assert_eq!(RCON[1], 1);
        for i in 1..RCON.len() - 1 {
            assert_eq!(RCON[i + 1], xtime(RCON[i]));
        }
    }

    #[test]
    fn first_round_key_is_the_key() {
        let key = Aes128Key::from(hex_block("2b7e151628aed2a6abf7158809cf4f3c"));
        let rks = expand_key(&key);
        assert_eq!(rks.get(0), &key.0);
    }

    #[test]
    fn fips_appendix_a_expansion() {
        let key = Aes128Key::from(hex_block("2b7e151628aed2a6abf7158809cf4f3c"));
        let rks = expand_key(&key);
        assert_eq!(rks.get(1), &hex_block("a0fafe1788542cb123a339392a6c7605"));
        assert_eq!(rks.get(10), &hex_block("d014f9a8c9ee2589e13f0cc8b6630ca6"));
    }

    #[test]
    fn sequential_key_last_round() {
        let key = Aes128Key::from(hex_block("000102030405060708090a0b0c0d0e0f"));
        let rks = expand_key(&key);
        assert_eq!(rks.get(10), &hex_block("13111d7fe3944a17f307a78b4d2b30c5"));
    }

    #[test]
    fn zero_key_schedule() {
        let rks = expand_key(&Aes128Key::from([0u8; 16]));
        assert_eq!(rks.get(1), &hex_block("62636363626363636263636362636363"));
        assert_eq!(rks.get(10), &hex_block("b4ef5bcb3e92e21123e951cf6f8f188e"));
    }

    #[test]
    fn expansion_is_deterministic() {
        let key = Aes128Key::from([0x42; 16]);
        assert_eq!(expand_key(&key), expand_key(&key));
    }

    #[test]
    fn g_rotates_substitutes_and_adds_rcon() {
        // w[3] of the FIPS example key, first expansion step.
        let word = [0x09, 0xcf, 0x4f, 0x3c];
        assert_eq!(g(&word, 1), [0x8b, 0x84, 0xeb, 0x01]);
    }
}
