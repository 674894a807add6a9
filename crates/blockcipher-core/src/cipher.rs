//! AES-128 block encryption/decryption.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::expand_key;
use crate::state::State;

const LAST_ROUND: usize = ROUND_KEY_COUNT - 1;

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_with_round_keys(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..LAST_ROUND {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    // No MixColumns in the final round.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(LAST_ROUND));

    state.to_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_with_round_keys(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.get(LAST_ROUND));
    for round in (1..LAST_ROUND).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state.to_block()
}

/// Encrypts one block under `key`, deriving the schedule for this call only.
pub fn encrypt_block(key: &Aes128Key, plaintext: &Block) -> Block {
    encrypt_with_round_keys(plaintext, &expand_key(key))
}

/// Decrypts one block under `key`, deriving the schedule for this call only.
pub fn decrypt_block(key: &Aes128Key, ciphertext: &Block) -> Block {
    decrypt_with_round_keys(ciphertext, &expand_key(key))
}

/// AES-128 cipher holding an expanded key schedule.
///
/// Useful when many blocks are processed under one key; the schedule is wiped
/// when the cipher is dropped.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` and keeps the schedule.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Wraps an already expanded schedule, e.g. one loaded from a cache.
    pub fn from_round_keys(round_keys: RoundKeys) -> Self {
        Self { round_keys }
    }

    /// The cached schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts a single block.
    pub fn encrypt_block(&self, plaintext: &Block) -> Block {
        encrypt_with_round_keys(plaintext, &self.round_keys)
    }

    /// Decrypts a single block.
    pub fn decrypt_block(&self, ciphertext: &Block) -> Block {
        decrypt_with_round_keys(ciphertext, &self.round_keys)
    }
}
