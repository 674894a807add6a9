//! Single-block AES-128 (FIPS-197) encryption and decryption.
//!
//! This crate provides:
//! - The S-box tables and the GF(2^8) coefficient tables used by MixColumns.
//! - The AES-128 key schedule (11 round keys).
//! - The four round transforms and their inverses over a row-major [`State`].
//! - Single-block encryption and decryption, with or without a cached schedule.
//!
//! Only one 16-byte block is transformed per call. Chaining modes, padding and
//! other key sizes are left to callers. Table lookups are not side-channel
//! hardened; key material and working state are zeroized on drop.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod galois;
mod key;
mod round;
mod sbox;
mod schedule;
mod state;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, decrypt_with_round_keys, encrypt_block, encrypt_with_round_keys, Aes128,
};
pub use crate::error::{Error, Result};
pub use crate::galois::{gmul, xtime};
pub use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, ROUND_KEY_COUNT};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
pub use crate::schedule::{expand_key, RCON};
pub use crate::state::State;
