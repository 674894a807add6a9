//! AES round transformations.

use crate::block::Block;
use crate::galois::{MUL_11, MUL_13, MUL_14, MUL_2, MUL_3, MUL_9};
use crate::sbox::{inv_sbox, sbox};
use crate::state::{State, NB};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..NB {
        state.row_mut(row).rotate_left(row);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for row in 1..NB {
        state.row_mut(row).rotate_right(row);
    }
}

#[inline]
fn mul(table: &[u8; 256], byte: u8) -> u8 {
    table[byte as usize]
}

fn mix_single_column(col: [u8; NB]) -> [u8; NB] {
    let [a0, a1, a2, a3] = col;
    [
        mul(&MUL_2, a0) ^ mul(&MUL_3, a1) ^ a2 ^ a3,
        a0 ^ mul(&MUL_2, a1) ^ mul(&MUL_3, a2) ^ a3,
        a0 ^ a1 ^ mul(&MUL_2, a2) ^ mul(&MUL_3, a3),
        mul(&MUL_3, a0) ^ a1 ^ a2 ^ mul(&MUL_2, a3),
    ]
}

fn inv_mix_single_column(col: [u8; NB]) -> [u8; NB] {
    let [a0, a1, a2, a3] = col;
    [
        mul(&MUL_14, a0) ^ mul(&MUL_11, a1) ^ mul(&MUL_13, a2) ^ mul(&MUL_9, a3),
        mul(&MUL_9, a0) ^ mul(&MUL_14, a1) ^ mul(&MUL_11, a2) ^ mul(&MUL_13, a3),
        mul(&MUL_13, a0) ^ mul(&MUL_9, a1) ^ mul(&MUL_14, a2) ^ mul(&MUL_11, a3),
        mul(&MUL_11, a0) ^ mul(&MUL_13, a1) ^ mul(&MUL_9, a2) ^ mul(&MUL_14, a3),
    ]
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..NB {
        let mixed = mix_single_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..NB {
        let mixed = inv_mix_single_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Adds (XORs) a round key into the state.
///
/// The round key is laid over the state the same way a block is.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    for (i, byte) in round_key.iter().enumerate() {
        let (row, col) = (i % NB, i / NB);
        state.set(row, col, state.get(row, col) ^ byte);
    }
}
