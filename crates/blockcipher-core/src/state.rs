//! The 4×4 working state the round transforms operate on.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_SIZE};

/// Number of rows (and columns) in the state.
pub(crate) const NB: usize = 4;

/// AES state stored row-major: row `r` occupies flat offsets `4r..4r + 4`.
///
/// A column is the four bytes at the same offset in every row. Blocks map in
/// and out in FIPS-197 order: block byte `i` sits at row `i % 4`, column `i / 4`.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct State {
    rows: [[u8; NB]; NB],
}

impl State {
    /// Loads a block into a fresh state.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; NB]; NB];
        for (i, byte) in block.iter().enumerate() {
            rows[i % NB][i / NB] = *byte;
        }
        Self { rows }
    }

    /// Reads the state back out as a block.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.rows[i % NB][i / NB];
        }
        block
    }

    /// Builds a state from its row-major byte layout.
    pub fn from_row_major(bytes: [u8; BLOCK_SIZE]) -> Self {
        let mut rows = [[0u8; NB]; NB];
        for (row, chunk) in rows.iter_mut().zip(bytes.chunks_exact(NB)) {
            row.copy_from_slice(chunk);
        }
        Self { rows }
    }

    /// Returns the row-major byte layout.
    pub fn to_row_major(&self) -> [u8; BLOCK_SIZE] {
        let mut bytes = [0u8; BLOCK_SIZE];
        for (chunk, row) in bytes.chunks_exact_mut(NB).zip(self.rows.iter()) {
            chunk.copy_from_slice(row);
        }
        bytes
    }

    /// Byte at row `row`, intra-row offset `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// Overwrites the byte at row `row`, intra-row offset `col`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.rows[row][col] = value;
    }

    /// Mutable view of a single row.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [u8; NB] {
        &mut self.rows[row]
    }

    /// Copies out column `col`, top row first.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; NB] {
        [
            self.rows[0][col],
            self.rows[1][col],
            self.rows[2][col],
            self.rows[3][col],
        ]
    }

    /// Writes column `col`, top row first.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: [u8; NB]) {
        for (row, value) in self.rows.iter_mut().zip(column) {
            row[col] = value;
        }
    }

    /// Iterates mutably over all 16 bytes.
    pub(crate) fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.rows.iter_mut().flatten()
    }
}
