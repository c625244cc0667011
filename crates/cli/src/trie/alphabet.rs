// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Closed alphabets for dense edge tables.

use std::fmt;

/// A finite alphabet with a dense position for every symbol.
pub trait Alphabet {
    type Symbol: Copy + Eq + fmt::Debug;

    /// Number of symbols.
    const SIZE: usize;

    /// Name used in error messages.
    const NAME: &'static str;

    /// Position of `symbol` in `0..SIZE`, or `None` when outside the alphabet.
    fn position(symbol: Self::Symbol) -> Option<usize>;

    /// Symbol at `position`. Only called with positions below `SIZE`.
    fn symbol(position: usize) -> Self::Symbol;
}

/// The 26 lowercase ASCII letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Alphabet for Lowercase {
    type Symbol = u8;

    const SIZE: usize = 26;
    const NAME: &'static str = "lowercase";

    fn position(symbol: u8) -> Option<usize> {
        symbol
            .is_ascii_lowercase()
            .then(|| usize::from(symbol - b'a'))
    }

    fn symbol(position: usize) -> u8 {
        b'a' + position as u8
    }
}

/// Every byte value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bytes;

impl Alphabet for Bytes {
    type Symbol = u8;

    const SIZE: usize = 256;
    const NAME: &'static str = "byte";

    fn position(symbol: u8) -> Option<usize> {
        Some(usize::from(symbol))
    }

    fn symbol(position: usize) -> u8 {
        position as u8
    }
}

#[cfg(test)]
#[path = "alphabet_tests.rs"]
mod tests;
