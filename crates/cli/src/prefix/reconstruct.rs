// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rebuild strings from their prefix function or Z-function.
//!
//! Both decoders produce the lexicographically smallest string over the
//! lowercase letters `a`..`z` and reject input that no string produces.

use super::{next_prefix_value, z_function};

const LETTERS: usize = 26;

/// Input that does not describe any string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconstructError {
    /// The value is too large for its position.
    #[error("value {value} at position {position} is out of range")]
    OutOfRange { position: usize, value: usize },

    /// The value contradicts the values before it.
    #[error("value {value} at position {position} is inconsistent with earlier values")]
    Inconsistent { position: usize, value: usize },

    /// Every letter is excluded at this position.
    #[error("no letter available at position {position}")]
    AlphabetExhausted { position: usize },
}

/// Smallest letter not marked in `banned`.
fn first_free(banned: &[bool; LETTERS]) -> Option<u8> {
    banned
        .iter()
        .position(|&b| !b)
        .map(|pos| b'a' + pos as u8)
}

fn letter_slot(letter: u8) -> usize {
    usize::from(letter - b'a')
}

/// Incremental prefix-function decoder.
///
/// Values are accepted one at a time; after each accepted value the decoded
/// string is the smallest string whose prefix function is the values so far.
#[derive(Debug, Clone, Default)]
pub struct PrefixFunctionDecoder {
    prefix: Vec<usize>,
    text: String,
}

impl PrefixFunctionDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one prefix-function value.
    ///
    /// A rejected value leaves the decoder unchanged.
    pub fn push(&mut self, value: usize) -> Result<(), ReconstructError> {
        let position = self.prefix.len();
        let Some(&last) = self.prefix.last() else {
            if value != 0 {
                return Err(ReconstructError::OutOfRange { position, value });
            }
            self.prefix.push(0);
            self.text.push('a');
            return Ok(());
        };

        if value > position {
            return Err(ReconstructError::OutOfRange { position, value });
        }

        let bytes = self.text.as_bytes();
        let letter = if value > 0 {
            let letter = bytes[value - 1];
            let actual = next_prefix_value(bytes, &self.prefix, last, &letter, &mut |a, b| a == b);
            if actual != value {
                return Err(ReconstructError::Inconsistent { position, value });
            }
            letter
        } else {
            // Exclude every letter that would extend a border.
            let mut banned = [false; LETTERS];
            let mut border = last;
            loop {
                banned[letter_slot(bytes[border])] = true;
                if border == 0 {
                    break;
                }
                border = self.prefix[border - 1];
            }
            first_free(&banned).ok_or(ReconstructError::AlphabetExhausted { position })?
        };

        self.prefix.push(value);
        self.text.push(char::from(letter));
        Ok(())
    }

    /// Append several values, stopping at the first rejected one.
    pub fn extend<I>(&mut self, values: I) -> Result<(), ReconstructError>
    where
        I: IntoIterator<Item = usize>,
    {
        values.into_iter().try_for_each(|value| self.push(value))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }
}

/// Smallest string whose Z-function is `z`.
///
/// `z[0]` is ignored. Works left to right keeping a stack of Z-blocks that
/// end exactly at the current length; when the next letter is free, each of
/// those blocks forbids the letter that would extend it.
pub fn z_function_to_string(z: &[usize]) -> Result<String, ReconstructError> {
    let n = z.len();
    if n == 0 {
        return Ok(String::new());
    }
    if let Some(position) = (1..n).find(|&i| z[i] > n - i) {
        return Err(ReconstructError::OutOfRange {
            position,
            value: z[position],
        });
    }

    let mut text: Vec<u8> = Vec::with_capacity(n);
    text.push(b'a');
    let mut blocks: Vec<usize> = Vec::new();

    let mut i = 1;
    while i < n {
        let reach = i + z[i];
        if reach < text.len() {
            i += 1;
        } else if reach == text.len() {
            blocks.push(i);
            if z[i] == 0 {
                let mut banned = [false; LETTERS];
                for block in blocks.drain(..) {
                    banned[letter_slot(text[z[block]])] = true;
                }
                let letter =
                    first_free(&banned).ok_or(ReconstructError::AlphabetExhausted { position: i })?;
                text.push(letter);
            }
            i += 1;
        } else {
            // Copy forward, switching to any block that reaches further.
            let mut block = i;
            let mut pos = text.len();
            while pos < block + z[block] {
                if pos + z[pos] > block + z[block] {
                    block = pos;
                }
                let letter = text[pos - block];
                text.push(letter);
                pos += 1;
            }
            // Blocks after `i` are revisited against the new length.
            blocks.clear();
            if block == i {
                blocks.push(i);
            }
            i += 1;
        }
    }

    let actual = z_function(&text);
    if let Some(position) = (1..n).find(|&i| actual.get(i) != Some(&z[i])) {
        return Err(ReconstructError::Inconsistent {
            position,
            value: z[position],
        });
    }

    Ok(text.into_iter().map(char::from).collect())
}

#[cfg(test)]
#[path = "reconstruct_tests.rs"]
mod tests;
