// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefix function, Z-function and single-pattern search.

pub mod reconstruct;

pub use reconstruct::{PrefixFunctionDecoder, ReconstructError, z_function_to_string};

/// Extend a prefix function by one symbol.
///
/// Given `current`, the length of the longest border matched so far, return
/// the border length after appending `symbol`. `current` must be smaller
/// than `pattern.len()`, and `prefix` must hold the prefix function of
/// `pattern[..current]` at least.
pub fn next_prefix_value<T, F>(
    pattern: &[T],
    prefix: &[usize],
    current: usize,
    symbol: &T,
    eq: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut current = current;
    loop {
        if eq(symbol, &pattern[current]) {
            return current + 1;
        }
        if current == 0 {
            return 0;
        }
        current = prefix[current - 1];
    }
}

/// Prefix function of `seq`: `pi[i]` is the length of the longest proper
/// border of `seq[..=i]`.
pub fn prefix_function<T: PartialEq>(seq: &[T]) -> Vec<usize> {
    prefix_function_by(seq, |a, b| a == b)
}

/// [`prefix_function`] with a custom symbol equivalence.
pub fn prefix_function_by<T, F>(seq: &[T], mut eq: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut prefix = Vec::with_capacity(seq.len());
    if seq.is_empty() {
        return prefix;
    }
    prefix.push(0);
    for symbol in &seq[1..] {
        let last = prefix[prefix.len() - 1];
        let value = next_prefix_value(seq, &prefix, last, symbol, &mut eq);
        prefix.push(value);
    }
    prefix
}

/// Z-function of `seq`: `z[i]` is the length of the longest common prefix
/// of `seq` and `seq[i..]`. By convention `z[0]` is the length of `seq`.
pub fn z_function<T: PartialEq>(seq: &[T]) -> Vec<usize> {
    let n = seq.len();
    let mut z = vec![0; n];
    if n == 0 {
        return z;
    }
    z[0] = n;
    let (mut left, mut right) = (0, 0);
    for i in 1..n {
        if i < right {
            z[i] = (right - i).min(z[i - left]);
        }
        while i + z[i] < n && seq[z[i]] == seq[i + z[i]] {
            z[i] += 1;
        }
        if i + z[i] > right {
            left = i;
            right = i + z[i];
        }
    }
    z
}

/// Knuth-Morris-Pratt searcher for a single pattern.
#[derive(Debug, Clone)]
pub struct Kmp<T> {
    pattern: Vec<T>,
    prefix: Vec<usize>,
}

impl<T: PartialEq + Clone> Kmp<T> {
    pub fn new(pattern: &[T]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            prefix: prefix_function(pattern),
        }
    }

    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    /// Ending positions of every occurrence, overlapping ones included.
    ///
    /// An empty pattern never occurs.
    pub fn find_ends<'a>(&'a self, text: &'a [T]) -> impl Iterator<Item = usize> + 'a {
        let len = self.pattern.len();
        let mut matched = 0;
        text.iter().enumerate().filter_map(move |(pos, symbol)| {
            if len == 0 {
                return None;
            }
            if matched == len {
                matched = self.prefix[len - 1];
            }
            matched = next_prefix_value(
                &self.pattern,
                &self.prefix,
                matched,
                symbol,
                &mut |a, b| a == b,
            );
            (matched == len).then_some(pos)
        })
    }

    /// Starting positions of every occurrence, in increasing order.
    pub fn find_starts<'a>(&'a self, text: &'a [T]) -> impl Iterator<Item = usize> + 'a {
        let len = self.pattern.len();
        self.find_ends(text).map(move |end| end + 1 - len)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
