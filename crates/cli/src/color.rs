// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling for scan output.
//!
//! `NO_COLOR` (any value) disables color, `COLOR` forces it, and otherwise
//! color is used only when stdout is a terminal outside CI.

use std::io::IsTerminal;
use termcolor::ColorChoice;

use crate::env::{is_set, names};

/// Resolve color choice from environment variables.
pub fn resolve_color() -> ColorChoice {
    if is_set(names::NO_COLOR) {
        return ColorChoice::Never;
    }
    if is_set(names::COLOR) {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || is_set(names::CI) {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for text output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Cyan input name.
    pub fn source() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow offset.
    pub fn offset() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Bold pattern text.
    pub fn pattern() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
