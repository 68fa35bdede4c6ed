// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! ANSI terminal colors used by the logging macros.

#![allow(dead_code)]

use std::fmt::{Debug, Display};

pub const RED: &str = "\x1b[31;1m";
pub const BLUE: &str = "\x1b[34;1m";
pub const YELLOW: &str = "\x1b[33;1m";
pub const PINK: &str = "\x1b[38;5;161;1m";
pub const MINT: &str = "\x1b[38;5;48;1m";
pub const GREY: &str = "\x1b[0;0m";
pub const LAVENDER: &str = "\x1b[38;5;183;1m";
pub const WHITE: &str = "\x1b[0;1m";
pub const CLEAR: &str = "\x1b[0;0m";

/// Colors a [`Display`] value for terminal output.
pub trait Color {
    fn red(&self) -> String;
    fn blue(&self) -> String;
    fn yellow(&self) -> String;
    fn pink(&self) -> String;
    fn mint(&self) -> String;
    fn grey(&self) -> String;
    fn lavender(&self) -> String;
    fn white(&self) -> String;
}

macro_rules! color_method {
    ($name:ident, $color:ident) => {
        fn $name(&self) -> String {
            format!("{}{}{CLEAR}", $color, self)
        }
    };
}

impl<T: Display> Color for T {
    color_method!(red, RED);
    color_method!(blue, BLUE);
    color_method!(yellow, YELLOW);
    color_method!(pink, PINK);
    color_method!(mint, MINT);
    color_method!(grey, GREY);
    color_method!(lavender, LAVENDER);
    color_method!(white, WHITE);
}

/// Like [`Color`], but via the [`Debug`] formatting of the value.
pub trait DebugColor {
    fn debug_red(&self) -> String;
    fn debug_blue(&self) -> String;
    fn debug_yellow(&self) -> String;
    fn debug_pink(&self) -> String;
    fn debug_mint(&self) -> String;
    fn debug_grey(&self) -> String;
    fn debug_lavender(&self) -> String;
    fn debug_white(&self) -> String;
}

macro_rules! debug_color_method {
    ($name:ident, $color:ident) => {
        fn $name(&self) -> String {
            format!("{}{:?}{CLEAR}", $color, self)
        }
    };
}

impl<T: Debug> DebugColor for T {
    debug_color_method!(debug_red, RED);
    debug_color_method!(debug_blue, BLUE);
    debug_color_method!(debug_yellow, YELLOW);
    debug_color_method!(debug_pink, PINK);
    debug_color_method!(debug_mint, MINT);
    debug_color_method!(debug_grey, GREY);
    debug_color_method!(debug_lavender, LAVENDER);
    debug_color_method!(debug_white, WHITE);
}
