/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>

use strum_macros::{EnumCount, FromRepr};

/// SGR code offset for a foreground color (`30` + palette index).
pub const FOREGROUND_BASE: u8 = 30;

/// SGR code offset for a background color (`40` + palette index).
pub const BACKGROUND_BASE: u8 = 40;

/// One of the eight colors of the original ANSI palette. The discriminant is the
/// palette index; the enum makes out-of-range indices unrepresentable, so the SGR
/// code arithmetic below can't produce garbage.
///
/// Use [AnsiBasicColor::from_repr] (from [strum]) to convert an untrusted `u8` index
/// back into a variant; it returns `None` for anything above 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, FromRepr)]
#[repr(u8)]
pub enum AnsiBasicColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

mod basic_color_impl {
    use super::*;

    impl AnsiBasicColor {
        /// SGR code to select this color as the foreground, i.e. `30..=37`.
        pub fn foreground_code(&self) -> u8 {
            *self as u8 + FOREGROUND_BASE
        }

        /// SGR code to select this color as the background, i.e. `40..=47`.
        pub fn background_code(&self) -> u8 {
            *self as u8 + BACKGROUND_BASE
        }
    }
}
