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
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

use crate::AnsiBasicColor;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SgrCode {
    Reset,
    Bold,
    Faint,
    Standout,
    Underscore,
    Blink,
    Reverse,
    Concealed,
    Foreground(AnsiBasicColor),
    Background(AnsiBasicColor),
}

pub mod sizing {
    use super::*;

    /// At most two color channels plus seven style flags can be active in one
    /// sequence, which is in [crate::StyleFlags] and [crate::ColorRequest].
    pub const MAX_SGR_CODES_PER_SEQUENCE: usize = 9;
    pub type InlineVecSgrCodes = SmallVec<[u8; MAX_SGR_CODES_PER_SEQUENCE]>;

    /// Large enough for both brackets, the CSI prefix, and every code of a fully
    /// loaded sequence (`\[\x1b[1;2;3;4;5;7;8;31;40m\]` is 26 bytes).
    pub const ESCAPE_SEQUENCE_STORAGE_SIZE: usize = 32;
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl SgrCode {
        /// The bare numeric SGR parameter. Code `6` is deliberately absent: the
        /// original palette jumps from blink (`5`) to reverse video (`7`).
        #[rustfmt::skip]
        pub fn code(&self) -> u8 {
            match *self {
                SgrCode::Reset             => 0,
                SgrCode::Bold              => 1,
                SgrCode::Faint             => 2,
                SgrCode::Standout          => 3,
                SgrCode::Underscore        => 4,
                SgrCode::Blink             => 5,
                SgrCode::Reverse           => 7,
                SgrCode::Concealed         => 8,
                SgrCode::Foreground(color) => color.foreground_code(),
                SgrCode::Background(color) => color.background_code(),
            }
        }
    }

    impl Display for SgrCode {
        /// SGR: set graphics mode command, as a standalone (unbracketed) escape
        /// sequence. Prompt embedding goes through
        /// [crate::PromptColorFormatter] instead, which brackets the sequence
        /// for the shell's line editor.
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{CSI}{}{SGR}", self.code())
        }
    }
}

/// The seven boolean style attributes of the original SGR palette, each mapping to
/// one numeric code. All flags default to off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StyleFlags {
    pub bold: bool,
    pub faint: bool,
    pub standout: bool,
    pub underscore: bool,
    pub blink: bool,
    pub reverse: bool,
    pub concealed: bool,
}

mod style_flags_impl {
    use super::*;

    impl StyleFlags {
        /// Appends the SGR code for each set flag, in declaration order. The caller
        /// sorts the combined sequence before emitting it, so the order here only
        /// has to be deterministic.
        pub fn append_codes(&self, acc: &mut sizing::InlineVecSgrCodes) {
            if self.bold {
                acc.push(SgrCode::Bold.code());
            }
            if self.faint {
                acc.push(SgrCode::Faint.code());
            }
            if self.standout {
                acc.push(SgrCode::Standout.code());
            }
            if self.underscore {
                acc.push(SgrCode::Underscore.code());
            }
            if self.blink {
                acc.push(SgrCode::Blink.code());
            }
            if self.reverse {
                acc.push(SgrCode::Reverse.code());
            }
            if self.concealed {
                acc.push(SgrCode::Concealed.code());
            }
        }
    }
}

/// Appends the SGR codes for an optional background and foreground color selection.
/// Absence means "leave that channel alone". Pure function of its inputs.
pub fn append_color_codes(
    bg: Option<AnsiBasicColor>,
    fg: Option<AnsiBasicColor>,
    acc: &mut sizing::InlineVecSgrCodes,
) {
    if let Some(bg) = bg {
        acc.push(SgrCode::Background(bg).code());
    }
    if let Some(fg) = fg {
        acc.push(SgrCode::Foreground(fg).code());
    }
}
