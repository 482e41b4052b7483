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

//! # r3bl_prompt_color
//!
//! Generate ANSI SGR escape sequences for colored and styled text, bracketed so they
//! can be embedded directly in a shell prompt variable (`PS1` / `PROMPT`) without
//! confusing the shell's cursor-position accounting.
//!
//! Two shell dialects are supported via [ShellFlavor]:
//! - [ShellFlavor::Posix] wraps each sequence in the literal `\[` / `\]` markers that
//!   readline-style shells (bash) use to flag non-printing spans.
//! - [ShellFlavor::ZshPrompt] wraps each sequence in zsh's `%{` / `%}` markers.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_prompt_color::{AnsiBasicColor, ColorRequest, PromptColorFormatter, ShellFlavor};
//!
//! let bash = PromptColorFormatter::new(ShellFlavor::Posix);
//!
//! // Red text on a black background, codes sorted ascending inside the sequence.
//! let seq = bash.color(
//!     &ColorRequest::default()
//!         .fg(AnsiBasicColor::Red)
//!         .bg(AnsiBasicColor::Black),
//! );
//! assert_eq!(seq.as_str(), "\\[\x1b[31;40m\\]");
//!
//! // No selection at all degenerates to the reset sequence.
//! assert_eq!(bash.reset().as_str(), "\\[\x1b[0m\\]");
//! ```
//!
//! More info:
//! - <https://www.gnu.org/software/bash/manual/html_node/Controlling-the-Prompt.html>
//! - <https://zsh.sourceforge.io/Doc/Release/Prompt-Expansion.html>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

pub mod basic_color;
pub mod formatter;
pub mod sgr_code;
pub mod shell_flavor;

pub use basic_color::*;
pub use formatter::*;
pub use sgr_code::*;
pub use shell_flavor::*;
