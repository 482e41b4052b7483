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
//! - <https://www.gnu.org/software/bash/manual/html_node/Controlling-the-Prompt.html>
//! - <https://zsh.sourceforge.io/Doc/Release/Prompt-Expansion.html>

/// The shell dialect that the generated prompt string is destined for.
///
/// Escape sequences embedded in a prompt are invisible, but the shell's line editor
/// doesn't know that unless each sequence is bracketed in the dialect's non-printing
/// delimiters. Without the brackets the editor counts the escape bytes as visible
/// columns and cursor positioning breaks on long or wrapped command lines.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ShellFlavor {
    /// Readline-style shells (bash): non-printing spans are bracketed in the literal
    /// two-character delimiters `\[` and `\]`.
    Posix,

    /// Z shell prompt expansion: non-printing spans are bracketed in `%{` and `%}`.
    ZshPrompt,
}

pub mod shell_flavor_impl {
    use super::*;

    impl ShellFlavor {
        /// Returns the `(open, close)` non-printing bracket pair for this flavor.
        #[rustfmt::skip]
        pub fn delimiters(&self) -> (&'static str, &'static str) {
            match self {
                ShellFlavor::Posix     => (r"\[", r"\]"),
                ShellFlavor::ZshPrompt => ("%{", "%}"),
            }
        }

        /// Returns the prompt escape that expands to the working directory.
        #[rustfmt::skip]
        pub fn dir(&self) -> &'static str {
            match self {
                ShellFlavor::Posix     => r"\w",
                ShellFlavor::ZshPrompt => "%~",
            }
        }

        /// Returns the prompt escape that expands to the hostname.
        #[rustfmt::skip]
        pub fn hostname(&self) -> &'static str {
            match self {
                ShellFlavor::Posix     => r"\H",
                ShellFlavor::ZshPrompt => "%m",
            }
        }

        /// Returns the prompt escape that expands to `#` for root and `$` (or `%` in
        /// zsh) otherwise.
        #[rustfmt::skip]
        pub fn dollar(&self) -> &'static str {
            match self {
                ShellFlavor::Posix     => r"\$",
                ShellFlavor::ZshPrompt => "%#",
            }
        }
    }

    /// `true` means the alternate (zsh) dialect. This mirrors the `is_zsh` flag that
    /// prompt generators typically thread through from their CLI.
    impl From<bool> for ShellFlavor {
        fn from(is_zsh: bool) -> Self {
            if is_zsh {
                ShellFlavor::ZshPrompt
            } else {
                ShellFlavor::Posix
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ShellFlavor;

    #[test]
    fn posix_delimiters() {
        let (open, close) = ShellFlavor::Posix.delimiters();
        assert_eq!(open, "\\[");
        assert_eq!(close, "\\]");
    }

    #[test]
    fn zsh_delimiters() {
        let (open, close) = ShellFlavor::ZshPrompt.delimiters();
        assert_eq!(open, "%{");
        assert_eq!(close, "%}");
    }

    #[test]
    fn flavor_from_bool() {
        assert_eq!(ShellFlavor::from(false), ShellFlavor::Posix);
        assert_eq!(ShellFlavor::from(true), ShellFlavor::ZshPrompt);
    }

    #[test]
    fn posix_prompt_escapes() {
        assert_eq!(ShellFlavor::Posix.dir(), "\\w");
        assert_eq!(ShellFlavor::Posix.hostname(), "\\H");
        assert_eq!(ShellFlavor::Posix.dollar(), "\\$");
    }

    #[test]
    fn zsh_prompt_escapes() {
        assert_eq!(ShellFlavor::ZshPrompt.dir(), "%~");
        assert_eq!(ShellFlavor::ZshPrompt.hostname(), "%m");
        assert_eq!(ShellFlavor::ZshPrompt.dollar(), "%#");
    }
}
