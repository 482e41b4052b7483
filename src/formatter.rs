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

use smallstr::SmallString;

use crate::{AnsiBasicColor,
            ShellFlavor,
            SgrCode,
            StyleFlags,
            append_color_codes,
            sgr_code_impl::{CSI, SGR},
            sizing::InlineVecSgrCodes};

/// One bracketed escape sequence, ready to splice into a prompt string. Owned in a
/// stack allocated buffer (which can spill to the heap if it gets larger than
/// [crate::sizing::ESCAPE_SEQUENCE_STORAGE_SIZE]).
pub type EscapeSequence =
    SmallString<[u8; crate::sizing::ESCAPE_SEQUENCE_STORAGE_SIZE]>;

/// One color/style selection, i.e. the argument to [PromptColorFormatter::color].
/// This is a plain data struct: construct it with struct literal syntax, or start
/// from [Default] and chain the builder methods.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_prompt_color::{AnsiBasicColor, ColorRequest, PromptColorFormatter, ShellFlavor};
///
/// let formatter = PromptColorFormatter::new(ShellFlavor::Posix);
/// let seq = formatter.color(
///     &ColorRequest::default()
///         .fg(AnsiBasicColor::Red)
///         .bg(AnsiBasicColor::Black),
/// );
/// assert_eq!(seq.as_str(), "\\[\x1b[31;40m\\]");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColorRequest {
    pub bg: Option<AnsiBasicColor>,
    pub fg: Option<AnsiBasicColor>,
    pub style: StyleFlags,
}

mod color_request_impl {
    use super::*;

    impl ColorRequest {
        pub fn bg(mut self, arg_color: AnsiBasicColor) -> Self {
            self.bg = Some(arg_color);
            self
        }

        pub fn fg(mut self, arg_color: AnsiBasicColor) -> Self {
            self.fg = Some(arg_color);
            self
        }

        pub fn bold(mut self) -> Self {
            self.style.bold = true;
            self
        }

        pub fn faint(mut self) -> Self {
            self.style.faint = true;
            self
        }

        pub fn standout(mut self) -> Self {
            self.style.standout = true;
            self
        }

        pub fn underscore(mut self) -> Self {
            self.style.underscore = true;
            self
        }

        pub fn blink(mut self) -> Self {
            self.style.blink = true;
            self
        }

        pub fn reverse(mut self) -> Self {
            self.style.reverse = true;
            self
        }

        pub fn concealed(mut self) -> Self {
            self.style.concealed = true;
            self
        }
    }
}

/// Generates prompt-bracketed SGR escape sequences for one shell dialect.
///
/// The flavor is fixed at construction and the formatter holds no other state, so a
/// single instance can be shared freely across threads and every call is a pure
/// function of its arguments.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_prompt_color::{AnsiBasicColor, PromptColorFormatter, ShellFlavor};
///
/// let zsh = PromptColorFormatter::new(ShellFlavor::ZshPrompt);
/// assert_eq!(zsh.fg(AnsiBasicColor::Green).as_str(), "%{\x1b[32m%}");
/// assert_eq!(zsh.reset().as_str(), "%{\x1b[0m%}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptColorFormatter {
    pub shell: ShellFlavor,
}

mod formatter_impl {
    use std::fmt::Write as _;

    use super::*;

    impl PromptColorFormatter {
        pub fn new(shell: ShellFlavor) -> Self {
            Self { shell }
        }

        /// Produces the escape sequence for one [ColorRequest]. When no color and
        /// no style flag is selected the sequence degenerates to the reset code
        /// `0`, which is the only normalization besides sorting.
        pub fn color(&self, request: &ColorRequest) -> EscapeSequence {
            let mut codes = InlineVecSgrCodes::new();
            append_color_codes(request.bg, request.fg, &mut codes);
            request.style.append_codes(&mut codes);

            if codes.is_empty() {
                codes.push(SgrCode::Reset.code());
            }

            self.wrap_codes(&mut codes)
        }

        /// Shorthand for a plain foreground color sequence.
        pub fn fg(&self, arg_color: AnsiBasicColor) -> EscapeSequence {
            self.color(&ColorRequest::default().fg(arg_color))
        }

        /// Shorthand for a bold foreground color sequence.
        pub fn bold_fg(&self, arg_color: AnsiBasicColor) -> EscapeSequence {
            self.color(&ColorRequest::default().fg(arg_color).bold())
        }

        /// Shorthand for the sequence that resets all colors and styles.
        pub fn reset(&self) -> EscapeSequence {
            self.color(&ColorRequest::default())
        }

        /// The single formatting primitive: sorts the codes ascending, joins them
        /// with `;`, and brackets `\x1b[<joined>m` in the flavor's non-printing
        /// delimiters. Every public operation funnels through here, which is what
        /// keeps the byte format consistent across all of them.
        fn wrap_codes(&self, codes: &mut InlineVecSgrCodes) -> EscapeSequence {
            codes.sort_unstable();

            let (open, close) = self.shell.delimiters();
            let mut acc = EscapeSequence::new();
            acc.push_str(open);
            acc.push_str(CSI);
            for (index, code) in codes.iter().enumerate() {
                if index > 0 {
                    acc.push(';');
                }
                // Writing a u8 into a SmallString can't fail.
                let _ = write!(acc, "{code}");
            }
            acc.push_str(SGR);
            acc.push_str(close);
            acc
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{ColorRequest, PromptColorFormatter};
    use crate::{AnsiBasicColor, ShellFlavor};

    fn posix() -> PromptColorFormatter {
        PromptColorFormatter::new(ShellFlavor::Posix)
    }

    fn zsh() -> PromptColorFormatter {
        PromptColorFormatter::new(ShellFlavor::ZshPrompt)
    }

    #[test]
    fn default_request_is_reset_posix() {
        let seq = posix().color(&ColorRequest::default());
        assert_eq!(seq.as_str(), "\\[\x1b[0m\\]");
    }

    #[test]
    fn default_request_is_reset_zsh() {
        let seq = zsh().color(&ColorRequest::default());
        assert_eq!(seq.as_str(), "%{\x1b[0m%}");
    }

    #[test]
    fn bg_and_fg_sort_ascending() {
        // 31 (red foreground) sorts before 40 (black background).
        let request = ColorRequest::default()
            .bg(AnsiBasicColor::Black)
            .fg(AnsiBasicColor::Red);
        assert_eq!(posix().color(&request).as_str(), "\\[\x1b[31;40m\\]");
    }

    #[test]
    fn bold_underscore_combination() {
        let request = ColorRequest::default().bold().underscore();
        assert_eq!(posix().color(&request).as_str(), "\\[\x1b[1;4m\\]");
    }

    #[test]
    fn styles_and_colors_interleave_sorted() {
        let request = ColorRequest::default()
            .fg(AnsiBasicColor::Green)
            .bg(AnsiBasicColor::White)
            .bold()
            .blink();
        assert_eq!(posix().color(&request).as_str(), "\\[\x1b[1;5;32;47m\\]");
    }

    #[test]
    fn every_style_flag_maps_to_its_code() {
        let request = ColorRequest::default()
            .bold()
            .faint()
            .standout()
            .underscore()
            .blink()
            .reverse()
            .concealed();
        assert_eq!(
            posix().color(&request).as_str(),
            "\\[\x1b[1;2;3;4;5;7;8m\\]"
        );
    }

    #[test_case(AnsiBasicColor::Black, "\\[\x1b[30m\\]")]
    #[test_case(AnsiBasicColor::Red, "\\[\x1b[31m\\]")]
    #[test_case(AnsiBasicColor::White, "\\[\x1b[37m\\]")]
    fn fg_shorthand(color: AnsiBasicColor, expected: &str) {
        assert_eq!(posix().fg(color).as_str(), expected);
    }

    #[test_case(AnsiBasicColor::Yellow, "%{\x1b[1;33m%}")]
    #[test_case(AnsiBasicColor::Blue, "%{\x1b[1;34m%}")]
    fn bold_fg_shorthand_zsh(color: AnsiBasicColor, expected: &str) {
        assert_eq!(zsh().bold_fg(color).as_str(), expected);
    }

    #[test]
    fn reset_shorthand_matches_default_request() {
        assert_eq!(posix().reset(), posix().color(&ColorRequest::default()));
        assert_eq!(zsh().reset().as_str(), "%{\x1b[0m%}");
    }

    #[test]
    fn color_is_idempotent() {
        let request = ColorRequest::default().fg(AnsiBasicColor::Magenta).bold();
        let first = posix().color(&request);
        let second = posix().color(&request);
        assert_eq!(first, second);
    }

    #[test]
    fn formatter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PromptColorFormatter>();
    }

    #[test]
    fn fully_loaded_sequence_stays_inline() {
        let request = ColorRequest::default()
            .bg(AnsiBasicColor::Black)
            .fg(AnsiBasicColor::Red)
            .bold()
            .faint()
            .standout()
            .underscore()
            .blink()
            .reverse()
            .concealed();
        let seq = posix().color(&request);
        assert_eq!(seq.as_str(), "\\[\x1b[1;2;3;4;5;7;8;31;40m\\]");
        assert!(!seq.spilled());
    }
}
