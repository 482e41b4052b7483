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

use r3bl_prompt_color::{AnsiBasicColor,
                        ColorRequest,
                        PromptColorFormatter,
                        ShellFlavor};

fn main() {
    // Build a bash prompt fragment: bold green `user@host`, blue working dir.
    {
        let bash = PromptColorFormatter::new(ShellFlavor::Posix);
        let prompt = format!(
            "{bold_green}{host}{reset}:{blue}{dir}{reset}{dollar} ",
            bold_green = bash.bold_fg(AnsiBasicColor::Green).as_str(),
            blue = bash.fg(AnsiBasicColor::Blue).as_str(),
            reset = bash.reset().as_str(),
            host = bash.shell.hostname(),
            dir = bash.shell.dir(),
            dollar = bash.shell.dollar(),
        );
        println!("bash PS1 fragment:   {prompt:?}");
    }

    // The same fragment in zsh's prompt expansion syntax.
    {
        let zsh = PromptColorFormatter::new(ShellFlavor::ZshPrompt);
        let prompt = format!(
            "{bold_green}{host}{reset}:{blue}{dir}{reset}{dollar} ",
            bold_green = zsh.bold_fg(AnsiBasicColor::Green).as_str(),
            blue = zsh.fg(AnsiBasicColor::Blue).as_str(),
            reset = zsh.reset().as_str(),
            host = zsh.shell.hostname(),
            dir = zsh.shell.dir(),
            dollar = zsh.shell.dollar(),
        );
        println!("zsh PROMPT fragment: {prompt:?}");
    }

    // Show a few color & style flag combinations.
    {
        let bash = PromptColorFormatter::new(ShellFlavor::Posix);
        let requests = [
            ("reset", ColorRequest::default()),
            (
                "bold + underscore",
                ColorRequest::default().bold().underscore(),
            ),
            (
                "red on black",
                ColorRequest::default()
                    .fg(AnsiBasicColor::Red)
                    .bg(AnsiBasicColor::Black),
            ),
            (
                "faint blinking cyan",
                ColorRequest::default()
                    .fg(AnsiBasicColor::Cyan)
                    .faint()
                    .blink(),
            ),
        ];
        for (label, request) in requests {
            println!("{label:<20} -> {:?}", bash.color(&request).as_str());
        }
    }
}
