//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use reckon_language::{constants, functions, is_operator_char};

/// Highlighter for Reckon expression syntax.
pub struct ReckonHighlighter {
    // Could cache per-line token spans here if needed
}

impl ReckonHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                // Numbers, including hex literals
                c if c.is_ascii_digit() => {
                    result.push_str("\x1b[35m"); // magenta
                    result.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_ascii_alphanumeric() || next == '.' {
                            result.push(c_next(&mut chars));
                        } else {
                            break;
                        }
                    }
                    result.push_str("\x1b[0m");
                }

                // Function and constant names
                c if c.is_ascii_alphabetic() => {
                    let mut word = String::new();
                    word.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_ascii_alphanumeric() || next == '_' {
                            word.push(c_next(&mut chars));
                        } else {
                            break;
                        }
                    }

                    let color = if functions::exists(&word) {
                        "\x1b[36m" // cyan
                    } else if constants::exists(&word.to_uppercase()) {
                        "\x1b[33m" // yellow
                    } else {
                        ""
                    };

                    if color.is_empty() {
                        result.push_str(&word);
                    } else {
                        result.push_str(color);
                        result.push_str(&word);
                        result.push_str("\x1b[0m");
                    }
                }

                // Parentheses - bold
                '(' | ')' => {
                    result.push_str("\x1b[1m");
                    result.push(c);
                    result.push_str("\x1b[0m");
                }

                // Operators - blue
                c if is_operator_char(c) => {
                    result.push_str("\x1b[34m");
                    result.push(c);
                    result.push_str("\x1b[0m");
                }

                _ => result.push(c),
            }
        }

        Cow::Owned(result)
    }
}

fn c_next(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> char {
    chars.next().expect("peeked")
}

impl Default for ReckonHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
