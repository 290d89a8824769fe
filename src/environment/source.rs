//! Reading the environment type out of an environment file
//!
//! `_ss_environment.php` is executable PHP. It is never executed here: the
//! file is scanned for `define('<CONSTANT>', '<value>')` calls instead.

use std::fs;
use std::path::Path;

use crate::error::{self, Result};

/// Something that can read an environment type from a discovered file
pub trait EnvironmentSource {
    /// Return the value of `constant` declared in `file`, if any
    fn read_type(&self, file: &Path, constant: &str) -> Result<Option<String>>;
}

/// Declarative reader for PHP `define()` calls
#[derive(Debug, Default, Clone, Copy)]
pub struct PhpDefineSource;

impl EnvironmentSource for PhpDefineSource {
    fn read_type(&self, file: &Path, constant: &str) -> Result<Option<String>> {
        // define() tokens are ASCII, the rest of the file may be in any encoding
        let bytes = fs::read(file).map_err(|e| error::fs::read_failed(file, e))?;
        Ok(find_define(&String::from_utf8_lossy(&bytes), constant))
    }
}

/// Find the first `define()` of `constant` with a string literal value.
///
/// Function names are matched case-insensitively, constant names exactly.
pub fn find_define(content: &str, constant: &str) -> Option<String> {
    let code = strip_comments(content);
    let lower = code.to_ascii_lowercase();
    let mut offset = 0;

    while let Some(found) = lower[offset..].find("define") {
        let start = offset + found;
        offset = start + "define".len();

        let preceded_by_ident = code[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$' || c == '>');
        if preceded_by_ident {
            continue;
        }

        if let Some((name, value)) = parse_define_args(&code[offset..]) {
            if name == constant {
                return Some(value);
            }
        }
    }

    None
}

/// Parse `('NAME', 'value')` following a `define` keyword
fn parse_define_args(input: &str) -> Option<(String, String)> {
    let rest = input.trim_start().strip_prefix('(')?;
    let (name, rest) = parse_string_literal(rest.trim_start())?;
    let rest = rest.trim_start().strip_prefix(',')?;
    let (value, rest) = parse_string_literal(rest.trim_start())?;
    let rest = rest.trim_start();
    // define() takes an optional third case_insensitive argument
    if rest.starts_with(')') || rest.starts_with(',') {
        Some((name, value))
    } else {
        None
    }
}

/// Parse a single- or double-quoted PHP string literal at the start of `input`
fn parse_string_literal(input: &str) -> Option<(String, &str)> {
    let mut chars = input.char_indices();
    let (_, quote) = chars.next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }

    let mut value = String::new();
    let mut escaped = false;
    for (index, c) in chars {
        if escaped {
            if c != quote && c != '\\' {
                value.push('\\');
            }
            value.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some((value, &input[index + c.len_utf8()..]));
        } else {
            value.push(c);
        }
    }

    None
}

/// Remove `//`, `#` and `/* */` comments, leaving string literals intact
fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' => {
                quote = Some(c);
                out.push(c);
            }
            '#' => skip_line(&mut chars, &mut out),
            '/' if chars.peek() == Some(&'/') => skip_line(&mut chars, &mut out),
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if previous == '*' && next == '/' {
                        break;
                    }
                    previous = next;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

fn skip_line(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    for next in chars.by_ref() {
        if next == '\n' {
            out.push('\n');
            break;
        }
    }
}
