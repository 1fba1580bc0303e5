//! Escape processing for string literals.
//!
//! Recognised escapes: `\r` `\n` `\t` `\'` `\"` `\\`, `\xHH` and `\uHHHH`.
//! Any other escaped character is kept as written, backslash included.
//! A `\x` or `\u` without enough hex digits (or naming a surrogate) is an
//! error.

use std::str::Chars;

/// An escape that could not be resolved. Holds the offending text and its
/// char offset within the literal content.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct BadEscape {
    pub text: String,
    pub offset: usize,
}

/// Resolve the escapes in a string literal's content (between the quotes).
pub(crate) fn unescape_string(content: &str) -> Result<String, BadEscape> {
    if !content.contains('\\') {
        return Ok(content.to_string());
    }

    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    let mut offset = 0;

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            offset += 1;
            continue;
        }
        let start = offset;
        offset += 1;
        let Some(esc) = chars.next() else {
            // The literal regex only admits a backslash followed by a char.
            out.push('\\');
            break;
        };
        offset += 1;
        match esc {
            'r' => out.push('\r'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            'x' | 'u' => {
                let width = if esc == 'x' { 2 } else { 4 };
                let digits = take_hex(&mut chars, width);
                offset += digits.len();
                let resolved = (digits.len() == width)
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match resolved {
                    Some(ch) => out.push(ch),
                    None => {
                        return Err(BadEscape {
                            text: format!("\\{esc}{digits}"),
                            offset: start,
                        })
                    }
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    Ok(out)
}

/// Take up to `width` hex digits from the front of `chars`.
fn take_hex(chars: &mut Chars<'_>, width: usize) -> String {
    let mut digits = String::with_capacity(width);
    while digits.len() < width {
        match chars.clone().next() {
            Some(c) if c.is_ascii_hexdigit() => {
                digits.push(c);
                chars.next();
            }
            _ => break,
        }
    }
    digits
}
