use std::fmt;

use super::tokenizer::fields;

// ---------------------------------------------------------------------------
// Separator
// ---------------------------------------------------------------------------

/// Field separator, in descending sniffing priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Tab,
    Semicolon,
    Comma,
    Space,
}

impl Separator {
    pub fn byte(self) -> u8 {
        match self {
            Separator::Tab => b'\t',
            Separator::Semicolon => b';',
            Separator::Comma => b',',
            Separator::Space => b' ',
        }
    }

    fn rank(self) -> u8 {
        match self {
            Separator::Tab => 3,
            Separator::Semicolon => 2,
            Separator::Comma => 1,
            Separator::Space => 0,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '\t' => Some(Separator::Tab),
            ';' => Some(Separator::Semicolon),
            ',' => Some(Separator::Comma),
            _ => None,
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Tab => write!(f, "tab"),
            Separator::Semicolon => write!(f, "semicolon"),
            Separator::Comma => write!(f, "comma"),
            Separator::Space => write!(f, "space"),
        }
    }
}

// ---------------------------------------------------------------------------
// Dialect sniffing
// ---------------------------------------------------------------------------

/// How one file is to be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub separator: Separator,
    /// The first line holds column labels rather than data.
    pub has_header: bool,
}

/// Inspect the first line of a file.
///
/// The separator is the highest priority one present anywhere in the line:
/// tab, then semicolon, then comma, with space as the fallback. The line is a
/// header when any of its fields is [descriptive](is_descriptive).
pub fn sniff(first_line: &str) -> Dialect {
    let separator = first_line
        .chars()
        .filter_map(Separator::from_char)
        .fold(Separator::Space, |best, found| {
            if found.rank() > best.rank() {
                found
            } else {
                best
            }
        });

    let has_header = fields(first_line, separator).any(is_descriptive);

    Dialect {
        separator,
        has_header,
    }
}

/// A field reads as a label: it has a character that cannot appear in a
/// number, or more than one decimal separator. Empty fields are not labels.
pub fn is_descriptive(field: &str) -> bool {
    let mut decimal_points = 0;
    for c in field.chars() {
        match c {
            '0'..='9' | '+' | '-' | 'e' | 'E' | ' ' => {}
            '.' | ',' => {
                decimal_points += 1;
                if decimal_points > 1 {
                    return true;
                }
            }
            _ => return true,
        }
    }
    false
}
