//! Lenient hex parsing and answer grading.
//!
//! Replies are never rejected: whatever the user typed is reduced to a number
//! and compared against the expected answer.

use std::fmt;

use crate::question::Question;

/// Parse the leading hex number of `line` the way `strtol(line, NULL, 16)` does.
///
/// Leading whitespace, a sign, and a `0x` prefix are accepted. Parsing stops
/// at the first byte that is not a hex digit, so any byte sequence is valid
/// input. Input without digits yields 0. The value is clamped to the 64-bit
/// signed range and then keeps its low 32 bits.
pub fn parse_hex_lenient(line: &[u8]) -> u32 {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let s = &line[start..];

    let (negative, s) = match s.first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let s = match s {
        [b'0', b'x' | b'X', next, ..] if next.is_ascii_hexdigit() => &s[2..],
        _ => s,
    };

    let magnitude = s
        .iter()
        .map_while(|&b| char::from(b).to_digit(16))
        .fold(0u64, |acc, d| acc.saturating_mul(16).saturating_add(u64::from(d)));

    let value = if negative {
        0i64.checked_sub_unsigned(magnitude).unwrap_or(i64::MIN)
    } else {
        i64::try_from(magnitude).unwrap_or(i64::MAX)
    };
    value as u32
}

/// Outcome of grading one reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Right,
    Wrong { expected: u32 },
}

impl Verdict {
    pub fn is_right(self) -> bool {
        matches!(self, Verdict::Right)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Right => write!(f, "right"),
            Verdict::Wrong { expected } => write!(f, "wrong, {expected:x}"),
        }
    }
}

/// Grade a raw reply line against a question.
pub fn grade(question: &Question, reply: &[u8]) -> Verdict {
    if parse_hex_lenient(reply) == question.answer {
        Verdict::Right
    } else {
        Verdict::Wrong {
            expected: question.answer,
        }
    }
}
