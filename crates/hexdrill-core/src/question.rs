//! Random question generation.
//!
//! Kinds are chosen by rejection sampling over the full universe so every
//! enabled kind is equally likely no matter which subset is enabled.

use rand::Rng;

use crate::kind::{Mode, QuestionKind};

/// A single drill question with its expected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub kind: QuestionKind,
    /// Operands; the second is zero for single-operand kinds.
    pub operands: (u32, u32),
    /// The value a correct hex reply parses to.
    pub answer: u32,
}

impl Question {
    /// Build a question from explicit operands.
    ///
    /// Operands outside the kind's domain are reduced into it.
    pub fn new(kind: QuestionKind, a: u32, b: u32) -> Self {
        let limit = kind.operand_limit();
        let (a, b) = (a % limit, b % limit);
        let (operands, answer) = match kind {
            QuestionKind::Addition => ((a, b), a + b),
            QuestionKind::Multiplication => ((a, b), a * b),
            QuestionKind::HexToBinary => ((a, 0), nibble_binary(a)),
            QuestionKind::BinaryToHex => ((a, 0), a),
            QuestionKind::HexToDecimal => ((a, 0), decimal_as_hex(a)),
            QuestionKind::DecimalToHex => ((a, 0), a),
        };
        Self {
            kind,
            operands,
            answer,
        }
    }

    /// Draw a question whose kind is uniform over the enabled kinds.
    ///
    /// `mode` must not be empty.
    pub fn generate<R: Rng + ?Sized>(mode: Mode, rng: &mut R) -> Self {
        let kind = choose_kind(mode, rng);
        let limit = kind.operand_limit();
        let a = rng.random_range(0..limit);
        let b = match kind {
            QuestionKind::Addition | QuestionKind::Multiplication => rng.random_range(0..limit),
            _ => 0,
        };
        Self::new(kind, a, b)
    }

    /// The prompt text, without a trailing newline.
    pub fn prompt(&self) -> String {
        let (a, b) = self.operands;
        match self.kind {
            QuestionKind::Addition => format!("{a:x}+{b:x}=? "),
            QuestionKind::Multiplication => format!("{a:x}*{b:x}=? "),
            QuestionKind::HexToBinary => format!("{a:x} hex->bin? "),
            QuestionKind::BinaryToHex => format!("{:04x} bin->hex? ", nibble_binary(a)),
            QuestionKind::HexToDecimal => format!("{a:x} hex->dec? "),
            QuestionKind::DecimalToHex => format!("{a} dec->hex? "),
        }
    }
}

/// Pick a kind by redrawing from the whole universe until it is enabled.
///
/// Loops forever on an empty mode.
pub fn choose_kind<R: Rng + ?Sized>(mode: Mode, rng: &mut R) -> QuestionKind {
    debug_assert!(!mode.is_empty(), "choose_kind needs at least one kind");
    loop {
        let kind = QuestionKind::ALL[rng.random_range(0..QuestionKind::ALL.len())];
        if mode.contains(kind) {
            return kind;
        }
    }
}

/// Spread the low four bits of `a` one per hex nibble, so 0b1101 becomes 0x1101.
pub fn nibble_binary(a: u32) -> u32 {
    (0..4).fold(0, |acc, bit| acc | (((a >> bit) & 1) << (bit * 4)))
}

/// Inverse of [`nibble_binary`]; nibbles other than 0 and 1 are read by their low bit.
pub fn decode_nibble_binary(v: u32) -> u32 {
    (0..4).fold(0, |acc, bit| acc | (((v >> (bit * 4)) & 1) << bit))
}

/// Reinterpret the decimal digits of `a` as hex digits, so 123 becomes 0x123.
pub fn decimal_as_hex(mut a: u32) -> u32 {
    let mut out = 0;
    let mut shift = 0;
    while a > 0 {
        out |= (a % 10) << shift;
        a /= 10;
        shift += 4;
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn addition_and_multiplication_exhaustive() {
        for a in 0..16 {
            for b in 0..16 {
                assert_eq!(Question::new(QuestionKind::Addition, a, b).answer, a + b);
                assert_eq!(
                    Question::new(QuestionKind::Multiplication, a, b).answer,
                    a * b
                );
            }
        }
    }

    #[test]
    fn hex_to_binary_worked_examples() {
        assert_eq!(nibble_binary(0xd), 0x1101);
        assert_eq!(nibble_binary(0x5), 0x0101);
        assert_eq!(nibble_binary(0x0), 0);
        assert_eq!(nibble_binary(0xf), 0x1111);
        assert_eq!(Question::new(QuestionKind::HexToBinary, 0xd, 0).answer, 0x1101);
    }

    #[test]
    fn binary_round_trip() {
        for a in 0..16 {
            let encoded = nibble_binary(a);
            assert_eq!(decode_nibble_binary(encoded), a);

            // The bin->hex prompt shows the encoding and expects `a` back.
            let q = Question::new(QuestionKind::BinaryToHex, a, 0);
            assert_eq!(q.prompt(), format!("{encoded:04x} bin->hex? "));
            assert_eq!(q.answer, a);
        }
    }

    #[test]
    fn hex_to_decimal_worked_examples() {
        assert_eq!(decimal_as_hex(123), 0x123);
        assert_eq!(decimal_as_hex(0), 0);
        assert_eq!(decimal_as_hex(255), 0x255);
        assert_eq!(decimal_as_hex(10), 0x10);
        for a in 0..256 {
            assert_eq!(format!("{:x}", decimal_as_hex(a)), a.to_string());
        }
    }

    #[test]
    fn prompts() {
        assert_eq!(
            Question::new(QuestionKind::Addition, 0xa, 3).prompt(),
            "a+3=? "
        );
        assert_eq!(
            Question::new(QuestionKind::Multiplication, 0xf, 0xc).prompt(),
            "f*c=? "
        );
        assert_eq!(
            Question::new(QuestionKind::HexToBinary, 0xd, 0).prompt(),
            "d hex->bin? "
        );
        assert_eq!(
            Question::new(QuestionKind::BinaryToHex, 0x2, 0).prompt(),
            "0010 bin->hex? "
        );
        assert_eq!(
            Question::new(QuestionKind::HexToDecimal, 123, 0).prompt(),
            "7b hex->dec? "
        );
        assert_eq!(
            Question::new(QuestionKind::DecimalToHex, 200, 0).prompt(),
            "200 dec->hex? "
        );
    }

    #[test]
    fn operands_stay_in_domain() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let q = Question::generate(Mode::all(), &mut rng);
            let limit = q.kind.operand_limit();
            assert!(q.operands.0 < limit, "{q:?}");
            assert!(q.operands.1 < limit, "{q:?}");
        }
    }

    #[test]
    fn generated_kind_is_always_enabled() {
        let mut rng = StdRng::seed_from_u64(11);
        let mode = Mode::empty()
            .with(QuestionKind::HexToBinary)
            .with(QuestionKind::DecimalToHex);
        for _ in 0..1_000 {
            assert!(mode.contains(Question::generate(mode, &mut rng).kind));
        }
    }

    #[test]
    fn kind_distribution_is_uniform_for_every_mode() {
        const TRIALS: usize = 12_000;
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for bits in 1u8..64 {
            let mode: Mode = QuestionKind::ALL
                .into_iter()
                .filter(|k| bits & k.bit() != 0)
                .collect();
            let mut counts: HashMap<QuestionKind, usize> = HashMap::new();
            for _ in 0..TRIALS {
                *counts.entry(choose_kind(mode, &mut rng)).or_default() += 1;
            }

            assert_eq!(counts.len(), mode.len(), "mode {mode}");
            let expected = TRIALS as f64 / mode.len() as f64;
            for (kind, count) in &counts {
                let deviation = (*count as f64 - expected).abs() / expected;
                assert!(
                    deviation < 0.1,
                    "mode {mode}: {kind} drawn {count} times, expected ~{expected:.0}"
                );
            }
        }
    }
}
