//! Question kinds and the set of kinds enabled for a run.

use std::fmt;

/// One of the six supported question types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    Addition,
    Multiplication,
    HexToBinary,
    BinaryToHex,
    HexToDecimal,
    DecimalToHex,
}

impl QuestionKind {
    /// The full universe of kinds, in flag order.
    pub const ALL: [QuestionKind; 6] = [
        QuestionKind::Addition,
        QuestionKind::Multiplication,
        QuestionKind::HexToBinary,
        QuestionKind::BinaryToHex,
        QuestionKind::HexToDecimal,
        QuestionKind::DecimalToHex,
    ];

    /// The bit this kind occupies in a [`Mode`].
    pub fn bit(self) -> u8 {
        match self {
            QuestionKind::Addition => 0x01,
            QuestionKind::Multiplication => 0x02,
            QuestionKind::HexToBinary => 0x04,
            QuestionKind::BinaryToHex => 0x08,
            QuestionKind::HexToDecimal => 0x10,
            QuestionKind::DecimalToHex => 0x20,
        }
    }

    /// The short command-line flag that enables this kind.
    pub fn flag(self) -> char {
        match self {
            QuestionKind::Addition => 'a',
            QuestionKind::Multiplication => 'm',
            QuestionKind::HexToBinary => 'b',
            QuestionKind::BinaryToHex => 'B',
            QuestionKind::HexToDecimal => 'd',
            QuestionKind::DecimalToHex => 'D',
        }
    }

    /// Upper bound (exclusive) of the operand domain.
    pub fn operand_limit(self) -> u32 {
        match self {
            QuestionKind::HexToDecimal | QuestionKind::DecimalToHex => 256,
            _ => 16,
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Addition => write!(f, "addition"),
            QuestionKind::Multiplication => write!(f, "multiplication"),
            QuestionKind::HexToBinary => write!(f, "hex->bin"),
            QuestionKind::BinaryToHex => write!(f, "bin->hex"),
            QuestionKind::HexToDecimal => write!(f, "hex->dec"),
            QuestionKind::DecimalToHex => write!(f, "dec->hex"),
        }
    }
}

/// The set of question kinds enabled for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mode(u8);

impl Mode {
    /// A mode with no kinds enabled.
    pub const fn empty() -> Self {
        Mode(0)
    }

    /// A mode with every kind enabled.
    pub fn all() -> Self {
        QuestionKind::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, kind: QuestionKind) {
        self.0 |= kind.bit();
    }

    /// Builder-style [`Mode::insert`].
    #[must_use]
    pub fn with(mut self, kind: QuestionKind) -> Self {
        self.insert(kind);
        self
    }

    pub fn contains(self, kind: QuestionKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of enabled kinds.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Enabled kinds, in flag order.
    pub fn kinds(self) -> impl Iterator<Item = QuestionKind> {
        QuestionKind::ALL
            .into_iter()
            .filter(move |k| self.contains(*k))
    }
}

impl FromIterator<QuestionKind> for Mode {
    fn from_iter<I: IntoIterator<Item = QuestionKind>>(iter: I) -> Self {
        let mut mode = Mode::empty();
        for kind in iter {
            mode.insert(kind);
        }
        mode
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self.kinds().map(QuestionKind::flag).collect();
        write!(f, "-{flags}")
    }
}
