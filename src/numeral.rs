/// One of the seven Roman numeral symbols, ordered by ascending rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    /// All symbols in ascending rank order.
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    /// Look up a symbol by its (uppercase) character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }

    /// Position in `ALL`, 0 for `I` up to 6 for `M`.
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn value(self) -> u32 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// `I`, `X`, `C` and `M` start a decade; `V`, `L` and `D` are its five.
    pub fn is_unit(self) -> bool {
        self.rank() % 2 == 0
    }

    /// The symbol one rank above, or `None` for `M`.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.rank() + 1).copied()
    }

    /// How many of this symbol fold into one of `next()`.
    pub fn carry_ratio(self) -> usize {
        if self.is_unit() { 5 } else { 2 }
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::from_char(c).ok_or(c)
    }
}

/// Parse a validated numeral into symbols, skipping anything unknown.
pub(crate) fn symbols(numeral: &str) -> impl Iterator<Item = Symbol> + '_ {
    numeral.chars().filter_map(Symbol::from_char)
}
