//! Ordered rewrite tables shared by the normalization stages.

/// A textual rewrite: every occurrence of `pattern` becomes `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rewrite {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl Rewrite {
    const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }

    /// The same rewrite in the opposite direction.
    pub const fn inverse(self) -> Self {
        Self::new(self.replacement, self.pattern)
    }
}

/// Subtractive digraphs and their additive expansions, highest value first.
///
/// The expander reads this table left to right and the contractor reads the
/// inverted pairs in the same order, so `DCCCC` is claimed by `CM` before
/// `CCCC` can be claimed by `CD`.
pub const SUBTRACTIVE: [Rewrite; 6] = [
    Rewrite::new("CM", "DCCCC"),
    Rewrite::new("CD", "CCCC"),
    Rewrite::new("XC", "LXXXX"),
    Rewrite::new("XL", "XXXX"),
    Rewrite::new("IX", "VIIII"),
    Rewrite::new("IV", "IIII"),
];

/// Carry rules applied by the folder on every pass, lowest magnitude first.
pub const CARRIES: [Rewrite; 9] = [
    Rewrite::new("IIIII", "V"),
    Rewrite::new("VIV", "IX"),
    Rewrite::new("VV", "X"),
    Rewrite::new("XXXXX", "L"),
    Rewrite::new("LXL", "XC"),
    Rewrite::new("LL", "C"),
    Rewrite::new("CCCCC", "D"),
    Rewrite::new("DCD", "CM"),
    Rewrite::new("DD", "M"),
];

/// Apply each rewrite in order, replacing all occurrences of its pattern.
pub fn rewrite_all<I>(numeral: &str, rules: I) -> String
where
    I: IntoIterator<Item = Rewrite>,
{
    let mut out = numeral.to_string();
    for rule in rules {
        if out.contains(rule.pattern) {
            out = out.replace(rule.pattern, rule.replacement);
        }
    }
    out
}
