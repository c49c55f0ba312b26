//! The string-rewriting stages of Roman addition.
//!
//! `expand` → `merge` → `fold` → `contract`. Every stage takes and returns
//! plain numeral strings; no stage computes a numeric value. Inputs are
//! expected to have passed [`crate::validate`].

use tracing::{debug, trace};

use crate::numeral::{Symbol, symbols};
use crate::rules::{CARRIES, SUBTRACTIVE, rewrite_all};

/// Rewrite subtractive digraphs (`CM`, `IV`, ...) into repeated symbols.
pub fn expand(numeral: &str) -> String {
    rewrite_all(numeral, SUBTRACTIVE)
}

/// Concatenate two expanded numerals and sort symbols by descending rank.
pub fn merge(a: &str, b: &str) -> String {
    let mut all: Vec<Symbol> = symbols(a).chain(symbols(b)).collect();
    all.sort_by(|x, y| y.cmp(x));
    all.into_iter().map(Symbol::as_char).collect()
}

/// Fold runs of symbols into the next symbol up until nothing changes.
///
/// One pass applies every carry rule once; a carry can enable another in a
/// higher magnitude, so passes repeat until a fixpoint is reached.
pub fn fold(numeral: &str) -> String {
    let mut current = numeral.to_string();
    let mut pass = 0usize;
    loop {
        let next = rewrite_all(&current, CARRIES);
        pass += 1;
        trace!(pass, before = %current, after = %next, "fold pass");
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Rewrite additive runs back into subtractive digraphs.
///
/// Must run once, after [`fold`] has reached its fixpoint.
pub fn contract(numeral: &str) -> String {
    rewrite_all(numeral, SUBTRACTIVE.map(|rule| rule.inverse()))
}

/// Run the whole pipeline over two validated numerals.
pub fn add_validated(a: &str, b: &str) -> String {
    let a = expand(a);
    let b = expand(b);
    debug!(first = %a, second = %b, "expanded operands");
    let merged = merge(&a, &b);
    debug!(merged = %merged, "merged operands");
    let folded = fold(&merged);
    debug!(folded = %folded, "folded carries");
    let sum = contract(&folded);
    debug!(sum = %sum, "contracted result");
    sum
}

/// Canonical form of a single validated numeral.
pub fn normalize(numeral: &str) -> String {
    add_validated(numeral, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_every_digraph() {
        assert_eq!(expand("CM"), "DCCCC");
        assert_eq!(expand("CD"), "CCCC");
        assert_eq!(expand("XC"), "LXXXX");
        assert_eq!(expand("XL"), "XXXX");
        assert_eq!(expand("IX"), "VIIII");
        assert_eq!(expand("IV"), "IIII");
    }

    #[test]
    fn test_expand_global_and_mixed() {
        assert_eq!(expand("MCMXCIV"), "MDCCCCLXXXXIIII");
        assert_eq!(expand("XLIX"), "XXXXVIIII");
    }

    #[test]
    fn test_expand_is_idempotent() {
        let once = expand("MCDXLIV");
        assert_eq!(expand(&once), once);
    }

    #[test]
    fn test_expand_leaves_additive_untouched() {
        assert_eq!(expand("MDCLXVI"), "MDCLXVI");
    }

    #[test]
    fn test_merge_sorts_descending() {
        assert_eq!(merge("XVI", "MI"), "MXVII");
        assert_eq!(merge("I", "D"), "DI");
    }

    #[test]
    fn test_merge_with_empty() {
        assert_eq!(merge("", ""), "");
        assert_eq!(merge("IV", ""), "VI");
    }

    #[test]
    fn test_fold_simple_carry() {
        assert_eq!(fold("IIIII"), "V");
        assert_eq!(fold("VV"), "X");
        assert_eq!(fold("DD"), "M");
    }

    #[test]
    fn test_fold_cascades_across_magnitudes() {
        // 49 + 1 expanded and merged
        assert_eq!(fold("XXXXVIIIII"), "L");
        // 999 + 1
        assert_eq!(fold("DCCCCLXXXXVIIIII"), "M");
    }

    #[test]
    fn test_fold_subtractive_collisions() {
        assert_eq!(fold("VIV"), "IX");
        assert_eq!(fold("LXL"), "XC");
        assert_eq!(fold("DCD"), "CM");
    }

    #[test]
    fn test_fold_repeats_until_stable() {
        // VIV -> IX leaves five I in a row, which only a second pass folds
        assert_eq!(rewrite_all("IIIIVIV", CARRIES), "IIIIIX");
        assert_eq!(fold("IIIIVIV"), "VX");

        assert_eq!(rewrite_all("XXXXLXL", CARRIES), "XXXXXC");
        assert_eq!(fold("XXXXLXL"), "LC");
    }

    #[test]
    fn test_fold_fixpoint_leaves_fours() {
        assert_eq!(fold("CCCCXXXXIIII"), "CCCCXXXXIIII");
    }

    #[test]
    fn test_contract_every_expansion() {
        assert_eq!(contract("DCCCC"), "CM");
        assert_eq!(contract("CCCC"), "CD");
        assert_eq!(contract("LXXXX"), "XC");
        assert_eq!(contract("XXXX"), "XL");
        assert_eq!(contract("VIIII"), "IX");
        assert_eq!(contract("IIII"), "IV");
    }

    #[test]
    fn test_contract_reverses_expand_on_canonical() {
        for numeral in ["MCMIV", "MCMLIV", "MCMXC", "CDXLIV", "XCIX", "MMMCMXCIX"] {
            assert_eq!(contract(&expand(numeral)), numeral);
        }
    }

    #[test]
    fn test_add_validated_boundaries() {
        assert_eq!(add_validated("MCM", "IV"), "MCMIV");
        assert_eq!(add_validated("XLIX", "I"), "L");
        assert_eq!(add_validated("III", "I"), "IV");
    }

    #[test]
    fn test_normalize_relaxed_forms() {
        assert_eq!(normalize("IIII"), "IV");
        assert_eq!(normalize("XXXXXX"), "LX");
        assert_eq!(normalize("VIIII"), "IX");
        assert_eq!(normalize("MCMIV"), "MCMIV");
    }
}
