use romanadd::to_roman;

const LEGAL_DIGRAPHS: [&str; 6] = ["IV", "IX", "XL", "XC", "CD", "CM"];

/// Panic unless `numeral` is in canonical output form: no run of four or more
/// identical symbols and no subtractive pair outside `LEGAL_DIGRAPHS`.
pub fn assert_canonical(numeral: &str) {
    let chars: Vec<char> = numeral.chars().collect();
    for run in chars.chunk_by(|a, b| a == b) {
        assert!(run.len() <= 3, "{numeral}: run of {} {:?}", run.len(), run[0]);
    }
    for pair in chars.windows(2) {
        let rank = |c: char| "IVXLCDM".find(c).unwrap();
        if rank(pair[0]) < rank(pair[1]) {
            let digraph: String = pair.iter().collect();
            assert!(
                LEGAL_DIGRAPHS.contains(&digraph.as_str()),
                "{numeral}: illegal subtractive pair {digraph}"
            );
        }
    }
}

/// Operand pairs `(a, b)` with `a + b <= 3000` covering small addends against
/// every left operand plus a coarse grid across the whole range.
pub fn oracle_pairs() -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();
    for a in 1..3000 {
        for b in 1..=(3000 - a).min(25) {
            pairs.push((a, b));
        }
    }
    for a in (1..3000).step_by(37) {
        for b in (1..=3000 - a).step_by(11) {
            pairs.push((a, b));
        }
    }
    pairs
}

pub fn roman(n: u32) -> String {
    to_roman(n).unwrap()
}
