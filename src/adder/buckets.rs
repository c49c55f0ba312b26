use std::iter::repeat_n;

use tracing::debug;

use crate::adder::Adder;
use crate::numeral::{Symbol, symbols};
use crate::rules::SUBTRACTIVE;

/// Adds by counting symbols into per-magnitude buckets.
///
/// Subtractive digraphs get their own buckets while tallying and are then
/// split into magnitude buckets through the same table the substitution
/// strategy uses, so both strategies agree on what each digraph means.
#[derive(Debug, Clone, Copy, Default)]
pub struct BucketAdder;

impl Adder for BucketAdder {
    fn name(&self) -> &'static str {
        "buckets"
    }

    fn sum(&self, a: &str, b: &str) -> String {
        let mut acc = Accumulator::default();
        acc.tally(a);
        acc.tally(b);
        debug!(magnitudes = ?acc.magnitudes, digraphs = ?acc.digraphs, "tallied operands");
        acc.split_digraphs();
        acc.carry();
        debug!(magnitudes = ?acc.magnitudes, "carried");
        acc.render()
    }
}

/// Symbol counts for one addition. Digraph buckets are indexed like `SUBTRACTIVE`.
#[derive(Debug, Default)]
struct Accumulator {
    magnitudes: [usize; 7],
    digraphs: [usize; 6],
}

impl Accumulator {
    fn tally(&mut self, numeral: &str) {
        let mut rest = numeral;
        while !rest.is_empty() {
            if let Some(i) = SUBTRACTIVE
                .iter()
                .position(|rule| rest.starts_with(rule.pattern))
            {
                self.digraphs[i] += 1;
                rest = &rest[SUBTRACTIVE[i].pattern.len()..];
                continue;
            }
            let mut chars = rest.chars();
            if let Some(symbol) = chars.next().and_then(Symbol::from_char) {
                self.magnitudes[symbol.rank()] += 1;
            }
            rest = chars.as_str();
        }
    }

    fn split_digraphs(&mut self) {
        for (count, rule) in self.digraphs.iter_mut().zip(SUBTRACTIVE) {
            for symbol in symbols(rule.replacement) {
                self.magnitudes[symbol.rank()] += *count;
            }
            *count = 0;
        }
    }

    /// One ascending sweep suffices: each carry only feeds the bucket above.
    fn carry(&mut self) {
        for symbol in Symbol::ALL {
            let Some(next) = symbol.next() else {
                break;
            };
            let ratio = symbol.carry_ratio();
            let carried = self.magnitudes[symbol.rank()] / ratio;
            self.magnitudes[symbol.rank()] %= ratio;
            self.magnitudes[next.rank()] += carried;
        }
    }

    fn render(&self) -> String {
        let mut out: String = repeat_n('M', self.magnitudes[Symbol::M.rank()]).collect();
        let decades = [
            (Symbol::D, Symbol::C),
            (Symbol::L, Symbol::X),
            (Symbol::V, Symbol::I),
        ];
        for (five, unit) in decades {
            let run: String = repeat_n(five.as_char(), self.magnitudes[five.rank()])
                .chain(repeat_n(unit.as_char(), self.magnitudes[unit.rank()]))
                .collect();
            match SUBTRACTIVE.iter().find(|rule| rule.replacement == run) {
                Some(rule) => out.push_str(rule.pattern),
                None => out.push_str(&run),
            }
        }
        out
    }
}
