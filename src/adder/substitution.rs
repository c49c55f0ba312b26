use crate::adder::Adder;
use crate::pipeline::add_validated;

/// Adds by textual substitution: expand, merge, fold to a fixpoint, contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstitutionAdder;

impl Adder for SubstitutionAdder {
    fn name(&self) -> &'static str {
        "substitution"
    }

    fn sum(&self, a: &str, b: &str) -> String {
        add_validated(a, b)
    }
}
