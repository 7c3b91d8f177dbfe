//! Rule-based integer classification — a parameterized FizzBuzz.
//!
//! A [`RuleSet`] maps divisors to labels. Classifying `n` concatenates the
//! labels of every rule whose divisor evenly divides `n`, in registration
//! order; when *all* rules match and an override label is configured, the
//! override wins outright; when nothing matches, `n` prints as itself.
//!
//! The computation is pure — [`RuleSet::classify`] and
//! [`RuleSet::classify_all`] have no side effects — and [`RuleSet::emit`] is
//! a thin console adapter over any [`io::Write`] sink.
//!
//! ```rust
//! use kyu::classify::RuleSet;
//!
//! let rules = RuleSet::from_pairs(&[(3, "fizz"), (5, "buzz")]).unwrap();
//! assert_eq!(rules.classify(15), "fizzbuzz");
//! assert_eq!(rules.classify(4), "4");
//! ```

use std::io::{self, Write};

use crate::error::Error;

/// A single divisibility rule: a nonzero divisor and the label it emits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rule {
    divisor: u64,
    label: String,
}

impl Rule {
    /// A divisor of zero has no divisibility meaning and is rejected here,
    /// at configuration time, never during classification.
    pub fn new(divisor: u64, label: impl Into<String>) -> Result<Self, Error> {
        if divisor == 0 {
            return Err(Error::InvalidRule("divisor must be nonzero".to_owned()));
        }
        Ok(Self { divisor, label: label.into() })
    }

    pub fn divisor(&self) -> u64 {
        self.divisor
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Zero remainder, computed on `|n|` so the sign of `n` never matters.
    fn matches(&self, n: i64) -> bool {
        n.unsigned_abs() % self.divisor == 0
    }
}

/// An ordered set of rules plus an optional override label.
///
/// Registration order is the canonical order: matched labels concatenate in
/// it, so `[(3, "fizz"), (5, "buzz"), (7, "POP")]` classifies `35` as
/// `"buzzPOP"`, never `"POPbuzz"`.
#[derive(Clone, Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
    override_label: Option<String>,
}

impl RuleSet {
    /// Builds a rule set, rejecting duplicate divisors.
    pub fn new(rules: Vec<Rule>) -> Result<Self, Error> {
        for (i, rule) in rules.iter().enumerate() {
            if rules[..i].iter().any(|prior| prior.divisor == rule.divisor) {
                return Err(Error::InvalidRule(format!(
                    "duplicate divisor {}",
                    rule.divisor
                )));
            }
        }
        Ok(Self { rules, override_label: None })
    }

    /// Convenience constructor from `(divisor, label)` pairs.
    pub fn from_pairs(pairs: &[(u64, &str)]) -> Result<Self, Error> {
        let rules = pairs
            .iter()
            .map(|&(divisor, label)| Rule::new(divisor, label))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rules)
    }

    /// Sets the label returned when every rule matches at once. It takes
    /// priority over any partial combination.
    pub fn with_override(mut self, label: impl Into<String>) -> Self {
        self.override_label = Some(label.into());
        self
    }

    /// The display value for `n`.
    pub fn classify(&self, n: i64) -> String {
        let matched: Vec<&str> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(n))
            .map(Rule::label)
            .collect();

        if let Some(label) = &self.override_label {
            if !self.rules.is_empty() && matched.len() == self.rules.len() {
                return label.clone();
            }
        }

        if matched.is_empty() {
            n.to_string()
        } else {
            matched.concat()
        }
    }

    /// Pure sequence form: one display value per input, in input order.
    pub fn classify_all<I>(&self, numbers: I) -> Vec<String>
    where
        I: IntoIterator<Item = i64>,
    {
        numbers.into_iter().map(|n| self.classify(n)).collect()
    }

    /// Side-effecting form: writes one display value per line to `sink`.
    /// An empty input writes nothing.
    pub fn emit<I, W>(&self, numbers: I, sink: &mut W) -> io::Result<()>
    where
        I: IntoIterator<Item = i64>,
        W: Write,
    {
        for n in numbers {
            writeln!(sink, "{}", self.classify(n))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fizzbuzz() -> RuleSet {
        RuleSet::from_pairs(&[(3, "fizz"), (5, "buzz")]).unwrap()
    }

    fn fizzbuzzpop() -> RuleSet {
        RuleSet::from_pairs(&[(3, "fizz"), (5, "buzz"), (7, "POP")]).unwrap()
    }

    #[test]
    fn concatenates_all_matching_labels() {
        assert_eq!(fizzbuzz().classify(15), "fizzbuzz");
    }

    #[test]
    fn single_match_uses_that_label() {
        assert_eq!(fizzbuzzpop().classify(7), "POP");
        assert_eq!(fizzbuzzpop().classify(9), "fizz");
    }

    #[test]
    fn partial_combinations_follow_registration_order() {
        assert_eq!(fizzbuzzpop().classify(35), "buzzPOP");
        assert_eq!(fizzbuzzpop().classify(21), "fizzPOP");
        assert_eq!(fizzbuzzpop().classify(15), "fizzbuzz");
    }

    #[test]
    fn no_match_prints_the_number() {
        assert_eq!(fizzbuzzpop().classify(22), "22");
    }

    #[test]
    fn override_wins_when_every_rule_matches() {
        let rules = fizzbuzzpop().with_override("Craig Barkley");
        assert_eq!(rules.classify(105), "Craig Barkley");
        // Partial matches are untouched by the override.
        assert_eq!(rules.classify(15), "fizzbuzz");
    }

    #[test]
    fn all_match_without_override_concatenates() {
        assert_eq!(fizzbuzzpop().classify(105), "fizzbuzzPOP");
    }

    #[test]
    fn zero_divides_by_everything() {
        let rules = fizzbuzzpop().with_override("all");
        assert_eq!(rules.classify(0), "all");
        assert_eq!(fizzbuzzpop().classify(0), "fizzbuzzPOP");
    }

    #[test]
    fn sign_does_not_affect_divisibility() {
        assert_eq!(fizzbuzz().classify(-15), "fizzbuzz");
        assert_eq!(fizzbuzz().classify(-4), "-4");
    }

    #[test]
    fn zero_divisor_rejected_at_construction() {
        assert!(matches!(Rule::new(0, "nope"), Err(Error::InvalidRule(_))));
    }

    #[test]
    fn duplicate_divisors_rejected() {
        let result = RuleSet::from_pairs(&[(3, "fizz"), (3, "fuzz")]);
        assert!(matches!(result, Err(Error::InvalidRule(_))));
    }

    #[test]
    fn classification_is_idempotent() {
        let rules = fizzbuzzpop().with_override("Craig Barkley");
        for n in [-15, 0, 7, 22, 105] {
            assert_eq!(rules.classify(n), rules.classify(n));
        }
    }

    #[test]
    fn classify_all_preserves_input_order() {
        let out = fizzbuzzpop().classify_all(7..=15);
        assert_eq!(
            out,
            ["POP", "8", "fizz", "buzz", "11", "fizz", "13", "POP", "fizzbuzz"]
        );
    }

    #[test]
    fn empty_input_produces_no_output() {
        assert!(fizzbuzz().classify_all(std::iter::empty()).is_empty());

        let mut sink = Vec::new();
        fizzbuzz().emit(std::iter::empty(), &mut sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn emit_writes_one_line_per_value() {
        let mut sink = Vec::new();
        fizzbuzzpop().emit(7..=10, &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "POP\n8\nfizz\nbuzz\n");
    }
}
