use std::collections::HashSet;

use arrow_array::StringArray;
use xxhash_rust::xxh3::xxh3_64;

use crate::results::DomainOutcome;
use crate::utils::hasher::Xxh3Builder;

/// Expects every non-missing value of a column to equal one constant.
///
/// Deviating values are collected once each, in first-appearance order,
/// so repeated runs over the same input report identical lists.
pub struct ConstantCheck {
    expected: &'static str,
    seen: HashSet<u64, Xxh3Builder>,
    deviations: Vec<String>,
    non_missing: usize,
}

impl ConstantCheck {
    pub fn new(expected: &'static str) -> Self {
        Self {
            expected,
            seen: HashSet::with_hasher(Xxh3Builder),
            deviations: Vec::new(),
            non_missing: 0,
        }
    }

    /// Record one batch of values. Missing values are ignored.
    pub fn scan(&mut self, array: &StringArray) {
        for value in array.iter().flatten() {
            self.non_missing += 1;
            if value != self.expected && self.seen.insert(xxh3_64(value.as_bytes())) {
                self.deviations.push(value.to_string());
            }
        }
    }

    /// Resolve the outcome once every batch has been scanned.
    ///
    /// A column with no non-missing values at all resolves to
    /// [`DomainOutcome::AllMissing`]; this includes a zero-row table.
    pub fn finish(self) -> DomainOutcome {
        if self.non_missing == 0 {
            DomainOutcome::AllMissing
        } else if self.deviations.is_empty() {
            DomainOutcome::Uniform
        } else {
            DomainOutcome::Deviations(self.deviations)
        }
    }
}

/// Checks values against a fixed allowed set. Exact string equality, no
/// case folding.
pub struct MembershipCheck {
    members: HashSet<u64, Xxh3Builder>,
    seen_invalid: HashSet<u64, Xxh3Builder>,
    invalid: Vec<String>,
}

impl MembershipCheck {
    pub fn new(members: &[&str]) -> Self {
        let mut set = HashSet::with_hasher(Xxh3Builder);
        for member in members {
            set.insert(xxh3_64(member.as_bytes()));
        }
        Self {
            members: set,
            seen_invalid: HashSet::with_hasher(Xxh3Builder),
            invalid: Vec::new(),
        }
    }

    /// Record one batch of values. Missing values are ignored.
    pub fn scan(&mut self, array: &StringArray) {
        for value in array.iter().flatten() {
            let hash = xxh3_64(value.as_bytes());
            if !self.members.contains(&hash) && self.seen_invalid.insert(hash) {
                self.invalid.push(value.to_string());
            }
        }
    }

    /// Distinct non-member values, in first-appearance order.
    pub fn finish(self) -> Vec<String> {
        self.invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_uniform() {
        let mut rule = ConstantCheck::new("INR");
        rule.scan(&StringArray::from(vec![Some("INR"), Some("INR"), None]));
        assert_eq!(rule.finish(), DomainOutcome::Uniform);
    }

    #[test]
    fn test_constant_deviations_deduplicated_in_order() {
        let mut rule = ConstantCheck::new("INR");
        rule.scan(&StringArray::from(vec![
            Some("USD"),
            Some("INR"),
            Some("EUR"),
            Some("USD"),
        ]));
        assert_eq!(
            rule.finish(),
            DomainOutcome::Deviations(vec!["USD".to_string(), "EUR".to_string()])
        );
    }

    #[test]
    fn test_constant_all_missing() {
        let mut rule = ConstantCheck::new("INR");
        rule.scan(&StringArray::from(vec![None::<&str>, None]));
        assert_eq!(rule.finish(), DomainOutcome::AllMissing);
    }

    #[test]
    fn test_constant_empty_column_counts_as_all_missing() {
        let rule = ConstantCheck::new("INR");
        assert_eq!(rule.finish(), DomainOutcome::AllMissing);
    }

    #[test]
    fn test_constant_spans_batches() {
        let mut rule = ConstantCheck::new("IN");
        rule.scan(&StringArray::from(vec![Some("IN")]));
        rule.scan(&StringArray::from(vec![Some("US")]));
        assert_eq!(
            rule.finish(),
            DomainOutcome::Deviations(vec!["US".to_string()])
        );
    }

    #[test]
    fn test_membership_basic() {
        let mut rule = MembershipCheck::new(&["Shipped", "Pending"]);
        rule.scan(&StringArray::from(vec![
            Some("Shipped"),
            Some("Returned"),
            None,
            Some("Pending"),
            Some("Returned"),
        ]));
        assert_eq!(rule.finish(), vec!["Returned".to_string()]);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let mut rule = MembershipCheck::new(&["Shipped"]);
        rule.scan(&StringArray::from(vec![Some("Shipped"), Some("shipped")]));
        assert_eq!(rule.finish(), vec!["shipped".to_string()]);
    }

    #[test]
    fn test_membership_ignores_nulls() {
        let mut rule = MembershipCheck::new(&["Shipped"]);
        rule.scan(&StringArray::from(vec![None::<&str>, None]));
        assert!(rule.finish().is_empty());
    }
}
