//! Slot-fill merge of incoming entries into an existing rule list.
//!
//! Incoming entries never displace rows that hold content. They either
//! rewind onto a list made only of empty rows, fill the trailing run of
//! empty rows, or are appended.

use remap_model::{Rule, RuleList};

/// Which labels of an incoming entry are written into the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeFields {
    /// Only the old label; used when populating from the selection.
    Old,
    /// Both labels; used when importing a saved mapping.
    Both,
}

/// Where the merge started writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Every row was empty, so writing started at row 0.
    Rewind,
    /// Writing started at the first row of the trailing empty run.
    TrailingRun { start: usize },
    /// The last row held content; everything was appended.
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    pub strategy: MergeStrategy,
    /// Existing (empty) rows that were written into.
    pub filled: usize,
    /// Rows added at the end of the list.
    pub appended: usize,
}

impl MergeOutcome {
    pub fn total(&self) -> usize {
        self.filled + self.appended
    }
}

/// Index of the first row of the maximal run of empty rows at the end of
/// the list, or `None` when the last row holds content (or the list is
/// empty).
pub fn trailing_empty_start(rules: &RuleList) -> Option<usize> {
    let run = rules.iter().rev().take_while(|rule| rule.is_empty()).count();
    (run > 0).then(|| rules.len() - run)
}

/// Merge `incoming` into `rules`.
///
/// 1. If every row is empty, write from row 0, appending once the list
///    runs out.
/// 2. Otherwise, if the list ends with empty rows, write from the first of
///    those, appending once the list runs out.
/// 3. Otherwise append every entry.
///
/// An empty `incoming` slice leaves the list untouched.
pub fn merge(rules: &mut RuleList, incoming: &[Rule], fields: MergeFields) -> MergeOutcome {
    let strategy = if rules.all_empty() {
        MergeStrategy::Rewind
    } else {
        match trailing_empty_start(rules) {
            Some(start) => MergeStrategy::TrailingRun { start },
            None => MergeStrategy::Append,
        }
    };

    let start = match strategy {
        MergeStrategy::Rewind => 0,
        MergeStrategy::TrailingRun { start } => start,
        MergeStrategy::Append => rules.len(),
    };

    let mut outcome = MergeOutcome {
        strategy,
        filled: 0,
        appended: 0,
    };

    for (offset, entry) in incoming.iter().enumerate() {
        match rules.get_mut(start + offset) {
            Some(target) => {
                write_fields(target, entry, fields);
                outcome.filled += 1;
            }
            None => {
                let mut rule = Rule::default();
                write_fields(&mut rule, entry, fields);
                rules.push(rule);
                outcome.appended += 1;
            }
        }
    }

    tracing::debug!(
        ?strategy,
        filled = outcome.filled,
        appended = outcome.appended,
        "merged entries into rule list"
    );
    outcome
}

fn write_fields(target: &mut Rule, entry: &Rule, fields: MergeFields) {
    target.old.clone_from(&entry.old);
    if fields == MergeFields::Both {
        target.new.clone_from(&entry.new);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn list(pairs: &[(&str, &str)]) -> RuleList {
        pairs.iter().map(|(o, n)| Rule::new(*o, *n)).collect()
    }

    fn names(values: &[&str]) -> Vec<Rule> {
        values.iter().map(|v| Rule::from_old(*v)).collect()
    }

    #[test]
    fn fills_trailing_run_after_manual_rows() {
        let mut rules = list(&[("Red", "Blue"), ("", ""), ("", "")]);
        let outcome = merge(&mut rules, &names(&["Green", "Yellow"]), MergeFields::Old);

        assert_eq!(
            rules,
            list(&[("Red", "Blue"), ("Green", ""), ("Yellow", "")])
        );
        assert_eq!(outcome.strategy, MergeStrategy::TrailingRun { start: 1 });
        assert_eq!((outcome.filled, outcome.appended), (2, 0));
    }

    #[test]
    fn rewinds_onto_all_empty_list_and_appends_overflow() {
        let mut rules = list(&[("", ""), ("", "")]);
        let outcome = merge(&mut rules, &names(&["A", "B", "C"]), MergeFields::Old);

        assert_eq!(rules, list(&[("A", ""), ("B", ""), ("C", "")]));
        assert_eq!(outcome.strategy, MergeStrategy::Rewind);
        assert_eq!((outcome.filled, outcome.appended), (2, 1));
    }

    #[test]
    fn appends_when_last_row_has_content() {
        let mut rules = list(&[("", ""), ("Red", "")]);
        let outcome = merge(&mut rules, &names(&["A"]), MergeFields::Old);

        assert_eq!(rules, list(&[("", ""), ("Red", ""), ("A", "")]));
        assert_eq!(outcome.strategy, MergeStrategy::Append);
    }

    #[test]
    fn interior_empty_rows_are_not_reused() {
        let mut rules = list(&[("Red", ""), ("", ""), ("Blue", ""), ("", "")]);
        merge(&mut rules, &names(&["A", "B"]), MergeFields::Old);

        assert_eq!(
            rules,
            list(&[("Red", ""), ("", ""), ("Blue", ""), ("A", ""), ("B", "")])
        );
    }

    #[test]
    fn short_input_leaves_rest_of_run_empty() {
        let mut rules = list(&[("Red", "Blue"), ("", ""), ("", ""), ("", "")]);
        merge(&mut rules, &names(&["A"]), MergeFields::Old);

        assert_eq!(
            rules,
            list(&[("Red", "Blue"), ("A", ""), ("", ""), ("", "")])
        );
    }

    #[test]
    fn empty_input_is_a_noop() {
        let mut rules = list(&[("Red", "Blue"), ("", "")]);
        let before = rules.clone();
        let outcome = merge(&mut rules, &[], MergeFields::Both);
        assert_eq!(rules, before);
        assert_eq!(outcome.total(), 0);
    }

    #[test]
    fn merging_into_an_empty_list_appends() {
        let mut rules = RuleList::new();
        let outcome = merge(&mut rules, &[Rule::new("A", "B")], MergeFields::Both);
        assert_eq!(rules, list(&[("A", "B")]));
        assert_eq!(outcome.strategy, MergeStrategy::Rewind);
        assert_eq!(outcome.appended, 1);
    }

    #[test]
    fn old_only_merge_ignores_incoming_new_labels() {
        let mut rules = list(&[("", "")]);
        merge(&mut rules, &[Rule::new("A", "B")], MergeFields::Old);
        assert_eq!(rules, list(&[("A", "")]));
    }

    #[test]
    fn both_merge_copies_partial_entries_verbatim() {
        let mut rules = list(&[("Keep", "Me"), ("", "")]);
        merge(
            &mut rules,
            &[Rule::new("", "OnlyNew"), Rule::new("", "")],
            MergeFields::Both,
        );
        assert_eq!(rules, list(&[("Keep", "Me"), ("", "OnlyNew"), ("", "")]));
    }

    #[test]
    fn trailing_run_detection() {
        assert_eq!(trailing_empty_start(&RuleList::new()), None);
        assert_eq!(trailing_empty_start(&list(&[("A", "")])), None);
        assert_eq!(trailing_empty_start(&list(&[("", ""), ("A", ""), ("", "")])), Some(2));
        assert_eq!(trailing_empty_start(&list(&[("", ""), ("", "")])), Some(0));
    }

    fn arb_rule() -> impl Strategy<Value = Rule> {
        (
            prop_oneof![3 => Just(String::new()), 1 => "[A-Z][a-z]{0,4}"],
            prop_oneof![3 => Just(String::new()), 1 => "[A-Z][a-z]{0,4}"],
        )
            .prop_map(|(old, new)| Rule::new(old, new))
    }

    proptest! {
        #[test]
        fn rows_with_content_survive_any_merge(
            existing in prop::collection::vec(arb_rule(), 0..10),
            incoming in prop::collection::vec(arb_rule(), 0..10),
            both in any::<bool>(),
        ) {
            let fields = if both { MergeFields::Both } else { MergeFields::Old };
            let before = RuleList::from(existing);
            let mut after = before.clone();
            merge(&mut after, &incoming, fields);

            prop_assert!(after.len() >= before.len());
            for (idx, rule) in before.iter().enumerate() {
                if !rule.is_empty() {
                    prop_assert_eq!(&after[idx], rule);
                }
            }
        }

        #[test]
        fn rewind_within_capacity_keeps_length(
            (len, incoming) in (0usize..10).prop_flat_map(|len| {
                (Just(len), prop::collection::vec(arb_rule(), 0..=len))
            }),
        ) {
            let mut rules = RuleList::new();
            rules.initialize(len);
            merge(&mut rules, &incoming, MergeFields::Both);
            prop_assert_eq!(rules.len(), len);
        }
    }
}
