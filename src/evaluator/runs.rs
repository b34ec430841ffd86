//! Consecutive-run detection over gameplay values, shared by the straight
//! and royal-flush predicates.

pub(crate) const ACE_HIGH: u8 = 14;
pub(crate) const ACE_LOW: u8 = 1;

/// Prepare a value sequence for run scanning: sort ascending, drop
/// duplicates, and when an Ace is present also seat it at the low end as
/// value 1 so A-2-3-4-5 reads as a run (the wheel).
pub(crate) fn run_values(values: impl IntoIterator<Item = u8>) -> Vec<u8> {
    let mut values: Vec<u8> = values.into_iter().collect();
    values.sort_unstable();
    values.dedup();
    if values.contains(&ACE_HIGH) {
        values.insert(0, ACE_LOW);
    }
    values
}

/// True when any five-wide window of a prepared sequence is strictly
/// consecutive.
pub(crate) fn contains_run(values: &[u8]) -> bool {
    values.windows(5).any(is_consecutive)
}

/// True when some strictly consecutive five-wide window starts at exactly
/// 10, i.e. 10-J-Q-K-A. Later windows are still checked after a lower run is
/// found.
pub(crate) fn contains_royal_run(values: &[u8]) -> bool {
    values.windows(5).any(|w| is_consecutive(w) && w[0] == 10)
}

fn is_consecutive(window: &[u8]) -> bool {
    window
        .iter()
        .enumerate()
        .all(|(k, &v)| v == window[0] + k as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_values_sorts_dedups_and_adds_low_ace() {
        assert_eq!(run_values([5, 2, 14, 2, 9]), vec![1, 2, 5, 9, 14]);
        assert_eq!(run_values([5, 2, 9]), vec![2, 5, 9]);
        assert_eq!(run_values([]), Vec::<u8>::new());
    }

    #[test]
    fn finds_a_plain_run() {
        assert!(contains_run(&[2, 3, 4, 5, 6]));
        assert!(contains_run(&[2, 3, 9, 10, 11, 12, 13]));
    }

    #[test]
    fn finds_the_wheel_through_the_low_ace() {
        let values = run_values([14, 2, 3, 4, 5, 9, 11]);
        assert!(contains_run(&values));
    }

    #[test]
    fn gaps_are_not_runs() {
        assert!(!contains_run(&[2, 3, 4, 5, 7]));
        assert!(!contains_run(&[1, 9, 10, 11, 12, 14]));
    }

    #[test]
    fn short_sequences_never_run() {
        assert!(!contains_run(&[2, 3, 4, 5]));
        assert!(!contains_run(&[]));
    }

    #[test]
    fn royal_run_must_start_at_ten() {
        assert!(contains_royal_run(&[10, 11, 12, 13, 14]));
        // King-high run falls one short.
        assert!(!contains_royal_run(&[9, 10, 11, 12, 13]));
        // A lower run earlier in the sequence does not hide the royal one.
        assert!(contains_royal_run(&run_values([9, 10, 11, 12, 13, 14])));
    }
}
