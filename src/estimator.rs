//! Change estimator - minimum number of changes to satisfy the password policy.

use crate::analyzer::{ClassCounts, PasswordProfile};

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 20;

/// Runs of this length or longer break the repeat rule.
pub const MAX_RUN: usize = 3;

/// Returns the minimum number of insertions, deletions and substitutions
/// needed for a password with the given profile to become strong.
///
/// `runs` must sum to `len`.
pub fn estimate_changes(counts: &ClassCounts, runs: &[usize], len: usize) -> usize {
    let missing = counts.missing();

    let changes = if len < MIN_LENGTH {
        MIN_LENGTH - len
    } else if len <= MAX_LENGTH {
        substitutions(runs).max(missing)
    } else {
        let over = len - MAX_LENGTH;
        let trimmed = distribute_deletions(runs, over);
        substitutions(&trimmed).max(missing) + over
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Estimated {} changes (len={}, missing={}, runs={})",
        changes,
        len,
        missing,
        runs.len()
    );

    changes
}

/// Convenience wrapper over an analyzer profile.
pub fn estimate_profile(profile: &PasswordProfile) -> usize {
    estimate_changes(&profile.counts, &profile.runs, profile.len)
}

/// Substitutions needed to break every run: one every third character.
fn substitutions(runs: &[usize]) -> usize {
    runs.iter().map(|r| r / MAX_RUN).sum()
}

/// Spends `over` mandatory deletions on a copy of `runs`, preferring the ones
/// that save a substitution, and returns the shortened runs.
///
/// The passes must stay in this order: runs of 3k first (one deletion saves
/// one substitution), then 3k+1 (two deletions), then whatever is left.
fn distribute_deletions(runs: &[usize], mut over: usize) -> Vec<usize> {
    let mut runs = runs.to_vec();

    for run in runs.iter_mut() {
        if *run % 3 == 0 && over > 1 {
            *run -= 1;
            over -= 1;
        }
    }

    for run in runs.iter_mut() {
        if *run % 3 == 1 && *run > 3 && over > 2 {
            *run -= 2;
            over -= 2;
        }
    }

    for run in runs.iter_mut() {
        if over == 0 {
            break;
        }
        if *run > 2 {
            let deleted = over.min(*run - 2);
            *run -= deleted;
            over -= deleted;
        }
    }

    runs
}
