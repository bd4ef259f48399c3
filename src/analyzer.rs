//! Run analyzer - single pass over the password collecting class counts and runs.

/// Number of characters found in each required class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub lowercase: usize,
    pub uppercase: usize,
    pub digit: usize,
}

impl ClassCounts {
    /// Number of required classes (lowercase, uppercase, digit) with no characters.
    pub fn missing(&self) -> usize {
        [self.lowercase, self.uppercase, self.digit]
            .iter()
            .filter(|&&n| n == 0)
            .count()
    }
}

/// Lengths of the maximal runs of identical characters, left to right.
pub type RunLengths = Vec<usize>;

/// Everything the change estimator needs to know about a password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordProfile {
    pub counts: ClassCounts,
    pub runs: RunLengths,
    /// Length in characters.
    pub len: usize,
}

/// Scans the password once, classifying characters and closing runs.
///
/// Characters that are not lowercase, uppercase or an ASCII digit count
/// toward no class but still take part in runs. An empty password yields an
/// empty `runs`.
pub fn analyze(password: &str) -> PasswordProfile {
    let chars: Vec<char> = password.chars().collect();
    let mut counts = ClassCounts::default();
    let mut runs = RunLengths::new();
    let mut run_start = 0;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_lowercase() {
            counts.lowercase += 1;
        } else if c.is_uppercase() {
            counts.uppercase += 1;
        } else if c.is_ascii_digit() {
            counts.digit += 1;
        }

        if chars.get(i + 1) != Some(&c) {
            runs.push(i - run_start + 1);
            run_start = i + 1;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Analyzed password: len={} counts={:?} runs={}",
        chars.len(),
        counts,
        runs.len()
    );

    PasswordProfile {
        counts,
        runs,
        len: chars.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty() {
        let profile = analyze("");
        assert_eq!(profile.counts, ClassCounts::default());
        assert!(profile.runs.is_empty());
        assert_eq!(profile.len, 0);
        assert_eq!(profile.counts.missing(), 3);
    }

    #[test]
    fn test_analyze_counts_classes() {
        let profile = analyze("aB5cD6");
        assert_eq!(
            profile.counts,
            ClassCounts {
                lowercase: 2,
                uppercase: 2,
                digit: 2
            }
        );
        assert_eq!(profile.counts.missing(), 0);
    }

    #[test]
    fn test_analyze_runs() {
        let profile = analyze("abcDDDefff6");
        assert_eq!(profile.runs, vec![1, 1, 1, 3, 1, 3, 1]);
        assert_eq!(profile.runs.iter().sum::<usize>(), profile.len);
    }

    #[test]
    fn test_analyze_single_run() {
        let profile = analyze("aaaaaa");
        assert_eq!(profile.runs, vec![6]);
        assert_eq!(profile.counts.missing(), 2);
    }

    #[test]
    fn test_analyze_other_characters_join_runs_only() {
        let profile = analyze("a!!!B");
        assert_eq!(profile.runs, vec![1, 3, 1]);
        assert_eq!(
            profile.counts,
            ClassCounts {
                lowercase: 1,
                uppercase: 1,
                digit: 0
            }
        );
    }

    #[test]
    fn test_analyze_counts_chars_not_bytes() {
        let profile = analyze("ééé1");
        assert_eq!(profile.len, 4);
        assert_eq!(profile.runs, vec![3, 1]);
        assert_eq!(profile.counts.lowercase, 3);
    }
}
