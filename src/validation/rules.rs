use crate::validation::dictionary::SpellChecker;

/// Answers shorter than this are rejected without consulting the dictionary
pub const MIN_ANSWER_LEN: usize = 3;

/// Check if `candidate` can be formed by removing letters from `target`,
/// i.e. the candidate's characters are a sub-multiset of the target's.
/// Comparison is case-insensitive.
///
/// The empty string passes vacuously; callers that must refuse empty input
/// have to guard for it before calling this.
pub fn is_possible(candidate: &str, target: &str) -> bool {
    let mut remaining: Vec<char> = target.to_lowercase().chars().collect();

    for c in candidate.to_lowercase().chars() {
        match remaining.iter().position(|&r| r == c) {
            Some(i) => {
                remaining.swap_remove(i);
            }
            None => return false,
        }
    }

    true
}

/// Check if `candidate` is new this round: not the target word itself and
/// not already present in `used`. All comparisons are case-insensitive, so
/// an uppercase duplicate of a used word does not slip through.
pub fn is_original(candidate: &str, target: &str, used: &[String]) -> bool {
    let candidate = candidate.to_lowercase();

    if candidate == target.to_lowercase() {
        return false;
    }

    !used.iter().any(|word| word.to_lowercase() == candidate)
}

/// Check if `candidate` is an acceptable dictionary word: at least
/// [`MIN_ANSWER_LEN`] characters, then known to the spell checker. The
/// length gate runs first so short words never reach the dictionary.
pub fn is_real<C: SpellChecker + ?Sized>(candidate: &str, checker: &C, locale: &str) -> bool {
    if candidate.chars().count() < MIN_ANSWER_LEN {
        return false;
    }

    checker.is_known_word(candidate, locale)
}
