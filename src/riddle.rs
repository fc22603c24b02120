//! The riddle in front of `/hidden`.
//!
//! Purely decorative: `/hidden` itself is not protected.

pub const QUESTION: &str =
    "What am I? I have a city but no houses, forests but no trees, and water but no fish.";

const ANSWERS: &[&str] = &["map", "a map"];

pub const WRONG_ANSWER: &str = "Wrong answer... Try again.";

/// How long the wrong-answer message stays visible
pub const ERROR_CLEAR_MS: u64 = 2000;

/// Case-insensitive, surrounding whitespace ignored.
pub fn is_correct(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    ANSWERS.contains(&answer.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_answers_in_any_case() {
        for answer in ["map", "a map", "MAP", "  A Map  ", "\tmap\n"] {
            assert!(is_correct(answer), "{answer:?} should be accepted");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for answer in ["", "maps", "the map", "a  map", "clock", "amap"] {
            assert!(!is_correct(answer), "{answer:?} should be rejected");
        }
    }
}
