use crate::validation::{text_len, MIN_PASSWORD_LEN};

pub const MAX_SCORE: u8 = 5;

const LEVELS: [(&str, &str); 6] = [
    ("", ""),
    ("Very Weak", "bg-red-500"),
    ("Weak", "bg-orange-500"),
    ("Fair", "bg-yellow-500"),
    ("Good", "bg-blue-500"),
    ("Strong", "bg-green-500"),
];

/// Signup password meter: one point per satisfied rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        let rules = [
            text_len(password) >= MIN_PASSWORD_LEN,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        Self {
            score: rules.iter().filter(|passed| **passed).count() as u8,
        }
    }

    pub fn label(&self) -> &'static str {
        LEVELS[self.score as usize].0
    }

    pub fn color(&self) -> &'static str {
        LEVELS[self.score as usize].1
    }

    /// Whether meter segment `level` (1-based) is lit.
    pub fn fills(&self, level: u8) -> bool {
        level <= self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, "")]
    #[case("a", 1, "Very Weak")]
    #[case("aA", 2, "Weak")]
    #[case("aA1", 3, "Fair")]
    #[case("aA1!", 4, "Good")]
    #[case("aA1!aA1!", 5, "Strong")]
    #[case("abcdefgh", 2, "Weak")]
    #[case("😀😀😀😀", 2, "Weak")]
    #[case("😀", 1, "Very Weak")]
    fn scores_and_labels(#[case] password: &str, #[case] score: u8, #[case] label: &str) {
        let strength = PasswordStrength::of(password);
        assert_eq!(strength.score, score);
        assert_eq!(strength.label(), label);
    }

    #[test]
    fn strong_passwords_are_green() {
        let strength = PasswordStrength::of("Correct-Horse-9");
        assert_eq!(strength.color(), "bg-green-500");
        assert!(strength.fills(5));
    }

    #[test]
    fn non_ascii_letters_count_as_symbols() {
        assert_eq!(PasswordStrength::of("é").score, 1);
    }
}
