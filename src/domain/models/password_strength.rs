//! # 비밀번호 강도 표시
//!
//! 입력 중인 비밀번호 문자열만으로 계산되는 0~5 점수입니다.
//! 다섯 개의 독립적인 조건 중 만족하는 개수를 셉니다.
//!
//! | 조건 | 설명 |
//! |------|------|
//! | 길이 | 8자 이상 |
//! | 대문자 | `A-Z` 포함 |
//! | 소문자 | `a-z` 포함 |
//! | 숫자 | `0-9` 포함 |
//! | 기호 | ASCII 영숫자가 아닌 문자 포함 |
//!
//! 점수는 안내용입니다. 제출 가능 여부에는 영향을 주지 않습니다.

use serde::Serialize;

/// 강도 계산에 사용하는 최소 길이
pub const MIN_STRONG_LENGTH: usize = 8;

/// 만점
pub const MAX_SCORE: u8 = 5;

/// 비밀번호 강도 점수 (0..=5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct PasswordStrength {
    score: u8,
}

/// 강도 구간
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

/// 강도 표시의 시각적 처리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTone {
    Danger,
    Warning,
    Success,
}

impl PasswordStrength {
    /// 비밀번호 문자열의 강도를 계산합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let strength = PasswordStrength::evaluate("Abc12345!");
    /// assert_eq!(strength.score(), 5);
    /// assert_eq!(strength.label(), "Strong");
    /// ```
    pub fn evaluate(password: &str) -> Self {
        let checks = [
            password.chars().count() >= MIN_STRONG_LENGTH,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];

        Self {
            score: checks.iter().filter(|passed| **passed).count() as u8,
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    /// 0~2 Weak, 3 Medium, 4~5 Strong
    pub fn level(&self) -> StrengthLevel {
        match self.score {
            0..=2 => StrengthLevel::Weak,
            3 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        self.level().label()
    }

    pub fn tone(&self) -> StrengthTone {
        self.level().tone()
    }

    /// 강도 막대의 채움 비율 (점수 × 20)
    pub fn fill_percent(&self) -> u8 {
        self.score * (100 / MAX_SCORE)
    }
}

impl StrengthLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }

    pub fn tone(&self) -> StrengthTone {
        match self {
            StrengthLevel::Weak => StrengthTone::Danger,
            StrengthLevel::Medium => StrengthTone::Warning,
            StrengthLevel::Strong => StrengthTone::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_scores_zero() {
        let strength = PasswordStrength::evaluate("");
        assert_eq!(strength.score(), 0);
        assert_eq!(strength.level(), StrengthLevel::Weak);
        assert_eq!(strength.fill_percent(), 0);
    }

    #[test]
    fn test_each_predicate_counts_once() {
        assert_eq!(PasswordStrength::evaluate("a").score(), 1);
        assert_eq!(PasswordStrength::evaluate("A").score(), 1);
        assert_eq!(PasswordStrength::evaluate("7").score(), 1);
        assert_eq!(PasswordStrength::evaluate("#").score(), 1);
        // 길이 + 소문자
        assert_eq!(PasswordStrength::evaluate("abcdefgh").score(), 2);
        // 같은 종류의 문자를 더해도 점수는 늘지 않음
        assert_eq!(PasswordStrength::evaluate("aaaaaaaaaaaa").score(), 2);
    }

    #[test]
    fn test_full_score() {
        let strength = PasswordStrength::evaluate("Abc12345!");
        assert_eq!(strength.score(), 5);
        assert_eq!(strength.label(), "Strong");
        assert_eq!(strength.tone(), StrengthTone::Success);
        assert_eq!(strength.fill_percent(), 100);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        // 공백과 비 ASCII 문자는 기호로 취급
        assert_eq!(PasswordStrength::evaluate(" ").score(), 1);
        assert_eq!(PasswordStrength::evaluate("é").score(), 1);
        assert_eq!(PasswordStrength::evaluate("비밀번호").score(), 1);
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(PasswordStrength::evaluate("가나다라마바사아").score(), 2);
        assert_eq!(PasswordStrength::evaluate("abcdefg").score(), 1);
    }

    #[test]
    fn test_levels_are_exhaustive() {
        let expected = [
            (0, StrengthLevel::Weak),
            (1, StrengthLevel::Weak),
            (2, StrengthLevel::Weak),
            (3, StrengthLevel::Medium),
            (4, StrengthLevel::Strong),
            (5, StrengthLevel::Strong),
        ];

        for (score, level) in expected {
            assert_eq!(PasswordStrength { score }.level(), level, "score {}", score);
        }
        assert_eq!(PasswordStrength { score: 3 }.label(), "Medium");
        assert_eq!(PasswordStrength { score: 3 }.tone(), StrengthTone::Warning);
        assert_eq!(PasswordStrength { score: 1 }.tone(), StrengthTone::Danger);
    }

    #[test]
    fn test_score_is_monotone_as_predicates_are_added() {
        let steps = ["a", "aB", "aB3", "aB3!", "aB3!wxyz"];
        let mut previous = 0;

        for password in steps {
            let score = PasswordStrength::evaluate(password).score();
            assert!(score >= previous, "{} dropped the score", password);
            assert!(score <= MAX_SCORE);
            previous = score;
        }
        assert_eq!(previous, 5);
    }
}
