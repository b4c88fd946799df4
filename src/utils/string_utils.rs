//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 표시 이름을 이름과 성으로 나눕니다.
///
/// 공백 기준으로 나눈 첫 토큰이 이름, 나머지 토큰을 공백 하나로 이은 것이 성입니다.
/// 표시 이름이 없으면 둘 다 빈 문자열입니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(
///     split_display_name(Some("Grace Brewster Hopper")),
///     ("Grace".to_string(), "Brewster Hopper".to_string())
/// );
/// ```
pub fn split_display_name(display_name: Option<&str>) -> (String, String) {
    let mut tokens = display_name.unwrap_or_default().split_whitespace();

    let first_name = tokens.next().unwrap_or_default().to_string();
    let last_name = tokens.collect::<Vec<_>>().join(" ");

    (first_name, last_name)
}

pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 빈 문자열과 공백만 있는 문자열을 `None`으로 역직렬화합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_display_name() {
        assert_eq!(
            split_display_name(Some("Grace Brewster Hopper")),
            ("Grace".to_string(), "Brewster Hopper".to_string())
        );
        assert_eq!(split_display_name(Some("Cher")), ("Cher".to_string(), String::new()));
        assert_eq!(split_display_name(None), (String::new(), String::new()));
        assert_eq!(split_display_name(Some("   ")), (String::new(), String::new()));
    }

    #[test]
    fn test_split_display_name_collapses_whitespace() {
        assert_eq!(
            split_display_name(Some("  Alan   Mathison\tTuring ")),
            ("Alan".to_string(), "Mathison Turing".to_string())
        );
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  abc  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("abc".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "   "}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }
}
