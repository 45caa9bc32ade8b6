//! Booking form responses narrowed into typed values, and LinkedIn
//! profile extraction over them.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::normalize::normalize_linkedin_url;

/// Field names (lowercased, hyphens and whitespace removed) that are
/// expected to hold a LinkedIn profile.
const LINKEDIN_FIELD_NAMES: &[&str] = &[
    "linkedin",
    "linkedinurl",
    "linkedin_url",
    "linkedinprofile",
    "linkedin_profile",
    "linkedinprofileurl",
    "linkedin_profile_url",
];

static PROFILE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/[^/\s?#]+").expect("Invalid LinkedIn profile pattern")
});

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseValue {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<ResponseValue>),
    Object(Vec<(String, ResponseValue)>),
    Null,
}

impl ResponseValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&Value> for ResponseValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => ResponseValue::Text(s.clone()),
            Value::Number(n) => ResponseValue::Number(n.as_f64().unwrap_or_default()),
            Value::Bool(b) => ResponseValue::Bool(*b),
            Value::Array(items) => ResponseValue::List(items.iter().map(Self::from).collect()),
            Value::Object(map) => ResponseValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
            Value::Null => ResponseValue::Null,
        }
    }
}

/// Field name to value pairs in the order they were submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormResponses(Vec<(String, ResponseValue)>);

impl FormResponses {
    pub fn new(entries: Vec<(String, ResponseValue)>) -> Self {
        Self(entries)
    }

    /// Narrow a raw JSON payload. Anything other than an object has no
    /// fields and becomes `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match ResponseValue::from(value) {
            ResponseValue::Object(entries) => Some(Self(entries)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResponseValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn is_linkedin_field(name: &str) -> bool {
    let key: String = name
        .to_lowercase()
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    LINKEDIN_FIELD_NAMES.contains(&key.as_str())
}

/// The normalized profile URL inside `text`, ignoring anything around
/// it such as surrounding prose or a protocol.
fn find_profile_url(text: &str) -> Option<String> {
    PROFILE_URL_PATTERN
        .find(text)
        .map(|m| normalize_linkedin_url(m.as_str()))
}

/// Find the attendee's LinkedIn profile in their form responses.
///
/// Fields named like a LinkedIn field are checked first, in order, and
/// the first text value containing a profile URL wins. Failing that,
/// every text value is searched for one. Only the profile URL itself
/// is returned, normalized.
pub fn extract_linkedin_url(responses: Option<&FormResponses>) -> Option<String> {
    let responses = responses?;

    let named = responses
        .iter()
        .filter(|(name, _)| is_linkedin_field(name))
        .filter_map(|(_, value)| value.as_text())
        .find_map(find_profile_url);
    if named.is_some() {
        return named;
    }

    responses
        .iter()
        .filter_map(|(_, value)| value.as_text())
        .find_map(find_profile_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn responses(value: Value) -> FormResponses {
        FormResponses::from_json(&value).expect("Expected a JSON object")
    }

    #[test]
    fn it_returns_none_for_missing_or_empty_responses() {
        assert_eq!(extract_linkedin_url(None), None);
        assert_eq!(extract_linkedin_url(Some(&FormResponses::default())), None);
        assert_eq!(extract_linkedin_url(Some(&responses(json!({})))), None);
    }

    #[test]
    fn it_prefers_named_fields_over_pattern_matches() {
        let r = responses(json!({
            "other": "https://linkedin.com/in/y",
            "linkedin": "https://www.linkedin.com/in/x",
        }));
        assert_eq!(
            extract_linkedin_url(Some(&r)),
            Some("linkedin.com/in/x".to_string())
        );
    }

    #[test]
    fn it_returns_named_field_when_listed_first() {
        let r = responses(json!({
            "linkedin": "https://www.linkedin.com/in/x",
            "other": "https://linkedin.com/in/y",
        }));
        assert_eq!(
            extract_linkedin_url(Some(&r)),
            Some("linkedin.com/in/x".to_string())
        );
    }

    #[test]
    fn it_matches_field_names_loosely() {
        let r = responses(json!({"LinkedIn-Profile URL": "linkedin.com/in/Loose/"}));
        assert_eq!(
            extract_linkedin_url(Some(&r)),
            Some("linkedin.com/in/loose".to_string())
        );

        let r = responses(json!({"linkedin_url": "https://linkedin.com/in/snake"}));
        assert_eq!(
            extract_linkedin_url(Some(&r)),
            Some("linkedin.com/in/snake".to_string())
        );
    }

    #[test]
    fn it_ignores_non_string_values() {
        let r = responses(json!({"linkedin": 123}));
        assert_eq!(extract_linkedin_url(Some(&r)), None);

        let r = responses(json!({
            "linkedin": {"value": "https://linkedin.com/in/nested"},
            "tags": ["https://linkedin.com/in/listed"],
        }));
        assert_eq!(extract_linkedin_url(Some(&r)), None);
    }

    #[test]
    fn it_skips_named_fields_without_a_profile_path() {
        let r = responses(json!({
            "linkedin": "n/a",
            "notes": "Find me at https://www.linkedin.com/in/fallback/",
        }));
        assert_eq!(
            extract_linkedin_url(Some(&r)),
            Some("linkedin.com/in/fallback".to_string())
        );
    }

    #[test]
    fn it_falls_back_to_first_pattern_match_in_order() {
        let r = responses(json!({
            "name": "Jane",
            "website": "HTTPS://LinkedIn.com/in/First",
            "profile": "https://linkedin.com/in/second",
        }));
        assert_eq!(
            extract_linkedin_url(Some(&r)),
            Some("linkedin.com/in/first".to_string())
        );
    }

    #[test]
    fn it_keys_prose_and_named_fields_identically() {
        let from_notes = responses(json!({
            "notes": "Find me at https://www.linkedin.com/in/Jane/ thanks!"
        }));
        let from_field = responses(json!({"linkedin": "https://www.linkedin.com/in/jane/"}));
        let from_named_prose = responses(json!({
            "LinkedIn": "My profile: http://linkedin.com/in/jane?trk=public"
        }));

        let expected = Some("linkedin.com/in/jane".to_string());
        assert_eq!(extract_linkedin_url(Some(&from_notes)), expected);
        assert_eq!(extract_linkedin_url(Some(&from_field)), expected);
        assert_eq!(extract_linkedin_url(Some(&from_named_prose)), expected);
    }

    #[test]
    fn it_ignores_company_pages() {
        let r = responses(json!({"website": "https://linkedin.com/company/acme"}));
        assert_eq!(extract_linkedin_url(Some(&r)), None);
    }

    #[test]
    fn it_rejects_non_object_payloads() {
        assert_eq!(FormResponses::from_json(&json!("linkedin.com/in/x")), None);
        assert_eq!(FormResponses::from_json(&Value::Null), None);
    }
}
