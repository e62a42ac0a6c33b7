use serde::{Deserialize, Serialize};

/// Path the detection forms submit to.
pub const DETECT_PATH: &str = "/detect";

/// Form field carrying the text to analyze.
pub const TEXT_FIELD: &str = "text";

/// Query parameter selecting the detection mode.
pub const MODE_PARAM: &str = "m";

/// [`MODE_PARAM`] value requesting multi-language boundary detection.
pub const MODE_MULTI: &str = "1";

/// ISO 639-1 codes of the languages the detector is trained on
/// (EFIGS plus Portuguese).
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "fr", "it", "de", "es", "pt"];

/// Detection request (JSON variant of the form post)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectRequest {
    pub text: String,
}

/// Single-language detection response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectResponse {
    pub language: String,
}

/// A run of text attributed to one language by boundary detection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageSegment {
    pub text: String,
    pub language: String,
}

/// Multi-language detection response (mode `m=1`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultiDetectResponse {
    pub segments: Vec<LanguageSegment>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_request_uses_the_form_field_name() {
        let request = DetectRequest {
            text: "ciao a tutti".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get(TEXT_FIELD).is_some());
    }

    #[test]
    fn multi_response_deserializes_segments() {
        let body = r#"{"segments":[{"text":"hello there","language":"en"},{"text":"bonjour","language":"fr"}]}"#;
        let response: MultiDetectResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.segments.len(), 2);
        assert_eq!(response.segments[0].language, "en");
        assert_eq!(response.segments[1].text, "bonjour");
    }

    #[test]
    fn supported_languages_are_distinct() {
        let mut codes: Vec<&str> = SUPPORTED_LANGUAGES.to_vec();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), SUPPORTED_LANGUAGES.len());
    }
}
