//! Timed text (json3) caption parsing

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::domain::transcript::CaptionFragment;

static FMT_PARAM: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"fmt=[^&]*").ok());

#[derive(Debug, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Event {
    #[serde(default)]
    t_start_ms: u64,
    #[serde(default)]
    d_duration_ms: u64,
    segs: Option<Vec<Segment>>,
}

#[derive(Debug, Deserialize)]
struct Segment {
    utf8: Option<String>,
}

/// Point a caption track URL at the json3 format
pub(crate) fn json3_url(base_url: &str) -> String {
    if let Some(re) = FMT_PARAM.as_ref() {
        if re.is_match(base_url) {
            return re.replace(base_url, "fmt=json3").into_owned();
        }
    }
    let sep = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}fmt=json3", base_url, sep)
}

/// Parse a json3 body into fragments in chronological order.
/// Events without text segments (window and style events) are skipped.
pub(crate) fn parse_json3(body: &str) -> Result<Vec<CaptionFragment>, serde_json::Error> {
    let timed: TimedText = serde_json::from_str(body)?;

    Ok(timed
        .events
        .into_iter()
        .filter_map(|event| {
            let text: String = event
                .segs?
                .into_iter()
                .filter_map(|s| s.utf8)
                .collect();
            Some(CaptionFragment::new(text, event.t_start_ms, event.d_duration_ms))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_existing_format() {
        let url = "https://www.youtube.com/api/timedtext?v=abc&fmt=srv3&lang=en";
        assert_eq!(
            json3_url(url),
            "https://www.youtube.com/api/timedtext?v=abc&fmt=json3&lang=en"
        );
    }

    #[test]
    fn appends_format_to_query() {
        assert_eq!(
            json3_url("https://x/api/timedtext?v=abc"),
            "https://x/api/timedtext?v=abc&fmt=json3"
        );
    }

    #[test]
    fn appends_format_without_query() {
        assert_eq!(json3_url("https://x/timedtext"), "https://x/timedtext?fmt=json3");
    }

    #[test]
    fn parses_events_with_segments() {
        let body = r#"{"wireMagic":"pb3","events":[
            {"tStartMs":0,"dDurationMs":5000,"id":1,"wpWinPosId":1},
            {"tStartMs":100,"dDurationMs":2000,"segs":[{"utf8":"Hello "},{"utf8":"there"}]},
            {"tStartMs":2100,"dDurationMs":1500,"segs":[{"utf8":"world."}]}
        ]}"#;

        let fragments = parse_json3(body).unwrap();

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].text(), "Hello there");
        assert_eq!(fragments[0].end_ms(), 2100);
        assert_eq!(fragments[1].text(), "world.");
    }

    #[test]
    fn keeps_newline_only_events_for_joining() {
        let body = r#"{"events":[{"tStartMs":0,"segs":[{"utf8":"\n"}]}]}"#;
        let fragments = parse_json3(body).unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text(), "\n");
    }

    #[test]
    fn missing_events_is_empty() {
        assert!(parse_json3("{}").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_error() {
        assert!(parse_json3("<transcript/>").is_err());
    }
}
