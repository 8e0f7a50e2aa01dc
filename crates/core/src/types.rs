use serde::{Deserialize, Serialize};

/// Identity of the signed-in user, as reported by the backend session check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub picture: String,
}

/// Video metadata returned alongside a generated summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetails {
    pub id: String,
    pub title: String,
    pub channel: String,
    #[serde(rename = "channelId")]
    pub channel_id: String,
    pub thumbnail: String,
}

impl VideoDetails {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    pub fn channel_url(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.channel_id)
    }
}

/// One persisted record of a past summarization result.
///
/// Entries are never mutated after creation; the history list only
/// prepends new entries or removes one by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation timestamp in unix milliseconds, doubles as the entry id.
    pub id: i64,
    #[serde(rename = "videoDetails")]
    pub video_details: VideoDetails,
    pub summary: String,
    /// RFC 3339 creation date.
    pub date: String,
}

/// User-selected summary verbosity. Serializes with the exact casing the
/// backend expects ("Short" / "Detailed").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SummaryLength {
    Short,
    #[default]
    Detailed,
}

impl SummaryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "Short",
            SummaryLength::Detailed => "Detailed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted theme value; anything unrecognized falls back to light.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_length_serializes_with_backend_casing() {
        assert_eq!(
            serde_json::to_string(&SummaryLength::Short).unwrap(),
            "\"Short\""
        );
        assert_eq!(
            serde_json::to_string(&SummaryLength::Detailed).unwrap(),
            "\"Detailed\""
        );
    }

    #[test]
    fn video_details_uses_wire_field_names() {
        let details: VideoDetails = serde_json::from_str(
            r#"{"id":"abc123","title":"T","channel":"C","channelId":"CID","thumbnail":"U"}"#,
        )
        .unwrap();
        assert_eq!(details.channel_id, "CID");
        assert_eq!(details.watch_url(), "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn theme_parse_falls_back_to_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("solarized"), Theme::Light);
    }
}
