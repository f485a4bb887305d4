use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A knowledge-base article describing how to fix an issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FixStepDto {
    pub id: Uuid,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub error_code: Option<String>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub media_urls: Vec<String>,
    pub created_at: NaiveDateTime,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateFixStepDto {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub media_urls: Vec<String>,
}

impl CreateFixStepDto {
    /// Title and content must contain something other than whitespace
    pub fn has_required_fields(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

/// Splits comma separated input into trimmed entries, dropping empty segments.
///
/// ```
/// use fixdesk::model::fix_step::parse_comma_list;
///
/// assert_eq!(parse_comma_list("urgent, ac,, heating "), vec!["urgent", "ac", "heating"]);
/// ```
pub fn parse_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_comma_list, CreateFixStepDto};

    #[test]
    fn parse_keeps_order_and_discards_empty_segments() {
        assert_eq!(
            parse_comma_list(" https://a/1.png ,, https://a/2.png,  "),
            vec!["https://a/1.png", "https://a/2.png"]
        );
    }

    #[test]
    fn parse_empty_input_gives_empty_list() {
        assert!(parse_comma_list("").is_empty());
        assert!(parse_comma_list(" , ,").is_empty());
    }

    #[test]
    fn whitespace_title_or_content_is_missing() {
        let draft = CreateFixStepDto {
            title: "   ".to_string(),
            content: "Reset the board".to_string(),
            ..Default::default()
        };
        assert!(!draft.has_required_fields());

        let draft = CreateFixStepDto {
            title: "E001 reset".to_string(),
            content: "\n\t".to_string(),
            ..Default::default()
        };
        assert!(!draft.has_required_fields());

        let draft = CreateFixStepDto {
            title: "E001 reset".to_string(),
            content: "Reset the board".to_string(),
            ..Default::default()
        };
        assert!(draft.has_required_fields());
    }
}
