use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

/// Closed set of analytics event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    PageView,
    ErrorCodeSearch,
    ButtonClick,
    FormSubmit,
    DeviceView,
    PhotoUpload,
    Custom,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PageView => "page_view",
            Self::ErrorCodeSearch => "error_code_search",
            Self::ButtonClick => "button_click",
            Self::FormSubmit => "form_submit",
            Self::DeviceView => "device_view",
            Self::PhotoUpload => "photo_upload",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for tracking an analytics event.
///
/// `user_id` and `path` override the values the server would otherwise resolve from the
/// session user and the request's current location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TrackEventDto {
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub meta: Option<Value>,
}

impl TrackEventDto {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            user_id: None,
            path: None,
            meta: None,
        }
    }

    pub fn page_view(path: Option<String>) -> Self {
        Self {
            path,
            ..Self::new(EventType::PageView)
        }
    }

    pub fn error_code_search(error_code: &str, system_name: &str) -> Self {
        Self {
            meta: Some(json!({ "errorCode": error_code, "systemName": system_name })),
            ..Self::new(EventType::ErrorCodeSearch)
        }
    }

    /// Button click event, additional metadata keys win over `buttonLabel` on collision
    pub fn button_click(button_label: &str, additional_meta: Option<Map<String, Value>>) -> Self {
        let mut meta = Map::new();
        meta.insert("buttonLabel".to_string(), json!(button_label));
        if let Some(additional_meta) = additional_meta {
            meta.extend(additional_meta);
        }

        Self {
            meta: Some(Value::Object(meta)),
            ..Self::new(EventType::ButtonClick)
        }
    }

    pub fn device_view(brand_name: &str, model_name: &str) -> Self {
        Self {
            meta: Some(json!({ "brandName": brand_name, "modelName": model_name })),
            ..Self::new(EventType::DeviceView)
        }
    }
}

/// A stored analytics event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AnalyticsEventDto {
    pub id: Uuid,
    pub event_type: EventType,
    pub user_id: Option<Uuid>,
    pub device_id: Uuid,
    pub path: Option<String>,
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub meta: Option<Value>,
    pub timestamp: NaiveDateTime,
}

/// Occurrences of an (error code, system) pair among error code searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorCodeSearchCountDto {
    pub code: String,
    pub system: String,
    pub count: u64,
}

/// Occurrences of a path among page views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PageViewCountDto {
    pub path: String,
    pub count: u64,
}
