//! Database model aliases and conversions to the shared API models.

use entity::sea_orm_active_enums;

use crate::model::{
    analytics::{AnalyticsEventDto, EventType},
    fix_step::FixStepDto,
    log::{LogEntryDto, LogLevel},
    note::NoteDto,
};

/// Service note left by a user on a (system, error code) pair
pub type NoteModel = entity::error_note::Model;

/// Tracked analytics event
pub type AnalyticsEventModel = entity::app_analytics::Model;

/// Persisted log entry
pub type LogEntryModel = entity::app_log::Model;

/// Knowledge-base fix step article
pub type FixStepModel = entity::fix_step::Model;

impl From<EventType> for sea_orm_active_enums::EventType {
    fn from(value: EventType) -> Self {
        match value {
            EventType::PageView => Self::PageView,
            EventType::ErrorCodeSearch => Self::ErrorCodeSearch,
            EventType::ButtonClick => Self::ButtonClick,
            EventType::FormSubmit => Self::FormSubmit,
            EventType::DeviceView => Self::DeviceView,
            EventType::PhotoUpload => Self::PhotoUpload,
            EventType::Custom => Self::Custom,
        }
    }
}

impl From<sea_orm_active_enums::EventType> for EventType {
    fn from(value: sea_orm_active_enums::EventType) -> Self {
        use sea_orm_active_enums::EventType as Db;

        match value {
            Db::PageView => Self::PageView,
            Db::ErrorCodeSearch => Self::ErrorCodeSearch,
            Db::ButtonClick => Self::ButtonClick,
            Db::FormSubmit => Self::FormSubmit,
            Db::DeviceView => Self::DeviceView,
            Db::PhotoUpload => Self::PhotoUpload,
            Db::Custom => Self::Custom,
        }
    }
}

impl From<LogLevel> for sea_orm_active_enums::LogLevel {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Critical => Self::Critical,
            LogLevel::Urgent => Self::Urgent,
            LogLevel::Shutdown => Self::Shutdown,
            LogLevel::Error => Self::Error,
            LogLevel::Warning => Self::Warning,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
        }
    }
}

impl From<sea_orm_active_enums::LogLevel> for LogLevel {
    fn from(value: sea_orm_active_enums::LogLevel) -> Self {
        use sea_orm_active_enums::LogLevel as Db;

        match value {
            Db::Critical => Self::Critical,
            Db::Urgent => Self::Urgent,
            Db::Shutdown => Self::Shutdown,
            Db::Error => Self::Error,
            Db::Warning => Self::Warning,
            Db::Info => Self::Info,
            Db::Debug => Self::Debug,
        }
    }
}

impl From<NoteModel> for NoteDto {
    fn from(model: NoteModel) -> Self {
        Self {
            id: model.id,
            note: model.note,
            created_at: model.created_at,
        }
    }
}

impl From<AnalyticsEventModel> for AnalyticsEventDto {
    fn from(model: AnalyticsEventModel) -> Self {
        Self {
            id: model.id,
            event_type: model.event_type.into(),
            user_id: model.user_id,
            device_id: model.device_id,
            path: model.path,
            meta: model.meta,
            timestamp: model.timestamp,
        }
    }
}

impl From<LogEntryModel> for LogEntryDto {
    fn from(model: LogEntryModel) -> Self {
        Self {
            id: model.id,
            level: model.level.into(),
            message: model.message,
            stack_trace: model.stack_trace,
            user_id: model.user_id,
            page_path: model.page_path,
            timestamp: model.timestamp,
        }
    }
}

impl From<FixStepModel> for FixStepDto {
    fn from(model: FixStepModel) -> Self {
        Self {
            id: model.id,
            brand: model.brand,
            model: model.model,
            error_code: model.error_code,
            title: model.title,
            content: model.content,
            tags: model.tags.0,
            media_urls: model.media_urls.0,
            created_at: model.created_at,
            created_by: model.created_by,
        }
    }
}
