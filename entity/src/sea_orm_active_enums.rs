use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum EventType {
    #[sea_orm(string_value = "page_view")]
    PageView,
    #[sea_orm(string_value = "error_code_search")]
    ErrorCodeSearch,
    #[sea_orm(string_value = "button_click")]
    ButtonClick,
    #[sea_orm(string_value = "form_submit")]
    FormSubmit,
    #[sea_orm(string_value = "device_view")]
    DeviceView,
    #[sea_orm(string_value = "photo_upload")]
    PhotoUpload,
    #[sea_orm(string_value = "custom")]
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum LogLevel {
    #[sea_orm(string_value = "Critical")]
    Critical,
    #[sea_orm(string_value = "Urgent")]
    Urgent,
    #[sea_orm(string_value = "Shutdown")]
    Shutdown,
    #[sea_orm(string_value = "Error")]
    Error,
    #[sea_orm(string_value = "Warning")]
    Warning,
    #[sea_orm(string_value = "Info")]
    Info,
    #[sea_orm(string_value = "Debug")]
    Debug,
}
