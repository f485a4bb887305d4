
use entity::sea_orm_active_enums::EventType as EntityEventType;
use fixdesk_test_utils::prelude::*;

use crate::server::{
    model::request::RequestContext, service::analytics::AnalyticsService,
    worker::queue::TelemetryQueue,
};
