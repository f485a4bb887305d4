//! Analytics tracking and reporting.
//!
//! Tracking resolves the event against the request (user, device, current page) and hands
//! it to the telemetry queue without waiting for the write. Reporting fetches recent events
//! and aggregates them in memory; read failures are logged and reported as empty results.

pub mod aggregate;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::analytics::{
        AnalyticsEventDto, ErrorCodeSearchCountDto, EventType, PageViewCountDto, TrackEventDto,
    },
    server::{
        data::analytics::AnalyticsRepository,
        model::{
            request::RequestContext,
            session::device::DeviceIdentity,
            worker::{AnalyticsEventRecord, TelemetryJob},
        },
        worker::queue::TelemetryQueue,
    },
};

/// Maximum number of events fetched for reporting
pub const ANALYTICS_READ_LIMIT: u64 = 5000;

/// Default length of the top searches and top pages lists
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Analytics event tracking and reports
pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
    telemetry: &'a TelemetryQueue,
}

impl<'a> AnalyticsService<'a> {
    /// Creates a new instance of [`AnalyticsService`]
    pub fn new(db: &'a DatabaseConnection, telemetry: &'a TelemetryQueue) -> Self {
        Self { db, telemetry }
    }

    /// Queues an analytics event for writing.
    ///
    /// The user and path fall back to the request context when the event doesn't set them,
    /// the timestamp is taken now. Never fails the caller.
    ///
    /// # Returns
    /// - `true` - Event queued
    /// - `false` - Event dropped (device id unavailable or queue full/closed)
    pub async fn track_event<D: DeviceIdentity>(
        &self,
        device: &D,
        context: &RequestContext,
        event: TrackEventDto,
    ) -> bool {
        let device_id = match device.device_id().await {
            Ok(device_id) => device_id,
            Err(e) => {
                tracing::warn!(
                    "Failed to resolve device id, dropping {} event: {}",
                    event.event_type,
                    e
                );
                return false;
            }
        };

        let record = AnalyticsEventRecord {
            event_type: event.event_type,
            user_id: context.resolve_user(event.user_id),
            device_id,
            path: context.resolve_path(event.path),
            meta: event.meta,
            timestamp: Utc::now().naive_utc(),
        };

        self.telemetry.dispatch(TelemetryJob::TrackEvent(record))
    }

    /// Up to [`ANALYTICS_READ_LIMIT`] most recent events within the optional inclusive range
    pub async fn get_analytics(
        &self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Vec<AnalyticsEventDto> {
        match AnalyticsRepository::new(self.db)
            .get_recent(start, end, ANALYTICS_READ_LIMIT)
            .await
        {
            Ok(events) => events.into_iter().map(AnalyticsEventDto::from).collect(),
            Err(e) => {
                tracing::error!("Failed to fetch analytics: {}", e);
                Vec::new()
            }
        }
    }

    /// Event counts per type within the optional range
    pub async fn get_analytics_summary(
        &self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> BTreeMap<EventType, u64> {
        let events = self.get_analytics(start, end).await;

        aggregate::summarize(&events)
    }

    /// Most searched (error code, system) pairs among the recent events
    pub async fn get_most_searched_error_codes(
        &self,
        limit: usize,
    ) -> Vec<ErrorCodeSearchCountDto> {
        let events = self.get_analytics(None, None).await;

        aggregate::count_error_code_searches(&events, limit)
    }

    /// Most viewed pages among the recent events
    pub async fn get_most_viewed_pages(&self, limit: usize) -> Vec<PageViewCountDto> {
        let events = self.get_analytics(None, None).await;

        aggregate::count_page_views(&events, limit)
    }
}
