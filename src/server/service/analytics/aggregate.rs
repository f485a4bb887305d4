//! In-memory aggregation over fetched analytics events.
//!
//! Counts preserve first-seen order, so equal counts keep the order the events were
//! fetched in (newest first).

use std::{collections::BTreeMap, collections::HashMap, hash::Hash};

use serde_json::Value;

use crate::model::analytics::{
    AnalyticsEventDto, ErrorCodeSearchCountDto, EventType, PageViewCountDto,
};

/// Shown for a search missing its error code or system name
pub const UNKNOWN: &str = "unknown";

/// Path counted for a page view that carries none
pub const ROOT_PATH: &str = "/";

/// Number of events per type
pub fn summarize(events: &[AnalyticsEventDto]) -> BTreeMap<EventType, u64> {
    let mut summary = BTreeMap::new();

    for event in events {
        *summary.entry(event.event_type).or_insert(0) += 1;
    }

    summary
}

/// Error code searches grouped by (error code, system name), most searched first
pub fn count_error_code_searches(
    events: &[AnalyticsEventDto],
    limit: usize,
) -> Vec<ErrorCodeSearchCountDto> {
    let keys = events
        .iter()
        .filter(|event| event.event_type == EventType::ErrorCodeSearch)
        .map(|event| {
            let meta = event.meta.as_ref();
            (meta_text(meta, "errorCode"), meta_text(meta, "systemName"))
        });

    top(count_in_order(keys), limit)
        .into_iter()
        .map(|((code, system), count)| ErrorCodeSearchCountDto {
            code: display_or_unknown(code),
            system: display_or_unknown(system),
            count,
        })
        .collect()
}

/// Page views grouped by path, most viewed first
pub fn count_page_views(events: &[AnalyticsEventDto], limit: usize) -> Vec<PageViewCountDto> {
    let keys = events
        .iter()
        .filter(|event| event.event_type == EventType::PageView)
        .map(|event| match event.path.as_deref() {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => ROOT_PATH.to_string(),
        });

    top(count_in_order(keys), limit)
        .into_iter()
        .map(|(path, count)| PageViewCountDto { path, count })
        .collect()
}

/// Meta value as text; strings as-is, other non-null values in their JSON form
fn meta_text(meta: Option<&Value>, key: &str) -> Option<String> {
    match meta?.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn display_or_unknown(value: Option<String>) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn count_in_order<K: Eq + Hash + Clone>(keys: impl IntoIterator<Item = K>) -> Vec<(K, u64)> {
    let mut counts: Vec<(K, u64)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for key in keys {
        match index.get(&key) {
            Some(&position) => counts[position].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts
}

/// Highest counts first; the sort is stable so ties keep first-seen order
fn top<K>(mut counts: Vec<(K, u64)>, limit: usize) -> Vec<(K, u64)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    counts
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use super::{count_error_code_searches, count_page_views, summarize};
    use crate::model::analytics::{AnalyticsEventDto, EventType};

    fn event(event_type: EventType, path: Option<&str>, meta: Option<Value>) -> AnalyticsEventDto {
        AnalyticsEventDto {
            id: Uuid::new_v4(),
            event_type,
            user_id: None,
            device_id: Uuid::new_v4(),
            path: path.map(str::to_string),
            meta,
            timestamp: Utc::now().naive_utc(),
        }
    }

    fn search(code: &str, system: &str) -> AnalyticsEventDto {
        event(
            EventType::ErrorCodeSearch,
            None,
            Some(json!({ "errorCode": code, "systemName": system })),
        )
    }

    fn page_view(path: Option<&str>) -> AnalyticsEventDto {
        event(EventType::PageView, path, None)
    }

    mod summarize {
        use super::*;

        /// Expect one count per present event type
        #[test]
        fn counts_per_type() {
            let events = vec![
                page_view(Some("/")),
                search("E001", "Victorum"),
                page_view(Some("/admin")),
                page_view(None),
            ];

            let summary = summarize(&events);

            assert_eq!(summary.len(), 2);
            assert_eq!(summary[&EventType::PageView], 3);
            assert_eq!(summary[&EventType::ErrorCodeSearch], 1);
        }

        #[test]
        fn empty_input() {
            assert!(summarize(&[]).is_empty());
        }
    }

    mod count_error_code_searches {
        use super::*;

        /// Expect searches deduplicated by code and system, most searched first
        #[test]
        fn groups_and_sorts() {
            let events = vec![
                search("E001", "Victorum"),
                search("E002", "Victorum"),
                search("E002", "Victorum"),
                search("E001", "Daikin"),
                page_view(Some("/")),
            ];

            let counts = count_error_code_searches(&events, 10);

            assert_eq!(counts.len(), 3);
            assert_eq!((counts[0].code.as_str(), counts[0].count), ("E002", 2));
            assert_eq!(counts[1].system, "Victorum");
            assert_eq!(counts[2].system, "Daikin");
        }

        /// Expect equal counts to keep first-seen order
        #[test]
        fn ties_keep_first_seen_order() {
            let events = vec![
                search("E003", "Victorum"),
                search("E001", "Victorum"),
                search("E002", "Victorum"),
            ];

            let codes: Vec<_> = count_error_code_searches(&events, 10)
                .into_iter()
                .map(|count| count.code)
                .collect();

            assert_eq!(codes, vec!["E003", "E001", "E002"]);
        }

        /// Expect missing metadata to show as unknown
        #[test]
        fn missing_meta_is_unknown() {
            let events = vec![
                event(EventType::ErrorCodeSearch, None, None),
                event(
                    EventType::ErrorCodeSearch,
                    None,
                    Some(json!({ "errorCode": "E009" })),
                ),
            ];

            let counts = count_error_code_searches(&events, 10);

            assert_eq!(counts.len(), 2);
            assert_eq!(counts[0].code, "unknown");
            assert_eq!(counts[0].system, "unknown");
            assert_eq!(counts[1].code, "E009");
            assert_eq!(counts[1].system, "unknown");
        }

        #[test]
        fn truncates_to_limit() {
            let events: Vec<_> = (0..5).map(|i| search(&format!("E00{i}"), "Victorum")).collect();

            assert_eq!(count_error_code_searches(&events, 2).len(), 2);
        }
    }

    mod count_page_views {
        use super::*;

        /// Expect a missing path to count as the root path
        #[test]
        fn missing_path_is_root() {
            let events = vec![page_view(None), page_view(Some("/")), page_view(Some("/admin"))];

            let counts = count_page_views(&events, 10);

            assert_eq!(counts.len(), 2);
            assert_eq!((counts[0].path.as_str(), counts[0].count), ("/", 2));
            assert_eq!((counts[1].path.as_str(), counts[1].count), ("/admin", 1));
        }

        /// Expect only page view events to be counted
        #[test]
        fn ignores_other_events() {
            let events = vec![
                search("E001", "Victorum"),
                event(EventType::ButtonClick, Some("/"), None),
            ];

            assert!(count_page_views(&events, 10).is_empty());
        }
    }
}
