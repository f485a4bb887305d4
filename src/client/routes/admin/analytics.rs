use std::collections::BTreeMap;

use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::toast::use_toasts,
        util::{
            admin::{
                get_analytics, get_analytics_summary, get_most_searched_error_codes,
                get_most_viewed_pages,
            },
            telemetry::{report_failure, use_page_view},
        },
    },
    model::analytics::{AnalyticsEventDto, ErrorCodeSearchCountDto, PageViewCountDto},
};

/// Recent events listed below the reports
const RECENT_EVENTS_SHOWN: usize = 50;

/// Turns `YYYY-MM-DD` date inputs into an inclusive UTC timestamp range
fn date_range(start: &str, end: &str) -> (Option<String>, Option<String>) {
    let start = start.trim();
    let end = end.trim();

    (
        (!start.is_empty()).then(|| format!("{}T00:00:00", start)),
        (!end.is_empty()).then(|| format!("{}T23:59:59", end)),
    )
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Report {
    summary: BTreeMap<String, u64>,
    top_searches: Vec<ErrorCodeSearchCountDto>,
    top_pages: Vec<PageViewCountDto>,
    recent: Vec<AnalyticsEventDto>,
}

#[component]
pub fn AdminAnalytics() -> Element {
    use_page_view();

    let toasts = use_toasts();
    let mut report = use_signal(Report::default);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);

    let load = move || {
        let (start, end) = date_range(&start_date(), &end_date());

        spawn(async move {
            let (start, end) = (start.as_deref(), end.as_deref());

            let loaded = async {
                Ok::<_, crate::client::util::api::ApiError>(Report {
                    summary: get_analytics_summary(start, end).await?,
                    top_searches: get_most_searched_error_codes().await?,
                    top_pages: get_most_viewed_pages().await?,
                    recent: get_analytics(start, end).await?,
                })
            }
            .await;

            match loaded {
                Ok(loaded) => report.set(loaded),
                Err(e) => toasts.error(report_failure("load analytics", &e)),
            }
        });
    };

    use_hook(move || load());

    let current = report.read().clone();
    let total: u64 = current.summary.values().sum();

    rsx!(
        Title { "Analytics | Fixdesk" }
        div { class: "flex flex-col gap-6",
            div { class: "flex flex-wrap gap-2 items-end",
                label { class: "flex flex-col text-sm",
                    "From"
                    input {
                        class: "input input-bordered",
                        r#type: "date",
                        value: "{start_date}",
                        oninput: move |e| start_date.set(e.value()),
                    }
                }
                label { class: "flex flex-col text-sm",
                    "To"
                    input {
                        class: "input input-bordered",
                        r#type: "date",
                        value: "{end_date}",
                        oninput: move |e| end_date.set(e.value()),
                    }
                }
                button { class: "btn btn-primary", onclick: move |_| load(), "Apply" }
            }
            div { class: "stats shadow",
                div { class: "stat",
                    div { class: "stat-title", "Events" }
                    div { class: "stat-value", "{total}" }
                }
                {current.summary.iter().map(|(event_type, count)| rsx! {
                    div { key: "{event_type}", class: "stat",
                        div { class: "stat-title", "{event_type}" }
                        div { class: "stat-value text-2xl", "{count}" }
                    }
                })}
            }
            div { class: "grid md:grid-cols-2 gap-4",
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "Most searched error codes" }
                        table { class: "table table-sm",
                            thead { tr { th { "Code" } th { "System" } th { "Searches" } } }
                            tbody {
                                {current.top_searches.iter().map(|entry| rsx! {
                                    tr { key: "{entry.code}:{entry.system}",
                                        td { "{entry.code}" }
                                        td { "{entry.system}" }
                                        td { "{entry.count}" }
                                    }
                                })}
                            }
                        }
                    }
                }
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "Most viewed pages" }
                        table { class: "table table-sm",
                            thead { tr { th { "Page" } th { "Views" } } }
                            tbody {
                                {current.top_pages.iter().map(|entry| rsx! {
                                    tr { key: "{entry.path}",
                                        td { "{entry.path}" }
                                        td { "{entry.count}" }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "Recent events" }
                    table { class: "table table-sm",
                        thead { tr { th { "Time" } th { "Type" } th { "Path" } th { "Details" } } }
                        tbody {
                            {current.recent.iter().take(RECENT_EVENTS_SHOWN).map(|event| {
                                let timestamp = event.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
                                let path = event.path.clone().unwrap_or_default();
                                let meta = event.meta.as_ref().map(|meta| meta.to_string()).unwrap_or_default();

                                rsx! {
                                    tr { key: "{event.id}",
                                        td { class: "whitespace-nowrap", "{timestamp}" }
                                        td { "{event.event_type}" }
                                        td { "{path}" }
                                        td { class: "text-xs", "{meta}" }
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
    )
}
