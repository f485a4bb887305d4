use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::toast::use_toasts,
        util::{
            admin::{delete_old_logs, get_logs},
            telemetry::{report_failure, use_page_view},
        },
    },
    model::log::{LogEntryDto, LogLevel},
};

const LEVELS: [LogLevel; 7] = [
    LogLevel::Critical,
    LogLevel::Urgent,
    LogLevel::Shutdown,
    LogLevel::Error,
    LogLevel::Warning,
    LogLevel::Info,
    LogLevel::Debug,
];

const DEFAULT_RETENTION_DAYS: u32 = 30;

fn level_badge(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Critical | LogLevel::Urgent | LogLevel::Shutdown => "badge badge-error",
        LogLevel::Error => "badge badge-warning",
        LogLevel::Warning => "badge badge-accent",
        LogLevel::Info => "badge badge-info",
        LogLevel::Debug => "badge badge-ghost",
    }
}

#[component]
pub fn AdminLogs() -> Element {
    use_page_view();

    let toasts = use_toasts();
    let mut logs = use_signal(Vec::<LogEntryDto>::new);
    let mut level = use_signal(|| None::<LogLevel>);
    let mut retention_days = use_signal(|| DEFAULT_RETENTION_DAYS.to_string());

    let load = move |filter: Option<LogLevel>| {
        spawn(async move {
            match get_logs(filter).await {
                Ok(loaded) => logs.set(loaded),
                Err(e) => toasts.error(report_failure("load logs", &e)),
            }
        });
    };

    use_hook(move || load(None));

    let on_level = move |e: Event<FormData>| {
        let selected = LEVELS
            .into_iter()
            .find(|candidate| candidate.as_str() == e.value());

        level.set(selected);
        load(selected);
    };

    let on_delete_old = move |_| {
        let Ok(days) = retention_days().trim().parse::<u32>() else {
            toasts.error("Retention must be a whole number of days");
            return;
        };

        spawn(async move {
            match delete_old_logs(days).await {
                Ok(result) if result.success => {
                    toasts.success(format!("Deleted logs older than {} days", days));
                    load(level());
                }
                Ok(_) => toasts.error("Failed to delete old logs"),
                Err(e) => toasts.error(report_failure("delete old logs", &e)),
            }
        });
    };

    let selected_level = level().map(|l| l.as_str()).unwrap_or_default();

    rsx!(
        Title { "Logs | Fixdesk" }
        div { class: "flex flex-col gap-4",
            div { class: "flex flex-wrap justify-between items-end gap-2",
                select {
                    class: "select select-bordered",
                    value: "{selected_level}",
                    onchange: on_level,
                    option { value: "", "All levels" }
                    {LEVELS.iter().map(|l| rsx! {
                        option { key: "{l}", value: "{l}", "{l}" }
                    })}
                }
                div { class: "flex gap-2 items-center",
                    span { "Delete logs older than" }
                    input {
                        class: "input input-bordered w-20",
                        r#type: "number",
                        min: "0",
                        value: "{retention_days}",
                        oninput: move |e| retention_days.set(e.value()),
                    }
                    span { "days" }
                    button { class: "btn btn-error btn-outline", onclick: on_delete_old, "Delete" }
                }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-sm",
                    thead {
                        tr {
                            th { "Time" }
                            th { "Level" }
                            th { "Message" }
                            th { "Page" }
                            th { "User" }
                        }
                    }
                    tbody {
                        {logs.read().iter().map(|entry| {
                            let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
                            let page = entry.page_path.clone().unwrap_or_default();
                            let user = entry.user_id.map(|id| id.to_string()).unwrap_or_default();
                            let stack_trace = entry.stack_trace.as_ref().map(|trace| trace.to_string());

                            rsx! {
                                tr { key: "{entry.id}",
                                    td { class: "whitespace-nowrap", "{timestamp}" }
                                    td { span { class: level_badge(entry.level), "{entry.level}" } }
                                    td {
                                        p { "{entry.message}" }
                                        if let Some(stack_trace) = stack_trace {
                                            pre { class: "text-xs opacity-70 whitespace-pre-wrap", "{stack_trace}" }
                                        }
                                    }
                                    td { "{page}" }
                                    td { class: "text-xs", "{user}" }
                                }
                            }
                        })}
                    }
                }
            }
        }
    )
}
