use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub fn badge_classes(&self) -> &'static str {
        match self {
            Tone::Neutral => "bg-surface-muted text-fg-muted",
            Tone::Info => "bg-status-info-bg text-status-info-text",
            Tone::Success => "bg-status-success-bg text-status-success-text",
            Tone::Warning => "bg-status-warning-bg text-status-warning-text",
            Tone::Danger => "bg-status-error-bg text-status-error-text",
        }
    }
}

/// Badge colour for the status words used across leave, payroll, recruitment and tasks.
pub fn tone_for_status(status: &str) -> Tone {
    match status.trim().to_ascii_lowercase().as_str() {
        "approved" | "processed" | "accepted" | "completed" | "present" | "active" => Tone::Success,
        "pending" | "in review" | "in progress" | "on leave" | "late" => Tone::Warning,
        "rejected" | "absent" | "inactive" | "closed" => Tone::Danger,
        "new" | "interview" => Tone::Info,
        _ => Tone::Neutral,
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] label: String) -> impl IntoView {
    let tone = tone_for_status(&label);
    view! {
        <span class=format!("inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}", tone.badge_classes())>
            {label}
        </span>
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-fg-muted truncate">{title}</dt>
                <dd class="mt-1 text-2xl font-semibold text-fg">{move || value.get()}</dd>
                {hint.map(|h| view! { <p class="mt-1 text-xs text-fg-muted">{h}</p> })}
            </div>
        </div>
    }
}

/// Shortcut tiles to other screens, as `(path, label)` pairs.
#[component]
pub fn QuickLinks(
    #[prop(into)] title: String,
    links: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-3">{title}</h2>
            <div class="space-y-2">
                {links
                    .into_iter()
                    .map(|(path, label)| {
                        view! {
                            <a
                                href=path
                                class="flex items-center p-2 rounded-md bg-action-primary-bg/10 text-fg hover:bg-action-primary-bg/20 transition-colors"
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_and_badge_render() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <StatCard title="Pending Requests" value=Signal::derive(|| "3".to_string()) hint="awaiting review" />
                    <StatusBadge label="Processed" />
                </div>
            }
        });
        assert!(html.contains("Pending Requests"));
        assert!(html.contains("awaiting review"));
        assert!(html.contains("bg-status-success-bg"));
    }

    #[test]
    fn quick_links_render_anchors() {
        let html = render_to_string(move || {
            view! { <QuickLinks title="Quick Actions" links=vec![("/dashboard/attendance", "Mark Attendance")] /> }
        });
        assert!(html.contains("href=\"/dashboard/attendance\""));
        assert!(html.contains("Mark Attendance"));
    }
}
