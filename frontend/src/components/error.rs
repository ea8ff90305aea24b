use crate::api::{ApiError, ErrorKind};
use leptos::*;

fn detail_lines(error: &ApiError) -> Vec<String> {
    if error.kind() != ErrorKind::Validation {
        return Vec::new();
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Error shown next to a form, such as a rejected login.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-semibold text-sm">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                <ul class="list-disc list-inside text-sm">
                    {move || {
                        error
                            .get()
                            .map(|e| detail_lines(&e))
                            .unwrap_or_default()
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view()
                    }}
                </ul>
            </div>
        </Show>
    }
}
