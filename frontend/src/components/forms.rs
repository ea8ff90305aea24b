use leptos::*;

const INPUT: &str = "block w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg placeholder-fg-muted focus:outline-none focus:ring-2 focus:ring-action-primary-focus";
const LABEL: &str = "block text-sm font-medium text-fg mb-1";

#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="relative flex-1 min-w-[12rem]">
            <input
                type="search"
                class=INPUT
                placeholder=placeholder.clone()
                aria-label=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Select filter where the empty value means "all".
#[component]
pub fn SelectFilter(
    value: RwSignal<String>,
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(optional, into)] all_label: Option<String>,
) -> impl IntoView {
    let all_label = all_label.unwrap_or_else(|| format!("All {}", label));
    view! {
        <select
            class=INPUT
            aria-label=label
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            <option value="">{all_label}</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|opt| view! { <option value=opt.clone()>{opt}</option> })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = field_id(&label);
    view! {
        <div>
            <label for=id.clone() class=LABEL>
                {label}
                {required.then_some(view! { <span class="text-status-error-text">" *"</span> })}
            </label>
            <input
                id=id
                type=input_type.unwrap_or_else(|| "text".into())
                class=INPUT
                placeholder=placeholder.unwrap_or_default()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = field_id(&label);
    view! {
        <div>
            <label for=id.clone() class=LABEL>
                {label}
                {required.then_some(view! { <span class="text-status-error-text">" *"</span> })}
            </label>
            <textarea
                id=id
                class=INPUT
                rows=rows.unwrap_or(4)
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Labelled select. Options are `(value, label)` pairs.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = field_id(&label);
    view! {
        <div>
            <label for=id.clone() class=LABEL>
                {label}
                {required.then_some(view! { <span class="text-status-error-text">" *"</span> })}
            </label>
            <select
                id=id
                class=INPUT
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {placeholder.map(|p| view! { <option value="">{p}</option> })}
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(v, l)| view! { <option value=v>{l}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

fn field_id(label: &str) -> String {
    let slug: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("field-{}", slug.trim_matches('-'))
}
