use leptos::prelude::*;

/// Page title with icon and optional subtitle
#[component]
pub fn PageHeader(
    icon: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="page-header mb-4">
            <h2>{icon} " " {title}</h2>
            {subtitle.map(|s| view! { <p class="text-muted">{s}</p> })}
        </div>
    }
}
