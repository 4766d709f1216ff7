use leptos::prelude::*;
use mrfast_core::ProjectStatus;

#[component]
pub fn StatusBadge(status: ProjectStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "{} text-black text-xs font-bold px-3 py-1 rounded-full",
            status.badge_class(),
        )>
            {status.label()}
        </span>
    }
}

#[component]
pub fn TagChip(label: &'static str) -> impl IntoView {
    view! {
        <span class="bg-white/10 text-white/70 text-xs font-medium px-3 py-1.5 rounded-full">
            {label}
        </span>
    }
}
