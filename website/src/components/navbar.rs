use leptos::ev;
use leptos::prelude::*;
use mrfast_core::{PageKey, ScrollTracker};

use super::logo::{BoltLogo, Wordmark};

#[component]
pub fn Navbar(
    #[prop(into)] nav_items: Signal<Vec<(PageKey, bool)>>,
    on_navigate: Callback<PageKey>,
    on_logo: Callback<()>,
    scroll_threshold: f64,
) -> impl IntoView {
    let tracker = RwSignal::new(ScrollTracker::new(scroll_threshold));

    // Only write the signal when the style actually flips
    let observe_scroll = move || {
        let offset = window().scroll_y().unwrap_or(0.0);
        let mut next = tracker.get_untracked();
        if next.observe(offset) {
            tracker.set(next);
        }
    };
    observe_scroll();

    let listener = window_event_listener(ev::scroll, move |_| observe_scroll());
    on_cleanup(move || listener.remove());

    let scrolled = move || tracker.with(|t| t.is_scrolled());

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 {}",
                if scrolled() { "bg-black/90 backdrop-blur-md" } else { "bg-transparent" },
            )
        }>
            <div class="max-w-7xl mx-auto px-6 py-5 flex items-center justify-between">
                <button on:click=move |_| on_logo.run(()) class="flex items-center gap-3 group">
                    <div class="relative">
                        <BoltLogo
                            gradient_id="bolt-gradient"
                            class="transition-transform group-hover:scale-110 group-hover:rotate-12 duration-300"
                        />
                        <div class="absolute inset-0 bg-cyan-400/30 blur-xl rounded-full opacity-0 group-hover:opacity-100 transition-opacity"></div>
                    </div>
                    <Wordmark large=true />
                </button>

                <div class="flex items-center gap-1">
                    {move || {
                        nav_items
                            .get()
                            .into_iter()
                            .map(|(page, active)| {
                                let class = if active {
                                    "relative px-5 py-2 font-semibold text-sm tracking-wide transition-all duration-300 rounded-full text-black bg-cyan-400"
                                } else {
                                    "relative px-5 py-2 font-semibold text-sm tracking-wide transition-all duration-300 rounded-full text-white/70 hover:text-white hover:bg-white/10"
                                };
                                view! {
                                    <button on:click=move |_| on_navigate.run(page) class=class>
                                        {page.label()}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </nav>
    }
}
