use leptos::prelude::*;
use mrfast_app::config::BusinessSettings;
use mrfast_core::PageKey;

use super::logo::{BoltLogo, Wordmark};

#[component]
pub fn Footer(on_navigate: Callback<PageKey>, business: BusinessSettings) -> impl IntoView {
    view! {
        <footer class="bg-black text-white py-16 px-6 border-t border-white/10">
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center gap-8">
                    <div class="flex items-center gap-3">
                        <BoltLogo gradient_id="bolt-footer" size=36 />
                        <Wordmark />
                    </div>

                    <div class="flex gap-8 text-sm text-white/50">
                        {PageKey::ALL
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <button
                                        on:click=move |_| on_navigate.run(page)
                                        class="hover:text-cyan-400 transition-colors"
                                    >
                                        {page.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="text-sm text-white/30">{business.copyright}</div>
                </div>

                <div class="text-center mt-12 pt-8 border-t border-white/5">
                    <p class="text-white/30 text-sm">"Built for Local Business. Run by a Fast Thinker."</p>
                </div>
            </div>
        </footer>
    }
}
