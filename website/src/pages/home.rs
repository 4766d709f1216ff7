use leptos::ev;
use leptos::prelude::*;
use mrfast_core::{services, value_props, PageKey};

#[component]
fn AnimatedBackground() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden">
            <div class="absolute top-1/4 -left-32 w-96 h-96 bg-cyan-500/20 rounded-full blur-3xl animate-pulse-slow"></div>
            <div class="absolute bottom-1/4 -right-32 w-96 h-96 bg-blue-600/20 rounded-full blur-3xl animate-pulse-slow-delay"></div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[800px] h-[800px] bg-gradient-radial from-cyan-500/5 to-transparent rounded-full"></div>
        </div>
    }
}

#[component]
pub fn Home(on_navigate: Callback<PageKey>) -> impl IntoView {
    let go = move |page: PageKey| move |_: ev::MouseEvent| on_navigate.run(page);

    view! {
        <div class="min-h-screen bg-black text-white">
            // Hero Section
            <section class="relative min-h-screen flex items-center px-6 overflow-hidden">
                <AnimatedBackground />

                <div class="max-w-7xl mx-auto relative z-10">
                    <div class="max-w-4xl">
                        <div class="inline-flex items-center gap-3 bg-white/5 backdrop-blur-sm border border-white/10 px-5 py-2.5 rounded-full mb-8 animate-fade-in">
                            <span class="relative flex h-2 w-2">
                                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-cyan-400 opacity-75"></span>
                                <span class="relative inline-flex rounded-full h-2 w-2 bg-cyan-400"></span>
                            </span>
                            <span class="text-sm font-medium text-white/80">
                                "Northeast Florida's Local Marketing Partner"
                            </span>
                        </div>

                        <h1 class="text-6xl md:text-8xl font-black leading-[0.9] mb-8 animate-slide-up">
                            <span class="block text-white">"MARKETING"</span>
                            <span class="block text-white">"THAT MOVES"</span>
                            <span class="block bg-gradient-to-r from-cyan-400 via-blue-400 to-cyan-400 bg-clip-text text-transparent animate-gradient">
                                "FAST."
                            </span>
                        </h1>

                        <p class="text-xl md:text-2xl text-white/60 mb-10 max-w-2xl leading-relaxed animate-slide-up-delay font-light">
                            "No account managers. No overpromising. No \"set it and forget it\" contracts. "
                            "Just honest work from someone who actually delivers."
                        </p>

                        <div class="flex flex-wrap gap-4 animate-slide-up-delay-2">
                            <button
                                on:click=go(PageKey::Contact)
                                class="group relative bg-gradient-to-r from-cyan-500 to-blue-600 text-white px-8 py-4 rounded-full font-bold text-lg overflow-hidden transition-all hover:shadow-2xl hover:shadow-cyan-500/25 hover:-translate-y-1"
                            >
                                <span class="relative z-10">"Let's Talk"</span>
                                <div class="absolute inset-0 bg-gradient-to-r from-cyan-400 to-blue-500 opacity-0 group-hover:opacity-100 transition-opacity"></div>
                            </button>
                            <button
                                on:click=go(PageKey::Projects)
                                class="group px-8 py-4 rounded-full font-bold text-lg border-2 border-white/20 hover:border-cyan-400 hover:text-cyan-400 transition-all hover:-translate-y-1"
                            >
                                "See My Work"
                                <span class="inline-block ml-2 transition-transform group-hover:translate-x-1">
                                    "\u{2192}"
                                </span>
                            </button>
                        </div>
                    </div>
                </div>

                // Scroll indicator
                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                    <div class="w-6 h-10 border-2 border-white/30 rounded-full flex justify-center pt-2">
                        <div class="w-1 h-2 bg-cyan-400 rounded-full animate-scroll-down"></div>
                    </div>
                </div>
            </section>

            // Services Section
            <section class="py-32 px-6 bg-gradient-to-b from-black via-gray-900 to-black relative">
                <div class="max-w-7xl mx-auto">
                    <div class="text-center mb-20">
                        <span class="text-cyan-400 font-bold tracking-widest text-sm mb-4 block">"WHAT I DO"</span>
                        <h2 class="text-4xl md:text-6xl font-black">
                            "Full-Service Digital"
                            <span class="block text-white/40">"Marketing"</span>
                        </h2>
                    </div>

                    <div class="grid md:grid-cols-2 gap-6">
                        {services()
                            .into_iter()
                            .map(|service| {
                                view! {
                                    <div class=format!(
                                        "group relative p-8 rounded-3xl bg-gradient-to-br {} border border-white/5 hover:border-white/20 transition-all duration-500 hover:-translate-y-2 overflow-hidden",
                                        service.gradient,
                                    )>
                                        <div class="absolute inset-0 bg-gradient-to-br from-white/5 to-transparent opacity-0 group-hover:opacity-100 transition-opacity"></div>
                                        <div class="relative z-10">
                                            <div class="text-5xl mb-6 transform group-hover:scale-110 transition-transform duration-300">
                                                {service.icon}
                                            </div>
                                            <h3 class="text-2xl font-bold text-white mb-4">{service.title}</h3>
                                            <p class="text-white/60 leading-relaxed text-lg">{service.desc}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Value Props Section
            <section class="py-32 px-6 relative overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-r from-cyan-500/10 via-transparent to-blue-500/10"></div>

                <div class="max-w-7xl mx-auto relative z-10">
                    <div class="text-center mb-20">
                        <span class="text-cyan-400 font-bold tracking-widest text-sm mb-4 block">"WHY WORK WITH ME"</span>
                        <h2 class="text-4xl md:text-6xl font-black mb-6">"Built for Local Business."</h2>
                        <p class="text-2xl text-white/40 font-light">"Run by a Fast Thinker."</p>
                    </div>

                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {value_props()
                            .into_iter()
                            .map(|prop| {
                                view! {
                                    <div class="group text-center p-8">
                                        <div class="text-6xl mb-6 transform group-hover:scale-125 transition-transform duration-300">
                                            {prop.icon}
                                        </div>
                                        <div class="text-cyan-400/50 font-mono text-sm mb-2">{prop.number}</div>
                                        <h3 class="text-xl font-bold mb-3">{prop.title}</h3>
                                        <p class="text-white/50 leading-relaxed">{prop.desc}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // CTA Section
            <section class="py-32 px-6 relative">
                <div class="max-w-4xl mx-auto">
                    <div class="relative bg-gradient-to-br from-cyan-500 to-blue-600 rounded-[40px] p-12 md:p-16 text-center overflow-hidden">
                        <div class="absolute top-0 right-0 w-64 h-64 bg-white/10 rounded-full blur-3xl"></div>
                        <div class="absolute bottom-0 left-0 w-48 h-48 bg-black/20 rounded-full blur-2xl"></div>

                        <div class="relative z-10">
                            <h2 class="text-4xl md:text-5xl font-black text-white mb-6">"Ready to Move Fast?"</h2>
                            <p class="text-xl text-white/80 mb-10 max-w-xl mx-auto">
                                "No long-term contracts. No inflated promises. Just a real conversation about what I can do for your business."
                            </p>
                            <button
                                on:click=go(PageKey::Contact)
                                class="bg-black text-white px-10 py-5 rounded-full font-bold text-lg hover:bg-gray-900 transition-all hover:shadow-2xl hover:-translate-y-1"
                            >
                                "Get In Touch \u{2192}"
                            </button>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
