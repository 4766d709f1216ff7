use leptos::prelude::*;
use mrfast_core::{
    certifications, experience, skills, timeline_is_left, ExperienceEntry, CERTIFICATION_ISSUER,
};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black text-white pt-28 pb-20 px-6">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-16">
                    <span class="text-cyan-400 font-bold tracking-widest text-sm mb-4 block">"ABOUT"</span>
                    <h1 class="text-5xl md:text-7xl font-black mb-4">"Jason Refling"</h1>
                    <p class="text-xl text-white/50">
                        "15+ years of marketing experience, now focused on helping small businesses grow."
                    </p>
                </div>

                <Bio />

                // Experience Timeline
                <div class="mb-20">
                    <h2 class="text-2xl font-bold mb-10 text-center">
                        <span class="text-cyan-400">"Career"</span>
                        " Timeline"
                    </h2>

                    <div class="relative">
                        <div class="absolute left-0 md:left-1/2 top-0 bottom-0 w-px bg-gradient-to-b from-cyan-500 via-blue-500 to-transparent"></div>
                        {experience()
                            .into_iter()
                            .enumerate()
                            .map(|(idx, entry)| view! { <TimelineRow entry=entry left=timeline_is_left(idx) /> })
                            .collect_view()}
                    </div>
                </div>

                // Certifications
                <div class="mb-20">
                    <h2 class="text-2xl font-bold mb-4 text-center">
                        <span class="text-cyan-400">"AI"</span>
                        " Certifications"
                    </h2>
                    <p class="text-center text-white/50 mb-10">{CERTIFICATION_ISSUER}</p>

                    <div class="grid md:grid-cols-2 gap-4">
                        {certifications()
                            .into_iter()
                            .map(|cert| {
                                view! {
                                    <div class="flex items-center gap-4 bg-white/5 border border-white/10 rounded-2xl p-5 hover:bg-white/10 transition-all">
                                        <div class="w-12 h-12 bg-gradient-to-br from-cyan-500 to-blue-600 rounded-xl flex items-center justify-center text-white font-bold">
                                            "\u{2713}"
                                        </div>
                                        <span class="text-white/80 font-medium">{cert}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Skills
                <div>
                    <h2 class="text-2xl font-bold mb-10 text-center">
                        <span class="text-cyan-400">"Skills"</span>
                        " & Expertise"
                    </h2>
                    <div class="flex flex-wrap justify-center gap-3">
                        {skills()
                            .into_iter()
                            .map(|skill| {
                                view! {
                                    <span class="bg-gradient-to-r from-cyan-500/20 to-blue-500/20 border border-white/10 text-white px-5 py-2.5 rounded-full text-sm font-medium hover:border-cyan-400/50 transition-all cursor-default">
                                        {skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Bio() -> impl IntoView {
    view! {
        <div class="mb-20">
            <div class="bg-gradient-to-br from-white/5 to-white/0 border border-white/10 rounded-3xl p-8 md:p-12">
                <div class="space-y-6 text-lg text-white/70 leading-relaxed">
                    <p>
                        "My career started in film and television\u{2014}working as an Assistant Director on "
                        <span class="text-cyan-400">"\"Ready or Not,\""</span>
                        " a weekly Disney Channel series produced in Toronto. That's where I learned how to \
                         coordinate multiple departments, keep complex productions on schedule, and communicate \
                         effectively under pressure."
                    </p>
                    <p>
                        "From there, I transitioned to Disney's corporate side, spending years in product \
                         development and promotional campaigns. I learned how the world's most iconic brand \
                         thinks about storytelling and customer experience. Eventually, I worked with major \
                         entertainment studios and Fortune 500 companies, managing high-value client relationships \
                         and creative campaigns."
                    </p>
                    <p>
                        "Then came a decade at Ideal Image, where I served as Operations Manager for 4 franchise \
                         locations. That experience taught me the reality of running a small business from behind \
                         the scenes\u{2014}wearing many hats to keep things running, from marketing and vendor management \
                         to day-to-day operations. It's where I truly understood what local business owners face."
                    </p>
                    <p>
                        "After all those years, I realized something: small businesses deserve access to the \
                         same strategic thinking and modern tools that big companies use\u{2014}without the big \
                         company price tag. That's why I launched "
                        <span class="text-cyan-400">"Mr Fast Digital Marketing."</span>
                    </p>
                    <p>
                        "When you work with me, you get me\u{2014}someone who actually picks up the phone and gets \
                         things done. No account managers. No runaround. No overpromising or \"set it and forget it\" \
                         contracts while I collect a check. I stay engaged, I do the work, and I keep it honest."
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TimelineRow(entry: ExperienceEntry, left: bool) -> impl IntoView {
    let (row_dir, text_side) = if left {
        ("md:flex-row", "md:pr-16 md:text-right")
    } else {
        ("md:flex-row-reverse", "md:pl-16")
    };

    view! {
        <div class=format!("relative flex items-start gap-8 mb-12 {row_dir}")>
            <div class="absolute left-0 md:left-1/2 w-3 h-3 bg-cyan-400 rounded-full -translate-x-1 md:-translate-x-1.5 mt-2 ring-4 ring-black"></div>

            <div class=format!("flex-1 pl-8 md:pl-0 {text_side}")>
                <div class="text-cyan-400 font-mono text-sm mb-1">{entry.years}</div>
                <div class="text-xl font-bold text-white">{entry.role}</div>
                <div class="text-white/60 font-medium mb-2">{entry.company}</div>
                <div class="text-white/40 text-sm">{entry.desc}</div>
            </div>

            <div class="flex-1 hidden md:block"></div>
        </div>
    }
}
