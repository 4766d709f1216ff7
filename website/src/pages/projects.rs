use leptos::prelude::*;
use mrfast_core::{projects, ProjectEntry};

use crate::components::badge::{StatusBadge, TagChip};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black text-white pt-28 pb-20 px-6">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-20">
                    <span class="text-cyan-400 font-bold tracking-widest text-sm mb-4 block">"PORTFOLIO"</span>
                    <h1 class="text-5xl md:text-7xl font-black mb-4">"Projects"</h1>
                    <p class="text-xl text-white/50 max-w-xl mx-auto">
                        "Products and platforms I'm building\u{2014}from live applications to works in progress."
                    </p>
                </div>

                <div class="space-y-6">
                    {projects().into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    let link = project.url.zip(project.external_href()).map(|(host, href)| {
        view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="text-cyan-400 text-sm font-medium hover:underline mb-3 inline-block"
            >
                {format!("{host} \u{2197}")}
            </a>
        }
    });

    view! {
        <div class="group relative bg-white/5 backdrop-blur-sm border border-white/10 rounded-3xl p-8 hover:bg-white/10 hover:border-white/20 transition-all duration-500">
            <div class="flex flex-col md:flex-row md:items-center gap-6">
                <div class="text-6xl transform group-hover:scale-110 transition-transform duration-300">
                    {project.emoji}
                </div>

                <div class="flex-1">
                    <div class="flex items-center gap-3 mb-2">
                        <h3 class="text-2xl font-bold">{project.name}</h3>
                        <StatusBadge status=project.status />
                    </div>

                    {link}

                    <p class="text-white/60 leading-relaxed mb-4">{project.description}</p>

                    <div class="flex flex-wrap gap-2">
                        {project.tags.iter().map(|tag| view! { <TagChip label=*tag /> }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
