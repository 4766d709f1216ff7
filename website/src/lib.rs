pub mod components;
pub mod delivery;
pub mod logging;
pub mod pages;

use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use mrfast_app::{load_settings, process_message, AppState, Message, SiteSettings, UpdateAction};
use mrfast_core::{ContactFormState, Error, PageKey};
use pages::about::About;
use pages::contact::Contact;
use pages::home::Home;
use pages::projects::Projects;

const SITE_TOML: &str = include_str!("../site.toml");

/// Settings embedded at build time, or defaults plus the reason they were rejected
pub fn load_site_settings() -> (SiteSettings, Option<Error>) {
    load_settings(SITE_TOML)
}

#[component]
pub fn App(settings: SiteSettings) -> impl IntoView {
    provide_meta_context();

    let scroll_threshold = settings.behavior.scroll_threshold_px;
    let business = settings.business.clone();
    let site_name = business.name.clone();
    let state = RwSignal::new(AppState::new(settings));

    let dispatch = Callback::new(move |msg: Message| {
        let mut actions = Vec::new();
        state.update(|s| process_message(s, msg, |a| actions.push(a)));
        actions.into_iter().for_each(run_action);
    });

    // Runs once, after the first render
    Effect::new(move |_| dispatch.run(Message::Mounted));

    let current_page = Memo::new(move |_| state.with(|s| s.current_page()));
    let nav_items = Memo::new(move |_| state.with(|s| s.nav_items().collect::<Vec<_>>()));
    let contact_form = Signal::derive(move || {
        state.with(|s| s.contact_form().cloned().unwrap_or_else(ContactFormState::new))
    });
    let on_navigate = Callback::new(move |page: PageKey| dispatch.run(Message::Navigate(page)));
    let on_logo = Callback::new(move |_: ()| dispatch.run(Message::LogoClicked));

    let footer_business = business.clone();

    view! {
        <Title text=move || page_title(&site_name, current_page.get()) />
        <div class="antialiased">
            <Navbar
                nav_items=nav_items
                on_navigate=on_navigate
                on_logo=on_logo
                scroll_threshold=scroll_threshold
            />
            {move || match current_page.get() {
                PageKey::Home => view! { <Home on_navigate=on_navigate /> }.into_any(),
                PageKey::Projects => view! { <Projects /> }.into_any(),
                PageKey::About => view! { <About /> }.into_any(),
                PageKey::Contact => {
                    view! { <Contact form=contact_form on_message=dispatch business=business.clone() /> }
                        .into_any()
                }
            }}
            <Footer on_navigate=on_navigate business=footer_business />
        </div>
    }
}

fn page_title(site_name: &str, page: PageKey) -> String {
    match page {
        PageKey::Home => site_name.to_string(),
        other => format!("{} | {}", other.label(), site_name),
    }
}

fn run_action(action: UpdateAction) {
    match action {
        UpdateAction::ScrollToTop { smooth } => scroll_to_top(smooth),
        UpdateAction::DeliverContact {
            endpoint,
            submission,
        } => delivery::deliver(endpoint, submission),
    }
}

fn scroll_to_top(smooth: bool) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(if smooth {
        web_sys::ScrollBehavior::Smooth
    } else {
        web_sys::ScrollBehavior::Instant
    });
    window().scroll_to_with_scroll_to_options(&options);
}
