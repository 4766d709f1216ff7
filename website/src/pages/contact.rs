use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use mrfast_app::config::BusinessSettings;
use mrfast_app::Message;
use mrfast_core::{ContactField, ContactFormState};

use crate::components::icons::{MapPin, Mail, Phone};

const INPUT_CLASS: &str = "w-full px-5 py-4 rounded-xl bg-white/5 border border-white/10 text-white placeholder-white/30 focus:border-cyan-400 focus:ring-2 focus:ring-cyan-400/20 outline-none transition-all";

#[component]
pub fn Contact(
    #[prop(into)] form: Signal<ContactFormState>,
    on_message: Callback<Message>,
    business: BusinessSettings,
) -> impl IntoView {
    let submitted = Memo::new(move |_| form.with(|f| f.is_submitted()));

    view! {
        <div class="min-h-screen bg-black text-white pt-28 pb-20 px-6">
            <div class="max-w-5xl mx-auto">
                <div class="text-center mb-16">
                    <span class="text-cyan-400 font-bold tracking-widest text-sm mb-4 block">"CONTACT"</span>
                    <h1 class="text-5xl md:text-7xl font-black mb-4">"Let's Talk"</h1>
                    <p class="text-xl text-white/50 max-w-xl mx-auto">
                        "Have a project in mind? Questions about how I can help? I'd love to hear from you."
                    </p>
                </div>

                <div class="grid md:grid-cols-5 gap-12">
                    <div class="md:col-span-3 bg-white/5 backdrop-blur-sm border border-white/10 rounded-3xl p-8">
                        {move || {
                            if submitted.get() {
                                view! { <Confirmation /> }.into_any()
                            } else {
                                view! { <ContactForm form=form on_message=on_message /> }.into_any()
                            }
                        }}
                    </div>

                    <ContactInfo business=business />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactForm(form: Signal<ContactFormState>, on_message: Callback<Message>) -> impl IntoView {
    // Browser `required` checks run before this fires
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_message.run(Message::ContactSubmitted);
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            {ContactField::ALL
                .into_iter()
                .map(|field| view! { <FieldInput field=field form=form on_message=on_message /> })
                .collect_view()}
            <button
                type="submit"
                class="w-full bg-gradient-to-r from-cyan-500 to-blue-600 text-white py-4 rounded-xl font-bold text-lg hover:shadow-2xl hover:shadow-cyan-500/25 transition-all hover:-translate-y-0.5"
            >
                "Send Message \u{2192}"
            </button>
        </form>
    }
}

#[component]
fn FieldInput(
    field: ContactField,
    form: Signal<ContactFormState>,
    on_message: Callback<Message>,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: Event| {
        on_message.run(Message::ContactFieldChanged {
            field,
            value: event_target_value(&ev),
        })
    };

    let input = match field {
        ContactField::Message => view! {
            <textarea
                required=true
                rows="5"
                prop:value=value
                on:input=on_input
                class=format!("{INPUT_CLASS} resize-none")
                placeholder=field.placeholder()
            ></textarea>
        }
        .into_any(),
        ContactField::Name | ContactField::Email => view! {
            <input
                type=input_type(field)
                required=true
                prop:value=value
                on:input=on_input
                class=INPUT_CLASS
                placeholder=field.placeholder()
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label class="block text-sm font-medium text-white/70 mb-2">{field.label()}</label>
            {input}
        </div>
    }
}

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        ContactField::Name | ContactField::Message => "text",
    }
}

#[component]
fn Confirmation() -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <div class="text-6xl mb-6">"\u{26A1}"</div>
            <h3 class="text-2xl font-bold text-white mb-3">"Message Sent!"</h3>
            <p class="text-white/60">"I'll be in touch soon\u{2014}I respond FAST."</p>
        </div>
    }
}

#[component]
fn ContactInfo(business: BusinessSettings) -> impl IntoView {
    view! {
        <div class="md:col-span-2 space-y-6">
            <div>
                <h3 class="text-lg font-bold mb-6">"Direct Contact"</h3>

                <div class="space-y-4">
                    <ContactLink href=business.mailto_href() label="Email" value=business.email.clone()>
                        <Mail />
                    </ContactLink>
                    <ContactLink href=business.tel_href() label="Phone" value=business.phone.clone()>
                        <Phone />
                    </ContactLink>
                </div>
            </div>

            <div class="bg-gradient-to-br from-cyan-500/20 to-blue-600/20 border border-cyan-500/30 rounded-2xl p-6">
                <div class="text-2xl mb-3">"\u{26A1}"</div>
                <h3 class="font-bold mb-2">"Speedy Response"</h3>
                <p class="text-white/60 text-sm leading-relaxed">
                    "Email or Call Me. Either way, I respond\u{2014}FAST."
                </p>
            </div>

            <div class="flex items-center gap-3 text-sm text-white/40">
                <MapPin />
                <span>{business.location}</span>
            </div>
        </div>
    }
}

#[component]
fn ContactLink(
    href: String,
    label: &'static str,
    value: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="group flex items-center gap-4 p-5 bg-white/5 border border-white/10 rounded-2xl hover:border-cyan-400/50 hover:bg-white/10 transition-all"
        >
            <div class="w-12 h-12 bg-gradient-to-br from-cyan-500 to-blue-600 rounded-xl flex items-center justify-center">
                {children()}
            </div>
            <div>
                <div class="text-sm text-white/50">{label}</div>
                <div class="text-cyan-400 font-medium">{value}</div>
            </div>
        </a>
    }
}
