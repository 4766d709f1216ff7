use leptos::prelude::*;

/// Lightning bolt mark
///
/// `gradient_id` must be unique per page since both header and footer render one.
#[component]
pub fn BoltLogo(
    gradient_id: &'static str,
    #[prop(default = 44)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg width=size.to_string() height=size.to_string() viewBox="0 0 100 100" class=class>
            <path
                d="M55 5 L25 50 L40 50 L35 95 L75 45 L55 45 L65 5 Z"
                fill=format!("url(#{gradient_id})")
            />
            <defs>
                <linearGradient id=gradient_id x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="#00D4FF" />
                    <stop offset="100%" stop-color="#0066FF" />
                </linearGradient>
            </defs>
        </svg>
    }
}

#[component]
pub fn Wordmark(#[prop(optional)] large: bool) -> impl IntoView {
    let (title_class, tagline_class) = if large {
        (
            "font-black text-white text-xl tracking-tight",
            "text-[10px] text-cyan-400 font-bold tracking-[0.3em]",
        )
    } else {
        (
            "font-black tracking-tight",
            "text-[10px] text-cyan-400 tracking-[0.2em]",
        )
    };

    view! {
        <div class="text-left">
            <div class=title_class>"MR. FAST"</div>
            <div class=tagline_class>"DIGITAL MARKETING"</div>
        </div>
    }
}
