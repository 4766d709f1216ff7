//! End-to-end click sequences through the update loop

use mrfast_app::{load_settings, process_message, AppState, Message, UpdateAction};
use mrfast_core::{ContactField, PageKey};

/// Drive a sequence of messages, collecting every action
fn run(state: &mut AppState, messages: impl IntoIterator<Item = Message>) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    for msg in messages {
        process_message(state, msg, |a| actions.push(a));
    }
    actions
}

/// Every ordered pair of pages, three clicks deep
fn click_sequences() -> Vec<Vec<PageKey>> {
    let mut sequences = Vec::new();
    for a in PageKey::ALL {
        for b in PageKey::ALL {
            for c in PageKey::ALL {
                sequences.push(vec![a, b, c]);
            }
        }
    }
    sequences
}

#[test]
fn current_page_tracks_most_recent_click() {
    for clicks in click_sequences() {
        let mut state = AppState::default();
        for page in &clicks {
            run(&mut state, [Message::Navigate(*page)]);
            assert_eq!(state.current_page(), *page);
            assert_eq!(state.nav_items().filter(|(_, active)| *active).count(), 1);
            assert_eq!(
                state.contact_form().is_some(),
                *page == PageKey::Contact,
                "contact form mounted iff Contact is showing"
            );
        }
    }
}

#[test]
fn scroll_to_top_fires_once_per_actual_change() {
    for clicks in click_sequences() {
        let mut state = AppState::default();
        let actions = run(&mut state, clicks.iter().copied().map(Message::Navigate));

        let mut previous = PageKey::Home;
        let mut changes = 0;
        for page in &clicks {
            if *page != previous {
                changes += 1;
            }
            previous = *page;
        }

        assert_eq!(actions.len(), changes, "clicks: {:?}", clicks);
        assert!(actions
            .iter()
            .all(|a| matches!(a, UpdateAction::ScrollToTop { .. })));
    }
}

#[test]
fn contact_round_trip_with_embedded_style_settings() {
    let (settings, error) = load_settings(
        r#"
[contact]
delivery = "endpoint"
endpoint = "https://forms.example.com/f/abc"
"#,
    );
    assert!(error.is_none());
    let mut state = AppState::new(settings);

    let actions = run(
        &mut state,
        [
            Message::Navigate(PageKey::Contact),
            Message::ContactFieldChanged {
                field: ContactField::Name,
                value: "Jane".to_string(),
            },
            Message::ContactFieldChanged {
                field: ContactField::Email,
                value: "jane@x.com".to_string(),
            },
            Message::ContactSubmitted,
            Message::ContactFieldChanged {
                field: ContactField::Message,
                value: "Hi".to_string(),
            },
            Message::ContactSubmitted,
        ],
    );

    // First submit is blocked by the empty message, second goes through
    assert_eq!(actions.len(), 2);
    assert!(matches!(actions[0], UpdateAction::ScrollToTop { .. }));
    assert!(matches!(
        &actions[1],
        UpdateAction::DeliverContact { submission, .. } if submission.message == "Hi"
    ));
    assert!(state.contact_form().unwrap().is_submitted());

    // Navigating away and back remounts a fresh form
    run(
        &mut state,
        [Message::LogoClicked, Message::Navigate(PageKey::Contact)],
    );
    assert!(!state.contact_form().unwrap().is_submitted());
    assert!(state.contact_form().unwrap().email.is_empty());
}
