//! Application state (Model in TEA pattern)

use mrfast_core::{ContactFormState, PageKey};

use crate::config::SiteSettings;

/// The single piece of shared state: which page is showing
///
/// The contact form lives here too, but only while the Contact page is
/// mounted. Leaving the page drops it, so coming back starts a fresh form.
#[derive(Debug, Clone)]
pub struct AppState {
    current_page: PageKey,
    contact: Option<ContactFormState>,
    pub settings: SiteSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SiteSettings::default())
    }
}

impl AppState {
    pub fn new(settings: SiteSettings) -> Self {
        Self {
            current_page: PageKey::Home,
            contact: None,
            settings,
        }
    }

    pub fn current_page(&self) -> PageKey {
        self.current_page
    }

    /// Form for the mounted Contact page, `None` on every other page
    pub fn contact_form(&self) -> Option<&ContactFormState> {
        self.contact.as_ref()
    }

    pub(crate) fn contact_form_mut(&mut self) -> Option<&mut ContactFormState> {
        self.contact.as_mut()
    }

    /// Switch pages, mounting or unmounting the contact form
    ///
    /// Returns false when `page` is already showing; nothing is remounted.
    pub(crate) fn show_page(&mut self, page: PageKey) -> bool {
        if page == self.current_page {
            return false;
        }

        self.current_page = page;
        self.contact = match page {
            PageKey::Contact => Some(ContactFormState::new()),
            PageKey::Home | PageKey::Projects | PageKey::About => None,
        };
        true
    }

    /// Items shown in the navigation bar and footer, with their active flag
    pub fn nav_items(&self) -> impl Iterator<Item = (PageKey, bool)> + '_ {
        PageKey::ALL
            .into_iter()
            .map(move |page| (page, page == self.current_page))
    }
}
