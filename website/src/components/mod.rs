pub mod badge;
pub mod footer;
pub mod icons;
pub mod logo;
pub mod navbar;
