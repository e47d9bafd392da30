// handlers/public/mod.rs - Public handlers (no session required)
//
// Marketing and legal pages, health, and the login/logout flow.

pub mod login;
pub mod pages;

pub use login::{login_get, login_post, logout_post};
pub use pages::{about, health, home, privacy, terms};
