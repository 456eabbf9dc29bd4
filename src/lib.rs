//! Social Saver dashboard
//!
//! Frontend for a "save social links via chat bot" product: users forward
//! links to a messaging bot, the backend extracts metadata, categorizes and
//! summarizes each link, and this app lets them browse, search, filter and
//! archive the results.
//!
//! The core is framework-free: [`browser::ContentBrowser`] owns the fetched
//! collection and the search/filter state, [`identity`] resolves the
//! anonymous user token, and [`api`] is the typed HTTP gateway. The Dioxus
//! layer ([`ui`], [`views`]) only renders snapshots and forwards intents.

pub mod api;
pub mod browser;
pub mod identity;
pub mod theme;
pub mod toast;
pub mod types;
pub mod ui;
pub mod views;
