pub mod apod;
pub mod catalog;
pub mod i18n;
pub mod search;
pub mod session;
