pub mod auth_card;
pub mod auth_links;
