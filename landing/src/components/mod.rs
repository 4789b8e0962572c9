pub mod blog_card;
pub mod nav;
pub mod page;
