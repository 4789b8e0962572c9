pub mod blog_create;
pub mod blog_detail;
pub mod blog_list;
pub mod dashboard;
pub mod home;
pub mod not_found;
