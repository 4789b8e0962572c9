pub mod alert;
pub mod clock;
pub mod config;
pub mod form;
pub mod loading;
pub mod router;

pub use clock::GlooClock;
pub use router::Router;
