//! Request handling module
//!
//! Routing dispatch and the page handlers.

pub mod pages;
pub mod router;

pub use router::handle_request;
