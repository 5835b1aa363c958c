//! Entity Module

pub mod comment;
pub mod reply;
pub mod thread;
