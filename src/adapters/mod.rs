//! Adapters: concrete implementations of the ports plus the HTTP surface.

pub mod ai;
pub mod auth;
pub mod cache;
pub mod http;
pub mod postgres;
