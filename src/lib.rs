//! Career Compass - Career coaching backend
//!
//! This crate implements profile onboarding with lazily provisioned,
//! AI-generated industry insights shared across users.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
