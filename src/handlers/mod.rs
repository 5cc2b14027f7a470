//! HTTP handlers

pub mod health;
pub mod challenge;
pub mod classify;
