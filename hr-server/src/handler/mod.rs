//! HTTP request handlers

pub mod auth;
pub mod health;
pub mod org_chart;
pub mod permits;
pub mod workers;
