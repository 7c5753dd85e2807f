//! Server-rendered dashboard over the Atlas SAV analytics API.

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod resource;
pub mod responses;
pub mod router;
pub mod templates;
pub mod views;

#[cfg(test)]
mod tests;
