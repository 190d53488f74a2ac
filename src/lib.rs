//! The data layer for the chapter's membership website.
//!
//! Everything here is schema plus derived display strings: candidates,
//! officers, office hours, coursework, and requirement completions, persisted
//! through sqlx and exposed to the website through async-graphql. Request
//! routing, rendering, and authentication live elsewhere.

pub mod db;
pub mod error;
pub mod graphql;
pub mod models;
pub mod util;

#[cfg(test)]
mod tests;
