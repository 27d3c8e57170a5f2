//! Cocktail practice grader
//!
//! Grades a user's attempt at a cocktail (preparation method, glassware and
//! ingredient/amount list) against a reference recipe and an ingredient
//! catalog, producing a verdict with errors and non-fatal warnings.
//!
//! The grading engine in [`services::validation`] is a pure function of its
//! inputs; the HTTP layer in [`routes`] loads the catalog per request and
//! serves the verdict as JSON.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
