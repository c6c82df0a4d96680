//! Jones County XC API: read-only JSON endpoints over the team's athletes,
//! meets, and race results.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
