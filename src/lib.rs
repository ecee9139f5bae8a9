//! Backend for the LoL match visualizer frontend: exposes League of Legends
//! esports metadata (regions, years, tournaments) by querying the Leaguepedia
//! Cargo API and reshaping the results into frontend-friendly JSON.

pub mod cargo_client;
pub mod error;
pub mod models;
pub mod pretty;
pub mod regions;
pub mod routes;
