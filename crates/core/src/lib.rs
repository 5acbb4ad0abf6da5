//! Domain layer for the travel planner service.
//!
//! Holds the city record types, input validation, the storage and weather
//! collaborator traits, and the enrichment service that ties them together.
//! Nothing here touches the network or the database directly.

pub mod city;
pub mod enrichment;
pub mod error;
pub mod types;
pub mod weather;
