//! Repository layer: one struct per table, each method takes the pool.

pub mod city_repo;

pub use city_repo::CityRepo;
