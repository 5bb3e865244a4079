//! Core library exports for the Academia service.
//!
//! This crate exposes the domain model, Diesel-backed repositories, request
//! forms, service layer and HTTP routes of the Academia course marketplace.

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
