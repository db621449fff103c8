//! Core types for the astro forecast workflow.
//!
//! This crate provides:
//! - `birth`: raw form fields and the validated request payload
//! - `city`: city candidates returned by the lookup service
//! - `prediction`: the computation result
//! - `wire`: JSON schemas of both remote services
//! - `service`: collaborator traits implemented by the HTTP backend (and by test mocks)
//! - `api`: the `reqwest` backend, behind the `api` feature

pub mod birth;
pub mod city;
pub mod config;
pub mod error;
pub mod prediction;
pub mod service;
pub mod wire;

#[cfg(feature = "api")]
pub mod api;
