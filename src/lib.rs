//! Retention Advisor - Explainable retention interventions
//!
//! This crate turns aggregated workforce survey and compensation statistics
//! into a short, ranked list of retention recommendations, each carrying the
//! gap evidence that justifies it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
