// SPDX-License-Identifier: MIT

//! TitanFit: coach/client fitness tracking backend.
//!
//! This crate provides the API for client roster management, food, weight
//! and measurement logging, workout assignment, and AI-assisted food
//! recognition and plan generation.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::Store;
use services::{CatalogService, GeminiClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub catalog: CatalogService,
    pub gemini: GeminiClient,
}
