//! Core application modules
//!
//! This module contains configuration, constants, logging, prompt assembly,
//! and the explanation requester.

pub mod config;
pub mod constants;
pub mod explainer;
pub mod logging;
pub mod prompt;
