//! API data models
//!
//! This module contains data structures for the generative language API.

pub mod gemini;
