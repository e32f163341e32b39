//! Fixed model identifiers and user-facing status messages
//!
//! This module defines the default model candidates tried by the explanation
//! requester and the fixed strings returned for recognized failure states.

/// Default model candidates, tried in order
pub mod model {
    /// Primary model identifier
    pub const PRIMARY: &str = "gemini-3-flash-preview";

    /// Fallback model tried when the primary reports overload
    pub const FALLBACK: &str = "gemini-2.5-flash";
}

/// User-facing status messages
pub mod msg {
    /// Returned when no API key is configured; no request is sent
    pub const API_KEY_MISSING: &str =
        "API key not configured. Set GEMINI_API_KEY or add it to config.toml.";

    /// Returned when a success response lacks the generated text
    pub const UNEXPECTED_RESPONSE: &str = "Received unexpected response from API.";

    /// Returned when every candidate reported overload
    pub const ALL_MODELS_UNAVAILABLE: &str =
        "All models are currently unavailable. Please try again later.";
}
