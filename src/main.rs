//! Quiz answer explainer
//!
//! Command line tool that asks the generative language API why a quiz answer
//! was right or wrong, trying a primary model and falling back to an
//! alternate model on overload.

mod core;
mod models;

use crate::core::config::Config;
use crate::core::explainer::{ExplanationRequest, ExplanationRequester};
use crate::core::logging::init_logging;
use tracing::debug;

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    // Pick up GEMINI_API_KEY from a local .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.log_level);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("Usage: quiz-explainer <question> <user-answer> <correct-answer> [option ...]");
        eprintln!("Run with --help for details.");
        std::process::exit(2);
    }

    let request = ExplanationRequest {
        question: args[0].clone(),
        user_answer: args[1].clone(),
        correct_answer: args[2].clone(),
        all_answers: args[3..].to_vec(),
    };

    debug!(
        "Requesting explanation ({} options, models: {:?}, key configured: {})",
        request.all_answers.len(),
        config.models,
        config.has_api_key()
    );

    let requester = ExplanationRequester::new(&config);
    let explanation = requester.request_explanation(&request).await;

    println!("{}", explanation);
}

/// Print help message
fn print_help() {
    println!("Quiz Explainer v0.1.0");
    println!();
    println!("Usage: quiz-explainer <question> <user-answer> <correct-answer> [option ...]");
    println!();
    println!("Asks the generative language API to explain why the selected quiz answer");
    println!("was right or wrong. Options are listed to the model as a), b), c), ...");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Environment variables:");
    println!("  GEMINI_API_KEY - API key for the generative language service");
    println!("                   (also read from a local .env file)");
    println!("  CONFIG_PATH    - Path to the TOML config file (default: config.toml)");
    println!("  RUST_LOG       - Overrides the configured log level");
    println!();
    println!("Config file (see config.example.toml):");
    println!("  [gemini]  api_key, base_url, request_timeout");
    println!("  [models]  primary, fallback");
    println!("  log_level");
}
