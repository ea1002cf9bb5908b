//! Kodegen Bundler Inno - Windows installer release tool.
//!
//! This binary stages application build outputs and compiles Inno Setup
//! installers for them, reporting fatal errors with recovery suggestions.

use kodegen_bundler_inno::cli;
use kodegen_bundler_inno::cli::OutputManager;
use std::process;

fn main() {
    env_logger::init();

    match cli::run() {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = OutputManager::new();
            output.error(&format!("Fatal error: {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                let _ = output.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    let _ = output.indent(&suggestion);
                }
            }

            process::exit(1);
        }
    }
}
