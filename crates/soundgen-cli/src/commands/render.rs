//! Render command implementation
//!
//! Renders a JSON recipe to a WAV file.

use anyhow::Result;
use colored::Colorize;
use soundgen_spec::{BackendError, Recipe};
use std::process::ExitCode;
use std::time::Instant;

use super::{generation_failed, write_output, EXIT_INPUT_ERROR};

/// Run the render command
///
/// # Arguments
/// * `recipe_path` - Path to the recipe JSON file
/// * `output` - Output WAV path
/// * `seed` - Base seed for unseeded noise sources (default: random)
///
/// # Returns
/// Exit code: 0 success, 1 recipe error, 2 generation error
pub fn run(recipe_path: &str, output: &str, seed: Option<u32>) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Rendering:".cyan().bold(), recipe_path);

    let recipe = match Recipe::from_path(recipe_path) {
        Ok(recipe) => recipe,
        Err(e) => {
            println!(
                "\n{} [{}] {}: {}",
                "INVALID RECIPE".red().bold(),
                e.code(),
                recipe_path,
                e.message()
            );
            return Ok(ExitCode::from(EXIT_INPUT_ERROR));
        }
    };

    println!(
        "{} {} ({} s @ {} Hz)",
        "Source:".dimmed(),
        recipe.source.kind(),
        recipe.duration_seconds,
        recipe.sample_rate
    );

    let rendered = match soundgen_core::render(&recipe, seed) {
        Ok(rendered) => rendered,
        Err(e) => return Ok(generation_failed(&e)),
    };
    tracing::debug!(base_seed = rendered.base_seed, "render complete");
    println!("{} {}", "Seed:".dimmed(), rendered.base_seed);

    Ok(write_output(&rendered.buffer, output, start))
}
