//! Command implementations for the soundgen CLI.

pub mod render;
pub mod tone;

use std::process::ExitCode;
use std::time::Instant;

use colored::Colorize;
use soundgen_core::{wav, SampleBuffer};
use soundgen_spec::BackendError;

/// Exit code for unreadable or invalid input.
pub const EXIT_INPUT_ERROR: u8 = 1;
/// Exit code for failures during synthesis or export.
pub const EXIT_GENERATION_ERROR: u8 = 2;

/// Prints a backend error and returns the generation failure exit code.
pub(crate) fn generation_failed<E: BackendError>(err: &E) -> ExitCode {
    println!(
        "\n{} [{}] {}",
        "GENERATION FAILED".red().bold(),
        err.code(),
        err.message()
    );
    ExitCode::from(EXIT_GENERATION_ERROR)
}

/// Writes `buffer` to `output` and reports the result.
///
/// `start` marks the beginning of the command; the reported time covers
/// synthesis and the file write.
pub(crate) fn write_output(buffer: &SampleBuffer, output: &str, start: Instant) -> ExitCode {
    let result = match wav::write_file(buffer, output) {
        Ok(result) => result,
        Err(e) => return generation_failed(&e),
    };

    println!(
        "\n{} Wrote {} samples ({:.3} s @ {} Hz) in {}ms",
        "SUCCESS".green().bold(),
        result.num_samples,
        result.duration_seconds(),
        result.sample_rate,
        start.elapsed().as_millis()
    );
    println!("{} {}", "Output:".dimmed(), output);
    println!("{} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);

    ExitCode::SUCCESS
}
