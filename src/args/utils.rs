//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
/// - `RUST_LOG`, when set, still takes precedence at subscriber setup.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    /// What: Verbose wins over an explicit log level.
    fn verbose_overrides_level() {
        let args = crate::args::Args::parse_from(["cortexhub", "--log-level", "warn"]);
        assert_eq!(determine_log_level(&args), "warn");
        let args = crate::args::Args::parse_from(["cortexhub", "--log-level", "warn", "-v"]);
        assert_eq!(determine_log_level(&args), "debug");
    }
}
