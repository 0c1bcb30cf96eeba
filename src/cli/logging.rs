//! Output gating for CLI commands

/// Verbosity of CLI progress output.
///
/// Command results always print; this only gates progress lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors and results only
    Quiet,
    /// Progress lines
    Normal,
    /// Progress plus per-file detail
    Verbose,
}

impl LogLevel {
    /// Resolve the level from the global CLI flags.
    #[must_use]
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Print `msg` when this level admits messages of `required` level.
    pub fn emit(self, required: LogLevel, msg: &str) {
        if self == Self::Quiet {
            return;
        }
        if required == Self::Verbose && self != Self::Verbose {
            return;
        }
        println!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(LogLevel::from_flags(false, false), LogLevel::Normal);
        assert_eq!(LogLevel::from_flags(true, false), LogLevel::Verbose);
        assert_eq!(LogLevel::from_flags(false, true), LogLevel::Quiet);
        // quiet wins when both are set
        assert_eq!(LogLevel::from_flags(true, true), LogLevel::Quiet);
    }
}
