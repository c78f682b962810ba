// src/cli.rs
use std::io::{self, Write};

use crate::{config::FetchOptions, error::AppError, runner};

/// Binary entry: logging on, default options, report to stdout.
/// No flags are read.
pub fn run() -> Result<(), AppError> {
    crate::log::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner::run(&FetchOptions::default(), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write the one user-facing diagnostic for `e` and return the exit code.
/// The tracing event stays at debug so the default filter shows one line.
pub fn report_failure(e: &AppError, err: &mut impl Write) -> i32 {
    tracing::debug!(error = ?e, "run failed");
    let _ = writeln!(err, "Error: {e}");
    e.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_report_is_a_single_line() {
        let e = AppError::InvalidTotal { raw: "0".into() };
        let mut err = Vec::new();
        assert_eq!(report_failure(&e, &mut err), 1);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: Server returned an invalid total: 0\n"
        );
    }
}
