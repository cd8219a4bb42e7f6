use oaspub_kernel::PipelineError;
use oaspub_kernel::catalog::PublishReceipt;

/// Outcome of one run, as shown to the CI job.
#[derive(Debug)]
pub struct Report {
    pub line: String,
    pub exit_code: u8,
}

impl Report {
    /// Builds the stdout line and exit status for a pipeline result.
    ///
    /// With `exit_zero` every outcome exits with 0.
    #[must_use]
    pub fn new(result: &Result<PublishReceipt, PipelineError>, exit_zero: bool) -> Self {
        let (line, code) = match result {
            Ok(receipt) => (receipt.to_string(), 0),
            Err(err) => (err.to_string(), err.exit_code()),
        };

        Self { line, exit_code: if exit_zero { 0 } else { code } }
    }

    /// Report for a failure before the pipeline could start (settings or logger).
    ///
    /// The whole cause chain goes on one line; backtraces are never rendered.
    #[must_use]
    pub fn startup_failure(err: &anyhow::Error, exit_zero: bool) -> Self {
        Self {
            line: format!("Error: {err:#}"),
            exit_code: if exit_zero { 0 } else { STARTUP_FAILURE },
        }
    }
}

/// Exit status when settings or logging cannot be initialized.
pub const STARTUP_FAILURE: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use oaspub_kernel::catalog::{CatalogError, StatusCode};

    #[test]
    fn test_success_report() {
        let receipt = PublishReceipt { name: "petstore".to_owned(), version: "main".to_owned() };
        let report = Report::new(&Ok(receipt), false);
        assert_eq!(report.line, "Publish petstore of main is successful");
        assert_eq!(report.exit_code, 0);
    }

    #[test]
    fn test_rejection_report() {
        let result = Err(PipelineError::from(CatalogError::Rejected {
            status: StatusCode::UNAUTHORIZED,
            body: "invalid key".to_owned(),
            context: None,
        }));

        let report = Report::new(&result, false);
        assert!(report.line.starts_with("Error: "));
        assert!(report.line.contains("invalid key"));
        assert_eq!(report.exit_code, 8);

        assert_eq!(Report::new(&result, true).exit_code, 0);
    }

    #[test]
    fn test_startup_failure_is_one_line() {
        let err = anyhow::anyhow!("file not found").context("Critical: settings are malformed");

        let report = Report::startup_failure(&err, false);
        assert_eq!(report.line, "Error: Critical: settings are malformed: file not found");
        assert!(!report.line.contains('\n'));
        assert_eq!(report.exit_code, STARTUP_FAILURE);

        assert_eq!(Report::startup_failure(&err, true).exit_code, 0);
    }

    #[test]
    fn test_skip_report() {
        let report = Report::new(&Err(PipelineError::MissingCredential), false);
        assert_eq!(report.line, "SWAGGERHUB_API_KEY is not defined");
        assert_eq!(report.exit_code, 0);
    }
}
