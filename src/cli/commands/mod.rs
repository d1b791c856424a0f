pub mod check;
pub mod config;
pub mod export;
pub mod generate;
pub mod init;
pub mod summary;

use crate::core::BuildOutcome;
use crate::ui::messages::warning;

/// Rows skipped under the collect policy are reported before any output is produced.
pub(crate) fn report_rejected(outcome: &BuildOutcome) {
    for e in &outcome.rejected {
        warning(format!("skipped: {e}"));
    }
}
