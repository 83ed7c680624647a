//! Report output

use std::path::PathBuf;

use tokio::io::AsyncWriteExt;

use crate::error::{RenewerError, RenewerResult};

/// Destination of the rendered Markdown report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryTarget {
    /// Print to standard output.
    Stdout,
    /// Create or truncate the file and write the report into it.
    File(PathBuf),
}

impl SummaryTarget {
    /// Write the full report to this target.
    pub async fn write(&self, report: &str) -> RenewerResult<()> {
        match self {
            Self::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout
                    .write_all(report.as_bytes())
                    .await
                    .map_err(RenewerError::Stdout)?;
                stdout.flush().await.map_err(RenewerError::Stdout)
            }
            Self::File(path) => {
                tokio::fs::write(path, report)
                    .await
                    .map_err(|source| RenewerError::SummaryWrite {
                        path: path.clone(),
                        source,
                    })?;
                tracing::info!("Summary written to {}", path.display());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_target_truncates_existing_content() {
        let dir = tempfile::tempdir();
        assert!(dir.is_ok(), "tempdir failed: {dir:?}");
        let Ok(dir) = dir else {
            return;
        };
        let path = dir.path().join("summary.md");
        assert!(std::fs::write(&path, "stale content that is longer").is_ok());

        let target = SummaryTarget::File(path.clone());
        let res = target.write("# Report\n").await;
        assert!(res.is_ok(), "write failed: {res:?}");

        let written = std::fs::read_to_string(&path).unwrap_or_default();
        assert_eq!(written, "# Report\n");
    }

    #[tokio::test]
    async fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir();
        let Ok(dir) = dir else {
            return;
        };
        let path = dir.path().join("missing").join("summary.md");
        let res = SummaryTarget::File(path.clone()).write("x").await;
        assert!(
            matches!(&res, Err(RenewerError::SummaryWrite { path: p, .. }) if *p == path),
            "unexpected result: {res:?}"
        );
    }
}
