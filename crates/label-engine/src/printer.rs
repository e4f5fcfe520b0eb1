//! Local printer capability
//!
//! Spooling to the default printer is optional and best-effort: a failed
//! submission is reported, never fatal, and the generated PDF remains
//! available either way.

use log::debug;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the print capability
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("printing is not supported on this platform")]
    Unsupported,

    #[error("print spooler failed: {0}")]
    Spooler(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A way to hand a finished PDF to a printer
pub trait PrintQueue {
    /// Submit the document to the default printer
    fn submit(&self, pdf: &[u8]) -> Result<(), PrintError>;
}

/// The print queue for the current platform
pub fn default_queue() -> Box<dyn PrintQueue> {
    #[cfg(unix)]
    return Box::new(SpoolerQueue);

    #[cfg(windows)]
    return Box::new(ShellPrintQueue);

    #[cfg(not(any(unix, windows)))]
    Box::new(UnsupportedQueue)
}

/// Write the buffer to a scratch file the spooler can read
fn write_spool_file(pdf: &[u8]) -> Result<PathBuf, PrintError> {
    let path = std::env::temp_dir().join(format!("labelpress-{}.pdf", std::process::id()));
    std::fs::write(&path, pdf)?;
    debug!("spool file at {}", path.display());
    Ok(path)
}

/// Spools through `lp`, falling back to `lpr`
#[cfg(unix)]
struct SpoolerQueue;

#[cfg(unix)]
impl PrintQueue for SpoolerQueue {
    fn submit(&self, pdf: &[u8]) -> Result<(), PrintError> {
        let path = write_spool_file(pdf)?;

        for spooler in ["lp", "lpr"] {
            match std::process::Command::new(spooler).arg(&path).status() {
                Ok(status) if status.success() => return Ok(()),
                Ok(status) => {
                    return Err(PrintError::Spooler(format!(
                        "{spooler} exited with {status}"
                    )))
                }
                // Spooler binary not installed; try the next one
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(PrintError::Io(e)),
            }
        }

        Err(PrintError::Spooler(
            "neither lp nor lpr is available".to_string(),
        ))
    }
}

/// Uses the shell `print` verb through PowerShell
#[cfg(windows)]
struct ShellPrintQueue;

#[cfg(windows)]
impl PrintQueue for ShellPrintQueue {
    fn submit(&self, pdf: &[u8]) -> Result<(), PrintError> {
        let path = write_spool_file(pdf)?;

        let command = format!(
            "Start-Process -FilePath '{}' -Verb Print",
            path.display()
        );
        let status = std::process::Command::new("powershell")
            .args(["-NoProfile", "-Command", &command])
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(PrintError::Spooler(format!(
                "powershell exited with {status}"
            )))
        }
    }
}

/// Placeholder for platforms without a known spooler
pub struct UnsupportedQueue;

impl PrintQueue for UnsupportedQueue {
    fn submit(&self, _pdf: &[u8]) -> Result<(), PrintError> {
        Err(PrintError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_queue_reports_error() {
        let err = UnsupportedQueue.submit(b"%PDF-1.5").unwrap_err();
        assert!(matches!(err, PrintError::Unsupported));
    }

    #[test]
    fn test_spool_file_written() {
        let path = write_spool_file(b"%PDF-1.5 test").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.5 test");
        let _ = std::fs::remove_file(path);
    }
}
