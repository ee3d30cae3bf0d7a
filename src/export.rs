//! Writes a model's report to a file or any [`io::Write`] sink.

use core::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::MaintenanceIndex;
use crate::report::write_report;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to open {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes the report for `index` to `out` and returns the number of records written.
///
/// # Errors
///
/// Returns the first error reported by `out`.
pub fn write_records<W: Write + ?Sized>(index: &MaintenanceIndex, out: &mut W) -> io::Result<usize> {
    let mut adapter = Adapter { inner: out, error: None };
    write_report(index, &mut adapter).map_err(|fmt::Error| {
        adapter
            .error
            .take()
            .unwrap_or_else(|| io::Error::other("record formatting failed"))
    })
}

// Lets the `fmt::Write` report writer drive an `io::Write` sink, keeping the real I/O error.
struct Adapter<'a, W: ?Sized> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: Write + ?Sized> fmt::Write for Adapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|error| {
            self.error = Some(error);
            fmt::Error
        })
    }
}

/// Creates (or truncates) `path` and writes the report for `index` into it.
///
/// # Errors
///
/// [`ExportError::Create`] if the file cannot be opened, [`ExportError::Write`] if writing or
/// flushing it fails.
pub fn export_to_file(index: &MaintenanceIndex, path: impl AsRef<Path>) -> Result<usize, ExportError> {
    let path = path.as_ref();
    debug!(path = %path.display(), records = index.len(), "exporting maintenance records");

    let file = File::create(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "cannot open export target");
        ExportError::Create {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut out = BufWriter::new(file);
    let written = write_records(index, &mut out)
        .and_then(|written| out.flush().map(|()| written))
        .map_err(|source| {
            warn!(path = %path.display(), error = %source, "export interrupted");
            ExportError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;

    debug!(path = %path.display(), written, "export finished");
    Ok(written)
}
