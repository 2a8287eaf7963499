//! Capture of print-style output into the log file

use crate::sink::SharedFile;
use std::io;
use std::sync::Arc;

/// Cloneable [`io::Write`] handle over the active log file.
///
/// Code that would otherwise print straight to the process's standard
/// streams can be handed one of these instead: its bytes land in the log
/// file in append order, interleave correctly with formatted records, and
/// count toward the rotation bound. Clones share the same file, and the
/// handle keeps following the active file across rotations.
#[derive(Clone, Debug)]
pub struct CaptureWriter {
    shared: Arc<SharedFile>,
}

impl CaptureWriter {
    pub(crate) fn new(shared: Arc<SharedFile>) -> Self {
        Self { shared }
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.shared.write_all(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.shared.flush().map_err(io::Error::other)
    }
}
