//! Simulation artifact storage.

use std::path::PathBuf;

use tokio::sync::Mutex;

/// The local artifact holding the most recent simulated receipt.
///
/// Each write fully replaces the previous content, and the result is
/// read back from disk rather than echoed from memory, so a filesystem
/// error surfaces instead of stale data. The write+read pair runs under
/// an exclusive async lock; the guard is released on every exit path,
/// including errors.
pub struct SimulationLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SimulationLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Overwrite the artifact with `text` and return its content as
    /// read back from disk.
    pub async fn write_and_read_back(&self, text: &str) -> Result<String, std::io::Error> {
        let _guard = self.lock.lock().await;

        tokio::fs::write(&self.path, text).await?;
        let content = tokio::fs::read_to_string(&self.path).await?;

        tracing::info!(path = %self.path.display(), "simulation receipt saved");
        Ok(content)
    }
}
