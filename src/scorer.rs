use std::future::Future;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use anyhow::anyhow;
use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not start scorer: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("scorer did not finish within {0:?}")]
    Timeout(Duration),

    #[error("scorer exited with {0}: {1}")]
    Exit(ExitStatus, String),

    #[error("scorer printed {0:?}, expected a number")]
    Parse(String),
}

/// Similarity between the user's photo and a candidate building image, both
/// base64 encoded. Higher is more similar.
pub trait Scorer: Clone + Send + Sync + 'static {
    fn score(
        &self,
        photo: &str,
        candidate: &str,
    ) -> impl Future<Output = Result<f64, Error>> + Send;
}

/// Runs an external program with the two images appended as its last
/// arguments and reads the score from its stdout.
#[derive(Debug, Clone)]
pub struct Process {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl Process {
    pub fn new(command: &[String], timeout: Duration) -> anyhow::Result<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| anyhow!("scorer command is empty"))?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            timeout,
        })
    }
}

impl Scorer for Process {
    async fn score(&self, photo: &str, candidate: &str) -> Result<f64, Error> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(photo)
            .arg(candidate)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| Error::Timeout(self.timeout))?
            .map_err(Error::Spawn)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::Exit(output.status, stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();

        stdout.parse().map_err(|_| Error::Parse(stdout.to_string()))
    }
}
