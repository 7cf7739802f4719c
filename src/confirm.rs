use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::Result;

const CANCEL_POLL: Duration = Duration::from_millis(100);

/// Asks the user before a mutating call is issued.
pub trait Confirm: Send + Sync {
    fn confirm(&self, operation: &str, target: &str) -> Result<bool>;
}

/// Prompts on stderr and reads the answer from stdin. Cancelling the token
/// while the prompt waits counts as a "no".
pub struct TerminalPrompt {
    pub cancel: CancellationToken,
}

impl Confirm for TerminalPrompt {
    fn confirm(&self, operation: &str, target: &str) -> Result<bool> {
        let mut stderr = io::stderr();
        writeln!(stderr, "Are you sure you want to perform this action?")?;
        writeln!(
            stderr,
            "Performing the operation \"{}\" on target \"{}\".",
            operation, target
        )?;
        write!(stderr, "[Y] Yes  [N] No  (default is \"N\"): ")?;
        stderr.flush()?;

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut answer = String::new();
            let read = io::stdin().lock().read_line(&mut answer).map(|_| answer);
            let _ = tx.send(read);
        });

        loop {
            if self.cancel.is_cancelled() {
                writeln!(stderr)?;
                return Ok(false);
            }
            match rx.recv_timeout(CANCEL_POLL) {
                Ok(read) => return Ok(is_affirmative(&read?)),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return Ok(false),
            }
        }
    }
}

/// Fixed answer, for non-interactive use.
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, _operation: &str, _target: &str) -> Result<bool> {
        Ok(self.0)
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
