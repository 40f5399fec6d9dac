//! Helpers shared by the resource command handlers

use std::future::Future;

use crate::error::Result;
use crate::ui::{confirm_delete, create_spinner, finish_spinner, finish_spinner_with_message};

/// Result type of a CLI command handler
pub type CommandResult<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Ask for confirmation, then run `delete` behind a spinner
///
/// Interactive refusal is not an error; a batch run without `--yes` is.
pub async fn run_confirmed_delete<F>(what: &str, yes: bool, batch: bool, delete: F) -> CommandResult
where
    F: Future<Output = Result<()>>,
{
    if !confirm_delete(what, yes, batch) {
        if batch {
            return Err(format!("Deletion of {} not confirmed", what).into());
        }
        eprintln!("Aborted");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting {}...", what), batch);
    match delete.await {
        Ok(()) => {
            finish_spinner_with_message(spinner, &format!("Deleted {}", what));
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectLinkError;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_batch_without_yes_skips_delete() {
        let ran = AtomicBool::new(false);
        let result = run_confirmed_delete("vc 'x'", false, true, async {
            ran.store(true, Ordering::SeqCst);
            Ok(())
        })
        .await;
        assert!(result.is_err());
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_yes_runs_delete_and_propagates_errors() {
        let result = run_confirmed_delete("vc 'x'", true, true, async {
            Err(DirectLinkError::api(409, "in use"))
        })
        .await;
        assert!(result.unwrap_err().to_string().contains("409"));

        assert!(run_confirmed_delete("vc 'x'", true, true, async { Ok(()) })
            .await
            .is_ok());
    }
}
