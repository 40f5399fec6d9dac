//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

/// Ask before deleting `what`
///
/// `--yes` skips the prompt. In batch mode without `--yes` the answer is
/// always no, so scripts never block on stdin.
pub fn confirm_delete(what: &str, yes: bool, batch: bool) -> bool {
    if yes {
        return true;
    }
    if batch {
        eprintln!(
            "Refusing to delete {} in batch mode without --yes",
            what
        );
        return false;
    }
    Confirm::new()
        .with_prompt(format!("Delete {}?", what))
        .default(false)
        .interact()
        .unwrap_or(false)
}
