// src/export/fs_utils.rs

use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check whether `path` may be created or overwritten.
///
/// - file does not exist → true
/// - file exists and `force` → true
/// - otherwise ask the user on stdin
pub(crate) fn confirm_overwrite(path: &Path, force: bool) -> AppResult<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(true)
    } else {
        Ok(false)
    }
}
