use crate::types::Result;
use dialoguer::Confirm;
use std::path::Path;

/// Interactive prompt used before clobbering an existing output document.
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    let choice = Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(true)
        .show_default(true)
        .interact()?;
    Ok(choice)
}
