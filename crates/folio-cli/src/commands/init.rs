use std::path::Path;

use anyhow::{bail, Result};

use folio_core::page::SAMPLE_PAGE;

pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists, refusing to overwrite", path.display());
    }

    std::fs::write(path, SAMPLE_PAGE)?;
    println!("Wrote sample page to {}", path.display());
    println!("Open it with: folio run {}", path.display());

    Ok(())
}
