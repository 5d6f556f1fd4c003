use std::path::Path;

use anyhow::{Context, Result};

use folio_core::page::{Page, Section};

pub fn run(path: &Path) -> Result<()> {
    let page = Page::from_path(path)
        .with_context(|| format!("invalid page file: {}", path.display()))?;

    println!("{}: OK", path.display());
    println!("  title:    {}", page.page.title);
    println!("  nav:      {} entries", page.header.nav.len());
    println!("  sections: {}", page.sections.len());

    for section in &page.sections {
        if let Section::Gallery {
            name,
            slides,
            autoplay_ms,
            ..
        } = section
        {
            let autoplay = match autoplay_ms {
                Some(ms) => format!(", autoplay {}ms", ms),
                None => String::new(),
            };
            println!("  gallery '{}': {} slides{}", name, slides.len(), autoplay);
        }
    }

    Ok(())
}
