//! Demo page content for the pages directory.

use std::path::Path;

use partlet_types::Result;

/// Populate `dir` with the demo partials. Does nothing when the
/// directory already exists, so user-edited pages survive restarts.
pub fn populate_demo_pages(dir: &Path) -> Result<()> {
    if dir.exists() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)?;

    std::fs::write(
        dir.join("home.html"),
        "<h1>Home</h1><p>This is the Home page. Welcome to my site.</p>",
    )?;
    std::fs::write(
        dir.join("about.html"),
        "<h1>About</h1><p>This is the About page.</p>",
    )?;
    std::fs::write(
        dir.join("contact.html"),
        "<h1>Contact</h1><p>This is the Contact page.</p>",
    )?;

    log::info!("populated demo pages in {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populates_missing_directory() {
        let dir = std::env::temp_dir().join("partlet-pages-populate-test");
        let _ = std::fs::remove_dir_all(&dir);

        populate_demo_pages(&dir).unwrap();
        assert!(dir.join("home.html").exists());
        assert!(dir.join("about.html").exists());
        assert!(dir.join("contact.html").exists());
    }

    #[test]
    fn existing_directory_is_left_alone() {
        let dir = std::env::temp_dir().join("partlet-pages-existing-test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("home.html"), "edited").unwrap();

        populate_demo_pages(&dir).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.join("home.html")).unwrap(),
            "edited"
        );
        assert!(!dir.join("about.html").exists());
    }
}
