use std::path::PathBuf;

use crate::quiz::Archetype;

/// Resolves the portrait shown on the result card. Portraits are static
/// assets keyed by the archetype tag ("autonomy.png" and friends), the same
/// contract the oracle has: a missing file is not an error, the caller just
/// renders the placeholder and may offer a retry.
pub struct PortraitGallery {
    dir: PathBuf,
}

impl PortraitGallery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path to the portrait for this archetype, or None when the asset (or
    /// the whole gallery directory) is missing.
    pub fn portrait_for(&self, archetype: Archetype) -> Option<PathBuf> {
        let path = self.dir.join(format!("{}.png", archetype.tag()));
        if path.is_file() {
            return Some(path);
        }
        log::warn!("No portrait asset at {:?}", path);
        return None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_gallery(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sprout-portraits-{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn existing_asset_resolves_to_its_path() {
        let dir = scratch_gallery("hit");
        fs::write(dir.join("growth.png"), b"png").unwrap();

        let gallery = PortraitGallery::new(&dir);
        let path = gallery.portrait_for(Archetype::Growth).unwrap();
        assert!(path.ends_with("growth.png"));
        assert!(gallery.portrait_for(Archetype::Autonomy).is_none());
    }

    #[test]
    fn missing_gallery_directory_degrades_to_none() {
        let gallery = PortraitGallery::new("/definitely/not/a/real/dir");
        for archetype in Archetype::ALL {
            assert!(gallery.portrait_for(archetype).is_none());
        }
    }
}
