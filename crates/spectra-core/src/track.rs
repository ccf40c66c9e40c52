//! Bundled track catalog: media path to display title.

use fnv::FnvHashMap;

pub const DEFAULT_TRACK: &str = "media/Senbonzakura.mp3";

const TRACKS: &[(&str, &str)] = &[
    ("media/Odysee.mp3", "Odysee"),
    ("media/BinarySuns.mp3", "Binary Suns (Coyote Kisses Remix)"),
    ("media/DontLetMeDown.mp3", "Don't Let Me Down (Illenium Remix)"),
    ("media/FadedRestrung.mp3", "Faded (Restrung)"),
    ("media/Monody.mp3", "Monody (ft. Laura Brehm)"),
    ("media/NeverForgetYou.mp3", "Never Forget You (Price & Takis Remix)"),
    ("media/NOLA.mp3", "NOLA"),
    ("media/Senbonzakura.mp3", "Senbonzakura"),
];

pub struct TrackCatalog {
    titles: FnvHashMap<&'static str, &'static str>,
}

impl TrackCatalog {
    pub fn bundled() -> Self {
        Self {
            titles: TRACKS.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Display title for `path`. Unknown paths fall back to the file stem.
    pub fn title_for(&self, path: &str) -> String {
        if let Some(t) = self.titles.get(path) {
            return (*t).to_string();
        }
        let file = path.rsplit('/').next().unwrap_or(path);
        let stem = match file.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => file,
        };
        stem.to_string()
    }
}
