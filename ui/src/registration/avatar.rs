/// Stock avatars served from the site root; a new account gets one at random
pub const AVATAR_FILES: [&str; 18] = [
    "one.jpeg",
    "two.jpeg",
    "three.jpeg",
    "four.jpeg",
    "five.jpeg",
    "six.jpeg",
    "seven.jpeg",
    "eight.jpeg",
    "nine.jpeg",
    "ten.jpeg",
    "eleven.jpeg",
    "twelve.jpeg",
    "thirteen.jpeg",
    "fourteen.jpeg",
    "fifteen.jpeg",
    "sixteen.jpeg",
    "seventeen.jpeg",
    "eighteen.jpeg",
];

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarCatalog {
    base_path: String,
}

impl AvatarCatalog {
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, file: &str) -> String {
        format!("{}/{}", self.base_path, file)
    }

    pub fn urls(&self) -> Vec<String> {
        AVATAR_FILES.iter().map(|file| self.url_for(file)).collect()
    }

    /// Map a sample in `[0, 1)` onto the catalog; out-of-range samples are clamped
    pub fn url_for_sample(&self, sample: f64) -> String {
        // Float-to-int casts saturate, so NaN and negatives land on 0
        let index = ((sample * AVATAR_FILES.len() as f64) as usize).min(AVATAR_FILES.len() - 1);
        self.url_for(AVATAR_FILES[index])
    }

    /// Uniformly random avatar, browser only
    pub fn random_url(&self) -> String {
        self.url_for_sample(js_sys::Math::random())
    }
}

impl Default for AvatarCatalog {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls_are_root_paths() {
        let urls = AvatarCatalog::default().urls();

        assert_eq!(urls.len(), 18);
        assert_eq!(urls[0], "/one.jpeg");
        assert_eq!(urls[17], "/eighteen.jpeg");
        assert!(urls.iter().all(|url| url.starts_with('/') && url.ends_with(".jpeg")));
    }

    #[test]
    fn test_every_sample_maps_into_catalog() {
        let catalog = AvatarCatalog::default();
        let urls = catalog.urls();

        for step in 0..=1000 {
            let sample = step as f64 / 1000.0;
            assert!(urls.contains(&catalog.url_for_sample(sample)));
        }
        for sample in [-1.0, 1.0, 7.5, f64::NAN, f64::INFINITY] {
            assert!(urls.contains(&catalog.url_for_sample(sample)));
        }
    }

    #[test]
    fn test_samples_cover_each_avatar_evenly() {
        let catalog = AvatarCatalog::default();

        assert_eq!(catalog.url_for_sample(0.0), "/one.jpeg");
        assert_eq!(catalog.url_for_sample(1.0 / 18.0 + 1e-9), "/two.jpeg");
        assert_eq!(catalog.url_for_sample(0.999_999), "/eighteen.jpeg");
    }

    #[test]
    fn test_custom_base_path() {
        let catalog = AvatarCatalog::new("/static/avatars/");
        assert_eq!(catalog.url_for_sample(0.0), "/static/avatars/one.jpeg");
    }
}
