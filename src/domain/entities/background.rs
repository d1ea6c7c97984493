//! Background image list returned by the public image provider.

use rand::Rng;
use serde::Deserialize;

/// Response body of the image provider: `{ "data": [ { "image_url": ... } ] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageList {
    #[serde(default)]
    pub data: Vec<ImageEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageEntry {
    pub image_url: String,
}

impl ImageList {
    /// Picks one entry uniformly at random, skipping entries without a URL.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&ImageEntry> {
        let usable: Vec<&ImageEntry> = self
            .data
            .iter()
            .filter(|entry| !entry.image_url.trim().is_empty())
            .collect();

        if usable.is_empty() {
            return None;
        }

        Some(usable[rng.random_range(0..usable.len())])
    }
}

impl ImageEntry {
    /// CSS `background-image` value for this entry.
    pub fn css_value(&self) -> String {
        format!("url({})", self.image_url.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_provider_body() {
        let body = r#"{"code":200,"data":[{"image_url":"http://x/1.png","title":"t"}]}"#;
        let list: ImageList = serde_json::from_str(body).unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].css_value(), "url(http://x/1.png)");
    }

    #[test]
    fn test_missing_data_is_empty() {
        let list: ImageList = serde_json::from_str(r#"{"code":500}"#).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(list.pick(&mut rng).is_none());
    }

    #[test]
    fn test_pick_single_entry_is_deterministic() {
        let list = ImageList {
            data: vec![ImageEntry {
                image_url: "http://x/1.png".to_string(),
            }],
        };
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(
                list.pick(&mut rng).map(|e| e.image_url.as_str()),
                Some("http://x/1.png")
            );
        }
    }

    #[test]
    fn test_pick_skips_blank_urls() {
        let list = ImageList {
            data: vec![
                ImageEntry {
                    image_url: " ".to_string(),
                },
                ImageEntry {
                    image_url: "http://x/2.png".to_string(),
                },
            ],
        };
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            list.pick(&mut rng).map(|e| e.image_url.as_str()),
            Some("http://x/2.png")
        );
    }

    #[test]
    fn test_pick_stays_in_range() {
        let list = ImageList {
            data: (0..5)
                .map(|i| ImageEntry {
                    image_url: format!("http://x/{i}.png"),
                })
                .collect(),
        };
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(list.pick(&mut rng).is_some());
        }
    }
}
