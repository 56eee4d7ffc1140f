use walkers::{
    sources::{Attribution, TileSource},
    TileId,
};

use crate::config::TileProviderConfig;

/// Raster tiles addressed by a `{s}/{z}/{x}/{y}` URL template.
pub struct TemplateTiles {
    config: TileProviderConfig,
}

impl TemplateTiles {
    pub fn new(config: TileProviderConfig) -> Self {
        Self { config }
    }

    /// Subdomains rotate with `x + y` so neighbouring tiles hit different hosts.
    fn subdomain(&self, x: u32, y: u32) -> &'static str {
        match self.config.subdomains.len() {
            0 => "",
            n => self.config.subdomains[(x as usize + y as usize) % n],
        }
    }

    pub fn url(&self, zoom: u8, x: u32, y: u32) -> String {
        self.config
            .url_template
            .replace("{s}", self.subdomain(x, y))
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

impl TileSource for TemplateTiles {
    fn tile_url(&self, tile_id: TileId) -> String {
        self.url(tile_id.zoom, tile_id.x, tile_id.y)
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.config.attribution,
            url: self.config.attribution_url,
            logo_light: None,
            logo_dark: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_substitutes_placeholders() {
        let tiles = TemplateTiles::new(TileProviderConfig::default());
        assert_eq!(
            tiles.url(13, 5000, 2560),
            "https://a.tile.openstreetmap.org/13/5000/2560.png"
        );
    }

    #[test]
    fn test_subdomains_rotate() {
        let tiles = TemplateTiles::new(TileProviderConfig::default());
        assert!(tiles.url(13, 1, 0).starts_with("https://b."));
        assert!(tiles.url(13, 1, 1).starts_with("https://c."));
        assert!(tiles.url(13, 2, 1).starts_with("https://a."));
    }

    #[test]
    fn test_template_without_subdomains() {
        let tiles = TemplateTiles::new(TileProviderConfig {
            url_template: "https://tiles.example.org/{z}/{x}/{y}.png",
            subdomains: &[],
            ..TileProviderConfig::default()
        });
        assert_eq!(tiles.url(1, 0, 1), "https://tiles.example.org/1/0/1.png");
    }

    #[test]
    fn test_attribution_comes_from_config() {
        let tiles = TemplateTiles::new(TileProviderConfig::default());
        let attribution = tiles.attribution();
        assert_eq!(attribution.text, "© OpenStreetMap contributors");
        assert_eq!(attribution.url, "https://www.openstreetmap.org/copyright");
    }
}
