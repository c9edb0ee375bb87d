use gpui::{AssetSource, SharedString};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Icons compiled into the binary
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!("Asset not found: {}", path).into())
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter(|p| p.starts_with(path))
            .map(SharedString::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_are_embedded() {
        for icon in [
            "icons/pin.svg",
            "icons/pin-filled.svg",
            "icons/copy.svg",
            "icons/close.svg",
            "icons/minimize.svg",
            "icons/maximize.svg",
        ] {
            assert!(Assets::get(icon).is_some(), "missing {}", icon);
        }
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        assert!(Assets.load("icons/nope.svg").is_err());
        assert!(!Assets.list("icons/").unwrap().is_empty());
    }
}
