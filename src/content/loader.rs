//! Profile loading
//!
//! 默认档案在编译期内嵌，运行时可用外部 TOML 覆盖

use std::path::Path;

use rust_embed::Embed;
use tracing::{debug, info};

use super::Profile;
use crate::errors::{Result, TermfolioError};

// 使用 RustEmbed 自动嵌入默认内容
#[derive(Embed)]
#[folder = "assets/"]
struct ContentAssets;

const DEFAULT_PROFILE: &str = "portfolio.toml";
const BANNER: &str = "banner.txt";

/// Load the profile named by config, falling back to the embedded default
/// when no path is configured.
pub fn load_profile(path: &str) -> Result<Profile> {
    if path.trim().is_empty() {
        debug!("No profile path configured, using embedded default");
        load_default_profile()
    } else {
        load_profile_from_path(path)
    }
}

/// Parse the embedded `portfolio.toml`.
pub fn load_default_profile() -> Result<Profile> {
    let file = ContentAssets::get(DEFAULT_PROFILE).ok_or_else(|| {
        TermfolioError::content_load(format!("embedded asset {} missing", DEFAULT_PROFILE))
    })?;
    let raw = String::from_utf8_lossy(&file.data);
    let profile: Profile = toml::from_str(&raw)
        .map_err(|e| TermfolioError::content_load(format!("embedded profile invalid: {}", e)))?;
    Ok(profile)
}

/// Parse a user-provided profile file.
pub fn load_profile_from_path<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        TermfolioError::content_load(format!("cannot read {}: {}", path.display(), e))
    })?;
    let profile: Profile = toml::from_str(&raw)
        .map_err(|e| TermfolioError::content_load(format!("{}: {}", path.display(), e)))?;
    info!("Loaded profile from {}", path.display());
    Ok(profile)
}

/// The hero banner. Empty string when the asset is absent.
pub fn banner_art() -> String {
    match ContentAssets::get(BANNER) {
        Some(file) => String::from_utf8_lossy(&file.data).into_owned(),
        None => String::new(),
    }
}
