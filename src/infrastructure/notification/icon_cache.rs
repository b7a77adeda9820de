//! Turns icon references into something a desktop notification server can load
//!
//! Inline `data:` icons are written once into a cache directory, `file://`
//! URLs become paths, remote URLs are dropped, and anything else (icon theme
//! names, plain paths) passes through.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;
use url::Url;

/// Default cache directory for materialized icons
pub fn default_icon_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("nudge")
        .join("icons")
}

/// Resolve `icon` to a local path or icon name.
/// Blocking: may write to `cache_dir`.
pub fn desktop_icon(icon: &str, cache_dir: &Path) -> Option<String> {
    if let Some(data) = icon.strip_prefix("data:") {
        return materialize_data_uri(data, cache_dir);
    }
    if icon.starts_with("file://") {
        return Url::parse(icon)
            .ok()
            .and_then(|url| url.to_file_path().ok())
            .map(|path| path.to_string_lossy().into_owned());
    }
    if icon.starts_with("http://") || icon.starts_with("https://") {
        debug!(icon, "Remote icons are not supported by the desktop backend");
        return None;
    }
    Some(icon.to_string())
}

fn materialize_data_uri(data: &str, cache_dir: &Path) -> Option<String> {
    let (meta, payload) = data.split_once(',')?;
    let mime = meta.split(';').next().unwrap_or_default();
    let bytes = if meta.ends_with(";base64") {
        STANDARD.decode(payload).ok()?
    } else {
        payload.as_bytes().to_vec()
    };

    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    let path = cache_dir.join(format!("{:016x}.{}", hasher.finish(), extension_for(mime)));

    if !path.exists() {
        if let Err(e) = fs::create_dir_all(cache_dir).and_then(|_| fs::write(&path, &bytes)) {
            debug!("Failed to cache inline icon: {}", e);
            return None;
        }
    }
    Some(path.to_string_lossy().into_owned())
}

fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/svg+xml" => "svg",
        "image/png" => "png",
        "image/x-icon" | "image/vnd.microsoft.icon" => "ico",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        _ => "img",
    }
}
