//! Slide asset lookup.
//!
//! Image references are resolved against the directory of the content file
//! the way a web app resolves them against its public root: `/images/a.png`
//! and `images/a.png` both mean `<content dir>/images/a.png`. Remote URLs are
//! never fetched.

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tracing::debug;

/// What is known about a slide's image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    /// Not probed yet; the slide has not been visible
    Pending,
    Ready { bytes: u64 },
    /// http(s) reference, shown by name only
    Remote,
    Missing(String),
}

impl AssetStatus {
    pub fn label(&self) -> String {
        match self {
            AssetStatus::Pending => "loading…".to_string(),
            AssetStatus::Ready { bytes } => format_size(*bytes),
            AssetStatus::Remote => "remote".to_string(),
            AssetStatus::Missing(reason) => format!("missing: {reason}"),
        }
    }
}

/// Result of one background probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUpdate {
    pub index: usize,
    pub status: AssetStatus,
}

pub fn is_remote(image: &str) -> bool {
    image.starts_with("http://") || image.starts_with("https://")
}

/// Local path for an image reference, `None` for remote URLs
pub fn resolve_asset_path(image: &str, base: &Path) -> Option<PathBuf> {
    if is_remote(image) {
        return None;
    }
    Some(base.join(image.trim_start_matches('/')))
}

/// Stat the asset behind `image`
pub async fn probe_asset(image: &str, base: &Path) -> AssetStatus {
    let Some(path) = resolve_asset_path(image, base) else {
        return AssetStatus::Remote;
    };
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => AssetStatus::Ready { bytes: meta.len() },
        Ok(_) => AssetStatus::Missing("not a file".to_string()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Asset probe failed");
            AssetStatus::Missing(e.kind().to_string())
        }
    }
}

/// Probe `image` on the runtime and report back on `tx`
pub fn spawn_asset_probe(
    index: usize,
    image: String,
    base: PathBuf,
    tx: mpsc::UnboundedSender<AssetUpdate>,
) {
    tokio::spawn(async move {
        let status = probe_asset(&image, &base).await;
        // Receiver gone means the viewer already quit
        let _ = tx.send(AssetUpdate { index, status });
    });
}

fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f >= KIB * KIB {
        format!("{:.1} MiB", bytes_f / (KIB * KIB))
    } else if bytes_f >= KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{bytes} B")
    }
}
