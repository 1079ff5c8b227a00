pub mod error;
pub mod geometry;
pub mod icon;
pub mod style;

use std::path::{Path, PathBuf};

use tracing::info;

pub use error::IconError;
pub use icon::render;

/// Icon edge lengths the SafeLink extension manifest references, ascending.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// File name an icon of `size` pixels is saved under.
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Render one icon and save it as `icon<size>.png` inside `dir`.
pub fn write_icon(dir: impl AsRef<Path>, size: u32) -> Result<PathBuf, IconError> {
    let icon = render(size)?;
    let path = dir.as_ref().join(icon_file_name(size));
    icon.save_with_format(&path, image::ImageFormat::Png)
        .map_err(|source| IconError::Image { path: path.clone(), source })?;
    info!(size, path = %path.display(), "icon written");
    Ok(path)
}

/// Render every size in [`ICON_SIZES`] and save it as a PNG inside `dir`.
///
/// Icons are written in ascending size order and the written paths are
/// returned in the same order. The first failure aborts the run; files
/// already written are left in place.
pub fn write_icons(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, IconError> {
    let dir = dir.as_ref();
    ICON_SIZES.iter().map(|&size| write_icon(dir, size)).collect()
}
