use std::path::PathBuf;

use thiserror::Error;

/// Largest icon edge, in pixels, that [`crate::icon::render`] accepts.
pub const MAX_ICON_SIZE: u32 = 4096;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon size must be positive")]
    ZeroSize,

    #[error("icon size {size} is too small to draw a shield")]
    DegenerateShield { size: u32 },

    #[error("icon size {size} exceeds the {max}px limit")]
    TooLarge { size: u32, max: u32 },

    #[error("failed to write {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
