//! Image file picking
//!
//! Native file dialogs (via `rfd`) for product and contact images.

use champa_api::{ALLOWED_EXTENSIONS, check_image};
use champa_core::{ShopError, ShopResult};
use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};

/// Display name for the file filter
pub const FILE_TYPE_NAME: &str = "Images";

/// Open a file dialog to pick an image
///
/// Returns None if the dialog was cancelled.
pub async fn show_image_dialog(title: &str) -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title(title)
        .add_filter(FILE_TYPE_NAME, ALLOWED_EXTENSIONS)
        .pick_file()
        .await?;

    Some(file.path().to_path_buf())
}

/// Pick an image and check it against the upload rules
pub async fn pick_image(title: &str) -> ShopResult<PathBuf> {
    let path = show_image_dialog(title).await.ok_or(ShopError::Cancelled)?;
    check_image(&path).await?;
    Ok(path)
}

/// Reference stored with a locally added product
pub fn image_reference(path: &Path) -> String {
    path.display().to_string()
}

/// File name shown next to an attached image
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/tmp/designs/shirt.png")), "shirt.png");
        assert_eq!(image_reference(Path::new("a/b.jpg")), "a/b.jpg");
    }
}
