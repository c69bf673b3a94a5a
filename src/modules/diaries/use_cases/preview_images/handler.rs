// Thumbnail and preview helpers consumed by the client when rendering an entry.

use crate::modules::diaries::core::feed::DisplayEntry;
use crate::shared::gesture::carousel::GestureCarousel;

/// How many thumbnails a feed row shows before the preview is opened.
pub const THUMBNAIL_LIMIT: usize = 3;

pub fn thumbnails(entry: &DisplayEntry) -> &[String] {
    let images = entry.image_urls.as_deref().unwrap_or_default();
    &images[..images.len().min(THUMBNAIL_LIMIT)]
}

/// Opens the full-size preview at the clicked thumbnail. `None` when the entry
/// has no images.
pub fn open_preview(entry: &DisplayEntry, start_index: usize) -> Option<GestureCarousel> {
    GestureCarousel::new(entry.image_urls.clone().unwrap_or_default(), start_index)
}
