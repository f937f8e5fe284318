//! IIIF image sizing.

use url::Url;

/// Rewrites IIIF image URLs to request a specific size.
///
/// IIIF image URLs carry the size as a path segment; the collection API
/// hands out `.../full/max/0/default.jpg`, which this turns into
/// `.../full/{width},{height}/0/default.jpg`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IiifImageResizer;

impl IiifImageResizer {
    const MAX_SEGMENT: &'static str = "/max/";

    /// Creates a resizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns `url` with its `max` size segment replaced.
    ///
    /// URLs without a `max` segment are returned unchanged.
    #[must_use]
    pub fn resize(&self, url: Option<&Url>, width: u32, height: u32) -> Option<Url> {
        let url = url?;
        let sized = url
            .as_str()
            .replace(Self::MAX_SEGMENT, &format!("/{width},{height}/"));
        Url::parse(&sized).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_replaces_max_segment() {
        let url = Url::parse("https://iiif.micr.io/PJEZO/full/max/0/default.jpg").ok();
        let resized = IiifImageResizer::new().resize(url.as_ref(), 300, 200);

        assert_eq!(
            resized.map(String::from).as_deref(),
            Some("https://iiif.micr.io/PJEZO/full/300,200/0/default.jpg")
        );
    }

    #[test]
    fn test_resize_without_max_segment_is_identity() {
        let url = Url::parse("https://example.com/image.jpg").ok();
        let resized = IiifImageResizer::new().resize(url.as_ref(), 10, 10);
        assert_eq!(resized, url);
    }

    #[test]
    fn test_resize_none() {
        assert_eq!(IiifImageResizer::new().resize(None, 10, 10), None);
    }
}
