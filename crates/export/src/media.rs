//! Media resolver: absolute, optionally resized, store-scoped image URLs.

use recsync_catalog::{CatalogEntry, ContextSwitcher, MediaProvider, Store};

/// Sentinel the catalog stores when no image is selected for an attribute.
pub const NO_SELECTION: &str = "no_selection";

/// The entry's primary image attribute, used as fallback when the
/// configured attribute carries no usable value.
pub const PRIMARY_IMAGE_ATTRIBUTE: &str = "image";

/// Resolves the exported image URL for an entry under a store's display
/// configuration.
///
/// Resolution always runs under the target store's context (locale/domain),
/// entered through a [`ContextSwitcher`] guard so the previous context is
/// restored on every exit path, including provider failures.
pub struct MediaResolver<'a> {
    media: &'a dyn MediaProvider,
    context: &'a dyn ContextSwitcher,
}

impl<'a> MediaResolver<'a> {
    pub fn new(media: &'a dyn MediaProvider, context: &'a dyn ContextSwitcher) -> Self {
        Self { media, context }
    }

    /// Resolve the image URL, or `None` when the entry has no usable image
    /// or the media pipeline cannot produce a URL. Absence is not an error.
    pub fn resolve(&self, entry: &CatalogEntry, store: &Store) -> Option<String> {
        let config = &store.image;
        let (attribute, path) = pick_image(entry, &config.attribute)?;

        let _store_context = self.context.enter(store.id);
        let resolved = if config.cached {
            self.media
                .resized_url(entry, attribute, config.width, config.height)
        } else {
            self.media.media_url(path)
        };

        match resolved {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(
                    entry_id = %entry.id,
                    store_id = %store.id,
                    attribute,
                    error = %err,
                    "image url resolution failed, exporting without image"
                );
                None
            }
        }
    }
}

/// Pick the image attribute to export: the configured one when it carries a
/// valid value, the primary image otherwise.
fn pick_image<'e>(entry: &'e CatalogEntry, configured: &str) -> Option<(&'e str, &'e str)> {
    entry
        .image_values
        .get_key_value(configured)
        .filter(|(_, v)| is_valid_image(v))
        .or_else(|| {
            entry
                .image_values
                .get_key_value(PRIMARY_IMAGE_ATTRIBUTE)
                .filter(|(_, v)| is_valid_image(v))
        })
        .map(|(k, v)| (k.as_str(), v.as_str()))
}

fn is_valid_image(value: &str) -> bool {
    !value.is_empty() && value != NO_SELECTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use recsync_catalog::fixtures::{
        FailingMedia, RecordingContext, StaticMedia, entry, store,
    };
    use recsync_core::StoreId;

    fn cached_store(width: u32, height: Option<u32>) -> recsync_catalog::Store {
        let mut store = store(1, "default");
        store.image.cached = true;
        store.image.width = width;
        store.image.height = height;
        store
    }

    #[test]
    fn uncached_mode_resolves_the_raw_media_url() {
        let media = StaticMedia::new("https://shop.example.com");
        let context = RecordingContext::new();
        let resolver = MediaResolver::new(&media, &context);

        let url = resolver.resolve(&entry(1, "Widget"), &store(1, "default"));
        assert_eq!(
            url.as_deref(),
            Some("https://shop.example.com/media/catalog/product/p/primary.jpg")
        );
    }

    #[test]
    fn cached_mode_without_height_resizes_by_width_only() {
        let media = StaticMedia::new("https://shop.example.com");
        let context = RecordingContext::new();
        let resolver = MediaResolver::new(&media, &context);

        let url = resolver.resolve(&entry(1, "Widget"), &cached_store(400, None));
        assert_eq!(
            url.as_deref(),
            Some("https://shop.example.com/media/cache/400/p/primary.jpg")
        );
    }

    #[test]
    fn cached_mode_with_height_resizes_both_dimensions() {
        let media = StaticMedia::new("https://shop.example.com");
        let context = RecordingContext::new();
        let resolver = MediaResolver::new(&media, &context);

        let url = resolver.resolve(&entry(1, "Widget"), &cached_store(400, Some(300)));
        assert_eq!(
            url.as_deref(),
            Some("https://shop.example.com/media/cache/400x300/p/primary.jpg")
        );
    }

    #[test]
    fn configured_attribute_wins_over_primary_image() {
        let media = StaticMedia::new("https://shop.example.com");
        let context = RecordingContext::new();
        let resolver = MediaResolver::new(&media, &context);

        let mut entry = entry(1, "Widget");
        entry
            .image_values
            .insert("small_image".to_string(), "/p/small.jpg".to_string());
        let mut store = store(1, "default");
        store.image.attribute = "small_image".to_string();

        let url = resolver.resolve(&entry, &store);
        assert_eq!(
            url.as_deref(),
            Some("https://shop.example.com/media/catalog/product/p/small.jpg")
        );
    }

    #[test]
    fn no_selection_sentinel_falls_back_to_primary_image() {
        let media = StaticMedia::new("https://shop.example.com");
        let context = RecordingContext::new();
        let resolver = MediaResolver::new(&media, &context);

        let mut entry = entry(1, "Widget");
        entry
            .image_values
            .insert("small_image".to_string(), NO_SELECTION.to_string());
        let mut store = store(1, "default");
        store.image.attribute = "small_image".to_string();

        let url = resolver.resolve(&entry, &store);
        assert_eq!(
            url.as_deref(),
            Some("https://shop.example.com/media/catalog/product/p/primary.jpg")
        );
    }

    #[test]
    fn entry_without_any_valid_image_yields_none() {
        let media = StaticMedia::new("https://shop.example.com");
        let context = RecordingContext::new();
        let resolver = MediaResolver::new(&media, &context);

        let mut entry = entry(1, "Widget");
        entry.image_values.clear();

        assert_eq!(resolver.resolve(&entry, &store(1, "default")), None);
        // No image selected means the store context is never entered.
        assert_eq!(context.current(), None);
    }

    #[test]
    fn store_context_is_restored_after_success() {
        let media = StaticMedia::new("https://shop.example.com");
        let context = RecordingContext::new();
        let resolver = MediaResolver::new(&media, &context);

        let _admin = context.enter(StoreId::new(0));
        resolver.resolve(&entry(1, "Widget"), &store(3, "de"));
        assert_eq!(context.current(), Some(StoreId::new(0)));
    }

    #[test]
    fn store_context_is_restored_after_media_failure() {
        let media = FailingMedia;
        let context = RecordingContext::new();
        let resolver = MediaResolver::new(&media, &context);

        let _admin = context.enter(StoreId::new(0));
        let url = resolver.resolve(&entry(1, "Widget"), &store(3, "de"));
        assert_eq!(url, None);
        assert_eq!(context.current(), Some(StoreId::new(0)));
    }
}
