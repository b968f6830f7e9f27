use serde::Serialize;

use gallerydb::SearchResults;
use gallerydb::data::paginate;

use crate::mappers::{AlbumBody, ImageBody, MapContext, map_album, map_image, non_empty};

/// The JSON view of one search.  An empty result set omits its key
/// entirely - a search with no matches is just `{"thumb_size": N}`.
#[derive(Serialize)]
pub struct SearchBody
{
    pub thumb_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageBody>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<AlbumBody>>,
}

/// Maps search results: matched images in non-verbose form,
/// matched albums thumb-only.  The store has already sorted both
/// sets by date descending.
pub fn map_search(ctx: MapContext<'_>, results: &SearchResults<'_>) -> SearchBody
{
    let gallery = ctx.store.gallery();

    let (_, images) = paginate(&results.images, ctx.page, gallery.images_per_page);
    let (_, albums) = paginate(&results.albums, ctx.page, gallery.albums_per_page);

    SearchBody
    {
        thumb_size: gallery.thumb_size,
        images: non_empty(images
            .iter()
            .map(|(album, image)| map_image(ctx, album, image, false))
            .collect()),
        albums: non_empty(albums
            .iter()
            .map(|album| map_album(ctx, album, 0))
            .collect()),
    }
}
