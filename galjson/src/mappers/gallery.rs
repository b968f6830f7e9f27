use serde::Serialize;

use gallerydb::data::paginate;

use crate::mappers::{AlbumBody, MapContext, map_album, non_empty};
use crate::options::RequestOptions;
use crate::stats::StatsBody;

/// The JSON view of the gallery root: the site options plus the
/// top-level albums and any requested statistics.
#[derive(Serialize)]
pub struct GalleryBody
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub image_size: u32,
    pub thumb_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<AlbumBody>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsBody>,
}

pub fn map_gallery(ctx: MapContext<'_>, depth: i32, stats: Option<StatsBody>) -> GalleryBody
{
    let gallery = ctx.store.gallery();

    let albums = if depth != 0
    {
        let child_depth = RequestOptions::child_depth(depth);
        let (_, page) = paginate(&gallery.albums, ctx.page, gallery.albums_per_page);

        non_empty(page
            .iter()
            .map(|album| map_album(ctx, album, child_depth))
            .collect())
    }
    else
    {
        None
    };

    GalleryBody
    {
        title: gallery.title.clone(),
        desc: gallery.description.clone(),
        image_size: gallery.image_size,
        thumb_size: gallery.thumb_size,
        albums,
        stats,
    }
}
