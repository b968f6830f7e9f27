use serde::Serialize;

use gallerydb::data::{Album, paginate};

use crate::mappers::{ImageBody, MapContext, map_image, non_empty};
use crate::options::RequestOptions;
use crate::path;

/// The JSON view of one album.  The `albums`, `images` and
/// neighbor fields only appear at depth != 0; the neighbors are
/// themselves always mapped at depth 0 (thumb-only) so that the
/// parent/next/prev graph can never be followed further.
#[derive(Serialize)]
pub struct AlbumBody
{
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unpublished: Option<bool>,
    pub image_size: u32,
    pub thumb_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<AlbumBody>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageBody>>,
    // 'parent' would be the natural name but it's a reserved word
    // in javascript, which trips up naive clients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_album: Option<Box<AlbumBody>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Box<AlbumBody>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<Box<AlbumBody>>,
}

pub fn map_album(ctx: MapContext<'_>, album: &Album, depth: i32) -> AlbumBody
{
    let gallery = ctx.store.gallery();

    let url_thumb = album.thumb_image()
        .map(|(thumb_album, thumb)| path::sized_image_url(&thumb.path(&thumb_album.path), gallery.thumb_size));

    let mut body = AlbumBody
    {
        path: album.path.clone(),
        title: album.title.clone(),
        desc: album.description.clone(),
        date: album.date.timestamp(),
        date_updated: album.effective_date_updated().map(|d| d.timestamp()),
        customdata: album.custom_data.clone(),
        unpublished: if album.published { None } else { Some(true) },
        image_size: gallery.image_size,
        thumb_size: gallery.thumb_size,
        url_thumb,
        albums: None,
        images: None,
        parent_album: None,
        next: None,
        prev: None,
    };

    if depth != 0
    {
        let child_depth = RequestOptions::child_depth(depth);

        let (_, albums) = paginate(&album.albums, ctx.page, gallery.albums_per_page);
        body.albums = non_empty(albums
            .iter()
            .map(|child| map_album(ctx, child, child_depth))
            .collect());

        let (_, images) = paginate(&album.images, ctx.page, gallery.images_per_page);
        body.images = non_empty(images
            .iter()
            .map(|image| map_image(ctx, album, image, false))
            .collect());

        body.parent_album = ctx.store.parent_of(&album.path)
            .map(|parent| Box::new(map_album(ctx, parent, 0)));
        body.next = ctx.store.next_sibling(&album.path)
            .map(|next| Box::new(map_album(ctx, next, 0)));
        body.prev = ctx.store.prev_sibling(&album.path)
            .map(|prev| Box::new(map_album(ctx, prev, 0)));
    }

    body
}
