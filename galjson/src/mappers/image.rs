use std::collections::BTreeMap;

use serde::Serialize;

use gallerydb::data::{Album, Image};

use crate::mappers::MapContext;
use crate::path;

/// The JSON view of one image.  Scalar fields follow the sparse
/// policy: absent source values are omitted, never null.
#[derive(Serialize)]
pub struct ImageBody
{
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub date: i64,
    pub url_full: String,
    pub url_sized: String,
    pub url_thumb: String,
    pub width: u32,
    pub height: u32,
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Maps one image.  `verbose` adds the geolocation fields, tags
/// and the free-form metadata map - image detail requests use it,
/// listings inside albums and search results do not.
pub fn map_image(ctx: MapContext<'_>, album: &Album, image: &Image, verbose: bool) -> ImageBody
{
    let image_path = image.path(&album.path);
    let gallery = ctx.store.gallery();

    let (location, city, state, country, tags, metadata) = if verbose
    {
        (
            image.location.clone(),
            image.city.clone(),
            image.state.clone(),
            image.country.clone(),
            if image.tags.is_empty() { None } else { Some(image.tags.clone()) },
            if image.metadata.is_empty() { None } else { Some(image.metadata.clone()) },
        )
    }
    else
    {
        (None, None, None, None, None, None)
    };

    ImageBody
    {
        url_full: path::full_image_url(&image_path),
        url_sized: path::sized_image_url(&image_path, gallery.image_size),
        url_thumb: path::sized_image_url(&image_path, gallery.thumb_size),
        title: image.title.clone(),
        desc: image.description.clone(),
        date: image.date.timestamp(),
        width: image.width,
        height: image.height,
        index: album.image_index(&image.filename).unwrap_or(0),
        credit: image.credit.clone(),
        copyright: image.copyright.clone(),
        location, city, state, country, tags, metadata,
        path: image_path,
    }
}
