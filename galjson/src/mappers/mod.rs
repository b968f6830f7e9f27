use serde::Serialize;

use gallerydb::Store;
use gallerydb::data::Page;

mod album;
mod error;
mod gallery;
mod image;
mod search;

pub use album::*;
pub use error::*;
pub use gallery::*;
pub use image::*;
pub use search::*;

/// Everything a mapper needs beyond the entity itself: the store
/// (for navigation and option lookups) and the page of paginated
/// listings the request resolved to.
#[derive(Clone, Copy)]
pub struct MapContext<'a>
{
    pub store: &'a Store,
    pub page: Page,
}

/// A successful top-level response body.  Serializes externally
/// tagged, giving the wire shape `{"album": {...}}` etc. - exactly
/// one entity key per response.
#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Document
{
    Gallery(GalleryBody),
    Album(AlbumBody),
    Image(ImageBody),
    Search(SearchBody),
}

/// Sparse-object policy for list fields: an empty list is omitted
/// from the output entirely.
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>>
{
    if items.is_empty()
    {
        None
    }
    else
    {
        Some(items)
    }
}
