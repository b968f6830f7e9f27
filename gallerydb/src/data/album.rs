use serde::Deserialize;

use crate::data::{Date, Image};

fn default_published() -> bool
{
    true
}

/// A node in the album tree.  `path` is the full slash-delimited
/// path from the gallery root, e.g. `album1/subalbum`.
#[derive(Debug, Clone, Deserialize)]
pub struct Album
{
    pub path: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custom_data: Option<String>,
    pub date: Date,
    #[serde(default)]
    pub date_updated: Option<Date>,
    #[serde(default)]
    pub mtime: Option<Date>,
    #[serde(default)]
    pub date_published: Option<Date>,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub votes: u32,
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Album
{
    /// The image used to render this album's thumbnail: the
    /// declared `thumb` filename if it names a direct image,
    /// otherwise the first direct image, otherwise the first
    /// sub-album's thumbnail.
    pub fn thumb_image(&self) -> Option<(&Album, &Image)>
    {
        if let Some(thumb) = &self.thumb
        {
            if let Some(image) = self.images.iter().find(|i| i.filename == *thumb)
            {
                return Some((self, image));
            }
        }

        if let Some(image) = self.images.first()
        {
            return Some((self, image));
        }

        self.albums.iter().filter_map(|a| a.thumb_image()).next()
    }

    /// 1-based position of an image within this album's full
    /// (unpaginated) image list.
    pub fn image_index(&self, filename: &str) -> Option<usize>
    {
        self.images.iter().position(|i| i.filename == filename).map(|p| p + 1)
    }

    /// The update timestamp, if present and positive.  Negative
    /// timestamps occur on albums with no direct child images and
    /// are treated as absent.
    pub fn effective_date_updated(&self) -> Option<Date>
    {
        self.date_updated.filter(|d| d.timestamp() > 0)
    }

    pub(crate) fn normalize(&mut self)
    {
        for field in [
            &mut self.title,
            &mut self.description,
            &mut self.custom_data].iter_mut()
        {
            if field.as_deref() == Some("")
            {
                **field = None;
            }
        }

        for album in self.albums.iter_mut()
        {
            album.normalize();
        }

        for image in self.images.iter_mut()
        {
            image.normalize();
        }
    }
}
