use std::collections::BTreeMap;

use serde::Deserialize;

use crate::data::Date;

/// A single image within an album.  A read-only snapshot - the
/// service never mutates these.
#[derive(Debug, Clone, Deserialize)]
pub struct Image
{
    pub filename: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub date: Date,
    #[serde(default)]
    pub mtime: Option<Date>,
    #[serde(default)]
    pub date_published: Option<Date>,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub credit: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub votes: u32,
}

impl Image
{
    /// The album-relative path of this image, e.g. `album1/sub/pic.jpg`.
    pub fn path(&self, album_path: &str) -> String
    {
        format!("{}/{}", album_path, self.filename)
    }

    /// Clears out empty optional strings so that the sparse-object
    /// policy only ever has to test for `None`.
    pub(crate) fn normalize(&mut self)
    {
        for field in [
            &mut self.title, &mut self.description,
            &mut self.credit, &mut self.copyright,
            &mut self.location, &mut self.city,
            &mut self.state, &mut self.country].iter_mut()
        {
            if field.as_deref() == Some("")
            {
                **field = None;
            }
        }
    }
}
