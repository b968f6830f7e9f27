use serde::Deserialize;

use crate::data::Album;

/// Whether the gallery is open to anonymous viewers at all.
/// A closed gallery refuses every request with a 403.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Security
{
    Public,
    Closed,
}

impl Default for Security
{
    fn default() -> Self
    {
        Security::Public
    }
}

fn default_image_size() -> u32
{
    1024
}

fn default_thumb_size() -> u32
{
    200
}

fn default_per_page() -> usize
{
    20
}

/// The root of the gallery object graph, as loaded from the
/// definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct Gallery
{
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_image_size")]
    pub image_size: u32,
    #[serde(default = "default_thumb_size")]
    pub thumb_size: u32,
    #[serde(default = "default_per_page")]
    pub images_per_page: usize,
    #[serde(default = "default_per_page")]
    pub albums_per_page: usize,
    #[serde(default)]
    pub security: Security,
    #[serde(default)]
    pub albums: Vec<Album>,
}

impl Gallery
{
    pub(crate) fn normalize(&mut self)
    {
        for field in [&mut self.title, &mut self.description].iter_mut()
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
    }
}
