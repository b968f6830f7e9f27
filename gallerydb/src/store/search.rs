use crate::data::{Album, Image};
use crate::store::Store;

/// The results of one free-text search.  Ephemeral - built per
/// request, never persisted.
pub struct SearchResults<'a>
{
    pub images: Vec<(&'a Album, &'a Image)>,
    pub albums: Vec<&'a Album>,
}

fn matches(query: &str, fields: &[Option<&str>]) -> bool
{
    fields
        .iter()
        .filter_map(|f| *f)
        .any(|f| f.to_lowercase().contains(query))
}

impl Store
{
    /// Case-insensitive free-text search over titles, descriptions
    /// and tags.  Both result sets are sorted by date descending -
    /// the JSON view always presents search results newest-first.
    /// Unpublished albums (and their contents) never match.
    pub fn search(&self, query: &str) -> SearchResults<'_>
    {
        let query = query.to_lowercase();

        let mut images = Vec::new();
        let mut albums = Vec::new();

        for album in self.all_albums()
        {
            if !self.is_access_granted(&album.path)
            {
                continue;
            }

            if matches(&query, &[
                album.title.as_deref(),
                album.description.as_deref(),
                album.custom_data.as_deref()])
            {
                albums.push(album);
            }

            for image in album.images.iter()
            {
                let tag_match = image.tags.iter().any(|t| t.to_lowercase().contains(&query));

                if tag_match || matches(&query, &[
                    image.title.as_deref(),
                    image.description.as_deref()])
                {
                    images.push((album, image));
                }
            }
        }

        // Date descending, with the path as a tie-break so that
        // identical requests always produce identical responses.
        albums.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.path.cmp(&b.path)));
        images.sort_by(|(aa, ai), (ba, bi)| {
            bi.date.cmp(&ai.date).then_with(|| ai.path(&aa.path).cmp(&bi.path(&ba.path)))
        });

        SearchResults { images, albums }
    }
}
