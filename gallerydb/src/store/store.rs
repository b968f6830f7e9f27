use std::path::Path;

use crate::Error;
use crate::data::{Album, Gallery, Image};

/// Read-only access to one gallery object graph.  Loaded once at
/// startup; every lookup borrows from the loaded tree.
pub struct Store
{
    gallery: Gallery,
}

impl Store
{
    pub fn load(path: &Path) -> Result<Store, Error>
    {
        let contents = std::fs::read_to_string(path)?;

        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Store, Error>
    {
        let mut gallery: Gallery = serde_json::from_str(json)?;

        gallery.normalize();

        let store = Store { gallery };
        store.validate()?;

        Ok(store)
    }

    fn validate(&self) -> Result<(), Error>
    {
        let mut seen = std::collections::BTreeSet::new();

        fn check(album: &Album, parent_path: Option<&str>, seen: &mut std::collections::BTreeSet<String>) -> Result<(), Error>
        {
            ensure!(!album.path.is_empty() && !album.path.starts_with('/') && !album.path.ends_with('/'),
                crate::ConsistencySnafu{ msg: format!("Invalid album path {:?}", album.path) });

            ensure!(seen.insert(album.path.clone()),
                crate::ConsistencySnafu{ msg: format!("Duplicate album path {:?}", album.path) });

            if let Some(parent_path) = parent_path
            {
                ensure!(album.path.strip_prefix(parent_path).map(|rest| rest.starts_with('/')).unwrap_or(false),
                    crate::ConsistencySnafu{ msg: format!("Album path {:?} does not extend its parent {:?}", album.path, parent_path) });
            }

            for child in album.albums.iter()
            {
                check(child, Some(&album.path), seen)?;
            }

            Ok(())
        }

        for album in self.gallery.albums.iter()
        {
            check(album, None, &mut seen)?;
        }

        Ok(())
    }

    pub fn gallery(&self) -> &Gallery
    {
        &self.gallery
    }

    /// Finds an album by its full slash-delimited path, at any depth.
    pub fn album(&self, path: &str) -> Option<&Album>
    {
        fn find<'a>(albums: &'a [Album], path: &str) -> Option<&'a Album>
        {
            for album in albums
            {
                if album.path == path
                {
                    return Some(album);
                }

                // Only descend into albums whose path is a prefix of
                // the target - paths extend their parents.
                if path.starts_with(&format!("{}/", album.path))
                {
                    return find(&album.albums, path);
                }
            }

            None
        }

        find(&self.gallery.albums, path)
    }

    pub fn image(&self, album_path: &str, filename: &str) -> Option<&Image>
    {
        self.album(album_path)?
            .images
            .iter()
            .find(|i| i.filename == filename)
    }

    pub fn parent_of(&self, path: &str) -> Option<&Album>
    {
        let (parent_path, _) = path.rsplit_once('/')?;

        self.album(parent_path)
    }

    /// The list this album is a sibling within - its parent's
    /// children, or the gallery's top-level albums.
    fn sibling_list(&self, path: &str) -> &[Album]
    {
        match self.parent_of(path)
        {
            Some(parent) => &parent.albums,
            None => &self.gallery.albums,
        }
    }

    pub fn prev_sibling(&self, path: &str) -> Option<&Album>
    {
        let siblings = self.sibling_list(path);
        let pos = siblings.iter().position(|a| a.path == path)?;

        if pos == 0
        {
            None
        }
        else
        {
            siblings.get(pos - 1)
        }
    }

    pub fn next_sibling(&self, path: &str) -> Option<&Album>
    {
        let siblings = self.sibling_list(path);
        let pos = siblings.iter().position(|a| a.path == path)?;

        siblings.get(pos + 1)
    }

    /// False if the album, or any album on the path down to it,
    /// is unpublished.
    pub fn is_access_granted(&self, path: &str) -> bool
    {
        let mut prefix = String::new();

        for segment in path.split('/')
        {
            if !prefix.is_empty()
            {
                prefix.push('/');
            }
            prefix.push_str(segment);

            match self.album(&prefix)
            {
                Some(album) if album.published => (),
                _ => return false,
            }
        }

        true
    }

    /// Every album in the tree, in depth-first declaration order.
    pub fn all_albums(&self) -> Vec<&Album>
    {
        fn walk<'a>(albums: &'a [Album], out: &mut Vec<&'a Album>)
        {
            for album in albums
            {
                out.push(album);
                walk(&album.albums, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.gallery.albums, &mut out);
        out
    }
}
