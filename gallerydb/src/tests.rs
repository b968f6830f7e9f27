use std::io::Write;

use crate::*;
use crate::data::{Page, paginate};

pub fn fixture_json() -> &'static str
{
    r#"
    {
        "title": "Test Gallery",
        "description": "Fixture gallery",
        "image_size": 1024,
        "thumb_size": 200,
        "images_per_page": 2,
        "albums_per_page": 2,
        "albums": [
            {
                "path": "album1",
                "title": "Album One",
                "date": "2014-01-01 10:00:00",
                "date_updated": "2014-06-01 10:00:00",
                "mtime": "2014-06-01 10:00:00",
                "hits": 50,
                "rating": 4.5,
                "votes": 10,
                "images": [
                    {
                        "filename": "alpha.jpg",
                        "title": "Alpha",
                        "date": "2014-01-02 10:00:00",
                        "width": 800, "height": 600,
                        "hits": 5,
                        "tags": ["san francisco", "bridge"]
                    },
                    {
                        "filename": "beta.jpg",
                        "title": "Beta",
                        "description": "",
                        "date": "2014-01-03 10:00:00",
                        "width": 800, "height": 600,
                        "hits": 9
                    },
                    {
                        "filename": "gamma.jpg",
                        "date": "2014-01-04 10:00:00",
                        "width": 640, "height": 480
                    }
                ],
                "albums": [
                    {
                        "path": "album1/sub1",
                        "title": "Sub One",
                        "date": "2014-02-01 10:00:00",
                        "images": [
                            {
                                "filename": "nested.jpg",
                                "title": "Nested",
                                "date": "2014-02-02 10:00:00",
                                "width": 800, "height": 600
                            }
                        ],
                        "albums": [
                            {
                                "path": "album1/sub1/subsub1",
                                "title": "Sub Sub One",
                                "date": "2014-03-01 10:00:00",
                                "images": [
                                    {
                                        "filename": "deep.jpg",
                                        "date": "2014-03-02 10:00:00",
                                        "width": 800, "height": 600
                                    }
                                ]
                            }
                        ]
                    }
                ]
            },
            {
                "path": "album2",
                "title": "Album Two",
                "date": "2015-01-01 10:00:00",
                "hits": 90,
                "rating": 3.0,
                "votes": 2,
                "images": [
                    {
                        "filename": "city.jpg",
                        "title": "San Francisco skyline",
                        "date": "2015-01-02 10:00:00",
                        "width": 800, "height": 600,
                        "hits": 100
                    }
                ]
            },
            {
                "path": "unpublished_album",
                "title": "Hidden",
                "date": "2013-01-01 10:00:00",
                "published": false,
                "images": [
                    {
                        "filename": "secret.jpg",
                        "title": "San Francisco secret",
                        "date": "2013-01-02 10:00:00",
                        "width": 800, "height": 600
                    }
                ]
            }
        ]
    }
    "#
}

pub fn fixture_store() -> Store
{
    Store::from_json(fixture_json()).unwrap()
}

#[test]
pub fn test_load_from_file()
{
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(fixture_json().as_bytes()).unwrap();

    let store = Store::load(file.path()).unwrap();

    assert_eq!(store.gallery().title.as_deref(), Some("Test Gallery"));
    assert_eq!(store.gallery().albums.len(), 3);
}

#[test]
pub fn test_normalize_empty_strings()
{
    let store = fixture_store();

    // beta.jpg declares an empty description - it must load as None
    let image = store.image("album1", "beta.jpg").unwrap();
    assert_eq!(image.description, None);
}

#[test]
pub fn test_album_lookup()
{
    let store = fixture_store();

    assert!(store.album("album1").is_some());
    assert!(store.album("album1/sub1").is_some());
    assert!(store.album("album1/sub1/subsub1").is_some());
    assert!(store.album("noSuchAlbum").is_none());
    assert!(store.album("album1/noSuchSub").is_none());

    assert!(store.image("album1", "alpha.jpg").is_some());
    assert!(store.image("album1", "noSuchImage.jpg").is_none());
}

#[test]
pub fn test_navigation()
{
    let store = fixture_store();

    assert!(store.parent_of("album1").is_none());
    assert_eq!(store.parent_of("album1/sub1").unwrap().path, "album1");

    assert!(store.prev_sibling("album1").is_none());
    assert_eq!(store.next_sibling("album1").unwrap().path, "album2");
    assert_eq!(store.prev_sibling("album2").unwrap().path, "album1");
    assert_eq!(store.next_sibling("album2").unwrap().path, "unpublished_album");
    assert!(store.next_sibling("unpublished_album").is_none());
}

#[test]
pub fn test_access()
{
    let store = fixture_store();

    assert!(store.is_access_granted("album1"));
    assert!(store.is_access_granted("album1/sub1/subsub1"));
    assert!(!store.is_access_granted("unpublished_album"));
    assert!(!store.is_access_granted("noSuchAlbum"));
}

#[test]
pub fn test_image_index_is_one_based()
{
    let store = fixture_store();
    let album = store.album("album1").unwrap();

    assert_eq!(album.image_index("alpha.jpg"), Some(1));
    assert_eq!(album.image_index("gamma.jpg"), Some(3));
    assert_eq!(album.image_index("missing.jpg"), None);
}

#[test]
pub fn test_consistency_checks()
{
    let duplicate = r#"{"albums": [
        {"path": "a", "date": "2014-01-01 10:00:00"},
        {"path": "a", "date": "2014-01-01 10:00:00"}
    ]}"#;
    assert!(matches!(Store::from_json(duplicate), Err(Error::ConsistencyError{..})));

    let detached = r#"{"albums": [
        {"path": "a", "date": "2014-01-01 10:00:00", "albums": [
            {"path": "elsewhere/b", "date": "2014-01-01 10:00:00"}
        ]}
    ]}"#;
    assert!(matches!(Store::from_json(detached), Err(Error::ConsistencyError{..})));
}

#[test]
pub fn test_search()
{
    let store = fixture_store();

    let results = store.search("san francisco");

    // The unpublished album's image must not match, even though its
    // title contains the query
    assert_eq!(results.images.len(), 2);

    // Date descending: the 2015 skyline image first
    assert_eq!(results.images[0].1.filename, "city.jpg");
    assert_eq!(results.images[1].1.filename, "alpha.jpg");

    let results = store.search("album");
    assert!(results.albums.len() >= 2);
    assert_eq!(results.albums[0].path, "album2");
}

#[test]
pub fn test_pagination()
{
    let store = fixture_store();
    let album = store.album("album1").unwrap();

    let (offset, page) = paginate(&album.images, Page::Number(2), 2);
    assert_eq!(offset, 2);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].filename, "gamma.jpg");

    let (_, all) = paginate(&album.images, Page::All, 2);
    assert_eq!(all.len(), 3);
}

#[test]
pub fn test_stats_popular()
{
    let store = fixture_store();
    let provider = StatsProvider::new();

    let criteria = StatCriteria { count: 2, ..StatCriteria::default() };
    let albums = provider.album_stat(&store, StatKind::Popular, &criteria);

    assert_eq!(albums.len(), 2);
    assert_eq!(albums[0].path, "album2");
    assert_eq!(albums[1].path, "album1");

    let images = provider.image_stat(&store, StatKind::Popular, &criteria);
    assert_eq!(images[0].1.filename, "city.jpg");
    assert_eq!(images[1].1.filename, "beta.jpg");
}

#[test]
pub fn test_stats_threshold_and_sort()
{
    let store = fixture_store();
    let provider = StatsProvider::new();

    let criteria = StatCriteria { count: 10, threshold: Some(60.0), ..StatCriteria::default() };
    let albums = provider.album_stat(&store, StatKind::Popular, &criteria);
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].path, "album2");

    let criteria = StatCriteria { count: 10, sort: SortOrder::Asc, ..StatCriteria::default() };
    let albums = provider.album_stat(&store, StatKind::Popular, &criteria);
    assert_eq!(albums.first().unwrap().path, "unpublished_album");
}

#[test]
pub fn test_stats_deep()
{
    let store = fixture_store();
    let provider = StatsProvider::new();

    let shallow = StatCriteria { count: 10, ..StatCriteria::default() };
    let deep = StatCriteria { count: 10, deep: true, ..StatCriteria::default() };

    assert_eq!(provider.album_stat(&store, StatKind::LatestDate, &shallow).len(), 3);
    assert_eq!(provider.album_stat(&store, StatKind::LatestDate, &deep).len(), 5);

    assert_eq!(provider.image_stat(&store, StatKind::LatestDate, &shallow).len(), 5);
    assert_eq!(provider.image_stat(&store, StatKind::LatestDate, &deep).len(), 7);
}

#[test]
pub fn test_stats_latest_updated_albums_only()
{
    let store = fixture_store();
    let provider = StatsProvider::new();

    let criteria = StatCriteria { count: 10, ..StatCriteria::default() };

    let albums = provider.album_stat(&store, StatKind::LatestUpdated, &criteria);
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].path, "album1");

    assert!(provider.image_stat(&store, StatKind::LatestUpdated, &criteria).is_empty());
}

#[test]
pub fn test_stats_random_is_deterministic()
{
    let store = fixture_store();
    let provider = StatsProvider::new();

    let criteria = StatCriteria { count: 10, ..StatCriteria::default() };

    let first: Vec<String> = provider.album_stat(&store, StatKind::Random, &criteria)
        .iter().map(|a| a.path.clone()).collect();
    let second: Vec<String> = provider.album_stat(&store, StatKind::Random, &criteria)
        .iter().map(|a| a.path.clone()).collect();

    assert_eq!(first, second);
}

#[test]
pub fn test_stat_kind_tokens()
{
    assert_eq!(StatKind::from_token("latest-publishdate"), Some(StatKind::LatestPublishdate));
    assert_eq!(StatKind::from_token("mostrated"), Some(StatKind::MostRated));
    assert_eq!(StatKind::from_token("latest_date"), None);
    assert_eq!(StatKind::from_token(""), None);
}
