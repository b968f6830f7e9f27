use std::sync::Arc;

use actix_web::{test, web, App};
use actix_web::dev::ServiceResponse;

use crate::{dispatch, State};

pub fn fixture_json() -> &'static str
{
    r#"
    {
        "title": "Test Gallery",
        "description": "Fixture gallery",
        "image_size": 1024,
        "thumb_size": 200,
        "images_per_page": 2,
        "albums_per_page": 10,
        "albums": [
            {
                "path": "album1",
                "title": "Album One",
                "description": "The first album",
                "custom_data": "custom",
                "date": "2014-01-01 10:00:00",
                "date_updated": "2014-06-01 10:00:00",
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
                        "credit": "A. Photographer",
                        "copyright": "(c) 2014",
                        "location": "Golden Gate",
                        "city": "San Francisco",
                        "state": "CA",
                        "country": "USA",
                        "tags": ["bridge", "san francisco"],
                        "metadata": {"EXIFMake": "Nikon"}
                    },
                    {
                        "filename": "beta.jpg",
                        "title": "Beta",
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

pub fn fixture_store() -> Arc<gallerydb::Store>
{
    Arc::new(gallerydb::Store::from_json(fixture_json()).unwrap())
}

pub fn make_state(enable_stats: bool) -> State
{
    State
    {
        store: fixture_store(),
        stats: if enable_stats { Some(gallerydb::StatsProvider::new()) } else { None },
    }
}

pub fn closed_state() -> State
{
    let json = fixture_json().replace(
        "\"title\": \"Test Gallery\",",
        "\"title\": \"Test Gallery\", \"security\": \"closed\",");

    State
    {
        store: Arc::new(gallerydb::Store::from_json(&json).unwrap()),
        stats: None,
    }
}

pub async fn get(state: State, uri: &str) -> ServiceResponse
{
    get_with_headers(state, uri, &[]).await
}

pub async fn get_with_headers(state: State, uri: &str, headers: &[(&str, &str)]) -> ServiceResponse
{
    let mut app = test::init_service(
        App::new()
            .data(state)
            .route("/{tail:.*}", web::get().to(dispatch::handle))).await;

    let mut req = test::TestRequest::with_uri(uri);

    for (name, value) in headers
    {
        req = req.header(*name, *value);
    }

    test::call_service(&mut app, req.to_request()).await
}

pub async fn get_json(state: State, uri: &str) -> serde_json::Value
{
    let response = get(state, uri).await;
    let body = test::read_body(response).await;

    serde_json::from_slice(&body).unwrap()
}
