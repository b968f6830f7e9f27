use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::StatusCode;

use gallerydb::data::Security;

use crate::State;
use crate::context::{self, RequestTarget};
use crate::mappers::{self, Document, MapContext};
use crate::options::RequestOptions;
use crate::stats;
use crate::view;

/// The single entry point: every GET lands here.  Requests without
/// a `json` parameter are not ours to answer.
pub async fn handle(state: web::Data<State>, req: HttpRequest) -> HttpResponse
{
    let options = RequestOptions::from_query(req.query_string());

    if !options.json
    {
        return HttpResponse::NotFound().body("Not a JSON API request");
    }

    respond(&state, &req, &options)
}

fn respond(state: &State, req: &HttpRequest, options: &RequestOptions) -> HttpResponse
{
    // A closed gallery refuses everything, but still as a JSON
    // error with the full JSON response headers
    if state.store.gallery().security == Security::Closed
    {
        return error(req, StatusCode::FORBIDDEN, mappers::MSG_GALLERY_CLOSED);
    }

    let request_context = context::resolve(req.path(), options.pagination_off);

    let ctx = MapContext
    {
        store: &state.store,
        page: request_context.page,
    };

    let document = match &request_context.target
    {
        RequestTarget::GalleryRoot =>
        {
            let stats = stats::gather(state, ctx, options);

            Document::Gallery(mappers::map_gallery(ctx, options.depth, stats))
        },
        RequestTarget::Album(path) =>
        {
            match state.store.album(path)
            {
                None =>
                {
                    return error(req, StatusCode::NOT_FOUND, mappers::MSG_ALBUM_NOT_FOUND);
                },
                Some(album) =>
                {
                    if !state.store.is_access_granted(path)
                    {
                        return error(req, StatusCode::FORBIDDEN, mappers::MSG_ACCESS_DENIED);
                    }

                    Document::Album(mappers::map_album(ctx, album, options.depth))
                },
            }
        },
        RequestTarget::Image { album, filename } =>
        {
            match state.store.album(album)
            {
                None =>
                {
                    return error(req, StatusCode::NOT_FOUND, mappers::MSG_ALBUM_NOT_FOUND);
                },
                Some(album_entity) =>
                {
                    if !state.store.is_access_granted(album)
                    {
                        return error(req, StatusCode::FORBIDDEN, mappers::MSG_ACCESS_DENIED);
                    }

                    match state.store.image(album, filename)
                    {
                        None =>
                        {
                            return error(req, StatusCode::NOT_FOUND, mappers::MSG_IMAGE_NOT_FOUND);
                        },
                        Some(image) =>
                        {
                            Document::Image(mappers::map_image(ctx, album_entity, image, true))
                        },
                    }
                },
            }
        },
        RequestTarget::Search(query) =>
        {
            let results = state.store.search(query);

            Document::Search(mappers::map_search(ctx, &results))
        },
    };

    view::json_response(req, StatusCode::OK, &document)
}

fn error(req: &HttpRequest, status: StatusCode, message: &str) -> HttpResponse
{
    view::json_response(req, status, &mappers::map_error(status.as_u16(), message))
}
