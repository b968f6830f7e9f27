use gallerydb::data::Page;

fn decode(s: &str) -> String
{
    urlencoding::decode(s).unwrap_or_else(|_| s.to_owned())
}

/// What the request URL points at.  Exactly one of these per
/// request - the routing outcome the dispatcher acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTarget
{
    GalleryRoot,
    Album(String),
    Image { album: String, filename: String },
    Search(String),
}

/// The immutable per-request view of the routing state: the
/// target entity plus the resolved page of paginated listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext
{
    pub target: RequestTarget,
    pub page: Page,
}

/// Resolves a request path into a context.  URL shapes:
///
///   /                            gallery root
///   /page/2/                     gallery root, page 2
///   /album1/sub/                 album
///   /album1/page/2/              album, page 2
///   /album1/photo.jpg            image
///   /page/search/<words>/        search
///   /page/search/<words>/2/      search, page 2
pub fn resolve(path: &str, pagination_off: bool) -> RequestContext
{
    let mut segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode)
        .collect();

    let mut page_number = 1;

    let make_page = |n: u32| {
        if pagination_off { Page::All } else { Page::Number(n) }
    };

    // Search: /page/search/<words>[/<n>]
    if segments.len() >= 3 && segments[0] == "page" && segments[1] == "search"
    {
        if segments.len() >= 4
        {
            if let Ok(n) = segments[3].parse::<u32>()
            {
                page_number = n;
            }
        }

        return RequestContext
        {
            target: RequestTarget::Search(segments[2].clone()),
            page: make_page(page_number),
        };
    }

    // Trailing /page/<n> on the gallery root or an album
    if segments.len() >= 2 && segments[segments.len() - 2] == "page"
    {
        if let Ok(n) = segments[segments.len() - 1].parse::<u32>()
        {
            page_number = n;
            segments.truncate(segments.len() - 2);
        }
    }

    let target = if segments.is_empty()
    {
        RequestTarget::GalleryRoot
    }
    else if segments[segments.len() - 1].contains('.')
    {
        let filename = segments.pop().unwrap();
        RequestTarget::Image
        {
            album: segments.join("/"),
            filename,
        }
    }
    else
    {
        RequestTarget::Album(segments.join("/"))
    };

    RequestContext { target, page: make_page(page_number) }
}
