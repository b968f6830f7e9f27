/// The query-string knobs recognized on every request.  The stat
/// keys are dynamic (`popular-albums`, `latest-date_images`, ...)
/// so the raw decoded pairs are kept for the stats module to
/// inspect.
#[derive(Debug)]
pub struct RequestOptions
{
    /// Whether the `json` parameter was present at all.
    pub json: bool,

    /// Album recursion depth: -1 unbounded, 0 thumb-only, N levels.
    pub depth: i32,

    /// `pagination=off` - return every item instead of one page.
    pub pagination_off: bool,

    /// All decoded query pairs, in order.
    pub pairs: Vec<(String, String)>,
}

const DEFAULT_DEPTH: i32 = 1;
const UNBOUNDED_DEPTH: i32 = -1;

fn decode(s: &str) -> String
{
    urlencoding::decode(s).unwrap_or_else(|_| s.to_owned())
}

impl RequestOptions
{
    pub fn from_query(query: &str) -> Self
    {
        let pairs: Vec<(String, String)> = query
            .split('&')
            .filter(|p| !p.is_empty())
            .map(|p| {
                match p.find('=')
                {
                    Some(pos) => (decode(&p[..pos]), decode(&p[pos + 1..])),
                    None => (decode(p), String::new()),
                }
            })
            .collect();

        let value_of = |key: &str| {
            pairs.iter().find(|(k, _)| k.as_str() == key).map(|(_, v)| v.as_str())
        };

        let json = value_of("json").is_some();

        // json=deep is the legacy way to request unbounded descent;
        // an explicit depth parameter supersedes it.
        let mut depth = match value_of("json")
        {
            Some("deep") => UNBOUNDED_DEPTH,
            _ => DEFAULT_DEPTH,
        };

        if let Some(value) = value_of("depth")
        {
            if let Ok(explicit) = value.parse::<i32>()
            {
                depth = explicit;
            }
        }

        let pagination_off = value_of("pagination") == Some("off");

        RequestOptions { json, depth, pagination_off, pairs }
    }

    /// The depth at which children of the current level are mapped.
    pub fn child_depth(depth: i32) -> i32
    {
        if depth < 0
        {
            depth
        }
        else
        {
            depth - 1
        }
    }
}
