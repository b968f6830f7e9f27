use std::collections::BTreeMap;

use serde::Serialize;

use gallerydb::{ALBUM_STAT_KINDS, IMAGE_STAT_KINDS, STATS_PLUGIN_NAME};
use gallerydb::{SortOrder, StatCriteria, StatKind, StatsProvider};

use crate::State;
use crate::mappers::{AlbumBody, ImageBody, MapContext, map_album, map_image};
use crate::options::RequestOptions;

/// The `stats` portion of a gallery response.  Either the album /
/// image result maps, or a single error string - never both: one
/// bad stat parameter blanks out every stat for the request.
#[derive(Serialize)]
pub struct StatsBody
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<BTreeMap<&'static str, Vec<AlbumBody>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<BTreeMap<&'static str, Vec<ImageBody>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatsBody
{
    fn error<T: Into<String>>(message: T) -> Self
    {
        StatsBody { album: None, image: None, error: Some(message.into()) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTarget
{
    Albums,
    Images,
}

/// One stat requested on the query string, e.g.
/// `popular-albums=count:3,deep:true`.
#[derive(Debug, PartialEq)]
pub struct StatRequest
{
    pub kind: StatKind,
    pub target: StatTarget,
    pub criteria: StatCriteria,
}

// Both the hyphenated and the underscored suffix spellings have
// been in the wild; accept either.
const ALBUM_SUFFIXES: &[&str] = &["-albums", "_albums"];
const IMAGE_SUFFIXES: &[&str] = &["-images", "_images"];

fn match_key(key: &str) -> Option<(StatKind, StatTarget)>
{
    for suffix in ALBUM_SUFFIXES
    {
        if let Some(token) = key.strip_suffix(suffix)
        {
            if let Some(kind) = StatKind::from_token(token)
            {
                if ALBUM_STAT_KINDS.contains(&kind)
                {
                    return Some((kind, StatTarget::Albums));
                }
            }
        }
    }

    for suffix in IMAGE_SUFFIXES
    {
        if let Some(token) = key.strip_suffix(suffix)
        {
            if let Some(kind) = StatKind::from_token(token)
            {
                if IMAGE_STAT_KINDS.contains(&kind)
                {
                    return Some((kind, StatTarget::Images));
                }
            }
        }
    }

    None
}

fn clamp_count(raw: &str) -> usize
{
    // Any out-of-range or non-numeric count resets to 1; fractional
    // counts round to the nearest integer rather than being rejected.
    match raw.parse::<f64>()
    {
        Ok(value) =>
        {
            let rounded = value.round();

            if rounded >= 1.0 && rounded <= 10.0
            {
                rounded as usize
            }
            else
            {
                1
            }
        },
        Err(_) => 1,
    }
}

/// Parses a stat parameter value.
///
/// Accepted forms: empty (all defaults), a bare digit string (the
/// legacy count-only form), or `key:value,key:value,...` with keys
/// `count`, `threshold`, `sort` and `deep`.  Any malformed token is
/// an error - the caller abandons every stat for the request.
pub fn parse_criteria(raw: &str) -> Result<StatCriteria, String>
{
    let mut criteria = StatCriteria::default();

    if raw.is_empty()
    {
        return Ok(criteria);
    }

    if !raw.contains(':') && !raw.contains(',')
    {
        if raw.chars().all(|c| c.is_ascii_digit())
        {
            criteria.count = clamp_count(raw);
            return Ok(criteria);
        }

        return Err(format!("Statistics parameter '{}' is missing a colon.", raw));
    }

    for token in raw.split(',')
    {
        let mut parts = token.split(':');

        let (key, value) = match (parts.next(), parts.next(), parts.next())
        {
            (Some(key), Some(value), None) => (key, value),
            (_, None, _) => return Err(format!("Statistics parameter '{}' is missing a colon.", token)),
            _ => return Err(format!("Statistics parameter '{}' has too many colons.", token)),
        };

        match key
        {
            "count" =>
            {
                criteria.count = clamp_count(value);
            },
            "threshold" =>
            {
                criteria.threshold = Some(value.parse::<f64>()
                    .map_err(|_| format!("Statistics parameter 'threshold' must be a number, not '{}'.", value))?);
            },
            "sort" =>
            {
                criteria.sort = match value
                {
                    "asc" => SortOrder::Asc,
                    "desc" => SortOrder::Desc,
                    _ => return Err(format!("Statistics parameter 'sort' must be 'asc' or 'desc', not '{}'.", value)),
                };
            },
            "deep" =>
            {
                criteria.deep = match value
                {
                    "true" => true,
                    "false" => false,
                    _ => return Err(format!("Statistics parameter 'deep' must be 'true' or 'false', not '{}'.", value)),
                };
            },
            _ =>
            {
                return Err(format!("Unrecognized statistics parameter '{}'.", key));
            },
        }
    }

    Ok(criteria)
}

/// Finds every stat requested on the query string, in query order.
/// The first malformed parameter value aborts with its error.
pub fn extract_requests(options: &RequestOptions) -> Result<Vec<StatRequest>, String>
{
    let mut requests = Vec::new();

    for (key, value) in options.pairs.iter()
    {
        if let Some((kind, target)) = match_key(key)
        {
            let criteria = parse_criteria(value)?;

            requests.push(StatRequest { kind, target, criteria });
        }
    }

    Ok(requests)
}

/// Builds the `stats` object for a gallery response, or `None` when
/// no stat was requested at all.  The availability of the
/// statistics collaborator is only reported when something actually
/// asked for a stat.
pub fn gather(state: &State, ctx: MapContext<'_>, options: &RequestOptions) -> Option<StatsBody>
{
    let requests = match extract_requests(options)
    {
        Ok(requests) => requests,
        Err(message) =>
        {
            return Some(StatsBody::error(message));
        },
    };

    if requests.is_empty()
    {
        return None;
    }

    let provider: &StatsProvider = match &state.stats
    {
        Some(provider) => provider,
        None =>
        {
            return Some(StatsBody::error(format!("Plugin not enabled: {}", STATS_PLUGIN_NAME)));
        },
    };

    let mut album_stats: BTreeMap<&'static str, Vec<AlbumBody>> = BTreeMap::new();
    let mut image_stats: BTreeMap<&'static str, Vec<ImageBody>> = BTreeMap::new();

    for request in requests
    {
        match request.target
        {
            StatTarget::Albums =>
            {
                let albums = provider.album_stat(ctx.store, request.kind, &request.criteria)
                    .into_iter()
                    .map(|album| map_album(ctx, album, 0))
                    .collect();

                album_stats.insert(request.kind.token(), albums);
            },
            StatTarget::Images =>
            {
                let images = provider.image_stat(ctx.store, request.kind, &request.criteria)
                    .into_iter()
                    .map(|(album, image)| map_image(ctx, album, image, false))
                    .collect();

                image_stats.insert(request.kind.token(), images);
            },
        }
    }

    Some(StatsBody
    {
        album: if album_stats.is_empty() { None } else { Some(album_stats) },
        image: if image_stats.is_empty() { None } else { Some(image_stats) },
        error: None,
    })
}
