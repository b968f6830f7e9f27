use crate::data::{Album, Image};
use crate::store::Store;

/// Name of the statistics collaborator, as reported to clients
/// when statistics are requested but the collaborator is not
/// enabled.
pub const STATS_PLUGIN_NAME: &str = "image_album_statistics";

/// One ranking criterion understood by the statistics collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind
{
    Popular,
    Latest,
    LatestDate,
    LatestMtime,
    LatestPublishdate,
    MostRated,
    TopRated,
    LatestUpdated,
    Random,
}

/// The stat kinds available for albums.
pub const ALBUM_STAT_KINDS: &[StatKind] = &[
    StatKind::Popular,
    StatKind::Latest,
    StatKind::LatestDate,
    StatKind::LatestMtime,
    StatKind::LatestPublishdate,
    StatKind::MostRated,
    StatKind::TopRated,
    StatKind::LatestUpdated,
    StatKind::Random,
];

/// The stat kinds available for images - all of the album kinds
/// except `latestupdated`, which only makes sense for albums.
pub const IMAGE_STAT_KINDS: &[StatKind] = &[
    StatKind::Popular,
    StatKind::Latest,
    StatKind::LatestDate,
    StatKind::LatestMtime,
    StatKind::LatestPublishdate,
    StatKind::MostRated,
    StatKind::TopRated,
    StatKind::Random,
];

impl StatKind
{
    /// The token used on the query string, e.g. `latest-date` in
    /// `latest-date-albums=3`.  These spellings come from the
    /// statistics collaborator itself.
    pub fn token(&self) -> &'static str
    {
        match self
        {
            StatKind::Popular => "popular",
            StatKind::Latest => "latest",
            StatKind::LatestDate => "latest-date",
            StatKind::LatestMtime => "latest-mtime",
            StatKind::LatestPublishdate => "latest-publishdate",
            StatKind::MostRated => "mostrated",
            StatKind::TopRated => "toprated",
            StatKind::LatestUpdated => "latestupdated",
            StatKind::Random => "random",
        }
    }

    pub fn from_token(token: &str) -> Option<StatKind>
    {
        ALBUM_STAT_KINDS.iter().find(|k| k.token() == token).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder
{
    Asc,
    Desc,
}

/// Parameters for one statistics query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCriteria
{
    /// Number of entries to return, 1 to 10.
    pub count: usize,
    /// Minimum ranking value (hits, votes, rating) to include.
    pub threshold: Option<f64>,
    pub sort: SortOrder,
    /// Whether to rank every descendant level rather than just the
    /// top-level albums.
    pub deep: bool,
}

impl Default for StatCriteria
{
    fn default() -> Self
    {
        StatCriteria
        {
            count: 1,
            threshold: None,
            sort: SortOrder::Desc,
            deep: false,
        }
    }
}

/// The statistics collaborator.  An optional capability - it is
/// resolved once at startup and injected; when absent, requesting
/// any stat reports an error naming the missing plugin instead.
#[derive(Debug, Clone, Copy)]
pub struct StatsProvider;

// Deterministic stand-in for random ordering.  Responses must stay
// byte-identical across repeated identical requests, so `random`
// scrambles by a hash of the path rather than an RNG.
fn scramble(path: &str) -> f64
{
    let mut h: u64 = 0xcbf29ce484222325;

    for b in path.bytes()
    {
        h ^= b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }

    (h >> 11) as f64
}

fn rank<T>(mut candidates: Vec<(f64, String, T)>, criteria: &StatCriteria) -> Vec<T>
{
    if let Some(threshold) = criteria.threshold
    {
        candidates.retain(|(value, _, _)| *value >= threshold);
    }

    candidates.sort_by(|(av, ap, _), (bv, bp, _)| {
        let ordering = av.partial_cmp(bv).unwrap_or(std::cmp::Ordering::Equal);

        let ordering = match criteria.sort
        {
            SortOrder::Desc => ordering.reverse(),
            SortOrder::Asc => ordering,
        };

        ordering.then_with(|| ap.cmp(bp))
    });

    candidates.truncate(criteria.count);
    candidates.into_iter().map(|(_, _, item)| item).collect()
}

impl StatsProvider
{
    pub fn new() -> Self
    {
        StatsProvider
    }

    pub fn album_stat<'a>(&self, store: &'a Store, kind: StatKind, criteria: &StatCriteria) -> Vec<&'a Album>
    {
        let candidates: Vec<&Album> = if criteria.deep
        {
            store.all_albums()
        }
        else
        {
            store.gallery().albums.iter().collect()
        };

        let candidates = candidates
            .into_iter()
            .enumerate()
            .filter_map(|(index, album)| {
                let value = match kind
                {
                    StatKind::Popular => Some(album.hits as f64),
                    StatKind::Latest => Some(index as f64),
                    StatKind::LatestDate => Some(album.date.timestamp() as f64),
                    StatKind::LatestMtime => album.mtime.map(|d| d.timestamp() as f64),
                    StatKind::LatestPublishdate => album.date_published.map(|d| d.timestamp() as f64),
                    StatKind::MostRated => Some(album.votes as f64),
                    StatKind::TopRated => album.rating,
                    StatKind::LatestUpdated => album.effective_date_updated().map(|d| d.timestamp() as f64),
                    StatKind::Random => Some(scramble(&album.path)),
                };

                value.map(|value| (value, album.path.clone(), album))
            })
            .collect();

        rank(candidates, criteria)
    }

    pub fn image_stat<'a>(&self, store: &'a Store, kind: StatKind, criteria: &StatCriteria) -> Vec<(&'a Album, &'a Image)>
    {
        let albums: Vec<&Album> = if criteria.deep
        {
            store.all_albums()
        }
        else
        {
            store.gallery().albums.iter().collect()
        };

        let candidates = albums
            .into_iter()
            .flat_map(|album| album.images.iter().map(move |image| (album, image)))
            .enumerate()
            .filter_map(|(index, (album, image))| {
                let value = match kind
                {
                    StatKind::Popular => Some(image.hits as f64),
                    StatKind::Latest => Some(index as f64),
                    StatKind::LatestDate => Some(image.date.timestamp() as f64),
                    StatKind::LatestMtime => image.mtime.map(|d| d.timestamp() as f64),
                    StatKind::LatestPublishdate => image.date_published.map(|d| d.timestamp() as f64),
                    StatKind::MostRated => Some(image.votes as f64),
                    StatKind::TopRated => image.rating,
                    StatKind::LatestUpdated => None,
                    StatKind::Random => Some(scramble(&image.path(&album.path))),
                };

                value.map(|value| (value, image.path(&album.path), (album, image)))
            })
            .collect();

        rank(candidates, criteria)
    }
}
