/// Which page of a listing to return.  The host's pagination is
/// driven by the request URL; `All` corresponds to the original
/// "page 0" convention meaning every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page
{
    All,
    Number(u32),
}

/// Returns the requested page of `items` along with the index of
/// its first element within the full list (so callers can compute
/// 1-based item indexes).  A page past the end is empty.
pub fn paginate<T>(items: &[T], page: Page, per_page: usize) -> (usize, &[T])
{
    match page
    {
        Page::All =>
        {
            (0, items)
        },
        Page::Number(n) =>
        {
            let n = std::cmp::max(n, 1) as usize;
            let start = std::cmp::min((n - 1) * per_page, items.len());
            let end = std::cmp::min(start + per_page, items.len());

            (start, &items[start..end])
        },
    }
}
