/// Whether a cross-origin request's Origin should be allowed.
///
/// The check is a plain substring test: an Origin of
/// `http://sub.example.com` contains a Host of `example.com`, so
/// requests from subdomains of the serving host are allowed.  This
/// is a known-imprecise heuristic (`notexample.com.evil.org` would
/// also pass) kept for wire compatibility; a stricter suffix match
/// can be substituted here without touching the dispatcher.
pub fn origin_is_related(origin: &str, host: &str) -> bool
{
    !host.is_empty() && origin.contains(host)
}
