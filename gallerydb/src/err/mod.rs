use snafu::Snafu;
use snafu::IntoError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error
{
    #[snafu(display("Gallery definition I/O error: {:?}", source))]
    IoError { source: std::io::Error },
    #[snafu(display("Gallery definition JSON error: {:?}", source))]
    JsonError { source: serde_json::Error },
    #[snafu(display("Gallery consistency error: {}", msg))]
    ConsistencyError { msg: String },
}

impl From<std::io::Error> for Error
{
    fn from(source: std::io::Error) -> Self {
        IoSnafu{}.into_error(source)
    }
}

impl From<serde_json::Error> for Error
{
    fn from(source: serde_json::Error) -> Self {
        JsonSnafu{}.into_error(source)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseError(String);

impl ParseError
{
    pub fn new<T: Into<String>>(s: T) -> Self
    {
        ParseError(s.into())
    }
}

impl std::fmt::Display for ParseError
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error>
    {
        write!(f, "Parse Error: {}", self.0)
    }
}

impl std::error::Error for ParseError
{
}
