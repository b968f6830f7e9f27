use serde::Serialize;

pub const MSG_ALBUM_NOT_FOUND: &str = "Album does not exist.";
pub const MSG_IMAGE_NOT_FOUND: &str = "Image does not exist.";
pub const MSG_ACCESS_DENIED: &str = "Access denied.";
pub const MSG_GALLERY_CLOSED: &str = "Gallery is not public.";

/// An error response body.  Unlike the entity bodies this is flat -
/// there is no wrapping key, just `{"error": true, ...}`.
#[derive(Serialize)]
pub struct ErrorBody
{
    pub error: bool,
    pub status: u16,
    pub message: String,
}

pub fn map_error(status: u16, message: &str) -> ErrorBody
{
    ErrorBody
    {
        error: true,
        status,
        message: message.to_owned(),
    }
}
