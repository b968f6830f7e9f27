pub fn full_image_url(image_path: &str) -> String { format!("/albums/{}", image_path) }
pub fn sized_image_url(image_path: &str, size: u32) -> String { format!("/cache/{}?w={}", image_path, size) }
