//! Object storage backends for shop images

pub mod local;
pub mod memory;
#[cfg(feature = "s3")]
pub mod s3;

pub use local::LocalObjectStorage;
pub use memory::InMemoryObjectStorage;
#[cfg(feature = "s3")]
pub use s3::S3ObjectStorage;

/// Join a base URL and an object key with exactly one `/` between them.
pub(crate) fn join_url(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key.trim_start_matches('/'))
}

/// Inverse of [`join_url`]: the key of `url` if it lives under `base`.
pub(crate) fn key_from_url<'a>(base: &str, url: &'a str) -> Option<&'a str> {
    url.strip_prefix(base.trim_end_matches('/'))
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_and_split_agree() {
        let url = join_url("http://localhost:8080/uploads/", "barber-shops/a/b.png");
        assert_eq!(url, "http://localhost:8080/uploads/barber-shops/a/b.png");
        assert_eq!(
            key_from_url("http://localhost:8080/uploads", &url),
            Some("barber-shops/a/b.png")
        );
    }

    #[test]
    fn foreign_urls_have_no_key() {
        assert_eq!(key_from_url("http://localhost:8080/uploads", "https://cdn.example/x.png"), None);
        assert_eq!(key_from_url("http://localhost:8080/uploads", "http://localhost:8080/uploads/"), None);
    }
}
