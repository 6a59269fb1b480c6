//! StoredImageName - Collision-free name for an uploaded image

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public path prefix under which uploaded images are served
pub const UPLOADS_PREFIX: &str = "/uploads/";

const FALLBACK_FILE_NAME: &str = "image";

/// Longest single path component most filesystems accept, in bytes
pub const MAX_FILE_NAME_BYTES: usize = 255;

const TOKEN_LEN: usize = uuid::fmt::Hyphenated::LENGTH;

/// File name of an uploaded image inside the upload root.
///
/// Always a single path component: a random token, a dash, then the last
/// component of the client-supplied file name. Over-long client names keep
/// their tail so the result fits in [`MAX_FILE_NAME_BYTES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredImageName(String);

impl StoredImageName {
    /// Generate a fresh name from the client-supplied file name
    pub fn generate(original: Option<&str>) -> Self {
        Self::with_token(Uuid::new_v4(), original)
    }

    pub fn with_token(token: Uuid, original: Option<&str>) -> Self {
        let base = base_name(original.unwrap_or_default());
        let base = keep_tail(base, MAX_FILE_NAME_BYTES - TOKEN_LEN - 1);
        Self(format!("{}-{}", token, base))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The random token that starts the name
    pub fn token(&self) -> &str {
        self.0.get(..TOKEN_LEN).unwrap_or(&self.0)
    }

    /// Path the image is reachable at once stored
    pub fn public_url(&self) -> String {
        format!("{}{}", UPLOADS_PREFIX, self.0)
    }
}

impl std::fmt::Display for StoredImageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Last path component of a client file name, so it can't escape the upload root
fn base_name(original: &str) -> &str {
    let last = original.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    match last {
        "" | "." | ".." => FALLBACK_FILE_NAME,
        name => name,
    }
}

/// Last `max_bytes` of `name`, cut on a char boundary; keeps the extension
fn keep_tail(name: &str, max_bytes: usize) -> &str {
    if name.len() <= max_bytes {
        return name;
    }
    let mut start = name.len() - max_bytes;
    while !name.is_char_boundary(start) {
        start += 1;
    }
    &name[start..]
}
