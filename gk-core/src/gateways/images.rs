use gk_entities::time::Timestamp;

/// Persists uploaded images below a flat upload directory and maps
/// between public paths and files on disk.
pub trait ImageStore {
    /// Decode a base64 payload (an optional `data:*;base64,` prefix is
    /// stripped) and write it under the given file name.
    ///
    /// Returns the public path of the stored file, e.g. `/uploads/<name>`.
    /// The webserver prepends the scheme and host of the current request.
    fn store(&self, base64_payload: &str, file_name: &str) -> anyhow::Result<String>;

    /// Delete the file a public URL refers to, identified by the trailing
    /// path segment. Removing a missing file is not an error.
    fn remove(&self, url: &str) -> anyhow::Result<()>;
}

/// Collision-resistant upload file name:
/// `{kind}_{id or timestamp}_{timestamp}[_{index}].jpg`
pub fn image_file_name(kind: &str, id: &str, index: Option<usize>) -> String {
    let ts = Timestamp::now().as_millis();
    match index {
        Some(idx) => format!("{kind}_{id}_{ts}_{idx}.jpg"),
        None => format!("{kind}_{id}_{ts}.jpg"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_convention() {
        let name = image_file_name("plant", "abc123", None);
        assert!(name.starts_with("plant_abc123_"));
        assert!(name.ends_with(".jpg"));
        let name = image_file_name("garden", "xyz", Some(2));
        assert!(name.ends_with("_2.jpg"));
    }
}
