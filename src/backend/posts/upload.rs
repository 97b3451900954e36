//! Photo upload helper
//!
//! Checks the extension of an uploaded file against
//! [`ALLOWED_PHOTO_EXTENSIONS`], reduces the client-supplied name to a safe
//! file name and writes the bytes into the upload directory. Files with the
//! same sanitised name overwrite each other.

use std::path::{Path, PathBuf};

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};
use uuid::Uuid;

use crate::backend::server::config::ALLOWED_PHOTO_EXTENSIONS;

/// A file received from a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name as sent by the browser
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Extension after the last dot, if any
fn extension(file_name: &str) -> Option<&str> {
    file_name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Whether the file name carries an allowed photo extension (case-insensitive)
pub fn allowed_file(file_name: &str) -> bool {
    extension(file_name)
        .map(|ext| {
            ALLOWED_PHOTO_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Reduce a client-supplied file name to something safe to join onto a directory
///
/// Accented letters are decomposed (NFKD) and lose their accent marks, path
/// separators become spaces and runs of whitespace become a single `_`.
/// Characters still outside `[A-Za-z0-9_.-]` are dropped and leading or
/// trailing dots and underscores are trimmed. The result may be empty.
pub fn secure_filename(file_name: &str) -> String {
    let flattened: String = file_name
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

/// Write an allowed photo into `upload_dir` and return the stored path
///
/// The caller must have checked [`allowed_file`]. When sanitising leaves no
/// usable name, a random one is generated with the original extension.
pub async fn save_photo(upload_dir: &Path, file: &UploadedFile) -> std::io::Result<PathBuf> {
    let mut file_name = secure_filename(&file.file_name);
    if !allowed_file(&file_name) {
        let ext = extension(&file.file_name)
            .unwrap_or("bin")
            .to_ascii_lowercase();
        file_name = format!("{}.{}", Uuid::new_v4(), ext);
    }

    tokio::fs::create_dir_all(upload_dir).await?;
    let path = upload_dir.join(&file_name);
    tokio::fs::write(&path, &file.bytes).await?;

    tracing::info!("Saved photo {} ({} bytes)", path.display(), file.bytes.len());
    Ok(path)
}
