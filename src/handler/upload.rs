//! Image upload
//!
//! `POST /upload` takes `multipart/form-data` with up to `upload.max_files`
//! parts named `images`. Each file must declare an `image/*` type and carry
//! an allowed extension, and is stored under a generated name. A request is
//! all or nothing: on any rejection the files already written are removed.

use chrono::Utc;
use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::StatusCode;
use multer::{Constraints, Field, Multipart, SizeLimit};
use rand::Rng;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::api::error_json;
use super::router::RequestContext;
use crate::config::AppState;
use crate::http::{json_response, HttpResponse};
use crate::logger;

const UPLOAD_FIELD: &str = "images";

#[derive(Debug, thiserror::Error)]
enum UploadError {
    #[error("Expected multipart/form-data")]
    NotMultipart,

    #[error("No files received")]
    NoFiles,

    #[error("Too many files (max {0})")]
    TooManyFiles(usize),

    #[error("Unexpected field: {0}")]
    UnexpectedField(String),

    #[error("Only image files are allowed: {0}")]
    NotAnImage(String),

    #[error("File too large")]
    FileTooLarge,

    #[error("Request body too large")]
    BodyTooLarge,

    #[error("Malformed upload: {0}")]
    Malformed(multer::Error),

    #[error("Failed to store upload: {0}")]
    Io(#[from] io::Error),
}

impl From<multer::Error> for UploadError {
    fn from(err: multer::Error) -> Self {
        match err {
            multer::Error::FieldSizeExceeded { .. } => Self::FileTooLarge,
            multer::Error::StreamSizeExceeded { .. } => Self::BodyTooLarge,
            other => Self::Malformed(other),
        }
    }
}

impl UploadError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// One stored file, as reported back to the client
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadedFile {
    /// Generated name inside the image directory
    name: String,
    original_name: String,
    size: u64,
    /// URL the image is served from
    path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse<'a> {
    success: bool,
    message: &'a str,
    uploaded_count: usize,
    uploaded_files: &'a [UploadedFile],
}

/// `POST /upload`
pub async fn handle_upload<B>(ctx: &RequestContext<'_>, state: &AppState, body: B) -> HttpResponse
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let mut created = Vec::new();
    match receive(ctx, state, body, &mut created).await {
        Ok(files) => {
            logger::log_info(&format!(
                "Stored {} uploaded image(s) from {}",
                files.len(),
                ctx.client_addr
            ));
            json_response(
                StatusCode::OK,
                &UploadResponse {
                    success: true,
                    message: "Files uploaded successfully",
                    uploaded_count: files.len(),
                    uploaded_files: &files,
                },
                false,
            )
        }
        Err(e) => {
            discard(&created).await;
            match &e {
                UploadError::Io(_) => logger::log_error(&format!("Upload failed: {e}")),
                _ => logger::log_warning(&format!("Upload from {} rejected: {e}", ctx.client_addr)),
            }
            error_json(e.status(), &e.to_string(), false)
        }
    }
}

/// Stream every file part to disk. Each file is recorded in `created` as
/// soon as it exists so a failure part-way can be rolled back.
async fn receive<B>(
    ctx: &RequestContext<'_>,
    state: &AppState,
    body: B,
    created: &mut Vec<PathBuf>,
) -> Result<Vec<UploadedFile>, UploadError>
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let boundary = ctx
        .content_type
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or(UploadError::NotMultipart)?;

    let limits = &state.config.upload;
    let constraints = Constraints::new().size_limit(
        SizeLimit::new()
            .whole_stream(state.config.http.max_body_size)
            .per_field(limits.max_file_size),
    );
    let mut multipart = Multipart::with_constraints(body.into_data_stream(), boundary, constraints);

    let image_dir = &state.config.gallery.image_dir;
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        // Text fields, and file inputs left empty by the browser
        let Some(original_name) = field.file_name().filter(|n| !n.is_empty()).map(String::from)
        else {
            continue;
        };
        let field_name = field.name().unwrap_or_default();
        if field_name != UPLOAD_FIELD {
            return Err(UploadError::UnexpectedField(field_name.to_string()));
        }
        if files.len() >= limits.max_files {
            return Err(UploadError::TooManyFiles(limits.max_files));
        }

        let extension = image_extension(&field, &original_name, &state.config.gallery.allowed_extensions)
            .ok_or_else(|| UploadError::NotAnImage(original_name.clone()))?;

        fs::create_dir_all(image_dir).await?;
        let name = stored_name(&extension);
        let full_path = image_dir.join(&name);
        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
            .await?;
        created.push(full_path);

        let size = write_field(field, file).await?;
        files.push(UploadedFile {
            path: format!("/images/{name}"),
            name,
            original_name,
            size,
        });
    }

    if files.is_empty() {
        return Err(UploadError::NoFiles);
    }
    Ok(files)
}

/// Lower-cased extension of an `image/*` part, if it is on the allow-list
fn image_extension(field: &Field<'_>, original_name: &str, allowed: &[String]) -> Option<String> {
    let is_image = field
        .content_type()
        .is_some_and(|mime| mime.type_().as_str() == "image");
    if !is_image {
        return None;
    }
    extension_allowed(original_name, allowed)
}

fn extension_allowed(original_name: &str, allowed: &[String]) -> Option<String> {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())?
        .to_ascii_lowercase();
    allowed.iter().any(|a| *a == ext).then_some(ext)
}

/// `images-<unix millis>-<random>.<ext>`
fn stored_name(extension: &str) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!(
        "{UPLOAD_FIELD}-{}-{suffix}.{extension}",
        Utc::now().timestamp_millis()
    )
}

async fn write_field(mut field: Field<'_>, mut file: fs::File) -> Result<u64, UploadError> {
    let mut written = 0u64;
    while let Some(chunk) = field.chunk().await? {
        file.write_all(&chunk).await?;
        written += u64::try_from(chunk.len()).unwrap_or(u64::MAX);
    }
    file.flush().await?;
    Ok(written)
}

async fn discard(created: &[PathBuf]) {
    for path in created {
        if let Err(e) = fs::remove_file(path).await {
            if e.kind() != io::ErrorKind::NotFound {
                logger::log_error(&format!(
                    "Failed to remove partial upload {}: {e}",
                    path.display()
                ));
            }
        }
    }
}
