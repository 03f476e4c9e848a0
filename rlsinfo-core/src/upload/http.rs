// ============================================================================
// rlsinfo-core/src/upload/http.rs
// ============================================================================
//
// HTTP UPLOADER: Image Host Uploads through reqwest
//
// Every host takes a multipart POST. ptpimg and hdbimg accept all images in one
// request; imgbb takes one base64 encoded image per request. Response parsing
// is kept in free functions so it can be tested without the network.

use super::abstraction::{HostCredentials, ImageHost, ImageUploader};
use crate::error::{CoreError, CoreResult};
use crate::temp_files::screenshot_stamp;
use crate::utils::get_filename_safe;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::blocking::{Client, multipart};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const PTPIMG_ENDPOINT: &str = "https://ptpimg.me/upload.php";
pub const IMGBB_ENDPOINT: &str = "https://api.imgbb.com/1/upload";
pub const HDBIMG_ENDPOINT: &str = "https://img.hdbits.org/upload_api.php";

/// Request timeout for a single upload request.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(300);

fn upload_error(host: ImageHost, message: impl std::fmt::Display) -> CoreError {
    CoreError::Upload {
        host: host.to_string(),
        message: message.to_string(),
    }
}

// ---- Response parsing ----

#[derive(Debug, Deserialize)]
struct PtpimgImage {
    code: String,
    ext: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImgbbResponse {
    data: ImgbbData,
}

#[derive(Debug, Deserialize)]
struct ImgbbData {
    url: String,
}

/// Parses ptpimg's JSON array of `{code, ext}` objects into direct URLs.
pub fn parse_ptpimg_response(body: &str) -> CoreResult<Vec<String>> {
    let images: Vec<PtpimgImage> = serde_json::from_str(body)
        .map_err(|e| upload_error(ImageHost::Ptpimg, format!("unexpected response: {e}")))?;
    Ok(images
        .into_iter()
        .map(|image| {
            format!(
                "https://ptpimg.me/{}.{}",
                image.code,
                image.ext.as_deref().unwrap_or("png")
            )
        })
        .collect())
}

/// Extracts `data.url` from an imgbb upload response.
pub fn parse_imgbb_response(body: &str) -> CoreResult<String> {
    let response: ImgbbResponse = serde_json::from_str(body)
        .map_err(|e| upload_error(ImageHost::Imgbb, format!("unexpected response: {e}")))?;
    Ok(response.data.url)
}

/// hdbimg answers with one URL or BBCode snippet per line.
#[must_use]
pub fn parse_hdbimg_response(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// ---- Uploader ----

/// `ImageUploader` talking to the real image hosts.
pub struct HttpUploader {
    host: ImageHost,
    credentials: HostCredentials,
    gallery_name: String,
    client: Client,
}

impl HttpUploader {
    /// Creates an uploader for `host`.
    ///
    /// # Errors
    ///
    /// * `CoreError::Config` if the credentials `host` needs are missing
    /// * `CoreError::Upload` if the HTTP client cannot be built
    pub fn new(host: ImageHost, credentials: HostCredentials, gallery_name: impl Into<String>) -> CoreResult<Self> {
        credentials.validate_for(host)?;
        let client = Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .map_err(|e| upload_error(host, e))?;
        Ok(Self {
            host,
            credentials,
            gallery_name: gallery_name.into(),
            client,
        })
    }

    pub fn host(&self) -> ImageHost {
        self.host
    }

    fn secret(value: &Option<String>) -> String {
        value.clone().unwrap_or_default()
    }

    fn image_part(&self, image: &Path, file_name: String) -> CoreResult<multipart::Part> {
        multipart::Part::bytes(std::fs::read(image)?)
            .file_name(file_name)
            .mime_str("image/png")
            .map_err(|e| upload_error(self.host, e))
    }

    fn post(&self, url: &str, form: multipart::Form) -> CoreResult<String> {
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .map_err(|e| upload_error(self.host, e))?;
        let status = response.status();
        let body = response.text().map_err(|e| upload_error(self.host, e))?;
        if !status.is_success() {
            return Err(upload_error(self.host, format!("HTTP {status}: {}", body.trim())));
        }
        Ok(body)
    }

    fn upload_ptpimg(&self, images: &[PathBuf]) -> CoreResult<Vec<String>> {
        let mut form = multipart::Form::new().text("api_key", Self::secret(&self.credentials.api_key));
        for (i, image) in images.iter().enumerate() {
            // ptpimg does not keep file names
            let part = self.image_part(image, format!("{i}.png"))?;
            form = form.part(format!("file-upload[{i}]"), part);
        }
        parse_ptpimg_response(&self.post(PTPIMG_ENDPOINT, form)?)
    }

    fn upload_imgbb(&self, images: &[PathBuf]) -> CoreResult<Vec<String>> {
        let stamp = screenshot_stamp();
        let mut urls = Vec::with_capacity(images.len());
        for (i, image) in images.iter().enumerate() {
            let form = multipart::Form::new()
                .text("key", Self::secret(&self.credentials.api_key))
                .text("image", BASE64.encode(std::fs::read(image)?))
                .text("name", format!("{i}_snapshot {stamp}"));
            let url = parse_imgbb_response(&self.post(IMGBB_ENDPOINT, form)?)?;
            log::debug!("Uploaded {} -> {}", image.display(), url);
            urls.push(url);
        }
        Ok(urls)
    }

    fn upload_hdbimg(&self, images: &[PathBuf]) -> CoreResult<Vec<String>> {
        let mut form = multipart::Form::new()
            .text("username", Self::secret(&self.credentials.username))
            .text("passkey", Self::secret(&self.credentials.passkey))
            .text("galleryoption", "1")
            .text("galleryname", self.gallery_name.clone());
        for (i, image) in images.iter().enumerate() {
            let part = self.image_part(image, get_filename_safe(image)?)?;
            form = form.part(format!("images_files[{i}]"), part);
        }
        Ok(parse_hdbimg_response(&self.post(HDBIMG_ENDPOINT, form)?))
    }
}

impl ImageUploader for HttpUploader {
    fn upload(&self, images: &[PathBuf]) -> CoreResult<Vec<String>> {
        if images.is_empty() {
            return Ok(Vec::new());
        }
        log::info!("Uploading {} image(s) to {}", images.len(), self.host);
        let urls = match self.host {
            ImageHost::Ptpimg => self.upload_ptpimg(images)?,
            ImageHost::Imgbb => self.upload_imgbb(images)?,
            ImageHost::Hdbimg => self.upload_hdbimg(images)?,
        };
        if urls.len() != images.len() {
            log::warn!(
                "{} returned {} URL(s) for {} image(s)",
                self.host,
                urls.len(),
                images.len()
            );
        }
        Ok(urls)
    }
}
