// ============================================================================
// rlsinfo-core/src/upload/abstraction.rs
// ============================================================================
//
// UPLOAD ABSTRACTION: Image Hosts and the Uploader Trait
//
// KEY COMPONENTS:
// - ImageHost: the supported hosts, parsed from CLI/env strings
// - HostCredentials: the secrets a host needs, validated per host
// - ImageUploader: trait implemented by the HTTP uploader and by test doubles

use crate::error::{CoreError, CoreResult};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Image hosts screenshots can be uploaded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageHost {
    Ptpimg,
    Imgbb,
    Hdbimg,
}

impl ImageHost {
    pub const ALL: [ImageHost; 3] = [ImageHost::Ptpimg, ImageHost::Imgbb, ImageHost::Hdbimg];

    pub fn name(&self) -> &'static str {
        match self {
            ImageHost::Ptpimg => "ptpimg",
            ImageHost::Imgbb => "imgbb",
            ImageHost::Hdbimg => "hdbimg",
        }
    }
}

impl fmt::Display for ImageHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageHost {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ImageHost::ALL
            .into_iter()
            .find(|host| host.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CoreError::Config(format!(
                    "unknown image host '{wanted}' (expected ptpimg, imgbb or hdbimg)"
                ))
            })
    }
}

/// Secrets for the image hosts. Only the fields of the selected host are needed.
#[derive(Debug, Clone, Default)]
pub struct HostCredentials {
    /// ptpimg or imgbb API key
    pub api_key: Option<String>,
    /// hdbimg user name
    pub username: Option<String>,
    /// hdbimg passkey
    pub passkey: Option<String>,
}

impl HostCredentials {
    /// Checks that every secret `host` needs is present and not blank.
    pub fn validate_for(&self, host: ImageHost) -> CoreResult<()> {
        let required = match host {
            ImageHost::Ptpimg | ImageHost::Imgbb => vec![("API key", &self.api_key)],
            ImageHost::Hdbimg => vec![("username", &self.username), ("passkey", &self.passkey)],
        };
        for (name, value) in required {
            if value.as_deref().is_none_or(|v| v.trim().is_empty()) {
                return Err(CoreError::Config(format!("{host} requires a {name}")));
            }
        }
        Ok(())
    }
}

/// Uploads images and returns one URL (or BBCode line) per image.
pub trait ImageUploader {
    fn upload(&self, images: &[PathBuf]) -> CoreResult<Vec<String>>;
}
