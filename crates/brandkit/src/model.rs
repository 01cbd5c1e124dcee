//! Output types: the brand metadata record and the social platform table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Social platforms recognised in page links.
///
/// Variant order is the order in which an href is tested, and the order in
/// which `socials` serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Youtube,
}

impl Platform {
    /// All platforms, in matching order.
    pub const ALL: [Platform; 5] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Youtube,
    ];

    /// Domain substring an href must contain to count as this platform.
    pub fn domain(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook.com",
            Platform::Instagram => "instagram.com",
            Platform::Twitter => "twitter.com",
            Platform::Linkedin => "linkedin.com",
            Platform::Youtube => "youtube.com",
        }
    }

    /// Lowercase key used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Youtube => "youtube",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Brand identity extracted from a single page.
///
/// Every URL-valued field is absolute. Absent fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Site or brand title.
    pub brand_name: Option<String>,
    /// Tagline or description.
    pub slogan: Option<String>,
    /// Absolute URL of a logo or icon image.
    pub logo_url: Option<String>,
    /// At most one absolute profile URL per platform.
    #[serde(default)]
    pub socials: BTreeMap<Platform, String>,
}

impl MetadataRecord {
    /// A record with every field absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when a brand name was found. Drives the render fallback.
    pub fn has_brand_name(&self) -> bool {
        self.brand_name.is_some()
    }

    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.brand_name.is_none()
            && self.slogan.is_none()
            && self.logo_url.is_none()
            && self.socials.is_empty()
    }
}
