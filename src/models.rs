//! Resource types exchanged with the portfolio REST API.
//!
//! Read types carry the server-assigned `id`; the `*Input` types are the
//! write payloads and never include it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Blog
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Content split into paragraphs on newlines, as rendered on the detail view
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BlogInput {
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

impl From<&BlogPost> for BlogInput {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
        }
    }
}

// =============================================================================
// Project
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub github_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Demo link, if one is set and not blank
    pub fn demo(&self) -> Option<&str> {
        self.demo_link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub github_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
}

impl From<&Project> for ProjectInput {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone(),
            github_link: project.github_link.clone(),
            demo_link: project.demo_link.clone(),
        }
    }
}

// =============================================================================
// About
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AboutSection {
    pub id: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AboutInput {
    pub bio: String,
    pub skills: Vec<String>,
    pub hobbies: Vec<String>,
}

impl From<&AboutSection> for AboutInput {
    fn from(about: &AboutSection) -> Self {
        Self {
            bio: about.bio.clone(),
            skills: about.skills.clone(),
            hobbies: about.hobbies.clone(),
        }
    }
}

// =============================================================================
// Contact
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

// =============================================================================
// Auth / upload
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Upload endpoint response; deployments answer with either field.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl UploadResponse {
    pub fn into_url(self) -> Option<String> {
        self.image_url
            .filter(|u| !u.is_empty())
            .or(self.url.filter(|u| !u.is_empty()))
    }
}

// =============================================================================
// Lookup by id
// =============================================================================

/// A record with a server-assigned id.
pub trait Record {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_record!(BlogPost, Project, AboutSection, ContactSubmission);

/// First record in `items` whose id is `id`.
pub fn find_record<'a, T: Record>(items: &'a [T], id: Option<&str>) -> Option<&'a T> {
    let id = id?;
    items.iter().find(|item| item.id() == id)
}

// =============================================================================
// Formatting helpers
// =============================================================================

/// "January 5, 2024"
pub fn long_date(ts: &DateTime<Utc>) -> String {
    ts.format("%B %-d, %Y").to_string()
}

/// "2024-01-05 at 14:30"
pub fn date_and_time(ts: &DateTime<Utc>) -> String {
    format!("{} at {}", ts.format("%Y-%m-%d"), ts.format("%H:%M"))
}

/// Timestamps arrive as RFC 3339 or as naive UTC (`2024-01-05T14:30:00.123456`).
/// Unparseable values become `None` instead of failing the record.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}
