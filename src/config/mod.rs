//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            api: ApiConfig::default(),
            site: SiteConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

/// Where the portfolio REST API lives and how to talk to it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Collection endpoints end in a slash (`/api/blogs/`). Item and action
    /// endpoints (`/api/blogs/{id}`, `/api/auth/login`) never do.
    #[serde(default = "default_true")]
    pub collection_trailing_slash: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            collection_trailing_slash: true,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Static content of the home page hero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    #[serde(default = "default_headline")]
    pub headline: String,
    #[serde(default = "default_profile_image")]
    pub profile_image: String,
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: default_owner_name(),
            headline: default_headline(),
            profile_image: default_profile_image(),
            resume_url: default_resume_url(),
        }
    }
}

fn default_owner_name() -> String {
    "Bismark A. Agyei".to_string()
}

fn default_headline() -> String {
    "Full Stack Web Developer".to_string()
}

fn default_profile_image() -> String {
    "/hoodie_cap.jpg".to_string()
}

fn default_resume_url() -> String {
    "/assets/resume.pdf".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Lifetime of the `admin_token` cookie
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Check the stored token against the API before rendering the dashboard.
    /// Off by default: the API has no verify endpoint, and the contact list
    /// used for the check answers a bad token with a server error.
    #[serde(default)]
    pub revalidate: bool,
    /// Mark cookies `Secure` (enable behind HTTPS)
    #[serde(default)]
    pub secure_cookies: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: default_session_ttl_secs(),
            revalidate: false,
            secure_cookies: false,
        }
    }
}

/// Matches the backend's 24h token lifetime
fn default_session_ttl_secs() -> u64 {
    24 * 60 * 60
}

fn default_true() -> bool {
    true
}

/// Get config directory (PORTFOLIO_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("PORTFOLIO_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/portfolio-site");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("portfolio-site");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/portfolio-site");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("portfolio-site");
        }
    }

    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        // Load from config file if it exists (config.toml, config.json, ...)
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (PORTFOLIO_PORT, PORTFOLIO_API__BASE_URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: PORTFOLIO_PORT > PORT > config file > default
    if let Ok(port) = std::env::var("PORTFOLIO_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        // Platform-provided PORT (Railway, Render, Docker)
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    if let Ok(url) = std::env::var("API_URL") {
        builder = builder.set_override("api.base_url", url)?;
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}
