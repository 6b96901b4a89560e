//! Site configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Everything is resolved once at
//! startup and handed to the components that need it by value.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default key prefix for documents in the remote bucket.
pub const DEFAULT_DATA_PREFIX: &str = "dj-ana-jones";

/// Default recipient for signup and booking notifications.
pub const DEFAULT_NOTIFY_RECIPIENT: &str = "booking@anajonesdj.com";

/// Default email provider endpoint.
pub const DEFAULT_NOTIFY_API_URL: &str = "https://api.resend.com/emails";

/// Default public profile linked from feed posts.
pub const DEFAULT_INSTAGRAM_PROFILE_URL: &str = "https://instagram.com/anajonesdj";

/// Top-level site configuration.
///
/// Loaded once at startup via [`SiteConfig::from_env`].
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Where documents live when the remote backend is absent or failing.
    pub data_dir: PathBuf,

    /// Remote object store settings. `None` when any member is missing.
    pub remote_store: Option<RemoteStoreConfig>,

    /// Shared admin secret. `None` makes every admin endpoint fail closed.
    pub admin_key: Option<String>,

    /// Outbound email settings.
    pub notify: NotifyConfig,

    /// Social feed settings.
    pub feed: FeedConfig,

    /// Emit logs as JSON lines instead of the pretty formatter.
    pub log_json: bool,
}

/// Credentials and location of the remote document bucket.
///
/// Either fully populated or absent: [`RemoteStoreConfig::resolve`]
/// returns `None` as soon as one required member is missing.
#[derive(Clone)]
pub struct RemoteStoreConfig {
    /// Bucket region (e.g. `sa-east-1`).
    pub region: String,
    /// Access key id.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Bucket name.
    pub bucket: String,
    /// Key prefix; every document is stored as `{prefix}/{file}`.
    pub prefix: String,
    /// Optional S3-compatible endpoint override.
    pub endpoint_url: Option<String>,
}

impl std::fmt::Debug for RemoteStoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteStoreConfig")
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("bucket", &self.bucket)
            .field("prefix", &self.prefix)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

impl RemoteStoreConfig {
    /// Builds the remote config from a variable lookup.
    ///
    /// `DJ_`-prefixed variables win over their unprefixed counterparts.
    /// Blank values count as missing.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let get = |key: &str| non_blank(lookup(key));
        let either = |preferred: &str, plain: &str| get(preferred).or_else(|| get(plain));

        let region = either("DJ_AWS_REGION", "AWS_REGION")?;
        let access_key_id = either("DJ_AWS_ACCESS_KEY_ID", "AWS_ACCESS_KEY_ID")?;
        let secret_access_key = either("DJ_AWS_SECRET_ACCESS_KEY", "AWS_SECRET_ACCESS_KEY")?;
        let bucket = either("DJ_AWS_S3_BUCKET", "AWS_S3_BUCKET")?;

        Some(Self {
            region,
            access_key_id,
            secret_access_key,
            bucket,
            prefix: get("APP_DATA_PREFIX").unwrap_or_else(|| DEFAULT_DATA_PREFIX.to_string()),
            endpoint_url: get("DJ_AWS_S3_ENDPOINT"),
        })
    }
}

/// Outbound email settings.
#[derive(Clone)]
pub struct NotifyConfig {
    /// Provider endpoint receiving `POST` requests.
    pub api_url: String,
    /// Provider API key. Without it nothing is sent.
    pub api_key: Option<String>,
    /// Sender address. Without it nothing is sent.
    pub from_address: Option<String>,
    /// Who receives guest-list signup notifications.
    pub signup_recipient: String,
    /// Who receives booking notifications.
    pub booking_recipient: String,
}

impl std::fmt::Debug for NotifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifyConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("from_address", &self.from_address)
            .field("signup_recipient", &self.signup_recipient)
            .field("booking_recipient", &self.booking_recipient)
            .finish()
    }
}

impl NotifyConfig {
    fn resolve(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| non_blank(lookup(key));
        Self {
            api_url: get("NOTIFY_API_URL").unwrap_or_else(|| DEFAULT_NOTIFY_API_URL.to_string()),
            api_key: get("NOTIFY_API_KEY"),
            from_address: get("NOTIFY_FROM_EMAIL"),
            signup_recipient: get("EVENT_SIGNUP_NOTIFY_EMAIL")
                .unwrap_or_else(|| DEFAULT_NOTIFY_RECIPIENT.to_string()),
            booking_recipient: get("BOOKING_NOTIFY_EMAIL")
                .unwrap_or_else(|| DEFAULT_NOTIFY_RECIPIENT.to_string()),
        }
    }
}

/// Social feed settings.
#[derive(Clone)]
pub struct FeedConfig {
    /// Graph API token; without it the fallback posts are served.
    pub access_token: Option<String>,
    /// Profile link used when a post has no permalink.
    pub profile_url: String,
}

impl std::fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("profile_url", &self.profile_url)
            .finish()
    }
}

impl SiteConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| non_blank(lookup(key));

        let listen_addr: SocketAddr = get("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()?;

        let data_dir = PathBuf::from(get("APP_DATA_DIR").unwrap_or_else(|| "data".to_string()));

        let feed = FeedConfig {
            access_token: get("INSTAGRAM_ACCESS_TOKEN"),
            profile_url: get("INSTAGRAM_PROFILE_URL")
                .unwrap_or_else(|| DEFAULT_INSTAGRAM_PROFILE_URL.to_string()),
        };

        let log_json = get("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"));

        Ok(Self {
            listen_addr,
            data_dir,
            remote_store: RemoteStoreConfig::resolve(&lookup),
            admin_key: lookup("ADMIN_DASHBOARD_KEY").filter(|v| !v.trim().is_empty()),
            notify: NotifyConfig::resolve(&lookup),
            feed,
            log_json,
        })
    }
}

/// Trims a value and drops it when nothing is left.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
