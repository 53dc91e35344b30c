//! Data models for the two configuration shapes the codec translates between.
//!
//! The `*Profile` family is the compact short-key form a client holds in
//! memory and embeds in URLs, so every wire name is a 2-4 letter alias. The
//! `*Payload` family is the verbose backend-canonical form with fully-spelled
//! field names, transmitted once at submission time.

use serde::{Deserialize, Serialize};

/// Short-key configuration record held client-side.
///
/// Every field is optional; absence means "unset", never "default". The only
/// place the codec synthesizes a value is [`CatalogConfigPayload::enabled`],
/// whose backend field is non-optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Streaming provider entries, in priority order.
    #[serde(rename = "sps", skip_serializing_if = "Option::is_none")]
    pub streaming_providers: Option<Vec<ProviderProfile>>,
    /// Catalog selections.
    #[serde(rename = "cat", skip_serializing_if = "Option::is_none")]
    pub catalogs: Option<Vec<CatalogProfile>>,
    /// Resolution filter. An inner `None` selects streams with no detected
    /// resolution; the legacy empty-string sentinel means the same thing and
    /// is normalized away during encoding.
    #[serde(rename = "res", skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<Vec<Option<String>>>,
    /// Quality filter groups.
    #[serde(rename = "qlt", skip_serializing_if = "Option::is_none")]
    pub qualities: Option<Vec<String>>,
    /// Maximum stream size, in bytes.
    #[serde(rename = "ms", skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    /// Cap on streams shown per resolution group.
    #[serde(rename = "msr", skip_serializing_if = "Option::is_none")]
    pub max_streams_per_resolution: Option<u32>,
    /// Torrent sorting criteria, highest priority first.
    #[serde(rename = "tsp", skip_serializing_if = "Option::is_none")]
    pub torrent_sorting: Option<Vec<String>>,
    /// Language sorting priorities.
    #[serde(rename = "lsp", skip_serializing_if = "Option::is_none")]
    pub language_sorting: Option<Vec<String>>,
    /// Show the full torrent name in stream listings.
    #[serde(rename = "sfn", skip_serializing_if = "Option::is_none")]
    pub show_full_name: Option<bool>,
    /// Show a country flag next to the stream language.
    #[serde(rename = "slf", skip_serializing_if = "Option::is_none")]
    pub show_language_flag: Option<bool>,
    /// Search indexers live instead of only serving cached results.
    #[serde(rename = "lss", skip_serializing_if = "Option::is_none")]
    pub live_search: Option<bool>,
    /// Include community-contributed streams.
    #[serde(rename = "cst", skip_serializing_if = "Option::is_none")]
    pub contribution_streams: Option<bool>,
    /// Stream name filter patterns.
    #[serde(rename = "nf", skip_serializing_if = "Option::is_none")]
    pub name_filters: Option<Vec<String>>,
    /// MediaFlow proxy configuration.
    #[serde(rename = "mfc", skip_serializing_if = "Option::is_none")]
    pub mediaflow: Option<MediaFlowProfile>,
    /// RPDB poster rating configuration.
    #[serde(rename = "rpc", skip_serializing_if = "Option::is_none")]
    pub rpdb: Option<RpdbProfile>,
    /// MDBList rating-list configuration.
    #[serde(rename = "mlc", skip_serializing_if = "Option::is_none")]
    pub mdblist: Option<MdblistProfile>,
    /// Indexer (Prowlarr) configuration.
    #[serde(rename = "idc", skip_serializing_if = "Option::is_none")]
    pub indexer: Option<IndexerProfile>,
}

/// Short-key streaming provider entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderProfile {
    /// Provider service identifier.
    #[serde(rename = "sv", skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Provider API token.
    #[serde(rename = "tk", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Self-hosted provider URL.
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Explicitly enabled/disabled. Absent counts as enabled.
    #[serde(rename = "en", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Surface the provider's watchlist as catalogs.
    #[serde(rename = "ewc", skip_serializing_if = "Option::is_none")]
    pub watchlist_catalogs: Option<bool>,
    /// Attached qBittorrent downloader, when the provider has one.
    #[serde(rename = "qbc", skip_serializing_if = "Option::is_none")]
    pub qbittorrent: Option<QbittorrentProfile>,
}

/// Short-key qBittorrent downloader settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QbittorrentProfile {
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "usr", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "pwd", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "cat", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Seeding time limit, in minutes.
    #[serde(rename = "sdt", skip_serializing_if = "Option::is_none")]
    pub seeding_time_limit: Option<u32>,
}

/// Short-key catalog selection entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogProfile {
    /// Catalog identifier.
    #[serde(rename = "id")]
    pub id: String,
    /// Catalog content type.
    #[serde(rename = "tp", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Absent counts as enabled; the backend field is non-optional, so
    /// encoding defaults this to `true`.
    #[serde(rename = "en", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Short-key MediaFlow proxy settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaFlowProfile {
    #[serde(rename = "pu", skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(rename = "ap", skip_serializing_if = "Option::is_none")]
    pub api_password: Option<String>,
    #[serde(rename = "pip", skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    #[serde(rename = "pls", skip_serializing_if = "Option::is_none")]
    pub proxy_live_streams: Option<bool>,
    #[serde(rename = "pds", skip_serializing_if = "Option::is_none")]
    pub proxy_debrid_streams: Option<bool>,
}

/// Short-key RPDB settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RpdbProfile {
    #[serde(rename = "ak", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Short-key MDBList settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MdblistProfile {
    #[serde(rename = "ak", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Selected MDBList list identifiers.
    #[serde(rename = "ls", skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<u64>>,
}

/// Short-key indexer settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerProfile {
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "ak", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(rename = "to", skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,
}

/// Backend-canonical user data record.
///
/// This is the contract surface with the backend: field names and
/// omitted-vs-null behavior must match what the backend deserializes. Unset
/// groups are omitted entirely; the backend treats an omitted key as "leave
/// untouched" and an explicit `null` as "clear".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDataPayload {
    /// All configured streaming providers, in original order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streaming_providers: Option<Vec<StreamingProviderPayload>>,
    /// Legacy singular provider field, kept for backward compatibility. Holds
    /// a copy of the primary provider whenever `streaming_providers` is sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streaming_provider: Option<StreamingProviderPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_configs: Option<Vec<CatalogConfigPayload>>,
    /// Selected resolutions; `null` entries select streams with no detected
    /// resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_resolutions: Option<Vec<Option<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_filter: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_streams_per_resolution: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub torrent_sorting_priority: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_sorting: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_full_torrent_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_language_country_flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_search_streams: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_streams: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name_filters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mediaflow_config: Option<MediaFlowConfigPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpdb_config: Option<RpdbConfigPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mdblist_config: Option<MdblistConfigPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexer_config: Option<IndexerConfigPayload>,
    /// Only attached for private/self-hosted instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_password: Option<String>,
}

/// Canonical streaming provider entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamingProviderPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_watchlist_catalogs: Option<bool>,
    /// Always serialized: `null` clears a stored downloader config, while an
    /// omitted key would leave it untouched.
    pub qbittorrent_config: Option<QbittorrentConfigPayload>,
}

/// Canonical qBittorrent downloader settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QbittorrentConfigPayload {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub category: Option<String>,
    pub seeding_time_limit: Option<u32>,
}

/// Canonical catalog selection entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfigPayload {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Non-optional backend field; absent short-key `en` encodes as `true`.
    pub enabled: bool,
}

/// Canonical MediaFlow proxy settings. Emitted whole whenever the parent key
/// is present, never partially.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaFlowConfigPayload {
    pub proxy_url: Option<String>,
    pub api_password: Option<String>,
    pub public_ip: Option<String>,
    pub proxy_live_streams: Option<bool>,
    pub proxy_debrid_streams: Option<bool>,
}

/// Canonical RPDB settings. Emitted whole whenever the parent key is present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RpdbConfigPayload {
    pub api_key: Option<String>,
}

/// Canonical MDBList settings. Emitted whole whenever the parent key is
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MdblistConfigPayload {
    pub api_key: Option<String>,
    pub lists: Option<Vec<u64>>,
}

/// Canonical indexer settings. Emitted whole whenever the parent key is
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfigPayload {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u32>,
}

impl From<&QbittorrentProfile> for QbittorrentConfigPayload {
    fn from(profile: &QbittorrentProfile) -> Self {
        Self {
            url: profile.url.clone(),
            username: profile.username.clone(),
            password: profile.password.clone(),
            category: profile.category.clone(),
            seeding_time_limit: profile.seeding_time_limit,
        }
    }
}

impl From<&QbittorrentConfigPayload> for QbittorrentProfile {
    fn from(payload: &QbittorrentConfigPayload) -> Self {
        Self {
            url: payload.url.clone(),
            username: payload.username.clone(),
            password: payload.password.clone(),
            category: payload.category.clone(),
            seeding_time_limit: payload.seeding_time_limit,
        }
    }
}

impl From<&ProviderProfile> for StreamingProviderPayload {
    fn from(profile: &ProviderProfile) -> Self {
        Self {
            service: profile.service.clone(),
            token: profile.token.clone(),
            url: profile.url.clone(),
            enabled: profile.enabled,
            enable_watchlist_catalogs: profile.watchlist_catalogs,
            qbittorrent_config: profile.qbittorrent.as_ref().map(Into::into),
        }
    }
}

impl From<&StreamingProviderPayload> for ProviderProfile {
    fn from(payload: &StreamingProviderPayload) -> Self {
        Self {
            service: payload.service.clone(),
            token: payload.token.clone(),
            url: payload.url.clone(),
            enabled: payload.enabled,
            watchlist_catalogs: payload.enable_watchlist_catalogs,
            qbittorrent: payload.qbittorrent_config.as_ref().map(Into::into),
        }
    }
}

impl From<&CatalogProfile> for CatalogConfigPayload {
    fn from(profile: &CatalogProfile) -> Self {
        Self {
            id: profile.id.clone(),
            kind: profile.kind.clone(),
            enabled: profile.enabled.unwrap_or(true),
        }
    }
}

impl From<&CatalogConfigPayload> for CatalogProfile {
    fn from(payload: &CatalogConfigPayload) -> Self {
        Self {
            id: payload.id.clone(),
            kind: payload.kind.clone(),
            enabled: Some(payload.enabled),
        }
    }
}

impl From<&MediaFlowProfile> for MediaFlowConfigPayload {
    fn from(profile: &MediaFlowProfile) -> Self {
        Self {
            proxy_url: profile.proxy_url.clone(),
            api_password: profile.api_password.clone(),
            public_ip: profile.public_ip.clone(),
            proxy_live_streams: profile.proxy_live_streams,
            proxy_debrid_streams: profile.proxy_debrid_streams,
        }
    }
}

impl From<&MediaFlowConfigPayload> for MediaFlowProfile {
    fn from(payload: &MediaFlowConfigPayload) -> Self {
        Self {
            proxy_url: payload.proxy_url.clone(),
            api_password: payload.api_password.clone(),
            public_ip: payload.public_ip.clone(),
            proxy_live_streams: payload.proxy_live_streams,
            proxy_debrid_streams: payload.proxy_debrid_streams,
        }
    }
}

impl From<&RpdbProfile> for RpdbConfigPayload {
    fn from(profile: &RpdbProfile) -> Self {
        Self {
            api_key: profile.api_key.clone(),
        }
    }
}

impl From<&RpdbConfigPayload> for RpdbProfile {
    fn from(payload: &RpdbConfigPayload) -> Self {
        Self {
            api_key: payload.api_key.clone(),
        }
    }
}

impl From<&MdblistProfile> for MdblistConfigPayload {
    fn from(profile: &MdblistProfile) -> Self {
        Self {
            api_key: profile.api_key.clone(),
            lists: profile.lists.clone(),
        }
    }
}

impl From<&MdblistConfigPayload> for MdblistProfile {
    fn from(payload: &MdblistConfigPayload) -> Self {
        Self {
            api_key: payload.api_key.clone(),
            lists: payload.lists.clone(),
        }
    }
}

impl From<&IndexerProfile> for IndexerConfigPayload {
    fn from(profile: &IndexerProfile) -> Self {
        Self {
            url: profile.url.clone(),
            api_key: profile.api_key.clone(),
            timeout_seconds: profile.timeout_seconds,
        }
    }
}

impl From<&IndexerConfigPayload> for IndexerProfile {
    fn from(payload: &IndexerConfigPayload) -> Self {
        Self {
            url: payload.url.clone(),
            api_key: payload.api_key.clone(),
            timeout_seconds: payload.timeout_seconds,
        }
    }
}
