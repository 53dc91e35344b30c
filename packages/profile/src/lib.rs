#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

//! Codec between the compact short-key [`ProfileConfig`] and the canonical
//! [`UserDataPayload`] the backend accepts.
//!
//! The forward direction runs at submission time, right before the payload is
//! exchanged for an opaque encrypted token. The codec is stateless and does
//! not validate: a malformed profile encodes to a structurally valid but
//! semantically wrong payload, and rejecting it is the backend's job.

pub mod models;

use models::{ProfileConfig, ProviderProfile, UserDataPayload};

/// Encodes a short-key profile into the canonical backend payload.
///
/// Each optional group projects into its payload field(s) only when present;
/// missing groups emit nothing. The one synthesized value is the catalog
/// `enabled` flag, which defaults to `true` because the backend field is
/// non-optional. `api_password` is attached only when the caller supplies a
/// non-empty value.
#[must_use]
pub fn profile_to_user_data(config: &ProfileConfig, api_password: Option<&str>) -> UserDataPayload {
    let mut data = UserDataPayload::default();

    if let Some(providers) = config
        .streaming_providers
        .as_ref()
        .filter(|providers| !providers.is_empty())
    {
        // The legacy singular field duplicates the primary provider on
        // purpose, for backends that predate the list form.
        data.streaming_provider = primary_provider(providers).map(Into::into);
        data.streaming_providers = Some(providers.iter().map(Into::into).collect());
    }

    if let Some(catalogs) = &config.catalogs {
        data.catalog_configs = Some(catalogs.iter().map(Into::into).collect());
    }

    if let Some(resolutions) = &config.resolutions {
        data.selected_resolutions = Some(
            resolutions
                .iter()
                .map(|resolution| normalize_resolution(resolution.as_deref()))
                .collect(),
        );
    }

    data.quality_filter = config.qualities.clone();
    data.max_size = config.max_size;
    data.max_streams_per_resolution = config.max_streams_per_resolution;
    data.torrent_sorting_priority = config.torrent_sorting.clone();
    data.language_sorting = config.language_sorting.clone();
    data.show_full_torrent_name = config.show_full_name;
    data.show_language_country_flag = config.show_language_flag;
    data.live_search_streams = config.live_search;
    data.contribution_streams = config.contribution_streams;
    data.stream_name_filters = config.name_filters.clone();

    data.mediaflow_config = config.mediaflow.as_ref().map(Into::into);
    data.rpdb_config = config.rpdb.as_ref().map(Into::into);
    data.mdblist_config = config.mdblist.as_ref().map(Into::into);
    data.indexer_config = config.indexer.as_ref().map(Into::into);

    if let Some(password) = api_password.filter(|password| !password.is_empty()) {
        data.api_password = Some(password.to_string());
    }

    data
}

/// Decodes a canonical payload back into the short-key profile form.
///
/// The legacy singular `streaming_provider` is ignored whenever the list form
/// is present, since it only ever holds a duplicate of the primary entry.
/// `api_password` is call-time input, not profile state, and never decodes.
#[must_use]
pub fn user_data_to_profile(data: &UserDataPayload) -> ProfileConfig {
    ProfileConfig {
        streaming_providers: data
            .streaming_providers
            .as_ref()
            .map(|providers| providers.iter().map(Into::into).collect())
            .or_else(|| {
                data.streaming_provider
                    .as_ref()
                    .map(|provider| vec![provider.into()])
            }),
        catalogs: data
            .catalog_configs
            .as_ref()
            .map(|catalogs| catalogs.iter().map(Into::into).collect()),
        resolutions: data.selected_resolutions.clone(),
        qualities: data.quality_filter.clone(),
        max_size: data.max_size,
        max_streams_per_resolution: data.max_streams_per_resolution,
        torrent_sorting: data.torrent_sorting_priority.clone(),
        language_sorting: data.language_sorting.clone(),
        show_full_name: data.show_full_torrent_name,
        show_language_flag: data.show_language_country_flag,
        live_search: data.live_search_streams,
        contribution_streams: data.contribution_streams,
        name_filters: data.stream_name_filters.clone(),
        mediaflow: data.mediaflow_config.as_ref().map(Into::into),
        rpdb: data.rpdb_config.as_ref().map(Into::into),
        mdblist: data.mdblist_config.as_ref().map(Into::into),
        indexer: data.indexer_config.as_ref().map(Into::into),
    }
}

/// Selects the primary provider: the first entry not explicitly disabled.
///
/// An absent `en` flag counts as enabled. List order decides ties.
#[must_use]
pub fn primary_provider(providers: &[ProviderProfile]) -> Option<&ProviderProfile> {
    providers
        .iter()
        .find(|provider| provider.enabled != Some(false))
}

/// Maps a resolution entry, converting the legacy empty-string sentinel
/// (after trimming) to `None`. Anything else passes through untouched.
#[must_use]
pub fn normalize_resolution(resolution: Option<&str>) -> Option<String> {
    match resolution {
        Some(value) if value.trim().is_empty() => None,
        other => other.map(ToString::to_string),
    }
}
