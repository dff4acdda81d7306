/// TMDB API response types for deserialization.
///
/// These structures mirror the JSON response format of the TMDB v3 API.
use serde::Deserialize;

/// The top-level response from the TMDB /search/multi endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TmdbSearchResponse {
    /// Result entries of the requested page
    pub results: Vec<TmdbSearchResult>,
}

/// A single entry from the multi-search endpoint.
///
/// Movies carry `title`, series carry `name`; the alias folds both into
/// one field. Person entries carry neither a usable title nor a media
/// record and are filtered out during conversion.
#[derive(Debug, Deserialize)]
pub(super) struct TmdbSearchResult {
    /// Numeric identifier within the media type's namespace
    pub id: u64,
    /// "movie", "tv" or "person"
    pub media_type: Option<String>,
    /// Movie title or series name
    #[serde(alias = "name")]
    pub title: Option<String>,
}

/// Detailed movie information from the /movie/{id} endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TmdbMovieDetails {
    pub id: u64,
    /// Title in the request language
    pub title: String,
    /// Title in the original language
    pub original_title: String,
    /// Release date in "YYYY-MM-DD" format (may be empty or null)
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    #[serde(default)]
    pub production_companies: Vec<TmdbCompany>,
}

/// Detailed series information from the /tv/{id} endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TmdbSeriesDetails {
    pub id: u64,
    /// Name in the request language
    pub name: String,
    /// Name in the original language
    pub original_name: String,
    /// First air date in "YYYY-MM-DD" format (may be empty or null)
    pub first_air_date: Option<String>,
    /// Last air date; only final for shows whose status is "Ended"
    pub last_air_date: Option<String>,
    /// Production status such as "Returning Series" or "Ended"
    pub status: Option<String>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    /// Broadcasting networks
    #[serde(default)]
    pub networks: Vec<TmdbCompany>,
    #[serde(default)]
    pub production_companies: Vec<TmdbCompany>,
}

/// Genre entry within a details response.
#[derive(Debug, Deserialize)]
pub(super) struct TmdbGenre {
    pub name: String,
}

/// Company entry within a details response (network, production company).
#[derive(Debug, Deserialize)]
pub(super) struct TmdbCompany {
    /// Company name (may be null)
    pub name: Option<String>,
}
