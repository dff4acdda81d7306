/// TMDB metadata provider implementation.
use super::tmdb_types::{
    TmdbCompany, TmdbMovieDetails, TmdbSearchResponse, TmdbSearchResult, TmdbSeriesDetails,
};
use super::{Company, MetadataLookupError, MovieDatabase, SearchHit, TitleId, TitleKind, TitleRecord};

/// Database provider for the TMDB (The Movie Database) v3 API.
///
/// This provider searches movies and series through the multi-search
/// endpoint of https://api.themoviedb.org and fetches full records from
/// the per-kind detail endpoints. Requests are authenticated with an API
/// key passed as a query parameter.
pub struct TmdbClient {
    client: reqwest::blocking::Client,
    base_url: String,
    image_base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    /// Creates a new TMDB client with the given API key.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The TMDB v3 API key to authenticate requests with
    ///
    /// # Returns
    ///
    /// A Result containing the client, or a MetadataLookupError if the
    /// key is empty
    pub fn new(api_key: String) -> Result<Self, MetadataLookupError> {
        if api_key.trim().is_empty() {
            return Err(MetadataLookupError::MissingApiKey(
                "TMDB API key cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            client: reqwest::blocking::Client::new(),
            base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/original".to_string(),
            api_key,
            language: "en-US".to_string(),
        })
    }

    /// Performs a GET request against the API and deserializes the JSON
    /// response.
    ///
    /// Maps the status codes the API is known to return onto the error
    /// taxonomy: 404 becomes TitleNotFound, everything else non-successful
    /// becomes RequestFailed.
    fn get<T>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, MetadataLookupError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut query: Vec<(&str, &str)> = vec![
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
        ];
        query.extend_from_slice(params);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .map_err(|e| MetadataLookupError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MetadataLookupError::RequestFailed(
                "TMDB API key is invalid or missing".to_string(),
            ));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MetadataLookupError::TitleNotFound(path.to_string()));
        }

        if !status.is_success() {
            return Err(MetadataLookupError::RequestFailed(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json()
            .map_err(|e| MetadataLookupError::ParseFailed(e.to_string()))
    }

    /// Builds the full image URL for a poster path such as "/abc123.jpg".
    fn cover_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.image_base_url, poster_path)
    }

    /// Converts a multi-search entry to a search hit.
    ///
    /// Returns None for entries that are not a movie or a series (the
    /// multi-search endpoint also returns persons) and for entries without
    /// a usable title.
    fn convert_search_hit(result: TmdbSearchResult) -> Option<SearchHit> {
        let kind = match result.media_type.as_deref() {
            Some("movie") => TitleKind::Movie,
            Some("tv") => TitleKind::Series,
            _ => return None,
        };

        Some(SearchHit {
            id: TitleId {
                kind,
                id: result.id,
            },
            title: result.title?,
        })
    }

    /// Converts TMDB movie details to our internal record structure.
    fn convert_movie(&self, details: TmdbMovieDetails) -> TitleRecord {
        TitleRecord {
            id: TitleId {
                kind: TitleKind::Movie,
                id: details.id,
            },
            localized_title: localized_title(&details.original_title, details.title),
            title: details.original_title,
            cover_url: details.poster_path.as_deref().map(|p| self.cover_url(p)),
            genres: details.genres.into_iter().map(|g| g.name).collect(),
            year: parse_year(details.release_date.as_deref()),
            series_years: None,
            // TMDB movie details carry no distributor list
            distributors: Vec::new(),
            production_companies: convert_companies(details.production_companies),
        }
    }

    /// Converts TMDB series details to our internal record structure.
    ///
    /// Broadcasting networks take the role of distributors, and the air
    /// dates are folded into a year span like "2008-2013".
    fn convert_series(&self, details: TmdbSeriesDetails) -> TitleRecord {
        let series_years = series_years(
            details.first_air_date.as_deref(),
            details.last_air_date.as_deref(),
            details.status.as_deref(),
        );

        TitleRecord {
            id: TitleId {
                kind: TitleKind::Series,
                id: details.id,
            },
            localized_title: localized_title(&details.original_name, details.name),
            title: details.original_name,
            cover_url: details.poster_path.as_deref().map(|p| self.cover_url(p)),
            genres: details.genres.into_iter().map(|g| g.name).collect(),
            year: None,
            series_years,
            distributors: convert_companies(details.networks),
            production_companies: convert_companies(details.production_companies),
        }
    }
}

impl MovieDatabase for TmdbClient {
    fn search_titles(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, MetadataLookupError> {
        let response: TmdbSearchResponse =
            self.get("/search/multi", &[("query", query), ("page", "1")])?;

        let mut hits: Vec<SearchHit> = response
            .results
            .into_iter()
            .filter_map(Self::convert_search_hit)
            .collect();
        hits.truncate(limit);

        Ok(hits)
    }

    fn title_details(&self, id: &TitleId) -> Result<TitleRecord, MetadataLookupError> {
        match id.kind {
            TitleKind::Movie => {
                let details: TmdbMovieDetails = self.get(&format!("/movie/{}", id.id), &[])?;
                Ok(self.convert_movie(details))
            }
            TitleKind::Series => {
                let details: TmdbSeriesDetails = self.get(&format!("/tv/{}", id.id), &[])?;
                Ok(self.convert_series(details))
            }
        }
    }
}

/// Converts TMDB company entries, keeping absent names as None.
fn convert_companies(companies: Vec<TmdbCompany>) -> Vec<Company> {
    companies
        .into_iter()
        .map(|c| Company { name: c.name })
        .collect()
}

/// Returns the request-language title when it differs from the canonical
/// one, None otherwise.
fn localized_title(canonical: &str, localized: String) -> Option<String> {
    if localized == canonical {
        None
    } else {
        Some(localized)
    }
}

/// Extracts the year from a "YYYY-MM-DD" date string.
fn parse_year(date: Option<&str>) -> Option<u16> {
    date.and_then(|d| d.get(..4)).and_then(|y| y.parse().ok())
}

/// Builds a year span such as "2008-2013" from a series' air dates.
///
/// The last air date is only treated as final when the show has ended;
/// a still-running show is rendered as an open span like "2008-".
fn series_years(
    first_air_date: Option<&str>,
    last_air_date: Option<&str>,
    status: Option<&str>,
) -> Option<String> {
    let first = parse_year(first_air_date)?;

    let last = if status == Some("Ended") || status == Some("Canceled") {
        parse_year(last_air_date)
    } else {
        None
    };

    match last {
        Some(last) => Some(format!("{}-{}", first, last)),
        None => Some(format!("{}-", first)),
    }
}
