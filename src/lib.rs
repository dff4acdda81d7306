//! Marquee - Look up a movie or TV series and print a metadata report
//!
//! This library provides the lookup driver: search a movie database for a
//! title, fetch the full record for each hit, and report the results
//! through progress events. The database itself sits behind the
//! [`MovieDatabase`] trait so callers (and tests) can supply their own
//! provider.

mod metadata_lookup;
pub mod report;

// Re-export the provider seam
pub use metadata_lookup::{
    Company, MetadataLookupError, MovieDatabase, SearchHit, TitleId, TitleKind, TitleRecord,
    TmdbClient,
};

/// Progress event emitted during a lookup
///
/// These events allow library users to track progress and render output.
/// Failures of the external calls surface here as events rather than as
/// errors: a failed search or detail fetch only affects the item it
/// belongs to, and the driver continues with the rest.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Lookup started
    Started { search_term: String, limit: usize },

    /// The search call failed; the lookup continues as if it had
    /// produced no hits
    SearchFailed { reason: String },

    /// The search produced no hits (or failed)
    NoResults { search_term: String },

    /// The search produced hits that will now be fetched in order
    ResultsFound { count: usize },

    /// Fetching details for one search hit
    ProcessingResult {
        index: usize,
        total: usize,
        id: TitleId,
    },

    /// A full record was fetched and is ready to be reported
    ReportReady { record: TitleRecord },

    /// The detail fetch for one hit failed; the lookup continues with
    /// the next hit
    DetailFetchFailed {
        id: TitleId,
        title: String,
        reason: String,
    },
}

/// Searches for a title and fetches the full record for each hit
///
/// This function runs the whole lookup: it searches the database for the
/// given term, truncates the hits to `limit`, and fetches the detail
/// record for each remaining hit in the database's ranking order. Every
/// external-call failure is reported through the progress callback and
/// then treated as an absence of data, so a single bad hit never aborts
/// the lookup.
///
/// # Arguments
///
/// * `database` - The movie database provider to query
/// * `search_term` - The title to search for
/// * `limit` - The maximum number of hits to process
/// * `progress_callback` - Closure called with progress events (can be
///   empty for silent operation)
///
/// # Returns
///
/// The successfully fetched records, in search-result order. An empty
/// vector means the search produced no usable hits or every detail fetch
/// failed.
///
/// # Examples
///
/// ```no_run
/// use marquee::{run_lookup, ProgressEvent, TmdbClient};
///
/// let database = TmdbClient::new("api-key".to_string()).unwrap();
/// let records = run_lookup(&database, "Breaking Bad", 1, |event| {
///     if let ProgressEvent::ReportReady { record } = event {
///         println!("{}", marquee::report::format_title_report(&record));
///     }
/// });
/// ```
pub fn run_lookup<D, F>(
    database: &D,
    search_term: &str,
    limit: usize,
    mut progress_callback: F,
) -> Vec<TitleRecord>
where
    D: MovieDatabase,
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::Started {
        search_term: search_term.to_string(),
        limit,
    });

    // Search failures collapse into the no-results path
    let mut hits = match database.search_titles(search_term, limit) {
        Ok(hits) => hits,
        Err(error) => {
            progress_callback(ProgressEvent::SearchFailed {
                reason: error.to_string(),
            });
            Vec::new()
        }
    };

    // The provider already limits its result; enforce it here as well so
    // a misbehaving provider cannot make the driver fetch more
    hits.truncate(limit);

    if hits.is_empty() {
        progress_callback(ProgressEvent::NoResults {
            search_term: search_term.to_string(),
        });
        return Vec::new();
    }

    progress_callback(ProgressEvent::ResultsFound { count: hits.len() });

    let mut records = Vec::new();

    for (index, hit) in hits.iter().enumerate() {
        progress_callback(ProgressEvent::ProcessingResult {
            index,
            total: hits.len(),
            id: hit.id,
        });

        match database.title_details(&hit.id) {
            Ok(record) => {
                progress_callback(ProgressEvent::ReportReady {
                    record: record.clone(),
                });
                records.push(record);
            }
            Err(error) => {
                progress_callback(ProgressEvent::DetailFetchFailed {
                    id: hit.id,
                    title: hit.title.clone(),
                    reason: error.to_string(),
                });
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Fake provider returning canned data and recording detail calls
    struct FakeDatabase {
        hits: Result<Vec<SearchHit>, String>,
        failing_ids: Vec<TitleId>,
        detail_calls: RefCell<Vec<TitleId>>,
    }

    impl FakeDatabase {
        fn with_hits(hits: Vec<SearchHit>) -> Self {
            Self {
                hits: Ok(hits),
                failing_ids: Vec::new(),
                detail_calls: RefCell::new(Vec::new()),
            }
        }

        fn with_search_error(reason: &str) -> Self {
            Self {
                hits: Err(reason.to_string()),
                failing_ids: Vec::new(),
                detail_calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl MovieDatabase for FakeDatabase {
        fn search_titles(
            &self,
            _query: &str,
            limit: usize,
        ) -> Result<Vec<SearchHit>, MetadataLookupError> {
            match &self.hits {
                Ok(hits) => {
                    let mut hits = hits.clone();
                    hits.truncate(limit);
                    Ok(hits)
                }
                Err(reason) => Err(MetadataLookupError::RequestFailed(reason.clone())),
            }
        }

        fn title_details(&self, id: &TitleId) -> Result<TitleRecord, MetadataLookupError> {
            self.detail_calls.borrow_mut().push(*id);

            if self.failing_ids.contains(id) {
                return Err(MetadataLookupError::RequestFailed(
                    "connection reset".to_string(),
                ));
            }

            Ok(TitleRecord {
                id: *id,
                title: format!("Title {}", id),
                localized_title: None,
                cover_url: None,
                genres: Vec::new(),
                year: Some(1999),
                series_years: None,
                distributors: Vec::new(),
                production_companies: Vec::new(),
            })
        }
    }

    fn movie_hit(id: u64) -> SearchHit {
        let id = TitleId {
            kind: TitleKind::Movie,
            id,
        };
        SearchHit {
            id,
            title: format!("Title {}", id),
        }
    }

    #[test]
    fn test_no_results_performs_no_detail_calls() {
        let database = FakeDatabase::with_hits(Vec::new());
        let mut events = Vec::new();

        let records = run_lookup(&database, "Unknown Title", 1, |e| events.push(e));

        assert!(records.is_empty());
        assert!(database.detail_calls.borrow().is_empty());
        assert!(
            events
                .iter()
                .any(|e| matches!(e, ProgressEvent::NoResults { .. }))
        );
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, ProgressEvent::SearchFailed { .. }))
        );
    }

    #[test]
    fn test_search_failure_collapses_into_no_results() {
        let database = FakeDatabase::with_search_error("connection refused");
        let mut events = Vec::new();

        let records = run_lookup(&database, "Breaking Bad", 1, |e| events.push(e));

        assert!(records.is_empty());
        assert!(database.detail_calls.borrow().is_empty());
        assert!(matches!(
            &events[1],
            ProgressEvent::SearchFailed { reason } if reason.contains("connection refused")
        ));
        assert!(matches!(&events[2], ProgressEvent::NoResults { .. }));
    }

    #[test]
    fn test_limit_caps_processed_hits() {
        let database = FakeDatabase::with_hits(vec![movie_hit(1), movie_hit(2), movie_hit(3)]);

        let records = run_lookup(&database, "Title", 1, |_| {});

        assert_eq!(records.len(), 1);
        assert_eq!(database.detail_calls.borrow().len(), 1);
    }

    #[test]
    fn test_all_hits_processed_when_fewer_than_limit() {
        let database = FakeDatabase::with_hits(vec![movie_hit(1), movie_hit(2)]);

        let records = run_lookup(&database, "Title", 6, |_| {});

        assert_eq!(records.len(), 2);
        assert_eq!(database.detail_calls.borrow().len(), 2);
    }

    #[test]
    fn test_detail_failure_skips_only_that_hit() {
        let failing = TitleId {
            kind: TitleKind::Movie,
            id: 1,
        };
        let mut database = FakeDatabase::with_hits(vec![movie_hit(1), movie_hit(2)]);
        database.failing_ids.push(failing);

        let mut events = Vec::new();
        let records = run_lookup(&database, "Title", 2, |e| events.push(e));

        // The failing hit is reported and the next one still processed
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.id, 2);
        assert_eq!(database.detail_calls.borrow().len(), 2);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, ProgressEvent::DetailFetchFailed { id, .. } if *id == failing))
        );
    }

    #[test]
    fn test_fetched_record_contains_title() {
        let database = FakeDatabase::with_hits(vec![movie_hit(7)]);

        let records = run_lookup(&database, "Title", 1, |_| {});

        assert_eq!(records.len(), 1);
        assert!(!records[0].title.is_empty());
    }

    #[test]
    fn test_repeated_lookup_is_idempotent() {
        let database = FakeDatabase::with_hits(vec![movie_hit(1), movie_hit(2)]);

        let first = run_lookup(&database, "Title", 2, |_| {});
        let second = run_lookup(&database, "Title", 2, |_| {});

        assert_eq!(first, second);
    }
}
