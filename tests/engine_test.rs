use filmdex::query::correction::TermCorrector;
use filmdex::{
    Config, ErrorKind, RawFilmRow, SearchEngine, SearchRequest, VecSource,
};
use tempfile::TempDir;

fn row(id: &str, title: &str, runtime: &str, vote: &str, date: &str) -> RawFilmRow {
    RawFilmRow {
        id: id.to_string(),
        title: title.to_string(),
        runtime: runtime.to_string(),
        vote_average: vote.to_string(),
        release_date: date.to_string(),
        ..RawFilmRow::default()
    }
}

fn catalog() -> VecSource {
    VecSource::new(vec![
        row("1", "The Great Escape", "172", "8.2", "1963-07-04"),
        row("2", "Great Expectations", "118", "7.1", "1998-01-30"),
    ])
}

fn engine(dir: &TempDir) -> SearchEngine {
    let config = Config {
        index_path: dir.path().join("index"),
        ..Config::default()
    };
    let engine = SearchEngine::open(config).unwrap();
    engine.rebuild_index(&mut catalog()).unwrap();
    engine
}

#[test]
fn free_text_search_ranks_both_films() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let results = engine.search(&SearchRequest::new("great", 0, 10)).unwrap();
    assert_eq!(results.total_hits, 2);
    assert_eq!(results.films.len(), 2);

    // Both films have two indexed tokens and one "great", so scores tie
    // and the ascending-id tie-break decides.
    assert!((results.films[0].score - results.films[1].score).abs() < 1e-6);
    assert_eq!(results.films[0].record.id, "1");
    assert_eq!(results.films[1].record.id, "2");
    assert_eq!(results.films[0].record.runtime, 172);
    assert_eq!(
        results.films[0].record.release_date.map(|d| d.to_string()),
        Some("1963-07-04".to_string())
    );
}

#[test]
fn duration_filter_narrows_the_text_match() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let mut request = SearchRequest::new("great", 0, 10);
    request.duration_min = Some(150);
    let results = engine.search(&request).unwrap();
    assert_eq!(results.total_hits, 1);
    assert_eq!(results.films[0].record.id, "1");
}

#[test]
fn duration_bounds_are_inclusive_on_both_ends() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let mut request = SearchRequest::new("", 0, 10);
    request.duration_min = Some(118);
    request.duration_max = Some(172);
    let results = engine.search(&request).unwrap();
    assert_eq!(results.total_hits, 2);
}

#[test]
fn vote_average_filter_is_a_lower_bound() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let mut request = SearchRequest::new("", 0, 10);
    request.vote_average_min = Some(8.0);
    let results = engine.search(&request).unwrap();
    assert_eq!(results.total_hits, 1);
    assert_eq!(results.films[0].record.id, "1");
}

#[test]
fn open_ended_date_range_reaches_the_future() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let mut request = SearchRequest::new("", 0, 10);
    request.release_date_start = chrono::NaiveDate::from_ymd_opt(1990, 1, 1);
    let results = engine.search(&request).unwrap();
    assert_eq!(results.total_hits, 1);
    assert_eq!(results.films[0].record.id, "2");
}

#[test]
fn bounded_date_range_is_inclusive() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let mut request = SearchRequest::new("", 0, 10);
    request.release_date_start = chrono::NaiveDate::from_ymd_opt(1963, 7, 4);
    request.release_date_end = chrono::NaiveDate::from_ymd_opt(1963, 7, 4);
    let results = engine.search(&request).unwrap();
    assert_eq!(results.total_hits, 1);
    assert_eq!(results.films[0].record.id, "1");
}

#[test]
fn stop_word_only_text_degenerates_to_match_all() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let results = engine.search(&SearchRequest::new("the of", 0, 10)).unwrap();
    assert_eq!(results.total_hits, 2);
}

#[test]
fn invalid_pagination_is_an_explicit_failure() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let err = engine.search(&SearchRequest::new("great", 0, 0)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidPagination);
    let err = engine.search(&SearchRequest::new("great", -2, 10)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidPagination);
}

#[test]
fn no_match_is_a_successful_empty_result() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let results = engine.search(&SearchRequest::new("nonexistent", 0, 10)).unwrap();
    assert_eq!(results.total_hits, 0);
    assert!(results.films.is_empty());
}

#[test]
fn pagination_slices_are_disjoint_and_contiguous() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        index_path: dir.path().join("index"),
        ..Config::default()
    };
    let engine = SearchEngine::open(config).unwrap();
    let rows: Vec<RawFilmRow> = (0..35)
        .map(|i| row(&format!("{i}"), "Midnight Film", "100", "5.0", "2000-01-01"))
        .collect();
    engine.rebuild_index(&mut VecSource::new(rows)).unwrap();

    let mut seen = Vec::new();
    for page in 0..4 {
        let results = engine
            .search(&SearchRequest::new("midnight film", page, 10))
            .unwrap();
        assert_eq!(results.total_hits, 35);
        seen.extend(results.films.iter().map(|f| f.record.id.clone()));
    }
    assert_eq!(seen.len(), 35);
    let mut deduped = seen.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), 35, "pages overlap");
}

#[test]
fn suggestions_complete_a_title_prefix_and_deduplicate() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let suggestions = engine.suggest("gre").unwrap();
    assert_eq!(
        suggestions,
        vec![
            "The Great Escape".to_string(),
            "Great Expectations".to_string(),
        ]
    );

    assert!(engine.suggest("").unwrap().is_empty());

    // Two identically titled films collapse to one suggestion.
    let mut source = VecSource::new(vec![
        row("1", "Great Expectations", "118", "7.1", "1998-01-30"),
        row("2", "Great Expectations", "110", "6.0", "2012-11-08"),
    ]);
    engine.rebuild_index(&mut source).unwrap();
    assert_eq!(
        engine.suggest("gre").unwrap(),
        vec!["Great Expectations".to_string()]
    );
}

#[test]
fn rebuild_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    for _ in 0..2 {
        engine.delete_index().unwrap();
        engine.rebuild_index(&mut catalog()).unwrap();
    }

    assert_eq!(engine.doc_count(), 2);
    let results = engine.search(&SearchRequest::new("great", 0, 10)).unwrap();
    assert_eq!(results.total_hits, 2);
    assert_eq!(results.films[0].record.id, "1");
}

#[test]
fn delete_index_empties_search_and_suggestions() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    engine.delete_index().unwrap();
    engine.delete_index().unwrap(); // idempotent

    let results = engine.search(&SearchRequest::new("great", 0, 10)).unwrap();
    assert_eq!(results.total_hits, 0);
    assert!(engine.suggest("gre").unwrap().is_empty());
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        index_path: dir.path().join("index"),
        ..Config::default()
    };
    let engine = SearchEngine::open(config).unwrap();

    let mut source = VecSource::new(vec![
        row("1", "Kept One", "100", "5.0", "2000-01-01"),
        row("", "Dropped", "100", "5.0", "2000-01-01"),
        row("2", "Kept Two", "100", "5.0", "2000-01-01"),
    ]);
    let summary = engine.rebuild_index(&mut source).unwrap();
    assert_eq!(summary.indexed, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(engine.doc_count(), 2);
}

#[test]
fn committed_generation_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let index_path = dir.path().join("index");
    {
        let config = Config {
            index_path: index_path.clone(),
            ..Config::default()
        };
        let engine = SearchEngine::open(config).unwrap();
        engine.rebuild_index(&mut catalog()).unwrap();
    }

    let config = Config {
        index_path,
        ..Config::default()
    };
    let engine = SearchEngine::open(config).unwrap();
    assert_eq!(engine.doc_count(), 2);
    let results = engine.search(&SearchRequest::new("great escape", 0, 10)).unwrap();
    assert_eq!(results.total_hits, 1);
    assert_eq!(results.films[0].record.id, "1");
    assert_eq!(engine.suggest("gre").unwrap().len(), 2);
}

#[test]
fn correction_strategy_is_pluggable() {
    struct SwapGraet;

    impl TermCorrector for SwapGraet {
        fn correct(&self, term: &str) -> String {
            term.replace("graet", "great")
        }

        fn name(&self) -> &str {
            "swap_graet"
        }
    }

    let dir = TempDir::new().unwrap();
    let engine = engine(&dir).with_corrector(Box::new(SwapGraet));

    let results = engine.search(&SearchRequest::new("graet", 0, 10)).unwrap();
    assert_eq!(results.total_hits, 2);
}
