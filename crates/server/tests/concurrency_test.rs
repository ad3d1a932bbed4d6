//! Concurrent use of one service.
//!
//! The service is shared read-only across tasks; reseeding swaps whole
//! snapshots, so every call must observe either the old or the new
//! catalogue in full.

use catalogue::{Catalogue, MovieFilters, Pagination};
use server::MoviesService;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/movielist.csv")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_interval_calls_agree() {
    let service = MoviesService::load_from_file(&fixture()).unwrap();
    let expected = service.producer_intervals();

    let mut handles = Vec::new();
    for _ in 0..32 {
        let service = service.clone();
        handles.push(tokio::task::spawn_blocking(move || service.producer_intervals()));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reseeding_never_exposes_a_partial_catalogue() {
    let service = MoviesService::load_from_file(&fixture()).unwrap();
    let full = Catalogue::load_from_file(&fixture()).unwrap();
    let full_len = full.len();

    let writer = {
        let service = service.clone();
        tokio::task::spawn_blocking(move || {
            for round in 0..50 {
                if round % 2 == 0 {
                    service.store().replace(Catalogue::new());
                } else {
                    service.store().replace(full.clone());
                }
            }
        })
    };

    let mut readers = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        readers.push(tokio::task::spawn_blocking(move || {
            for _ in 0..50 {
                let page = service.list_movies(&MovieFilters::none(), &Pagination::default());
                assert!(page.total == 0 || page.total == full_len);
                assert_eq!(page.items.len(), page.total.min(page.per_page));

                let intervals = service.producer_intervals();
                assert!(intervals.is_empty() || intervals.max[0].producer == "Matthew Vaughn");
            }
        }));
    }

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }
}

#[tokio::test]
async fn test_reload_from_file() {
    let service = MoviesService::load_from_file(&fixture()).unwrap();
    service.store().replace(Catalogue::new());
    assert!(service.producer_intervals().is_empty());

    let count = service.reload_from_file(&fixture()).unwrap();

    assert_eq!(count, 31);
    assert_eq!(service.producer_intervals().min[0].producer, "Joel Silver");
}
