mod common;

use chrono::NaiveDate;
use common::{draft, draft_in_category, setup_store};
use karuta_archive::{AttemptDraft, Category, CatalogStore, PuzzleId};

fn id(value: &str) -> PuzzleId {
    PuzzleId::new(value.to_string()).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2025, 2, 1)
}

#[tokio::test]
async fn apply_snapshot_is_idempotent() {
    let ctx = setup_store().await;
    let snapshot = vec![
        draft("p1", Some("2025-01-01")),
        draft("p2", Some("2025-01-02")),
        draft("p3", None),
    ];

    ctx.store.apply_snapshot(&snapshot).await.unwrap();
    let first: Vec<_> = ctx
        .store
        .list_page(0, 10, None)
        .await
        .unwrap()
        .into_iter()
        .map(|e| (e.id, e.category, e.item_date, e.difficulty, e.is_special))
        .collect();

    let applied = ctx.store.apply_snapshot(&snapshot).await.unwrap();
    assert_eq!(applied.orphans_removed, 0);
    let second: Vec<_> = ctx
        .store
        .list_page(0, 10, None)
        .await
        .unwrap()
        .into_iter()
        .map(|e| (e.id, e.category, e.item_date, e.difficulty, e.is_special))
        .collect();

    assert_eq!(first, second);
}

#[tokio::test]
async fn orphans_are_deleted_but_attempt_history_survives() {
    let ctx = setup_store().await;
    ctx.store
        .apply_snapshot(&[draft("x", Some("2025-01-01")), draft("y", Some("2025-01-02"))])
        .await
        .unwrap();

    let attempt = ctx
        .store
        .record_attempt(AttemptDraft::new(id("x")))
        .await
        .unwrap();
    ctx.store
        .complete_attempt(&attempt.id, Some(42))
        .await
        .unwrap();

    let applied = ctx
        .store
        .apply_snapshot(&[draft("y", Some("2025-01-02"))])
        .await
        .unwrap();
    assert_eq!(applied.orphans_removed, 1);

    assert!(ctx.store.get_entry(&id("x")).await.unwrap().is_none());
    let history = ctx.store.attempts_for_puzzle(&id("x")).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].completed);
    assert_eq!(history[0].score, Some(42));
}

#[tokio::test]
async fn pages_are_ordered_date_descending_with_id_tiebreak() {
    let ctx = setup_store().await;
    ctx.store
        .apply_snapshot(&[
            draft("b", Some("2025-01-02")),
            draft("a", Some("2025-01-02")),
            draft("c", Some("2025-01-03")),
            draft("z", None),
        ])
        .await
        .unwrap();

    let page = ctx.store.list_page(0, 10, None).await.unwrap();
    let ids: Vec<&str> = page.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b", "z"]);
}

#[tokio::test]
async fn pagination_totals_are_consistent_for_any_limit() {
    let ctx = setup_store().await;
    let mut snapshot = Vec::new();
    for day in 1..=9 {
        snapshot.push(draft_in_category(
            &format!("c{day}"),
            Some(&format!("2025-01-{day:02}")),
            "classic",
        ));
    }
    for day in 1..=4 {
        snapshot.push(draft_in_category(
            &format!("m{day}"),
            Some(&format!("2025-01-{day:02}")),
            "mini",
        ));
    }
    ctx.store.apply_snapshot(&snapshot).await.unwrap();

    for filter in [None, Some(Category::Classic), Some(Category::Mini)] {
        let total = ctx.store.count_matching(filter.as_ref()).await.unwrap();
        for limit in 1..=5u32 {
            let mut fetched = 0u64;
            let mut offset = 0u32;
            while u64::from(offset) < total {
                let page = ctx
                    .store
                    .list_page(offset, limit, filter.as_ref())
                    .await
                    .unwrap();
                fetched += page.len() as u64;
                offset += limit;
            }
            assert_eq!(fetched, total, "filter {filter:?} limit {limit}");
        }
    }
}

#[tokio::test]
async fn incomplete_filter_honors_attempts_and_dates() {
    let ctx = setup_store().await;
    ctx.store
        .apply_snapshot(&[
            draft("untouched", Some("2025-01-20")),
            draft("in-progress", Some("2025-01-21")),
            draft("done", Some("2025-01-22")),
            draft("future", Some("2025-02-10")),
            draft("backlog", None),
        ])
        .await
        .unwrap();

    ctx.store
        .record_attempt(AttemptDraft::new(id("in-progress")))
        .await
        .unwrap();
    let done = ctx
        .store
        .record_attempt(AttemptDraft::new(id("done")))
        .await
        .unwrap();
    ctx.store.complete_attempt(&done.id, None).await.unwrap();

    let incomplete = ctx.store.list_incomplete(0, 10, today()).await.unwrap();
    let ids: Vec<&str> = incomplete.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["in-progress", "untouched"]);
    assert_eq!(ctx.store.count_incomplete(today()).await.unwrap(), 2);
}

#[tokio::test]
async fn duplicate_attempts_resolve_to_the_most_recently_started() {
    let ctx = setup_store().await;
    ctx.store
        .apply_snapshot(&[draft("dup", Some("2025-01-20"))])
        .await
        .unwrap();

    let early = chrono::Utc::now() - chrono::Duration::hours(2);
    let late = chrono::Utc::now() - chrono::Duration::hours(1);

    // Older attempt completed, newer one abandoned: the newer row wins
    // and the puzzle counts as incomplete.
    let completed = ctx
        .store
        .record_attempt(AttemptDraft::new(id("dup")).with_started_at(early))
        .await
        .unwrap();
    ctx.store
        .complete_attempt(&completed.id, Some(10))
        .await
        .unwrap();
    ctx.store
        .record_attempt(AttemptDraft::new(id("dup")).with_started_at(late))
        .await
        .unwrap();

    let current = ctx
        .store
        .current_attempt(&id("dup"))
        .await
        .unwrap()
        .expect("current attempt");
    assert!(!current.completed);

    for _ in 0..3 {
        let ids: Vec<String> = ctx
            .store
            .list_incomplete(0, 10, today())
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, vec!["dup".to_string()]);
    }
    assert_eq!(ctx.store.count_incomplete(today()).await.unwrap(), 1);

    // has_completed_attempt looks at history, not the current row.
    assert!(ctx.store.has_completed_attempt(&id("dup")).await.unwrap());
}

#[tokio::test]
async fn same_start_instant_ties_break_by_insertion_order() {
    let ctx = setup_store().await;
    ctx.store
        .apply_snapshot(&[draft("tie", Some("2025-01-20"))])
        .await
        .unwrap();

    let instant = chrono::Utc::now();
    ctx.store
        .record_attempt(AttemptDraft::new(id("tie")).with_started_at(instant))
        .await
        .unwrap();
    let second = ctx
        .store
        .record_attempt(AttemptDraft::new(id("tie")).with_started_at(instant))
        .await
        .unwrap();
    ctx.store.complete_attempt(&second.id, None).await.unwrap();

    // The later insertion (larger rowid) is the current row, so the
    // puzzle no longer shows as incomplete, consistently.
    for _ in 0..3 {
        assert_eq!(ctx.store.count_incomplete(today()).await.unwrap(), 0);
    }
    let current = ctx
        .store
        .current_attempt(&id("tie"))
        .await
        .unwrap()
        .expect("current attempt");
    assert_eq!(current.id, second.id);
}

#[tokio::test]
async fn completing_an_unknown_attempt_is_an_error() {
    let ctx = setup_store().await;
    let result = ctx.store.complete_attempt("missing", None).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn completed_puzzle_ids_deduplicates() {
    let ctx = setup_store().await;
    ctx.store
        .apply_snapshot(&[draft("p", Some("2025-01-20"))])
        .await
        .unwrap();

    for _ in 0..2 {
        let attempt = ctx
            .store
            .record_attempt(AttemptDraft::new(id("p")))
            .await
            .unwrap();
        ctx.store.complete_attempt(&attempt.id, None).await.unwrap();
    }

    let completed = ctx.store.completed_puzzle_ids().await.unwrap();
    assert_eq!(completed.len(), 1);
    assert!(completed.contains(&id("p")));
}
