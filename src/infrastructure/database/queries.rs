pub(super) const UPSERT_ENTRY: &str = r#"
    INSERT INTO catalog_entries (id, category, item_date, difficulty, is_special, synced_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    ON CONFLICT(id) DO UPDATE SET
        category = excluded.category,
        item_date = excluded.item_date,
        difficulty = excluded.difficulty,
        is_special = excluded.is_special,
        synced_at = excluded.synced_at
"#;

pub(super) const DELETE_ENTRY: &str = r#"
    DELETE FROM catalog_entries
    WHERE id = ?1
"#;

pub(super) const SELECT_ALL_IDS: &str = r#"
    SELECT id
    FROM catalog_entries
"#;

pub(super) const SELECT_ENTRY_BY_ID: &str = r#"
    SELECT id, category, item_date, difficulty, is_special, synced_at
    FROM catalog_entries
    WHERE id = ?1
"#;

pub(super) const SELECT_PAGE: &str = r#"
    SELECT id, category, item_date, difficulty, is_special, synced_at
    FROM catalog_entries
    ORDER BY (item_date IS NULL) ASC, item_date DESC, id ASC
    LIMIT ?1 OFFSET ?2
"#;

pub(super) const SELECT_PAGE_BY_CATEGORY: &str = r#"
    SELECT id, category, item_date, difficulty, is_special, synced_at
    FROM catalog_entries
    WHERE category = ?1
    ORDER BY (item_date IS NULL) ASC, item_date DESC, id ASC
    LIMIT ?2 OFFSET ?3
"#;

pub(super) const COUNT_ALL: &str = r#"
    SELECT COUNT(*) AS count
    FROM catalog_entries
"#;

pub(super) const COUNT_BY_CATEGORY: &str = r#"
    SELECT COUNT(*) AS count
    FROM catalog_entries
    WHERE category = ?1
"#;

// The joined attempt row is pinned to one deterministic pick per
// puzzle (latest started_at, then largest rowid) so duplicate attempt
// rows cannot make the filter flap between calls.
pub(super) const SELECT_INCOMPLETE_PAGE: &str = r#"
    SELECT c.id, c.category, c.item_date, c.difficulty, c.is_special, c.synced_at
    FROM catalog_entries c
    LEFT JOIN attempts a ON a.id = (
        SELECT a2.id
        FROM attempts a2
        WHERE a2.puzzle_id = c.id
        ORDER BY a2.started_at DESC, a2.rowid DESC
        LIMIT 1
    )
    WHERE c.item_date IS NOT NULL
      AND c.item_date <= ?1
      AND (a.id IS NULL OR a.completed = 0)
    ORDER BY c.item_date DESC, c.id ASC
    LIMIT ?2 OFFSET ?3
"#;

pub(super) const COUNT_INCOMPLETE: &str = r#"
    SELECT COUNT(DISTINCT c.id) AS count
    FROM catalog_entries c
    LEFT JOIN attempts a ON a.id = (
        SELECT a2.id
        FROM attempts a2
        WHERE a2.puzzle_id = c.id
        ORDER BY a2.started_at DESC, a2.rowid DESC
        LIMIT 1
    )
    WHERE c.item_date IS NOT NULL
      AND c.item_date <= ?1
      AND (a.id IS NULL OR a.completed = 0)
"#;

pub(super) const INSERT_ATTEMPT: &str = r#"
    INSERT INTO attempts (id, puzzle_id, completed, score, started_at, completed_at, metadata, synced)
    VALUES (?1, ?2, 0, NULL, ?3, NULL, ?4, 0)
"#;

pub(super) const MARK_ATTEMPT_COMPLETED: &str = r#"
    UPDATE attempts
    SET completed = 1, score = ?1, completed_at = ?2
    WHERE id = ?3
"#;

pub(super) const SELECT_ATTEMPTS_BY_PUZZLE: &str = r#"
    SELECT id, puzzle_id, completed, score, started_at, completed_at, metadata, synced
    FROM attempts
    WHERE puzzle_id = ?1
    ORDER BY started_at DESC, rowid DESC
"#;

pub(super) const EXISTS_COMPLETED_ATTEMPT: &str = r#"
    SELECT EXISTS(
        SELECT 1 FROM attempts
        WHERE puzzle_id = ?1 AND completed = 1
    ) AS present
"#;

pub(super) const SELECT_COMPLETED_PUZZLE_IDS: &str = r#"
    SELECT DISTINCT puzzle_id
    FROM attempts
    WHERE completed = 1
"#;
