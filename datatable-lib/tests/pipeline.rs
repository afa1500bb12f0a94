use datatable_lib::column::{normalize, Column, ColumnDef};
use datatable_lib::model::Value;
use datatable_lib::pipeline::{filter, matches, page_count, paginate, sort, SortState};

type Row = serde_json::Value;

fn dataset() -> Vec<Row> {
    vec![
        serde_json::json!({ "id": 1, "name": "John Doe", "email": "john@example.com", "role": "Developer", "age": 34 }),
        serde_json::json!({ "id": 2, "name": "Jane Smith", "email": "jane@example.com", "role": "Designer", "age": 28 }),
        serde_json::json!({ "id": 3, "name": "Bob Johnson", "email": "bob@example.com", "role": "Manager", "age": null }),
        serde_json::json!({ "id": 4, "name": "Alice Brown", "email": "alice@example.com", "role": "Developer", "age": 28 }),
        serde_json::json!({ "id": 5, "name": "carol white", "email": "carol@example.com", "role": "designer" }),
        serde_json::json!({ "id": 6, "name": "Dan Green", "email": "dan@example.com", "role": "Developer", "age": 41.5 }),
    ]
}

fn columns() -> Vec<Column<Row>> {
    normalize(vec![
        ColumnDef::accessor("name", "Name"),
        ColumnDef::accessor("email", "Email"),
        ColumnDef::accessor("role", "Role"),
        ColumnDef::accessor("age", "Age").filterable(false),
    ])
    .unwrap()
}

fn all(rows: &[Row]) -> Vec<usize> {
    (0..rows.len()).collect()
}

// ============================================================================
// Filter Stage
// ============================================================================

#[test]
fn test_filter_empty_query_is_identity() {
    let rows = dataset();
    assert_eq!(filter(&rows, &columns(), ""), all(&rows));
}

#[test]
fn test_filter_results_contain_query() {
    let rows = dataset();
    let columns = columns();
    for query in ["jo", "DEV", "example.com", "n g", "designer", "zzz"] {
        let needle = query.to_lowercase();
        let kept = filter(&rows, &columns, query);
        for &position in &kept {
            assert!(matches(&rows[position], &columns, &needle), "{} / {}", query, position);
        }
        let dropped = all(&rows).into_iter().filter(|p| !kept.contains(p));
        for position in dropped {
            assert!(!matches(&rows[position], &columns, &needle), "{} / {}", query, position);
        }
    }
}

#[test]
fn test_filter_is_idempotent() {
    let rows = dataset();
    let columns = columns();
    for query in ["jo", "developer", "a"] {
        let once = filter(&rows, &columns, query);
        let subset: Vec<Row> = once.iter().map(|&p| rows[p].clone()).collect();
        let twice = filter(&subset, &columns, query);
        assert_eq!(twice, all(&subset), "query {}", query);
    }
}

#[test]
fn test_filter_preserves_order() {
    let rows = dataset();
    let kept = filter(&rows, &columns(), "developer");
    assert_eq!(kept, vec![0, 3, 5]);
}

#[test]
fn test_filter_skips_non_filterable() {
    let rows = dataset();
    assert!(filter(&rows, &columns(), "41.5").is_empty());
}

// ============================================================================
// Sort Stage
// ============================================================================

fn sorted(rows: &[Row], state: &SortState) -> Vec<usize> {
    let mut positions = all(rows);
    sort(rows, &mut positions, &columns(), Some(state));
    positions
}

#[test]
fn test_sort_desc_inverts_comparator_not_output() {
    let rows = dataset();
    for column in ["name", "role", "age"] {
        let asc = sorted(&rows, &SortState::asc(column));
        let desc = sorted(&rows, &SortState::desc(column));

        // Check desc against an independent stable sort with the inverted comparator
        let values: Vec<Value> = rows
            .iter()
            .map(|r| datatable_lib::model::resolve_path(r, column))
            .collect();
        let mut expected = all(&rows);
        expected.sort_by(|&a, &b| match (values[a].is_null(), values[b].is_null()) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            _ => datatable_lib::pipeline::compare_values(&values[b], &values[a]),
        });
        assert_eq!(desc, expected, "column {}", column);
        assert_ne!(asc, desc, "column {}", column);
    }
}

#[test]
fn test_sort_ties_keep_order_in_both_directions() {
    let rows = dataset();
    // Developer: 0, 3, 5; designer: 1, 4; Manager: 2
    assert_eq!(sorted(&rows, &SortState::asc("role")), vec![1, 4, 0, 3, 5, 2]);
    assert_eq!(sorted(&rows, &SortState::desc("role")), vec![2, 0, 3, 5, 1, 4]);
}

#[test]
fn test_sort_nulls_last_both_directions() {
    let rows = dataset();
    let asc = sorted(&rows, &SortState::asc("age"));
    let desc = sorted(&rows, &SortState::desc("age"));
    assert_eq!(&asc[4..], &[2, 4]);
    assert_eq!(&desc[4..], &[2, 4]);
    assert_eq!(&asc[..4], &[1, 3, 0, 5]);
    assert_eq!(&desc[..4], &[5, 0, 1, 3]);
}

#[test]
fn test_sort_twice_is_idempotent() {
    let rows = dataset();
    for state in [SortState::asc("name"), SortState::desc("age")] {
        let mut positions = all(&rows);
        sort(&rows, &mut positions, &columns(), Some(&state));
        let once = positions.clone();
        sort(&rows, &mut positions, &columns(), Some(&state));
        assert_eq!(positions, once);
    }
}

#[test]
fn test_sort_after_filter() {
    let rows = dataset();
    let columns = columns();
    let mut positions = filter(&rows, &columns, "developer");
    sort(&rows, &mut positions, &columns, Some(&SortState::asc("name")));
    assert_eq!(positions, vec![3, 5, 0]);
}

// ============================================================================
// Pagination Stage
// ============================================================================

#[test]
fn test_pages_reconstruct_sorted_rows() {
    let rows = dataset();
    let positions = sorted(&rows, &SortState::asc("name"));
    for size in 1..=8 {
        let mut joined = Vec::new();
        for index in 0..page_count(positions.len(), size) {
            joined.extend_from_slice(paginate(&positions, index, size).items);
        }
        assert_eq!(joined, positions, "page size {}", size);
    }
}

#[test]
fn test_paginate_clamps_after_filter_shrinks() {
    let rows = dataset();
    let positions = filter(&rows, &columns(), "john");
    let page = paginate(&positions, 1, 2);
    assert_eq!(page.page_count, 1);
    assert_eq!(page.clamped_index, 0);
    assert_eq!(page.items, &[0, 2]);
}
