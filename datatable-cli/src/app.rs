//! Drives the table from command-line arguments.

use datatable_lib::{ColumnDef, DataTable, Direction, SortState, TableConfig};
use serde_json::Value;

use crate::args::Args;
use crate::error::{CliError, Result};
use crate::load;
use crate::render;

/// Load everything the arguments point at and render the requested page.
pub fn run(args: &Args) -> Result<String> {
    let config = load::load_config(args.config.as_deref())?;
    let rows = load::load_rows(&args.data)?;
    let mut table = build_table(args, config, rows)?;
    render::fit_columns(&mut table);
    Ok(render::render(&table.view()))
}

/// Build a table and apply the filter, sort, page and selection arguments.
pub fn build_table(args: &Args, config: TableConfig, rows: Vec<Value>) -> Result<DataTable<Value>> {
    let paths = if args.columns.is_empty() {
        load::infer_columns(&rows)
    } else {
        args.columns.clone()
    };
    let columns = paths
        .iter()
        .map(|path| ColumnDef::accessor(path.as_str(), path.as_str()))
        .collect();

    let mut table = DataTable::new(columns, config)?.with_data(rows);

    for id in &args.hide {
        if table.column(id).is_none() {
            return Err(CliError::UnknownColumn(id.clone()));
        }
        table.set_column_visibility(id, false);
    }

    if let Some(query) = &args.filter {
        table.set_filter_query(query.as_str());
    }

    if let Some(column) = &args.sort {
        if table.column(column).is_none() {
            return Err(CliError::UnknownColumn(column.clone()));
        }
        let direction = if args.desc { Direction::Desc } else { Direction::Asc };
        let state = SortState {
            column_id: column.clone(),
            direction,
        };
        if !table.set_sort(Some(state)) {
            return Err(CliError::NotSortable(column.clone()));
        }
    }

    if let Some(size) = args.page_size {
        table.set_page_size(size);
    }
    table.set_page_index(args.page_index());

    for id in &args.select {
        if !table.toggle_row(id) {
            log::warn!("Could not select row '{}'", id);
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    fn rows() -> Vec<Value> {
        vec![
            json!({ "id": 1, "name": "John Doe", "role": "Developer" }),
            json!({ "id": 2, "name": "Jane Smith", "role": "Designer" }),
            json!({ "id": 3, "name": "Bob Johnson", "role": "Manager" }),
            json!({ "id": 4, "name": "Alice Brown", "role": "Developer" }),
        ]
    }

    fn build(argv: &[&str]) -> Result<DataTable<Value>> {
        let mut full = vec!["datatable"];
        full.extend_from_slice(argv);
        full.push("data.json");
        let args = Args::try_parse_from(full).unwrap();
        build_table(&args, TableConfig::default().with_page_size(2), rows())
    }

    #[test]
    fn test_columns_inferred() {
        let table = build(&[]).unwrap();
        let ids: Vec<_> = table.columns().iter().map(|c| c.id().to_string()).collect();
        assert_eq!(ids, vec!["id", "name", "role"]);
    }

    #[test]
    fn test_explicit_columns_and_hide() {
        let table = build(&["--columns", "name,role", "--hide", "role"]).unwrap();
        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.visible_columns().count(), 1);
    }

    #[test]
    fn test_filter_sort_page() {
        let table = build(&["--filter", "developer", "--sort", "name", "--desc", "--page", "1"]).unwrap();
        assert_eq!(table.page_ids(), vec!["1", "4"]);
        assert_eq!(table.sort(), Some(&SortState::desc("name")));
    }

    #[test]
    fn test_page_clamped() {
        let table = build(&["--page", "9"]).unwrap();
        assert_eq!(table.page_index(), 1);
    }

    #[test]
    fn test_select() {
        let table = build(&["--select", "3", "--select", "99"]).unwrap();
        assert_eq!(table.selected_ids(), vec!["3"]);
    }

    #[test]
    fn test_unknown_sort_column() {
        assert!(matches!(build(&["--sort", "salary"]), Err(CliError::UnknownColumn(_))));
    }

    #[test]
    fn test_unknown_hidden_column() {
        assert!(matches!(build(&["--hide", "salary"]), Err(CliError::UnknownColumn(_))));
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("people.json");
        let config = dir.path().join("config.json");
        std::fs::write(&data, serde_json::to_string(&rows()).unwrap()).unwrap();
        std::fs::write(&config, r#"{"page_size": 2}"#).unwrap();

        let args = Args::try_parse_from([
            "datatable",
            "--config",
            config.to_str().unwrap(),
            "--filter",
            "john",
            "--page",
            "2",
            data.to_str().unwrap(),
        ])
        .unwrap();

        let output = run(&args).unwrap();
        assert!(output.contains("John Doe"));
        assert!(output.contains("Bob Johnson"));
        assert!(output.contains("Page 1 of 1 (2 of 4 rows)"));
    }
}
