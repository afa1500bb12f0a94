//! Drive a table the way a UI would: filter, sort, page and select.
//!
//! Run with: cargo run --example employees

use datatable_lib::table::TableStatus;
use datatable_lib::{ColumnDef, DataTable, Record, TableConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rows = vec![
        employee(1, "John Doe", "john@example.com", "Developer"),
        employee(2, "Jane Smith", "jane@example.com", "Designer"),
        employee(3, "Bob Johnson", "bob@example.com", "Manager"),
        employee(4, "Alice Brown", "alice@example.com", "Developer"),
    ];

    let mut table = DataTable::new(
        vec![
            ColumnDef::accessor("name", "Name"),
            ColumnDef::accessor("email", "Email").cell(|value, _| format!("<{}>", value)),
            ColumnDef::accessor("role", "Role"),
        ],
        TableConfig::default().with_page_size(2),
    )?
    .with_data(rows);

    table.on_selection_change(|ids| println!("selection -> {:?}", ids));

    print_page(&table);

    table.toggle_sort("name");
    println!("\nSorted by name:");
    print_page(&table);

    table.set_filter_query("developer");
    table.toggle_all();
    println!("\nDevelopers, all selected:");
    print_page(&table);

    table.set_filter_query("nobody");
    if let TableStatus::Empty(message) = table.status() {
        println!("\n{}", message);
    }

    Ok(())
}

fn employee(id: i64, name: &str, email: &str, role: &str) -> Record {
    Record::new()
        .set("id", id)
        .set("name", name)
        .set("email", email)
        .set("role", role)
}

fn print_page(table: &DataTable<Record>) {
    let view = table.view();
    for row in &view.page_rows {
        let mark = if row.selected { "x" } else { " " };
        println!("[{}] {}", mark, row.cells.join(" | "));
    }
    println!("Page {} of {}", view.current_page_index + 1, view.page_count);
}
