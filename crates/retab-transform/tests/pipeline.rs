//! Tests for the row-mapping pipeline.

use retab_model::{Cell, ColumnMapping, RawGrid, Template, ValueType};
use retab_transform::{TransformError, process_template};

fn mapping(output_name: &str, source_column: &str, value_type: ValueType) -> ColumnMapping {
    ColumnMapping {
        output_name: output_name.to_string(),
        source_column: source_column.to_string(),
        value_type,
    }
}

fn orders_template() -> Template {
    Template {
        name: "Orders".to_string(),
        description: "Order export".to_string(),
        header_row: 1,
        mappings: vec![
            mapping("Order ID", "A", ValueType::String),
            mapping("Amount", "C", ValueType::Number),
            mapping("Placed", "B", ValueType::Date),
        ],
    }
}

fn orders_grid() -> RawGrid {
    RawGrid::from_rows(vec![
        vec![Cell::from("id"), Cell::from("placed"), Cell::from("amount")],
        vec![Cell::from("A-1"), Cell::from("5/1/23"), Cell::Number(12.5)],
        vec![Cell::from("A-2"), Cell::from("2023-05-02"), Cell::from("7")],
    ])
}

#[test]
fn maps_rows_in_declaration_order() {
    let dataset = process_template(&orders_grid(), &orders_template()).expect("process");
    assert_eq!(dataset.headers, vec!["Order ID", "Amount", "Placed"]);
    assert_eq!(
        dataset.types,
        vec![ValueType::String, ValueType::Number, ValueType::Date]
    );
    assert_eq!(dataset.rows.len(), 2);
    assert_eq!(dataset.rows[0], vec!["A-1", "12.50", "05/01/2023"]);
    assert_eq!(dataset.rows[1], vec!["A-2", "7.00", "05/02/2023"]);
}

#[test]
fn row_count_and_width_invariants() {
    let dataset = process_template(&orders_grid(), &orders_template()).expect("process");
    assert_eq!(dataset.headers.len(), dataset.types.len());
    for row in &dataset.rows {
        assert_eq!(row.len(), dataset.headers.len());
    }
    // N rows, header offset 1 -> N - 1 output rows.
    assert_eq!(dataset.row_count(), orders_grid().row_count() - 1);
}

#[test]
fn short_rows_read_as_empty_cells() {
    let grid = RawGrid::from_rows(vec![
        vec![Cell::from("id"), Cell::from("placed"), Cell::from("amount")],
        vec![Cell::from("A-1")],
    ]);
    let dataset = process_template(&grid, &orders_template()).expect("process");
    assert_eq!(dataset.rows, vec![vec!["A-1", "", ""]]);
}

#[test]
fn header_offset_past_end_yields_no_rows() {
    let template = Template {
        header_row: 10,
        ..orders_template()
    };
    let dataset = process_template(&orders_grid(), &template).expect("process");
    assert!(dataset.is_empty());
    assert_eq!(dataset.headers.len(), 3);
}

#[test]
fn zero_offset_keeps_every_row() {
    let template = Template {
        header_row: 0,
        ..orders_template()
    };
    let dataset = process_template(&orders_grid(), &template).expect("process");
    assert_eq!(dataset.row_count(), 3);
    // The grid's own header row is data like any other.
    assert_eq!(dataset.rows[0][0], "id");
}

#[test]
fn invalid_column_label_fails_the_call() {
    let template = Template {
        mappings: vec![mapping("Broken", "A1", ValueType::String)],
        ..orders_template()
    };
    assert_eq!(
        process_template(&orders_grid(), &template),
        Err(TransformError::InvalidColumnLabel {
            label: "A1".to_string()
        })
    );
}

#[test]
fn deterministic_over_repeat_runs() {
    let grid = orders_grid();
    let template = orders_template();
    let first = process_template(&grid, &template).expect("first run");
    let second = process_template(&grid, &template).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn empty_grid_yields_empty_dataset() {
    let dataset = process_template(&RawGrid::new(), &orders_template()).expect("process");
    assert!(dataset.is_empty());
    assert_eq!(dataset.headers.len(), 3);
}
