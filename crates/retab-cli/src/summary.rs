use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use retab_map::TemplateRepository;
use retab_model::{ProcessedDataset, ValueType};

use crate::types::ProcessResult;

pub fn print_summary(result: &ProcessResult, preview_rows: usize) {
    println!("Template: {}", result.template);
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!(
        "Rows: {} in, {} out; Columns: {}",
        result.rows_in,
        result.dataset.row_count(),
        result.dataset.column_count()
    );
    if preview_rows > 0 && !result.dataset.is_empty() {
        print_preview(&result.dataset, preview_rows);
    }
}

fn print_preview(dataset: &ProcessedDataset, limit: usize) {
    let mut table = Table::new();
    table.set_header(dataset.headers.iter().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    // Numeric columns read better right-aligned; this is what the declared
    // types are carried for.
    for (index, value_type) in dataset.types.iter().enumerate() {
        if *value_type == ValueType::Number {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for row in dataset.rows.iter().take(limit) {
        table.add_row(row.clone());
    }
    println!("{table}");
    if dataset.row_count() > limit {
        println!("({} more rows not shown)", dataset.row_count() - limit);
    }
}

pub fn print_template_list(repository: &TemplateRepository) {
    if let Some(path) = repository.source() {
        println!("Templates: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Description"),
        header_cell("Header row"),
        header_cell("Mappings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for template in repository.templates() {
        table.add_row(vec![
            Cell::new(&template.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&template.description),
            Cell::new(template.header_row),
            Cell::new(template.mapping_count()),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell<T: ToString>(label: T) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
