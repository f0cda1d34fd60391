//! Command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use retab_ingest::read_csv_grid;
use retab_map::TemplateRepository;
use retab_output::write_csv;
use retab_transform::process_template;

use crate::cli::{ProcessArgs, TemplatesArgs};
use crate::summary::print_template_list;
use crate::types::ProcessResult;

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let repository = TemplateRepository::load(&args.templates)?;
    let Some(template) = repository.get(&args.template) else {
        bail!(
            "template '{}' not found (available: {})",
            args.template,
            repository.names().join(", ")
        );
    };

    let grid = read_csv_grid(&args.input)
        .with_context(|| format!("failed to ingest {}", args.input.display()))?;
    let rows_in = grid.row_count();

    let dataset = process_template(&grid, template)
        .with_context(|| format!("failed to apply template '{}'", template.name))?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    if !args.dry_run {
        write_csv(&dataset, &output)
            .with_context(|| format!("failed to write {}", output.display()))?;
    }

    info!(
        template = %template.name,
        rows_in,
        rows_out = dataset.row_count(),
        columns = dataset.column_count(),
        dry_run = args.dry_run,
        "processed input"
    );

    Ok(ProcessResult {
        template: template.name.clone(),
        input: args.input.clone(),
        output: (!args.dry_run).then_some(output),
        rows_in,
        dataset,
    })
}

pub fn run_templates(args: &TemplatesArgs) -> Result<()> {
    let repository = TemplateRepository::load(&args.templates)?;
    print_template_list(&repository);
    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("processed.csv")
}
