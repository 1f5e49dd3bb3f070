use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info;

use account_cli::analysis::{compare_header, coverage_rows, write_coverage};
use account_cli::pipeline::{ProcessConfig, run_process as run_pipeline, warn_unvalidated};
use account_cli::types::RunSummary;
use account_ingest::read_data_table;
use account_standards::{load_arm, load_arms, load_default_catalog};

use crate::cli::{AnalyzeArgs, ProcessArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};

pub fn run_process(args: &ProcessArgs) -> Result<RunSummary> {
    let config = ProcessConfig {
        inputs: args.files.inputs(),
        site_keys: args.site_key.clone(),
        output_dir: args.output_dir.clone(),
        descriptions: args.descriptions.clone(),
    };
    let summary = run_pipeline(&config)?;
    if let Some(path) = &args.summary_json {
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &summary)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote run summary");
    }
    Ok(summary)
}

pub fn run_fields() -> Result<()> {
    let catalog = load_default_catalog().context("load field catalog")?;
    warn_unvalidated(&catalog);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Display name"),
        header_cell("Format"),
        header_cell("Range"),
    ]);
    apply_table_style(&mut table);
    for field in catalog.fields() {
        let format = if field.is_unvalidated() {
            dim_cell(field.format)
        } else {
            Cell::new(field.format)
        };
        table.add_row(vec![
            Cell::new(field.key),
            Cell::new(field.display_name),
            format,
            field
                .range_description()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
    println!("{} fields", catalog.len());
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let catalog = load_default_catalog().context("load field catalog")?;
    for input in args.files.inputs() {
        let standard = load_arm(input.arm, &catalog)
            .with_context(|| format!("load {} standard", input.arm))?;
        let data = read_data_table(&input.path)
            .with_context(|| format!("read {}", input.path.display()))?;
        let report = compare_header(&standard.schema, &data.headers);
        println!("{} ({})", input.arm, input.path.display());
        if report.is_match() {
            println!("  header matches the expected {} columns", report.expected_columns);
            continue;
        }
        if report.expected_columns != report.actual_columns {
            println!(
                "  column count changed: expected {}, found {}",
                report.expected_columns, report.actual_columns
            );
        }
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Column"),
            header_cell("Expected"),
            header_cell("Found"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for mismatch in &report.mismatches {
            table.add_row(vec![
                Cell::new(mismatch.column_letters()),
                mismatch
                    .expected
                    .map_or_else(|| dim_cell("-"), Cell::new),
                mismatch
                    .found
                    .as_deref()
                    .map_or_else(|| dim_cell("-"), Cell::new),
            ]);
        }
        println!("{table}");
    }

    let standards = load_arms(&catalog).context("load arm standards")?;
    for standard in &standards {
        println!();
        println!("Fields removed from the {} file:", standard.arm);
        for key in standard.output.dropped_fields(&standard.schema) {
            println!("  {key}");
        }
    }

    if let Some(path) = &args.coverage {
        let rows = coverage_rows(&catalog, &standards);
        write_coverage(path, &rows)?;
        println!();
        println!("Wrote field coverage for {} fields to {}", rows.len(), path.display());
    }
    Ok(())
}
