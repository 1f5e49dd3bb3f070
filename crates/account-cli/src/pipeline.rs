//! The `process` pipeline: ingest, validate, transform and output.
//!
//! Every input file is validated and the validation report written before
//! any output file, so the report survives a fatal site-mapping error.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use account_ingest::{DataTable, read_data_table, read_site_keys};
use account_model::{FieldCatalog, SiteKeyMap, TreatmentArm, redact_value};
use account_standards::{
    ArmStandard, Descriptions, load_arm, load_default_catalog, load_descriptions,
};
use account_transform::RowTransformer;
use account_validate::{FileValidation, ReportGroup, validate_file, write_validation_report};
use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use crate::analysis::compare_header;
use crate::types::{ArmSummary, RunSummary};

/// File name of the validation report inside the output directory.
pub const REPORT_FILE_NAME: &str = "validation.tsv";

/// One arm file given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmInput {
    pub arm: TreatmentArm,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ProcessConfig {
    pub inputs: Vec<ArmInput>,
    pub site_keys: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub descriptions: Option<PathBuf>,
}

/// A file that has been read and validated.
struct ValidatedArm<'a> {
    input: &'a ArmInput,
    standard: ArmStandard,
    table: DataTable,
    validation: FileValidation,
}

/// The reshaped rows of one arm, both header rows included.
pub struct OutputTable {
    pub header: Vec<&'static str>,
    pub descriptions: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Logs every field whose format has never been reviewed.
pub fn warn_unvalidated(catalog: &FieldCatalog) {
    for field in catalog.unvalidated() {
        warn!(
            field = field.key,
            name = field.display_name,
            "field has no validation rule"
        );
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads one arm file and notes header drift against the schema.
pub fn ingest(path: &Path, standard: &ArmStandard) -> Result<DataTable> {
    let span = info_span!("ingest", file = %path.display());
    let _guard = span.enter();
    let table = read_data_table(path).with_context(|| format!("read {}", path.display()))?;
    let header = compare_header(&standard.schema, &table.headers);
    if !header.is_match() {
        warn!(
            expected_columns = header.expected_columns,
            actual_columns = header.actual_columns,
            mismatches = header.mismatches.len(),
            "header differs from the {} layout, run `account analyze` for details",
            standard.arm
        );
    }
    info!(rows = table.row_count(), "ingest complete");
    Ok(table)
}

pub fn validate(standard: &ArmStandard, table: &DataTable) -> FileValidation {
    let span = info_span!("validate");
    let _guard = span.enter();
    let start = Instant::now();
    let validation = validate_file(&standard.schema, &table.rows);
    for message in &validation.messages {
        debug!(
            row = message.row,
            subject = redact_value(&message.subject),
            finding = %message.describe(),
            value = redact_value(&message.value),
            "validation message"
        );
    }
    info!(
        rows = validation.total_rows,
        valid_rows = validation.valid_rows,
        messages = validation.messages.len(),
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    validation
}

pub fn transform(
    standard: &ArmStandard,
    catalog: &FieldCatalog,
    site_keys: Option<&SiteKeyMap>,
    descriptions: &Descriptions,
    table: &DataTable,
) -> Result<OutputTable> {
    let span = info_span!("transform");
    let _guard = span.enter();
    let transformer = RowTransformer::new(&standard.schema, &standard.output, catalog, site_keys)
        .with_context(|| format!("prepare {} output", standard.arm))?;
    let rows = transformer
        .build_output_rows(&table.rows)
        .with_context(|| format!("transform {} rows", standard.arm))?;
    info!(rows = rows.len(), columns = standard.output.len(), "transform complete");
    Ok(OutputTable {
        header: transformer.header(),
        descriptions: transformer.descriptions(descriptions),
        rows,
    })
}

/// Writes an output table as Excel-dialect CSV: CRLF line ends, minimal quoting.
pub fn output(path: &Path, table: &OutputTable) -> Result<()> {
    let span = info_span!("output", file = %path.display());
    let _guard = span.enter();
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    let write_error = || format!("write {}", path.display());
    writer.write_record(&table.header).with_context(write_error)?;
    writer
        .write_record(&table.descriptions)
        .with_context(write_error)?;
    for row in &table.rows {
        writer.write_record(row).with_context(write_error)?;
    }
    writer.flush().with_context(write_error)?;
    info!(rows = table.rows.len(), "output complete");
    Ok(())
}

/// Writes `validation.tsv` with one group per input file.
pub fn write_report(path: &Path, groups: &[ReportGroup<'_>]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_validation_report(&mut writer, groups)
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), files = groups.len(), "wrote validation report");
    Ok(())
}

/// Runs the whole pipeline over the configured arm files.
pub fn run_process(config: &ProcessConfig) -> Result<RunSummary> {
    let span = info_span!("process", output_dir = %config.output_dir.display());
    let _guard = span.enter();

    let catalog = load_default_catalog().context("load field catalog")?;
    warn_unvalidated(&catalog);
    let descriptions = match &config.descriptions {
        Some(path) => load_descriptions(path)
            .with_context(|| format!("load descriptions {}", path.display()))?,
        None => Descriptions::default(),
    };
    let site_keys = config
        .site_keys
        .as_deref()
        .map(read_site_keys)
        .transpose()
        .context("load site keys")?;

    let mut validated = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        let arm_span = info_span!("arm", arm = input.arm.as_str(), file = %input.path.display());
        let _arm_guard = arm_span.enter();
        let standard = load_arm(input.arm, &catalog)
            .with_context(|| format!("load {} standard", input.arm))?;
        let table = ingest(&input.path, &standard)?;
        let validation = validate(&standard, &table);
        validated.push(ValidatedArm {
            input,
            standard,
            table,
            validation,
        });
    }

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("create {}", config.output_dir.display()))?;
    let report = config.output_dir.join(REPORT_FILE_NAME);
    let names: Vec<String> = validated
        .iter()
        .map(|arm| file_name(&arm.input.path))
        .collect();
    let groups: Vec<ReportGroup<'_>> = validated
        .iter()
        .zip(&names)
        .map(|(arm, name)| ReportGroup {
            file_name: name,
            messages: &arm.validation.messages,
        })
        .collect();
    write_report(&report, &groups)?;

    let mut arms = Vec::with_capacity(validated.len());
    for arm in validated {
        let arm_span = info_span!(
            "arm",
            arm = arm.input.arm.as_str(),
            file = %arm.input.path.display()
        );
        let _arm_guard = arm_span.enter();
        let table = transform(
            &arm.standard,
            &catalog,
            site_keys.as_ref(),
            &descriptions,
            &arm.table,
        )?;
        let path = config.output_dir.join(arm.input.arm.output_file_name());
        output(&path, &table)?;
        arms.push(ArmSummary {
            arm: arm.input.arm,
            input: arm.input.path.clone(),
            output: path,
            rows: arm.validation.total_rows,
            valid_rows: arm.validation.valid_rows,
            output_columns: table.header.len(),
            messages: arm.validation.messages,
        });
    }

    Ok(RunSummary {
        output_dir: config.output_dir.clone(),
        report,
        arms,
    })
}
