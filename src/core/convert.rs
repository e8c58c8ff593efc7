use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::info;

use crate::config::Config;
use crate::core::job::RawJob;
use crate::core::trace::{SimJob, SIM_TRACE_HEADER};
use crate::utils::parse_submit_time;

/// Row accounting for one converted trace source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows_read: usize,
    pub rows_retained: usize,
}

/// Converts one raw trace CSV into the simulator input format.
///
/// Retained rows are stable-sorted by submission time, so equal timestamps
/// keep their input order and `job_id` is a contiguous zero-based sequence
/// over the sorted rows. Nothing is written when reading the input fails.
pub fn convert_trace(input: &Path, output: &Path) -> Result<ConversionSummary> {
    let (jobs, has_mem_column) = read_raw_trace(input)?;
    let rows_read = jobs.len();

    let mut retained: Vec<(NaiveDateTime, RawJob)> = Vec::new();
    for job in jobs.into_iter().filter(RawJob::is_convertible) {
        let submitted = parse_submit_time(&job.submit_time)
            .with_context(|| format!("Invalid submit_time in {}", input.display()))?;
        retained.push((submitted, job));
    }
    retained.sort_by_key(|(submitted, _)| *submitted);

    let sim_jobs = derive_all(&retained, has_mem_column);
    write_sim_trace(output, &sim_jobs)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rows_read,
        rows_retained = retained.len(),
        "converted trace"
    );

    Ok(ConversionSummary {
        rows_read,
        rows_retained: retained.len(),
    })
}

/// Runs the converter over every configured trace source, in order.
///
/// The first failing source aborts the whole batch.
pub fn run_batch(config: &Config) -> Result<()> {
    let output_dir = config.traces.output_root();
    fs::create_dir_all(&output_dir).with_context(|| {
        format!("Failed to create output directory {}", output_dir.display())
    })?;

    for source in &config.traces.sources {
        convert_trace(
            &config.traces.input_path(source),
            &config.traces.output_path(source),
        )?;
    }
    Ok(())
}

fn read_raw_trace(path: &Path) -> Result<(Vec<RawJob>, bool)> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Could not find input file {}", path.display()))?;

    // Column presence decides the tensorsizes source for the whole file.
    let has_mem_column = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .iter()
        .any(|column| column == "mem_per_pod_GB");

    let mut jobs = Vec::new();
    for record in reader.deserialize() {
        let job: RawJob =
            record.with_context(|| format!("Malformed row in {}", path.display()))?;
        jobs.push(job);
    }
    Ok((jobs, has_mem_column))
}

fn derive_all(retained: &[(NaiveDateTime, RawJob)], has_mem_column: bool) -> Vec<SimJob> {
    let Some((base_time, _)) = retained.first() else {
        return Vec::new();
    };

    retained
        .iter()
        .enumerate()
        .map(|(job_id, (submitted, job))| {
            let arrival_time = submitted.signed_duration_since(*base_time).num_seconds() as f64;
            SimJob::derive(job_id as u64, arrival_time, job, has_mem_column)
        })
        .collect()
}

fn write_sim_trace(path: &Path, jobs: &[SimJob]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    if jobs.is_empty() {
        // serialize() below emits the header implicitly; an empty result
        // still gets one.
        writer
            .write_record(SIM_TRACE_HEADER)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    for job in jobs {
        writer
            .serialize(job)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
