use crate::result::{Metric, ReadabilityResult};
use clap::ValueEnum;
use itertools::Itertools;
use serde_json::{Map, Value};
use std::io::{self, Write};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

/// Scores for one input, labelled with where the text came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub source: String,
    pub result: ReadabilityResult,
}

pub fn write_report<W: Write>(
    mut out: W,
    format: ReportFormat,
    rows: &[Scored],
    metrics: &[Metric],
) -> io::Result<()> {
    match format {
        ReportFormat::Text => write_text(&mut out, rows, metrics),
        ReportFormat::Json => write_json(&mut out, rows, metrics),
        ReportFormat::Csv => write_csv(out, rows, metrics),
    }
}

fn write_text<W: Write>(out: &mut W, rows: &[Scored], metrics: &[Metric]) -> io::Result<()> {
    let width = metrics
        .iter()
        .map(|m| m.to_string().len())
        .max()
        .unwrap_or(0);

    let blocks: Vec<String> = rows
        .iter()
        .map(|row| {
            let lines = metrics
                .iter()
                .map(|&m| format!("  {:<width$}  {:>8.2}", m.to_string(), row.result.get(m)))
                .join("\n");
            format!("{}\n{}", row.source, lines)
        })
        .collect();

    writeln!(out, "{}", blocks.join("\n\n"))
}

fn write_json<W: Write>(out: &mut W, rows: &[Scored], metrics: &[Metric]) -> io::Result<()> {
    let values: Vec<Value> = rows
        .iter()
        .map(|row| {
            let scores: Map<String, Value> = metrics
                .iter()
                .map(|&m| (m.to_string(), Value::from(row.result.get(m))))
                .collect();
            let mut obj = Map::new();
            obj.insert("source".to_string(), Value::from(row.source.clone()));
            obj.insert("scores".to_string(), Value::Object(scores));
            Value::Object(obj)
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &values)?;
    writeln!(out)
}

fn write_csv<W: Write>(out: W, rows: &[Scored], metrics: &[Metric]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    let header =
        std::iter::once("source".to_string()).chain(metrics.iter().map(|m| m.to_string()));
    wtr.write_record(header)?;

    for row in rows {
        let record = std::iter::once(row.source.clone())
            .chain(metrics.iter().map(|&m| row.result.get(m).to_string()));
        wtr.write_record(record)?;
    }

    wtr.flush()
}
