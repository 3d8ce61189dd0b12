//! Пакетная обработка: каждый файл читается, преобразуется и записывается
//! до перехода к следующему. Первая ошибка прерывает весь пакет.

use crate::{
    config::Config,
    convert::convert,
    discover::discover_inputs,
    error::Result,
    formats::{csv::JournalCsv, xlsx::BolXlsx},
    traits::{ReadFormat, WriteFormat},
};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows_read: usize,
    pub lines_written: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn lines_written(&self) -> usize {
        self.files.iter().map(|f| f.lines_written).sum()
    }
}

/// `report.xlsx` -> `<export_dir>/exp_report.csv`
pub fn output_path(input: &Path, cfg: &Config) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(cfg.extension.as_str()).unwrap_or(&name);
    cfg.export_dir.join(format!(
        "{}{}{}",
        cfg.output_prefix, stem, cfg.output_extension
    ))
}

pub fn convert_file(input: &Path, cfg: &Config) -> Result<FileReport> {
    let transactions = BolXlsx::read(BufReader::new(File::open(input)?), cfg)?;
    let lines = convert(&transactions, cfg);

    let output = output_path(input, cfg);
    let mut writer = BufWriter::new(File::create(&output)?);
    JournalCsv::write(&mut writer, &lines)?;
    writer.flush()?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rows = transactions.len(),
        lines = lines.len(),
        "converted"
    );
    Ok(FileReport {
        input: input.to_path_buf(),
        output,
        rows_read: transactions.len(),
        lines_written: lines.len(),
    })
}

pub fn run(cfg: &Config) -> Result<BatchReport> {
    fs::create_dir_all(&cfg.export_dir)?;
    let inputs = discover_inputs(&cfg.input_dir, &cfg.extension)?;
    info!(dir = %cfg.input_dir.display(), files = inputs.len(), "starting batch");

    let mut report = BatchReport::default();
    for input in &inputs {
        report.files.push(convert_file(input, cfg)?);
    }

    info!(
        files = report.files.len(),
        lines = report.lines_written(),
        "batch finished"
    );
    Ok(report)
}
