// src/simulation/csv.rs

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::simulation::error::SimError;
use crate::simulation::OutputRecord;

/// 車両ごとの CSV 出力先 `<dir>/<name>_sim.csv`
pub fn output_path(dir: &Path, vehicle_name: &str) -> PathBuf {
    dir.join(format!("{}_sim.csv", vehicle_name))
}

/// 出力レコードを CSV に書き出す
///
/// ヘッダーは `time,ys,theta,yu1,yu2,v_abs,x_abs`。
/// バッファリングは `csv::Writer` が行う。
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// CSV 出力の設定
    pub fn create(path: &Path) -> Result<Self, SimError> {
        Ok(CsvSink {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(writer: W) -> Self {
        CsvSink {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// CSV 行の書き込み (初回はヘッダーも書く)
    pub fn write(&mut self, record: &OutputRecord) -> Result<(), SimError> {
        self.writer.serialize(record)?;
        Ok(())
    }

    /// バッファをフラッシュして内部のライターを返す
    pub fn finish(mut self) -> Result<W, SimError> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| SimError::Io(e.into_error()))
    }
}
