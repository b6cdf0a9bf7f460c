//! Result rendering: labeled text lines, JSON objects and batch tables.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use octadist::octa::Distortion;
use polars::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::path::Path;

/// Scalar fields selectable with `--params`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Param {
    #[value(name = "d_mean")]
    DMean,
    Zeta,
    Delta,
    Sigma,
    Theta,
    #[value(name = "theta_min")]
    ThetaMin,
    #[value(name = "theta_max")]
    ThetaMax,
}

impl Param {
    pub const DEFAULT: [Param; 7] = [
        Param::DMean,
        Param::Zeta,
        Param::Delta,
        Param::Sigma,
        Param::Theta,
        Param::ThetaMin,
        Param::ThetaMax,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Param::DMean => "d_mean",
            Param::Zeta => "zeta",
            Param::Delta => "delta",
            Param::Sigma => "sigma",
            Param::Theta => "theta",
            Param::ThetaMin => "theta_min",
            Param::ThetaMax => "theta_max",
        }
    }

    pub fn value(self, d: &Distortion) -> f64 {
        match self {
            Param::DMean => d.d_mean,
            Param::Zeta => d.zeta,
            Param::Delta => d.delta,
            Param::Sigma => d.sigma,
            Param::Theta => d.theta,
            Param::ThetaMin => d.theta_min,
            Param::ThetaMax => d.theta_max,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One computed complex, as written by `compute --format json` and `batch`.
#[derive(Clone, Debug, Serialize)]
pub struct Row {
    pub file: String,
    /// 1-based atom index of the center in its file.
    pub center: usize,
    pub center_label: String,
    pub d_mean: f64,
    pub zeta: f64,
    pub delta: f64,
    pub sigma: f64,
    pub theta: f64,
    pub theta_min: f64,
    pub theta_max: f64,
    pub non_octa: bool,
    pub bond_dist: Vec<f64>,
    pub cis_angle: Vec<f64>,
    pub trans_angle: Vec<f64>,
}

impl Row {
    pub fn new(file: &str, center: usize, center_label: &str, d: &Distortion) -> Self {
        Self {
            file: file.to_string(),
            center: center + 1,
            center_label: center_label.to_string(),
            d_mean: d.d_mean,
            zeta: d.zeta,
            delta: d.delta,
            sigma: d.sigma,
            theta: d.theta,
            theta_min: d.theta_min,
            theta_max: d.theta_max,
            non_octa: d.non_octa,
            bond_dist: d.bond_dist.to_vec(),
            cis_angle: d.cis_angle.to_vec(),
            trans_angle: d.trans_angle.to_vec(),
        }
    }
}

/// `name value` lines, 8 decimals, one per selected parameter.
pub fn render_text(d: &Distortion, params: &[Param]) -> String {
    let mut out = String::new();
    for p in params {
        out.push_str(&format!("{} {:.8}\n", p.name(), p.value(d)));
    }
    out
}

/// JSON object with the selected parameters plus identification and the flag.
pub fn render_json(row: &Row, d: &Distortion, params: &[Param]) -> Value {
    let mut obj = Map::new();
    obj.insert("file".into(), Value::from(row.file.clone()));
    obj.insert("center".into(), Value::from(row.center));
    obj.insert("center_label".into(), Value::from(row.center_label.clone()));
    for p in params {
        obj.insert(p.name().into(), Value::from(p.value(d)));
    }
    obj.insert("non_octa".into(), Value::from(d.non_octa));
    obj.insert("bond_dist".into(), Value::from(row.bond_dist.clone()));
    Value::Object(obj)
}

/// Batch rows as a DataFrame; per-bond and per-angle arrays are left out.
pub fn rows_to_frame(rows: &[Row]) -> Result<DataFrame> {
    let col = |f: fn(&Row) -> f64| rows.iter().map(f).collect::<Vec<f64>>();
    let df = df!(
        "file" => rows.iter().map(|r| r.file.clone()).collect::<Vec<String>>(),
        "center" => rows.iter().map(|r| r.center as u32).collect::<Vec<u32>>(),
        "center_label" => rows.iter().map(|r| r.center_label.clone()).collect::<Vec<String>>(),
        "d_mean" => col(|r| r.d_mean),
        "zeta" => col(|r| r.zeta),
        "delta" => col(|r| r.delta),
        "sigma" => col(|r| r.sigma),
        "theta" => col(|r| r.theta),
        "theta_min" => col(|r| r.theta_min),
        "theta_max" => col(|r| r.theta_max),
        "non_octa" => rows.iter().map(|r| r.non_octa).collect::<Vec<bool>>()
    )?;
    Ok(df)
}

/// Write rows as CSV or Parquet, chosen by the file extension.
pub fn write_table(rows: &[Row], path: &Path) -> Result<()> {
    let mut df = rows_to_frame(rows)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match ext.as_deref() {
        Some("csv") => {
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file).finish(&mut df)?;
        }
        Some("parquet") => {
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
        _ => bail!(
            "unsupported table extension for {} (use .csv or .parquet)",
            path.display()
        ),
    }
    Ok(())
}
