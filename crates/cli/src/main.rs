use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use octadist::elements::is_metal;
use octadist::jahn_teller::jahn_teller;
use octadist::molecule::{read_molecule, Molecule};
use octadist::octa::{compute_with, metal_centers, OctaCfg, DEFAULT_CUTOFF};
use octadist::rmsd::{kabsch, rmsd};
use octadist::OctaError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod provenance;

use output::{render_json, render_text, write_table, OutputFormat, Param, Row};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "octadist")]
#[command(version, about = "Octahedral distortion parameters (zeta, Delta, Sigma, Theta)")]
struct Cmd {
    /// Debug-level logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Distortion parameters for one octahedron in a molecule file
    Compute {
        file: PathBuf,
        /// 1-based index of the central atom (default: first metal)
        #[arg(long)]
        center: Option<usize>,
        #[arg(long, default_value_t = DEFAULT_CUTOFF)]
        cutoff: f64,
        /// Parameters to print, comma separated (default: all scalars)
        #[arg(long, value_enum, value_delimiter = ',')]
        params: Vec<Param>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the result here instead of stdout (adds a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// One table row per file and metal center (CSV or Parquet by extension)
    Batch {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_CUTOFF)]
        cutoff: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// RMSD between two structures with the same atom order
    Rmsd {
        a: PathBuf,
        b: PathBuf,
        /// Superimpose first (Kabsch)
        #[arg(long)]
        align: bool,
    },
    /// Jahn-Teller plane and axial angles between two ligand groups
    Jt {
        file: PathBuf,
        /// 1-based atom indices of the first group, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        group_a: Vec<usize>,
        /// 1-based atom indices of the second group, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        group_b: Vec<usize>,
        #[arg(long)]
        center: Option<usize>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cmd.action) {
        eprintln!("{}", diagnostic(&e));
        std::process::exit(1);
    }
}

/// One-line form of an error chain: `error: outer: inner: root`.
fn diagnostic(e: &anyhow::Error) -> String {
    format!("error: {e:#}").replace('\n', " ")
}

fn run(action: Action) -> Result<()> {
    match action {
        Action::Compute {
            file,
            center,
            cutoff,
            params,
            format,
            out,
        } => {
            let text = run_compute(&file, center, cutoff, &params, format)?;
            emit(&text, out.as_deref(), || {
                Payload::new(serde_json::json!({
                    "command": "compute",
                    "center": center,
                    "cutoff": cutoff,
                    "params": params.iter().map(|p| p.name()).collect::<Vec<_>>(),
                }))
                .with_inputs([file.display().to_string()])
            })
        }
        Action::Batch { files, cutoff, out } => run_batch(&files, cutoff, &out),
        Action::Rmsd { a, b, align } => {
            print!("{}", run_rmsd(&a, &b, align)?);
            Ok(())
        }
        Action::Jt {
            file,
            group_a,
            group_b,
            center,
        } => {
            print!("{}", run_jt(&file, &group_a, &group_b, center)?);
            Ok(())
        }
        Action::Report => report(),
    }
}

fn load(path: &Path) -> Result<Molecule> {
    let (mol, format) =
        read_molecule(path).with_context(|| format!("reading {}", path.display()))?;
    info!(file = %path.display(), %format, atoms = mol.len(), "loaded");
    Ok(mol)
}

/// 0-based center: the requested 1-based index, else the first metal, else atom 1.
fn resolve_center(mol: &Molecule, center: Option<usize>) -> Result<usize> {
    if let Some(n) = center {
        if n == 0 || n > mol.len() {
            bail!("--center {n} out of range (1..={})", mol.len());
        }
        return Ok(n - 1);
    }
    match metal_centers(&mol.labels, is_metal).first() {
        Some(&i) => {
            debug!(center = i + 1, label = %mol.labels[i], "auto-detected metal center");
            Ok(i)
        }
        None => {
            warn!("no metal atom found; using atom 1 as the center");
            Ok(0)
        }
    }
}

fn run_compute(
    file: &Path,
    center: Option<usize>,
    cutoff: f64,
    params: &[Param],
    format: OutputFormat,
) -> Result<String> {
    let mol = load(file)?;
    let c = resolve_center(&mol, center)?;
    let ex = mol.octahedron_at(c, cutoff)?;
    debug!(indices = ?ex.indices.map(|i| i + 1), distances = ?ex.distances, "extracted");
    let cfg = OctaCfg {
        cutoff,
        ..OctaCfg::default()
    };
    let d = compute_with(&ex.octahedron, &cfg)?;
    if d.non_octa {
        warn!(file = %file.display(), "structure is not clearly octahedral; Theta may be meaningless");
    }
    let row = Row::new(&file.display().to_string(), c, &mol.labels[c], &d);
    Ok(match format {
        OutputFormat::Text if params.is_empty() => render_text(&d, &Param::DEFAULT),
        OutputFormat::Text => render_text(&d, params),
        OutputFormat::Json if params.is_empty() => {
            format!("{}\n", serde_json::to_string_pretty(&row)?)
        }
        OutputFormat::Json => format!(
            "{}\n",
            serde_json::to_string_pretty(&render_json(&row, &d, params))?
        ),
    })
}

/// Print `text`, or write it to `out` with a provenance sidecar.
fn emit(text: &str, out: Option<&Path>, payload: impl FnOnce() -> Payload) -> Result<()> {
    let Some(path) = out else {
        print!("{text}");
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    let prov = write_sidecar(path, payload())?;
    info!(out = %path.display(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn run_batch(files: &[PathBuf], cutoff: f64, out: &Path) -> Result<()> {
    let cfg = OctaCfg {
        cutoff,
        ..OctaCfg::default()
    };
    let mut rows = Vec::new();
    for file in files {
        let mol = load(file)?;
        let mut centers = metal_centers(&mol.labels, is_metal);
        if centers.is_empty() {
            warn!(file = %file.display(), "no metal atom found; using atom 1 as the center");
            centers.push(0);
        }
        for c in centers {
            let ex = match mol.octahedron_at(c, cutoff) {
                Ok(ex) => ex,
                Err(e @ OctaError::IncompleteOctahedron { .. }) => {
                    warn!(file = %file.display(), center = c + 1, "skipped: {e}");
                    continue;
                }
                Err(e) => return Err(e).with_context(|| format!("{} center {}", file.display(), c + 1)),
            };
            let d = compute_with(&ex.octahedron, &cfg)
                .with_context(|| format!("{} center {}", file.display(), c + 1))?;
            if d.non_octa {
                warn!(file = %file.display(), center = c + 1, "structure is not clearly octahedral");
            }
            rows.push(Row::new(&file.display().to_string(), c, &mol.labels[c], &d));
        }
    }
    if rows.is_empty() {
        bail!("no complete octahedron found in {} file(s)", files.len());
    }
    write_table(&rows, out)?;
    let payload = Payload::new(serde_json::json!({ "command": "batch", "cutoff": cutoff }))
        .with_inputs(files.iter().map(|f| f.display().to_string()));
    let prov = write_sidecar(out, payload)?;
    info!(rows = rows.len(), out = %out.display(), provenance = %prov.display(), "batch written");
    Ok(())
}

fn run_rmsd(a: &Path, b: &Path, align: bool) -> Result<String> {
    let ma = load(a)?;
    let mb = load(b)?;
    if ma.len() != mb.len() {
        bail!("atom counts differ: {} vs {}", ma.len(), mb.len());
    }
    let value = if align {
        kabsch(&ma.coords, &mb.coords)?.rmsd
    } else {
        rmsd(&ma.coords, &mb.coords)?
    };
    Ok(format!("rmsd {value:.8}\n"))
}

fn run_jt(file: &Path, group_a: &[usize], group_b: &[usize], center: Option<usize>) -> Result<String> {
    let mol = load(file)?;
    let c = resolve_center(&mol, center)?;
    let pick = |group: &[usize]| -> Result<Vec<_>> {
        group
            .iter()
            .map(|&n| {
                if n == 0 || n > mol.len() {
                    bail!("atom index {n} out of range (1..={})", mol.len());
                }
                Ok(mol.coords[n - 1])
            })
            .collect()
    };
    let jt = jahn_teller(mol.coords[c], &pick(group_a)?, &pick(group_b)?)?;
    Ok(format!(
        "plane_angle {:.8}\naxial_angle {:.8}\naxial_deviation {:.8}\n",
        jt.plane_angle, jt.axial_angle, jt.axial_deviation
    ))
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "octadist_version": octadist::VERSION,
        "defaults": {
            "cutoff": DEFAULT_CUTOFF,
            "trans_tol_deg": OctaCfg::default().trans_tol_deg,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const FE_XYZ: &str = "\
8
iron hexaaqua with a stray hydrogen
O    2.100  0.000  0.000
Fe   0.000  0.000  0.000
O   -2.000  0.000  0.000
O    0.000  2.050  0.000
O    0.000 -2.000  0.000
O    0.000  0.000  2.200
O    0.000  0.000 -1.950
H    0.000  0.000  3.100
";

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let p = dir.join(name);
        fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn center_resolution_prefers_metal_then_first_atom() {
        let dir = tempdir().unwrap();
        let mol = load(&write(dir.path(), "fe.xyz", FE_XYZ)).unwrap();
        assert_eq!(resolve_center(&mol, None).unwrap(), 1);
        assert_eq!(resolve_center(&mol, Some(3)).unwrap(), 2);
        assert!(resolve_center(&mol, Some(0)).is_err());
        assert!(resolve_center(&mol, Some(9)).is_err());

        let organic = load(&write(dir.path(), "c.xyz", "2\n\nC 0 0 0\nO 0 0 1.2\n")).unwrap();
        assert_eq!(resolve_center(&organic, None).unwrap(), 0);
    }

    #[test]
    fn compute_prints_requested_parameters() {
        let dir = tempdir().unwrap();
        let f = write(dir.path(), "fe.xyz", FE_XYZ);
        let text = run_compute(&f, None, 2.8, &[Param::Zeta, Param::Sigma], OutputFormat::Text)
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("zeta "));
        assert_eq!(lines[1], "sigma 0.00000000");

        let json = run_compute(&f, Some(2), 2.8, &[], OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["center"], 2);
        assert_eq!(v["center_label"], "Fe");
        assert_eq!(v["bond_dist"].as_array().map(|a| a.len()), Some(6));
    }

    #[test]
    fn incomplete_octahedron_is_an_error() {
        let dir = tempdir().unwrap();
        let f = write(dir.path(), "fe.xyz", FE_XYZ);
        let err = run_compute(&f, None, 2.1, &[], OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("incomplete octahedron"));
    }

    #[test]
    fn fatal_errors_render_on_one_line() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.xyz");
        let err = run(Action::Compute {
            file: missing,
            center: None,
            cutoff: DEFAULT_CUTOFF,
            params: Vec::new(),
            format: OutputFormat::Text,
            out: None,
        })
        .unwrap_err();
        let line = diagnostic(&err);
        assert!(line.starts_with("error: reading "), "{line}");
        assert!(line.contains("absent.xyz: "), "{line}");
        assert_eq!(line.lines().count(), 1);

        let f = write(dir.path(), "fe.xyz", FE_XYZ);
        let err = run_compute(&f, None, 2.1, &[], OutputFormat::Text).unwrap_err();
        assert_eq!(diagnostic(&err).lines().count(), 1);
    }

    #[test]
    fn written_output_gets_a_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("res/fe.txt");
        emit("theta 0.0\n", Some(&out), || Payload::new(serde_json::json!({}))).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "theta 0.0\n");
        assert!(dir.path().join("res/fe.provenance.json").exists());
    }

    #[test]
    fn batch_writes_one_row_per_complete_center() {
        let dir = tempdir().unwrap();
        let a = write(dir.path(), "a.xyz", FE_XYZ);
        let b = write(dir.path(), "b.xyz", FE_XYZ);
        let out = dir.path().join("all.csv");
        run_batch(&[a, b], 2.8, &out).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(dir.path().join("all.provenance.json").exists());

        let none = run_batch(&[write(dir.path(), "c.xyz", FE_XYZ)], 1.0, &dir.path().join("x.csv"));
        assert!(none.is_err());
    }

    #[test]
    fn rmsd_and_jahn_teller_commands() {
        let dir = tempdir().unwrap();
        let a = write(dir.path(), "a.xyz", FE_XYZ);
        let shifted: String = FE_XYZ.replace("Fe   0.000", "Fe   0.100");
        let b = write(dir.path(), "b.xyz", &shifted);
        let plain = run_rmsd(&a, &b, false).unwrap();
        let expected = (0.01f64 / 8.0).sqrt();
        assert_eq!(plain, format!("rmsd {expected:.8}\n"));
        assert!(run_rmsd(&a, &a, true).unwrap().starts_with("rmsd 0.0000000"));

        // Two planar groups straddling the metal: {x-axis O, y-axis O, +z O}
        // against the same set mirrored below.
        let jt = run_jt(&a, &[1, 4, 6], &[3, 5, 7], None).unwrap();
        assert!(jt.starts_with("plane_angle "));
        assert_eq!(jt.lines().count(), 3);
    }
}
