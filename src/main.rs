// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser};
use def_diearea::boundary::raster::ContourSpec;
use def_diearea::edit::{cuts_from_coordinates, load_json, CutList};
use def_diearea::export::export_vertices_to_csv;
use def_diearea::{edit_def_file, DefError, EditRequest};

#[derive(Parser)]
#[command(name = "def-diearea")]
#[command(about = "A tool to process .def files and modify the DIEAREA line")]
#[command(version)]
struct Cli {
    /// Input .def file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output .def file path
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    mode: Mode,

    /// Coordinate pairs x1 y1 x2 y2 ... (4 numbers per rectangle)
    #[arg(
        short,
        long,
        num_args = 1..,
        allow_negative_numbers = true,
        requires = "rectangles"
    )]
    coordinates: Vec<i64>,

    /// Also write the resulting vertices to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Enable verbose output mode
    #[arg(long)]
    verbose: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Mode {
    /// Number of rectangles to remove (must be >= 1)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        requires = "coordinates"
    )]
    rectangles: Option<u32>,

    /// JSON file with cuts: {"cuts": [[x1, y1, x2, y2], ...]}
    #[arg(long)]
    cuts_file: Option<PathBuf>,

    /// Directly specify the new DIEAREA line (e.g. "DIEAREA ( 0 0 ) ( 1000 1000 ) ;")
    #[arg(long)]
    diearea_line: Option<String>,

    /// JSON contour file to generate the DIEAREA from
    #[arg(short = 'g', long)]
    generate_from_contour: Option<PathBuf>,
}

impl Mode {
    fn request(&self, coordinates: &[i64]) -> Result<EditRequest, DefError> {
        if let Some(rectangles) = self.rectangles {
            let pairs = cuts_from_coordinates(rectangles as usize, coordinates)?;
            Ok(EditRequest::Cuts(pairs))
        } else if let Some(path) = &self.cuts_file {
            let cuts = load_json(path, CutList::from_json)?;
            Ok(EditRequest::Cuts(cuts.into_pairs()))
        } else if let Some(line) = &self.diearea_line {
            Ok(EditRequest::Line(line.clone()))
        } else if let Some(path) = &self.generate_from_contour {
            Ok(EditRequest::Contour(load_json(path, ContourSpec::from_json)?))
        } else {
            unreachable!("clap requires exactly one mode")
        }
    }
}

fn run(cli: &Cli) -> Result<(), DefError> {
    let request = cli.mode.request(&cli.coordinates)?;
    let outcome = edit_def_file(&cli.input, &cli.output, &request)?;

    if let Some(csv_path) = &cli.csv {
        export_vertices_to_csv(&outcome.vertices, csv_path)?;
    }

    if cli.verbose {
        println!(
            "Successfully processed file {}, generated new file {}",
            cli.input.display(),
            cli.output.display()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
