use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use surfcore::io::{load_rgb_image, save_rgb_image};
use surfcore::render::{draw_ipoints, draw_matches, draw_points, draw_windows};
use surfcore::{load_surf, Correspondence, Ipoint, IpointStyle, Laplacian, Orientation};
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect and draw SURF feature files (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum StyleConfig {
    /// Orientation, scale circle and motion tail.
    #[default]
    Ipoints,
    /// Rotated descriptor windows.
    Windows,
    /// Cluster-colored dots.
    Points,
}

#[derive(Debug, Deserialize)]
struct MatchesConfig {
    image_path: String,
    features_path: String,
    pairs: Vec<[usize; 2]>,
    first_output_path: String,
    second_output_path: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    features_path: String,
    image_path: Option<String>,
    output_path: Option<String>,
    style: StyleConfig,
    tail_length: u32,
    matches: Option<MatchesConfig>,
}

#[derive(Debug, Serialize)]
struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

#[derive(Debug, Default, Serialize)]
struct LaplacianCounts {
    dark_on_light: usize,
    light_on_dark: usize,
    unclassified: usize,
}

#[derive(Debug, Serialize)]
struct Summary {
    count: usize,
    descriptor_len: usize,
    upright: usize,
    laplacian: LaplacianCounts,
    bounds: Option<Bounds>,
    matches: Option<usize>,
}

impl Summary {
    fn from_ipoints(ipts: &[Ipoint]) -> Self {
        let mut laplacian = LaplacianCounts::default();
        let mut bounds: Option<Bounds> = None;
        for ipt in ipts {
            match ipt.laplacian() {
                Laplacian::DarkOnLight => laplacian.dark_on_light += 1,
                Laplacian::LightOnDark => laplacian.light_on_dark += 1,
                Laplacian::Unclassified => laplacian.unclassified += 1,
            }
            let b = bounds.get_or_insert(Bounds {
                min_x: ipt.x(),
                min_y: ipt.y(),
                max_x: ipt.x(),
                max_y: ipt.y(),
            });
            b.min_x = b.min_x.min(ipt.x());
            b.min_y = b.min_y.min(ipt.y());
            b.max_x = b.max_x.max(ipt.x());
            b.max_y = b.max_y.max(ipt.y());
        }
        Self {
            count: ipts.len(),
            descriptor_len: surfcore::DESCRIPTOR_LEN,
            upright: ipts
                .iter()
                .filter(|ipt| ipt.orientation() == Orientation::NotComputed)
                .count(),
            laplacian,
            bounds,
            matches: None,
        }
    }
}

fn build_pairs(
    first: &[Ipoint],
    second: &[Ipoint],
    pairs: &[[usize; 2]],
) -> Result<Vec<Correspondence>, Box<dyn std::error::Error>> {
    pairs
        .iter()
        .map(|&[i, j]| match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) => Ok(Correspondence::new(a.clone(), b.clone())),
            _ => Err(format!("match pair [{i}, {j}] is out of range").into()),
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("surfcore=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.features_path.is_empty() {
        return Err("features_path must be set in the config".into());
    }

    let ipts = load_surf(&config.features_path)?;
    let mut summary = Summary::from_ipoints(&ipts);

    match (&config.image_path, &config.output_path) {
        (Some(image_path), Some(output_path)) => {
            let mut canvas = load_rgb_image(image_path)?;
            match config.style {
                StyleConfig::Ipoints => draw_ipoints(
                    &mut canvas,
                    &ipts,
                    IpointStyle {
                        tail_length: config.tail_length,
                    },
                ),
                StyleConfig::Windows => draw_windows(&mut canvas, &ipts),
                StyleConfig::Points => draw_points(&mut canvas, &ipts),
            }
            save_rgb_image(&canvas, output_path)?;
            tracing::info!(path = %output_path, "wrote feature overlay");
        }
        (None, Some(_)) => return Err("output_path requires image_path".into()),
        _ => {}
    }

    if let Some(matches) = &config.matches {
        let Some(image_path) = &config.image_path else {
            return Err("matches require image_path for the first image".into());
        };
        let second = load_surf(&matches.features_path)?;
        let pairs = build_pairs(&ipts, &second, &matches.pairs)?;

        let mut first_canvas = load_rgb_image(image_path)?;
        let mut second_canvas = load_rgb_image(&matches.image_path)?;
        let first_width = i32::try_from(first_canvas.width())?;
        draw_matches(&mut first_canvas, &mut second_canvas, &pairs, first_width);
        save_rgb_image(&first_canvas, &matches.first_output_path)?;
        save_rgb_image(&second_canvas, &matches.second_output_path)?;
        tracing::info!(count = pairs.len(), "wrote match overlays");
        summary.matches = Some(pairs.len());
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
