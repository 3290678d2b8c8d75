/// Diagnostic tool: dataset → hierarchy → layout → scene, printed as text.
///
/// Usage: treemosaic <dataset.json> [config.json] [--probe X,Y]...
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use treemosaic::render::LabelPlan;
use treemosaic::tree::dataset;
use treemosaic::ui::InputAction;
use treemosaic::{App, MosaicConfig};

struct Args {
    dataset: PathBuf,
    config: Option<PathBuf>,
    probes: Vec<(f64, f64)>,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut probes = Vec::new();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        if arg == "--probe" {
            let point = args.next().context("--probe needs a value like 120,80")?;
            let (x, y) = point
                .split_once(',')
                .with_context(|| format!("probe '{point}' is not X,Y"))?;
            probes.push((x.trim().parse()?, y.trim().parse()?));
        } else {
            positional.push(PathBuf::from(arg));
        }
    }

    let mut positional = positional.into_iter();
    let Some(dataset) = positional.next() else {
        bail!("usage: treemosaic <dataset.json> [config.json] [--probe X,Y]...");
    };
    Ok(Args {
        dataset,
        config: positional.next(),
        probes,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("treemosaic=info".parse()?),
        )
        .init();

    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => MosaicConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MosaicConfig::default(),
    };

    let file = File::open(&args.dataset)
        .with_context(|| format!("opening dataset {}", args.dataset.display()))?;
    let raw = dataset::read_dataset(BufReader::new(file))?;

    println!("=== DIAGNOSTIC: Dataset → Layout → Scene ===");
    println!("Dataset: {}", args.dataset.display());

    let mut app = App::new(config, &raw)?;

    let tree = app.tree();
    let root = tree.get(tree.root);
    println!(
        "\n[1] Hierarchy: {} nodes, {} categories, total value {}",
        tree.len(),
        tree.categories().len(),
        root.aggregate
    );

    let regions = app.regions();
    println!(
        "\n[2] Regions: chart {:.0}x{:.0} at ({:.0}, {:.0}), legend {:.0}x{:.0} at ({:.0}, {:.0})",
        regions.chart.width(),
        regions.chart.height(),
        regions.chart.x0,
        regions.chart.y0,
        regions.legend.width(),
        regions.legend.height(),
        regions.legend.x0,
        regions.legend.y0
    );

    let chart_area = regions.chart.area();
    let allocated: f64 = app.layout().leaves().map(|r| r.bounds.area()).sum();
    let visible: f64 = app.layout().leaves().map(|r| r.rect.area()).sum();
    println!("\n[3] Area check:");
    println!("    Chart area:      {:.0}px²", chart_area);
    println!("    Allocated area:  {:.0}px²", allocated);
    println!(
        "    Visible area:    {:.0}px² ({:.1}% after padding)",
        visible,
        if chart_area > 0.0 { visible / chart_area * 100.0 } else { 0.0 }
    );

    let leaves: Vec<_> = app.layout().leaves().copied().collect();
    let escaped = leaves
        .iter()
        .filter(|r| !regions.chart.encloses(&r.rect, 1e-9))
        .count();
    let overlapping = leaves
        .iter()
        .enumerate()
        .flat_map(|(i, a)| leaves[i + 1..].iter().map(move |b| (a, b)))
        .filter(|(a, b)| a.rect.overlaps(&b.rect, 1e-9))
        .count();
    println!("    Tiles outside chart: {}", escaped);
    println!("    Overlapping pairs:   {}", overlapping);

    let scene = app.scene().clone();
    let mut tiles: Vec<_> = scene.tiles.iter().collect();
    tiles.sort_by(|a, b| b.rect.area().total_cmp(&a.rect.area()));

    println!("\n[4] Top 10 tiles by area:");
    for (i, tile) in tiles.iter().take(10).enumerate() {
        let label = match &tile.label {
            LabelPlan::Lines { lines, .. } => format!("{} line(s)", lines.len()),
            LabelPlan::Elided { marker, .. } => format!("elided '{marker}'"),
            LabelPlan::Hidden => "hidden".to_string(),
        };
        println!(
            "    [{}] '{}' / '{}' = {} - {:.1}x{:.1} at ({:.1}, {:.1}) fill {} label {}",
            i,
            tile.category,
            tile.name,
            tile.value,
            tile.rect.width(),
            tile.rect.height(),
            tile.rect.x0,
            tile.rect.y0,
            tile.fill,
            label
        );
    }

    let full_labels = scene
        .tiles
        .iter()
        .filter(|t| matches!(t.label, LabelPlan::Lines { .. }))
        .count();
    println!(
        "\n[5] Labels: {} full, {} elided or hidden (of {})",
        full_labels,
        scene.tiles.len() - full_labels,
        scene.tiles.len()
    );

    let colors = app.colors();
    println!("\n[6] Legend ({} colors assigned):", colors.len());
    if colors.is_empty() {
        println!("    (no categories)");
    }
    for entry in &scene.legend {
        println!(
            "    ({}, {}) {} {} - cell {:.1}x{:.1} at ({:.1}, {:.1})",
            entry.column,
            entry.row,
            entry.color,
            entry.name,
            entry.cell.width(),
            entry.cell.height(),
            entry.cell.x0,
            entry.cell.y0
        );
    }

    if !args.probes.is_empty() {
        println!("\n[7] Probes:");
        for &(x, y) in &args.probes {
            match app.pointer_moved(x, y) {
                InputAction::Inspect(payload) => {
                    let [category, name, value] = payload.lines();
                    println!(
                        "    ({x}, {y}) → {category} / {name} / {value} (overlay at {}, {})",
                        payload.anchor_x, payload.anchor_y
                    );
                }
                InputAction::ClearInspection | InputAction::None => {
                    println!("    ({x}, {y}) → no tile");
                }
            }
        }
    }

    Ok(())
}
