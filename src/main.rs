use anyhow::Context;
use clap::{Parser, Subcommand};
use floorplan::designer::NullSurface;
use floorplan::{
    editor_options, init_logging, BackgroundKind, RoomType, SceneCoordinator, SettingsPersistence,
    ShapeKind,
};
use std::path::{Path, PathBuf};

/// Command-line arguments for the floor-plan editor.
#[derive(Debug, Parser)]
#[command(name = "floorplan")]
#[command(about = "Area-scaled 2D floor-plan editor")]
#[command(version)]
struct Cli {
    /// Settings file (JSON or TOML). Defaults to the platform config directory.
    #[arg(long, global = true, env = "FLOORPLAN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create an empty scene file
    New {
        /// Scene file to write
        scene: PathBuf,
        /// Total floor area in m²
        #[arg(long)]
        total_area: Option<f64>,
        /// Pixels per meter
        #[arg(long)]
        grid_size: Option<f64>,
        #[arg(long)]
        background: Option<BackgroundKind>,
        /// Design name stored in the file
        #[arg(long, default_value = "Untitled")]
        name: String,
    },
    /// Add a symbol to a scene file
    Add {
        scene: PathBuf,
        /// rectangle, triangle, trapezoid, stairs, elevator, entrance, line or text
        #[arg(long, value_parser = parse_kind)]
        kind: ShapeKind,
        /// Target area in m²
        #[arg(long, default_value = "10")]
        area: f64,
        /// living-room, bedroom, kitchen, bathroom or dining-room
        #[arg(long, value_parser = parse_room_type)]
        room_type: Option<RoomType>,
        /// Top-left position in document pixels
        #[arg(long, num_args = 2, value_names = ["LEFT", "TOP"])]
        at: Option<Vec<f64>>,
    },
    /// Print the area report of a scene file
    Report { scene: PathBuf },
    /// Write PNG, SVG, JSON and report files for a scene
    Export {
        scene: PathBuf,
        /// Output directory (defaults to the configured export directory)
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// File name stem (defaults to the configured stem)
        #[arg(long)]
        stem: Option<String>,
    },
}

fn parse_kind(value: &str) -> Result<ShapeKind, String> {
    serde_json::from_value(serde_json::Value::String(value.to_lowercase()))
        .map_err(|_| format!("Unknown shape kind: {}", value))
}

fn parse_room_type(value: &str) -> Result<RoomType, String> {
    serde_json::from_value(serde_json::Value::String(value.to_lowercase()))
        .map_err(|_| format!("Unknown room type: {}", value))
}

fn open_scene(settings: &SettingsPersistence, scene: &Path) -> anyhow::Result<SceneCoordinator> {
    let mut editor = SceneCoordinator::new(editor_options(settings.config()), NullSurface)?;
    editor.load_from_file(scene)?;
    Ok(editor)
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => SettingsPersistence::default_path()?,
    };
    let settings = SettingsPersistence::load_or_default(&config_path);
    settings
        .validate()
        .with_context(|| format!("Invalid settings in {}", config_path.display()))?;

    tracing::debug!("FloorPlan {} (built {})", floorplan::VERSION, floorplan::BUILD_DATE);

    match cli.command {
        Command::New {
            scene,
            total_area,
            grid_size,
            background,
            name,
        } => {
            let mut options = editor_options(settings.config());
            if let Some(kind) = background {
                options.background = kind;
            }
            let mut editor = SceneCoordinator::new(options, NullSurface)?;
            if let Some(grid) = grid_size {
                editor.set_grid_size(grid)?;
            }
            if let Some(total) = total_area {
                editor.set_total_area(total)?;
            }
            editor.design_name = name;
            editor.save_to_file(&scene)?;
            println!("Created {}", scene.display());
        }
        Command::Add {
            scene,
            kind,
            area,
            room_type,
            at,
        } => {
            let mut editor = open_scene(&settings, &scene)?;
            let id = editor.add_shape(kind, area)?;
            if room_type.is_some() {
                editor.set_room_type(id, room_type)?;
            }
            if let Some([left, top]) = at.as_deref() {
                editor.move_shape(id, *left, *top)?;
            }
            editor.save_to_file(&scene)?;
            match editor.context().label_text_of(id) {
                Some(label) => println!("Added {} {} ({})", kind, id, label),
                None => println!("Added {} {}", kind, id),
            }
        }
        Command::Report { scene } => {
            let editor = open_scene(&settings, &scene)?;
            println!("{}", editor.area_report());
        }
        Command::Export { scene, out, stem } => {
            let editor = open_scene(&settings, &scene)?;
            let export = &settings.config().export;
            let dir = out.unwrap_or_else(|| export.output_directory.clone());
            let stem = stem.unwrap_or_else(|| export.file_stem.clone());
            let paths = editor.export_to_dir(&dir, &stem)?;
            for path in [&paths.png, &paths.svg, &paths.json, &paths.report] {
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}
