//! Scene dumps, reports and exports.

use anyhow::{Context, Result};
use floorplan_core::EditError;
use std::path::{Path, PathBuf};

use super::SceneCoordinator;
use crate::context::SceneContext;
use crate::renderer;
use crate::report::AreaReport;
use crate::serialization::{parse_scene, SceneFile};
use crate::surface::RenderSurface;
use crate::svg_renderer;

/// Files written by [`SceneCoordinator::export_to_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub png: PathBuf,
    pub svg: PathBuf,
    pub json: PathBuf,
    pub report: PathBuf,
}

impl<S: RenderSurface> SceneCoordinator<S> {
    /// Full JSON scene dump.
    pub fn scene_json(&self) -> Result<String> {
        SceneFile::new(&self.design_name, self.context.to_scene_data()).to_json_pretty()
    }

    /// Replaces the scene with a JSON dump (scene file or bare scene).
    ///
    /// Corrupt or inconsistent input is rejected with `MalformedSnapshot`
    /// and leaves the scene and history unchanged. A successful import
    /// rebinds labels and commits a snapshot.
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), EditError> {
        let data = parse_scene(json).inspect_err(|e| tracing::warn!("Rejected scene: {}", e))?;
        self.context = SceneContext::from_scene_data(data)?;
        self.drag = None;
        self.selection.deselect_all();
        self.selection.cancel_pending();
        self.reload_surface();
        self.commit("load scene")?;
        tracing::info!("Loaded scene with {} objects", self.context.store.len());
        Ok(())
    }

    /// Save scene to file
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = SceneFile::new(&self.design_name, self.context.to_scene_data());
        file.save_to_file(&path)?;
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!("Saved scene to {}", path.as_ref().display());
        Ok(())
    }

    /// Load scene from file
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read scene file {}", path.as_ref().display()))?;
        self.load_scene_json(&content)
            .with_context(|| format!("Failed to load scene file {}", path.as_ref().display()))?;
        if let Ok(file) = serde_json::from_str::<SceneFile>(&content) {
            self.design_name = file.metadata.name;
        }
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    pub fn area_report(&self) -> AreaReport {
        AreaReport::from_context(&self.context)
    }

    pub fn export_png(&self) -> Result<Vec<u8>, floorplan_core::ExportError> {
        renderer::render_png(&self.context)
    }

    pub fn export_svg(&self) -> String {
        svg_renderer::render_svg(&self.context)
    }

    /// Writes `<stem>.png`, `<stem>.svg`, `<stem>.json` and
    /// `<stem>-report.txt` into `dir`, creating it if needed.
    pub fn export_to_dir(&self, dir: impl AsRef<Path>, stem: &str) -> Result<ExportPaths> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

        let paths = ExportPaths {
            png: dir.join(format!("{}.png", stem)),
            svg: dir.join(format!("{}.svg", stem)),
            json: dir.join(format!("{}.json", stem)),
            report: dir.join(format!("{}-report.txt", stem)),
        };

        let png = self.export_png().context("Failed to render PNG")?;
        std::fs::write(&paths.png, png).context("Failed to write PNG export")?;
        std::fs::write(&paths.svg, self.export_svg()).context("Failed to write SVG export")?;
        std::fs::write(&paths.json, self.scene_json()?).context("Failed to write JSON export")?;
        std::fs::write(&paths.report, self.area_report().to_string())
            .context("Failed to write area report")?;

        tracing::info!("Exported floor plan to {}", dir.display());
        Ok(paths)
    }
}
