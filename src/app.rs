use crate::config::{MosaicConfig, Regions};
use crate::error::MosaicError;
use crate::layout::{self, Layout, LayoutConfig};
use crate::render::colors::ColorAssigner;
use crate::render::labels::LabelFitter;
use crate::render::scene::{build_scene, Scene};
use crate::tree::arena::Hierarchy;
use crate::tree::dataset::RawNode;
use crate::tree;
use crate::ui::input::{InputAction, InspectionState};

/// Top-level state for one dataset: the immutable tree plus everything derived from it.
pub struct App {
    config: MosaicConfig,
    tree: Hierarchy,
    colors: ColorAssigner,
    regions: Regions,

    layout: Layout,
    scene: Scene,
    needs_relayout: bool,

    pub inspection: InspectionState,
}

impl App {
    /// Validate `config`, build the tree from `dataset` and compute the first frame.
    pub fn new(config: MosaicConfig, dataset: &RawNode) -> Result<Self, MosaicError> {
        config.validate()?;
        let tree = tree::build_tree(dataset)?;
        Ok(Self::with_tree(config, tree))
    }

    /// Like [`App::new`] for a tree that is already built. The configuration
    /// is assumed valid.
    pub fn with_tree(config: MosaicConfig, tree: Hierarchy) -> Self {
        let colors = ColorAssigner::new(config.palette.clone());
        let mut app = Self {
            regions: Regions::split(&config),
            config,
            tree,
            colors,
            layout: Layout::default(),
            scene: Scene::default(),
            needs_relayout: true,
            inspection: InspectionState::default(),
        };
        app.relayout();
        app
    }

    pub fn config(&self) -> &MosaicConfig {
        &self.config
    }

    pub fn tree(&self) -> &Hierarchy {
        &self.tree
    }

    /// Category colors assigned so far. Stable across relayouts.
    pub fn colors(&self) -> &ColorAssigner {
        &self.colors
    }

    pub fn regions(&self) -> Regions {
        self.regions
    }

    /// Layout for the current viewport, recomputed first if a resize is pending.
    pub fn layout(&mut self) -> &Layout {
        if self.needs_relayout {
            self.relayout();
        }
        &self.layout
    }

    /// Scene for the current viewport, recomputed first if a resize is pending.
    pub fn scene(&mut self) -> &Scene {
        if self.needs_relayout {
            self.relayout();
        }
        &self.scene
    }

    /// Force a recomputation of the layout and scene.
    pub fn relayout(&mut self) {
        self.regions = Regions::split(&self.config);
        tracing::info!(
            "Computing layout for {} nodes, chart {:.0}x{:.0}, legend {:.0}x{:.0}",
            self.tree.len(),
            self.regions.chart.width(),
            self.regions.chart.height(),
            self.regions.legend.width(),
            self.regions.legend.height()
        );

        let layout_config = LayoutConfig {
            padding: self.config.padding,
        };
        self.layout = layout::compute_layout(&self.tree, self.regions.chart, &layout_config);

        let fitter = LabelFitter::new(self.config.min_label_size, self.config.elision_mode);
        self.scene = build_scene(
            &self.tree,
            &self.layout,
            self.regions.legend,
            self.config.columns(),
            &fitter,
            &mut self.colors,
        );

        self.needs_relayout = false;
    }

    /// Handle viewport resize.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self.needs_relayout = true;
    }

    /// Pointer moved to `(x, y)` in canvas coordinates.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> InputAction {
        if self.needs_relayout {
            self.relayout();
        }
        self.inspection
            .pointer_moved(&self.tree, &self.layout.rects, x, y)
    }

    /// Pointer left the canvas.
    pub fn pointer_left(&mut self) -> InputAction {
        self.inspection.pointer_left()
    }
}
