//! Wireframe rendering of sampled Gaussian surfaces.
//!
//! [`SurfacePlot`] projects a [`SampleGrid`] through a [`Camera`] and draws
//! the result in an egui window, coloured by height.

mod camera;
mod colormap;
mod scene;

pub use camera::Camera;
pub use colormap::magma;
pub use scene::{AxisGuide, Polyline, Scene};

use bellgrid_core::SampleGrid;
use eframe::egui::{self, Color32};
use egui_plot::{Line, Plot, PlotPoint, Text};

/// Whether [`SurfacePlot::show`] waits for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowMode {
    /// Keep the window open until the user closes it.
    #[default]
    Blocking,

    /// Close the window as soon as the first frame is drawn.
    NonBlocking,
}

impl ShowMode {
    /// Returns [`Blocking`](Self::Blocking) for interactive sessions.
    #[must_use]
    pub fn from_interactive(interactive: bool) -> Self {
        if interactive {
            Self::Blocking
        } else {
            Self::NonBlocking
        }
    }
}

/// A 3-D surface plot of a sample grid.
pub struct SurfacePlot {
    title: String,
    scene: Scene,
}

impl SurfacePlot {
    /// Projects `grid` with the default camera.
    #[must_use]
    pub fn new(grid: &SampleGrid) -> Self {
        Self::with_camera(grid, &Camera::default())
    }

    /// Projects `grid` with the given camera.
    #[must_use]
    pub fn with_camera(grid: &SampleGrid, camera: &Camera) -> Self {
        Self {
            title: "Gaussian surface".to_string(),
            scene: Scene::new(grid, camera),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns the projected scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Opens a native window displaying the surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, mode: ShowMode) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 600.0]),
            ..Default::default()
        };
        let app = SurfaceApp::new(self.scene, mode);

        eframe::run_native(&self.title, options, Box::new(|_cc| Ok(Box::new(app))))
    }
}

struct Stroke {
    points: Vec<PlotPoint>,
    color: Color32,
}

/// The egui [`eframe::App`] that renders a projected scene.
struct SurfaceApp {
    strokes: Vec<Stroke>,
    labels: Vec<(PlotPoint, &'static str)>,
    mode: ShowMode,
}

impl SurfaceApp {
    fn new(scene: Scene, mode: ShowMode) -> Self {
        let mut strokes: Vec<Stroke> = scene
            .wireframe
            .into_iter()
            .map(|line| {
                let [r, g, b] = magma(line.height);
                Stroke {
                    points: line.points.into_iter().map(Into::into).collect(),
                    color: Color32::from_rgb(r, g, b),
                }
            })
            .collect();

        let mut labels = Vec::with_capacity(scene.axes.len());
        for guide in scene.axes {
            strokes.push(Stroke {
                points: vec![guide.from.into(), guide.to.into()],
                color: Color32::GRAY,
            });
            labels.push((guide.to.into(), guide.label));
        }

        Self {
            strokes,
            labels,
            mode,
        }
    }
}

impl eframe::App for SurfaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("surface-plot")
                .data_aspect(1.0)
                .show_axes(false)
                .show_grid(false)
                .show(ui, |plot_ui| {
                    for stroke in &self.strokes {
                        plot_ui.line(Line::new(stroke.points.as_slice()).color(stroke.color));
                    }
                    for &(position, label) in &self.labels {
                        plot_ui.text(Text::new(position, label));
                    }
                });
        });

        if self.mode == ShowMode::NonBlocking {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
