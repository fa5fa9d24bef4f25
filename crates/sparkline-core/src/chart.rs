// File: crates/sparkline-core/src/chart.rs
// Summary: Sparkline aggregation: options plus memoized pipeline artifacts.

use crate::classify::{classify, PointStyle};
use crate::data::{diagnose, normalize_source, DataIncident, DataPoint, DataSource, NormalizeOutcome};
use crate::geometry::{compute_bar_width, resolve_canvas};
use crate::options::SparklineOptions;
use crate::range::{compute_argument_range, compute_value_range, ArgumentRange, ValueRange};
use crate::theme::Palette;
use crate::types::Canvas;

/// Outcome of a pipeline pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    /// Waiting on the data source; artifacts are stale until completion.
    Pending,
    Ready,
    /// A newer pass replaced this one; nothing was recomputed.
    Superseded,
}

/// One sparkline's computed state. The host widget owns an instance and
/// re-runs `refresh` on creation, dataset change, resize, or any option
/// change feeding the core algorithms. All artifacts are plain fields so
/// the host can diff against prior values; nothing is cached behind the
/// scenes.
pub struct Sparkline {
    pub options: SparklineOptions,
    pub points: Vec<DataPoint>,
    pub canvas: Canvas,
    pub argument_range: ArgumentRange,
    pub value_range: ValueRange,
    pub styles: Vec<PointStyle>,
    /// Present only for bar-shaped families.
    pub bar_width: Option<f64>,
    /// Last data-validation diagnostic, for the host to log or display.
    pub incident: Option<DataIncident>,
    generation: u64,
}

impl Sparkline {
    pub fn new(options: SparklineOptions) -> Self {
        let canvas = resolve_canvas(&options.size, (0.0, 0.0), &options.margin);
        Self {
            options,
            points: Vec::new(),
            canvas,
            argument_range: ArgumentRange::Continuous,
            value_range: ValueRange { min: 0.0, max: 0.0, min_visible: None, max_visible: None },
            styles: Vec::new(),
            bar_width: None,
            incident: None,
            generation: 0,
        }
    }

    /// The pass identity to hand to the data source's completion callback.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run the pipeline in dependency order. Starts a new pass, superseding
    /// any pending one; geometry is resolved up front so a resize takes
    /// effect even while data is still loading.
    pub fn refresh(&mut self, source: &dyn DataSource, container: (f64, f64)) -> Readiness {
        self.generation += 1;
        self.canvas = resolve_canvas(&self.options.size, container, &self.options.margin);
        match normalize_source(source, &self.options) {
            NormalizeOutcome::Pending => {
                log::debug!("pass {} pending on data source", self.generation);
                Readiness::Pending
            }
            NormalizeOutcome::Ready(points) => {
                self.apply_points(points);
                Readiness::Ready
            }
        }
    }

    /// Load-completion callback for a pass that went pending. A stale
    /// `generation` means a newer pass took over; the completion is a no-op.
    pub fn complete_load(&mut self, generation: u64, source: &dyn DataSource) -> Readiness {
        if generation != self.generation {
            log::debug!("ignoring completion of superseded pass {generation}");
            return Readiness::Superseded;
        }
        match normalize_source(source, &self.options) {
            NormalizeOutcome::Pending => Readiness::Pending,
            NormalizeOutcome::Ready(points) => {
                self.apply_points(points);
                Readiness::Ready
            }
        }
    }

    fn apply_points(&mut self, points: Vec<DataPoint>) {
        self.incident = diagnose(&points);
        if let Some(incident) = &self.incident {
            log::warn!("{incident}");
        }

        let family = self.options.sparkline_type.family();
        let palette = Palette::resolve(&self.options);

        self.argument_range = compute_argument_range(&points, family);
        self.value_range = compute_value_range(
            &points,
            family,
            self.options.min_value,
            self.options.max_value,
            self.options.range_pad_ratio,
        );
        self.styles = classify(&points, family, &self.options, &palette);
        self.bar_width = family.is_bar_shaped().then(|| {
            compute_bar_width(self.canvas.plot_width(), points.len(), self.options.bar_width_ratio)
        });
        self.points = points;
    }
}
