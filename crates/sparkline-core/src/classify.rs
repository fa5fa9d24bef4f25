// File: crates/sparkline-core/src/classify.rs
// Summary: Point role assignment (first/last/min/max) and per-family styling.

use crate::data::DataPoint;
use crate::options::SparklineOptions;
use crate::series::ChartFamily;
use crate::theme::Palette;

/// Role of a point within its series. Min/max take precedence over
/// first/last when both land on the same point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointRole {
    Ordinary,
    First,
    Last,
    Min,
    Max,
}

/// Style descriptor handed to the renderer for one point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointStyle {
    /// No override; the point inherits the base series style.
    Inherit,
    /// Visible marker with the given border color (line-like specials).
    Marker { border: String },
    /// Explicit fill; bar-shaped points always carry one.
    Fill { color: String },
}

/// Assign a role to every point, in index order.
///
/// Min and max go to the first point carrying the extreme value; later
/// points sharing it stay ordinary, so a run of tied extrema does not light
/// up the whole series. When min and max coincide on one point the max role
/// wins. First/last never displace a min/max already on the same point.
pub fn assign_roles(points: &[DataPoint], options: &SparklineOptions) -> Vec<PointRole> {
    let mut roles = vec![PointRole::Ordinary; points.len()];
    if points.is_empty() {
        return roles;
    }

    if options.show_min_max {
        let mut min: Option<(usize, f64)> = None;
        let mut max: Option<(usize, f64)> = None;
        for p in points {
            let Some(v) = p.value else { continue };
            if min.map_or(true, |(_, lo)| v < lo) {
                min = Some((p.index, v));
            }
            if max.map_or(true, |(_, hi)| v > hi) {
                max = Some((p.index, v));
            }
        }
        if let Some((i, _)) = min {
            roles[i] = PointRole::Min;
        }
        if let Some((i, _)) = max {
            roles[i] = PointRole::Max;
        }
    }

    if options.show_first_last {
        let last = points.len() - 1;
        if roles[0] == PointRole::Ordinary {
            roles[0] = PointRole::First;
        }
        if roles[last] == PointRole::Ordinary {
            roles[last] = PointRole::Last;
        }
    }

    roles
}

/// Style for one role within one family. Bar-shaped points always get a
/// fill; ordinary bars split on sign, ordinary winloss points on threshold.
pub fn style_for(
    role: PointRole,
    family: ChartFamily,
    value: Option<f64>,
    options: &SparklineOptions,
    palette: &Palette,
) -> PointStyle {
    let highlight = |color: &str| match family {
        ChartFamily::LineLike => PointStyle::Marker { border: color.to_string() },
        ChartFamily::BarLike | ChartFamily::WinLoss => PointStyle::Fill { color: color.to_string() },
    };

    match role {
        PointRole::First | PointRole::Last => highlight(&palette.first_last),
        PointRole::Min => highlight(&palette.min),
        PointRole::Max => highlight(&palette.max),
        PointRole::Ordinary => match family {
            ChartFamily::LineLike => PointStyle::Inherit,
            ChartFamily::BarLike => {
                let color = if value.unwrap_or(0.0) >= 0.0 {
                    &palette.bar_positive
                } else {
                    &palette.bar_negative
                };
                PointStyle::Fill { color: color.clone() }
            }
            ChartFamily::WinLoss => {
                let color = if value.unwrap_or(0.0) >= options.winloss_threshold {
                    &palette.win
                } else {
                    &palette.loss
                };
                PointStyle::Fill { color: color.clone() }
            }
        },
    }
}

/// Full classification pass: one style per point, aligned with point index.
/// Pure: same points and options always produce the same styles.
pub fn classify(
    points: &[DataPoint],
    family: ChartFamily,
    options: &SparklineOptions,
    palette: &Palette,
) -> Vec<PointStyle> {
    let roles = assign_roles(points, options);
    points
        .iter()
        .zip(roles)
        .map(|(p, role)| style_for(role, family, p.value, options, palette))
        .collect()
}
