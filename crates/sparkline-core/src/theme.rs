// File: crates/sparkline-core/src/theme.rs
// Summary: Default marker/fill colors and merging of option overrides.

use crate::options::SparklineOptions;

/// Resolved colors used by point classification. Colors are CSS strings;
/// translating them to renderer primitives is the renderer's business.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub first_last: String,
    pub min: String,
    pub max: String,
    pub bar_positive: String,
    pub bar_negative: String,
    pub win: String,
    pub loss: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            first_last: "#666666".to_string(),
            min: "#e8c267".to_string(),
            max: "#e55253".to_string(),
            bar_positive: "#a9a9a9".to_string(),
            bar_negative: "#d7d7d7".to_string(),
            win: "#a9a9a9".to_string(),
            loss: "#d7d7d7".to_string(),
        }
    }
}

impl Palette {
    /// Defaults with any per-option color overrides applied.
    pub fn resolve(options: &SparklineOptions) -> Self {
        let mut palette = Self::default();
        let overrides = [
            (&options.first_last_color, &mut palette.first_last),
            (&options.min_color, &mut palette.min),
            (&options.max_color, &mut palette.max),
            (&options.bar_positive_color, &mut palette.bar_positive),
            (&options.bar_negative_color, &mut palette.bar_negative),
            (&options.win_color, &mut palette.win),
            (&options.loss_color, &mut palette.loss),
        ];
        for (option, slot) in overrides {
            if let Some(color) = option {
                *slot = color.clone();
            }
        }
        palette
    }
}
