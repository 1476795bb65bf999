// File: crates/perfplot-core/src/axis.rs
// Summary: Axis model with label, autoscaled range and scale kind.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    /// Unlabelled unit axis, the state of a blank canvas.
    pub fn blank() -> Self {
        Self::new("", 0.0, 1.0)
    }
}

impl Default for Axis {
    fn default() -> Self { Self::blank() }
}
