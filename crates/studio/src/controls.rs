//! Bounded parameter controls, modelled on slider widgets.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use heightmap::GenerationParams;

use crate::errors::StudioError;

/// One adjustable generation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamControl {
    Width,
    Height,
    Scale,
    Octaves,
    Persistence,
    Lacunarity,
}

impl ParamControl {
    pub const ALL: [ParamControl; 6] = [
        Self::Width,
        Self::Height,
        Self::Scale,
        Self::Octaves,
        Self::Persistence,
        Self::Lacunarity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Scale => "scale",
            Self::Octaves => "octaves",
            Self::Persistence => "persistence",
            Self::Lacunarity => "lacunarity",
        }
    }

    /// Values outside this range are clamped.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::Width | Self::Height => 64.0..=1024.0,
            Self::Scale => 10.0..=500.0,
            Self::Octaves => 1.0..=8.0,
            Self::Persistence => 0.1..=1.0,
            Self::Lacunarity => 1.0..=5.0,
        }
    }

    /// Integer controls snap to whole numbers.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Width | Self::Height | Self::Octaves)
    }

    fn get(self, params: &GenerationParams) -> f64 {
        match self {
            Self::Width => params.width as f64,
            Self::Height => params.height as f64,
            Self::Scale => params.scale,
            Self::Octaves => params.octaves as f64,
            Self::Persistence => params.persistence,
            Self::Lacunarity => params.lacunarity,
        }
    }

    fn put(self, params: &mut GenerationParams, value: f64) {
        match self {
            Self::Width => params.width = value as u32,
            Self::Height => params.height = value as u32,
            Self::Scale => params.scale = value,
            Self::Octaves => params.octaves = value as u32,
            Self::Persistence => params.persistence = value,
            Self::Lacunarity => params.lacunarity = value,
        }
    }
}

impl fmt::Display for ParamControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamControl {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|control| control.name() == lowered)
            .ok_or_else(|| StudioError::InvalidValue {
                field: "parameter".to_string(),
                value: s.to_string(),
            })
    }
}

/// Current state of every control plus the free-text seed field.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    params: GenerationParams,
    seed_text: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            params: GenerationParams::default(),
            seed_text: "0".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a control, clamping into its range. Returns the stored value.
    pub fn set(&mut self, control: ParamControl, value: f64) -> Result<f64, StudioError> {
        if !value.is_finite() {
            return Err(StudioError::InvalidValue {
                field: control.name().to_string(),
                value: value.to_string(),
            });
        }

        let range = control.range();
        let mut value = value.clamp(*range.start(), *range.end());
        if control.is_integer() {
            value = value.round();
        }
        control.put(&mut self.params, value);
        Ok(value)
    }

    pub fn get(&self, control: ParamControl) -> f64 {
        control.get(&self.params)
    }

    /// Stores the seed text. Anything that is not an integer means seed 0.
    ///
    /// Negative and oversized integers wrap into the `u32` seed space.
    pub fn set_seed_text(&mut self, text: &str) -> u32 {
        self.seed_text = text.trim().to_string();
        self.params.seed = match self.seed_text.parse::<i64>() {
            Ok(seed) => seed as u32,
            Err(_) => {
                tracing::warn!("Seed {:?} is not an integer, using 0", self.seed_text);
                0
            }
        };
        self.params.seed
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.seed_text = seed.to_string();
        self.params.seed = seed;
    }

    pub fn seed_text(&self) -> &str {
        &self.seed_text
    }

    /// Copies every field of `params` through the controls' clamping.
    pub fn load(&mut self, params: &GenerationParams) -> Result<(), StudioError> {
        for control in ParamControl::ALL {
            self.set(control, control.get(params))?;
        }
        self.set_seed(params.seed);
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot of the parameters the controls currently describe.
    pub fn params(&self) -> GenerationParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_generation_defaults() {
        let panel = ControlPanel::new();
        assert_eq!(panel.params(), GenerationParams::default());
        assert_eq!(panel.seed_text(), "0");
    }

    #[test]
    fn test_set_clamps_into_range() {
        let mut panel = ControlPanel::new();
        assert_eq!(panel.set(ParamControl::Width, 5000.0).unwrap(), 1024.0);
        assert_eq!(panel.set(ParamControl::Scale, 0.0).unwrap(), 10.0);
        assert_eq!(panel.set(ParamControl::Persistence, 3.0).unwrap(), 1.0);
        assert_eq!(panel.params().width, 1024);
        assert_eq!(panel.params().scale, 10.0);
    }

    #[test]
    fn test_integer_controls_round() {
        let mut panel = ControlPanel::new();
        assert_eq!(panel.set(ParamControl::Octaves, 3.6).unwrap(), 4.0);
        assert_eq!(panel.set(ParamControl::Height, 100.4).unwrap(), 100.0);
        assert_eq!(panel.params().octaves, 4);
        assert_eq!(panel.params().height, 100);
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut panel = ControlPanel::new();
        assert!(panel.set(ParamControl::Lacunarity, f64::NAN).is_err());
        assert_eq!(panel.params().lacunarity, 2.0);
    }

    #[test]
    fn test_seed_text_fallback() {
        let mut panel = ControlPanel::new();
        assert_eq!(panel.set_seed_text(" 42 "), 42);
        assert_eq!(panel.set_seed_text("forty-two"), 0);
        assert_eq!(panel.seed_text(), "forty-two");
        assert_eq!(panel.set_seed_text("-1"), u32::MAX);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut panel = ControlPanel::new();
        panel.set(ParamControl::Lacunarity, 4.0).unwrap();
        panel.set_seed_text("7");
        panel.reset();
        assert_eq!(panel.params(), GenerationParams::default());
        assert_eq!(panel.seed_text(), "0");
    }

    #[test]
    fn test_load_clamps_preset() {
        let mut panel = ControlPanel::new();
        let preset = GenerationParams::default().with_size(10, 2048).with_scale(250.0).with_seed(9);
        panel.load(&preset).unwrap();
        let params = panel.params();
        assert_eq!((params.width, params.height), (64, 1024));
        assert_eq!(params.scale, 250.0);
        assert_eq!(params.seed, 9);
        assert_eq!(panel.seed_text(), "9");
    }

    #[test]
    fn test_parse_control_name() {
        assert_eq!("Scale".parse::<ParamControl>().unwrap(), ParamControl::Scale);
        assert!("depth".parse::<ParamControl>().is_err());
    }
}
