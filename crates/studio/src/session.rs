//! Interactive session state: controls, last image and pending regeneration.

use std::path::{Path, PathBuf};

use heightmap::{GenerationParams, Heightmap};
use rand::Rng;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::command::{Command, HELP};
use crate::config::StudioConfig;
use crate::controls::{ControlPanel, ParamControl};
use crate::debounce::Debouncer;
use crate::errors::{Result, StudioError};

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A parameter snapshot handed back by the debounce timer.
///
/// Only the snapshot from the most recent request is applied; anything
/// older was superseded by a later edit or an immediate regeneration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledUpdate {
    epoch: u64,
    pub params: GenerationParams,
}

/// Owns everything that changes while the user tunes a heightmap.
///
/// Parameter edits go through [`request_update`](Self::request_update),
/// which restarts the debounce timer. When the timer fires, the snapshot
/// arrives on the receiver returned by [`Session::new`] and must be passed
/// back to [`apply`](Self::apply).
pub struct Session {
    config: StudioConfig,
    panel: ControlPanel,
    current: Option<Heightmap>,
    pending: Debouncer<ScheduledUpdate>,
    epoch: u64,
}

impl Session {
    /// Must be called from within a tokio runtime.
    pub fn new(config: StudioConfig) -> (Self, UnboundedReceiver<ScheduledUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self {
            pending: Debouncer::new(config.debounce, tx),
            config,
            panel: ControlPanel::new(),
            current: None,
            epoch: 0,
        };
        (session, rx)
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    /// The last generated heightmap, if any.
    pub fn current(&self) -> Option<&Heightmap> {
        self.current.as_ref()
    }

    pub fn has_pending_update(&self) -> bool {
        self.pending.is_pending()
    }

    /// Schedules a regeneration after the quiet period.
    pub fn request_update(&mut self) {
        self.epoch += 1;
        self.pending.schedule(ScheduledUpdate {
            epoch: self.epoch,
            params: self.panel.params(),
        });
    }

    /// Cancels any scheduled regeneration and regenerates right away.
    ///
    /// Snapshots already delivered but not yet applied become stale.
    pub fn update_now(&mut self) -> Result<&Heightmap> {
        self.pending.cancel();
        self.epoch += 1;
        self.render(self.panel.params())
    }

    /// Runs a scheduled regeneration if one is still waiting.
    pub fn flush(&mut self) -> Result<()> {
        if self.pending.cancel() {
            self.update_now()?;
        }
        Ok(())
    }

    /// Applies a snapshot from the debounce timer.
    ///
    /// Returns `None` without generating when the snapshot is stale or was
    /// already applied.
    pub fn apply(&mut self, update: ScheduledUpdate) -> Result<Option<&Heightmap>> {
        if update.epoch != self.epoch {
            tracing::debug!("Dropping stale update (epoch {} < {})", update.epoch, self.epoch);
            return Ok(None);
        }
        self.epoch += 1;
        self.render(update.params).map(Some)
    }

    /// Generates a heightmap from `params` and makes it current.
    pub fn render(&mut self, params: GenerationParams) -> Result<&Heightmap> {
        let map = heightmap::synthesize(&params)?;
        tracing::info!(
            "Generated {}x{} heightmap (scale {}, octaves {}, persistence {}, lacunarity {}, seed {})",
            params.width,
            params.height,
            params.scale,
            params.octaves,
            params.persistence,
            params.lacunarity,
            params.seed
        );

        if let Some(path) = &self.config.preview_path {
            match map.thumbnail(self.config.preview_size).save(path) {
                Ok(written) => tracing::debug!("Preview updated at {}", written.display()),
                Err(e) => tracing::warn!("Failed to write preview: {e}"),
            }
        }

        Ok(self.current.insert(map))
    }

    /// Writes the current heightmap to `path`.
    pub fn export(&self, path: &Path) -> Result<PathBuf> {
        let map = self.current.as_ref().ok_or(StudioError::NoImage)?;
        let written = map.save(path)?;
        tracing::info!("Heightmap saved to {}", written.display());
        Ok(written)
    }

    /// Restores default parameters and regenerates.
    pub fn reset(&mut self) -> Result<&Heightmap> {
        self.panel.reset();
        self.update_now()
    }

    pub fn save_preset(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.panel.params())?;
        std::fs::write(path, json)?;
        tracing::info!("Preset saved to {}", path.display());
        Ok(())
    }

    /// Loads a JSON preset through the controls and regenerates.
    pub fn load_preset(&mut self, path: &Path) -> Result<&Heightmap> {
        let raw = std::fs::read_to_string(path)?;
        let params: GenerationParams = serde_json::from_str(&raw)?;
        self.panel.load(&params)?;
        tracing::info!("Preset loaded from {}", path.display());
        self.update_now()
    }

    pub fn set(&mut self, control: ParamControl, value: f64) -> Result<f64> {
        let stored = self.panel.set(control, value)?;
        if stored != value {
            tracing::debug!("{control} clamped from {value} to {stored}");
        }
        self.request_update();
        Ok(stored)
    }

    pub fn set_seed_text(&mut self, text: &str) -> u32 {
        let seed = self.panel.set_seed_text(text);
        self.request_update();
        seed
    }

    pub fn randomize_seed(&mut self) -> u32 {
        let seed = rand::thread_rng().gen_range(0..=u32::MAX);
        self.panel.set_seed(seed);
        self.request_update();
        seed
    }

    /// Current parameters in a human-readable form.
    pub fn describe(&self) -> String {
        let mut lines: Vec<String> = ParamControl::ALL
            .iter()
            .map(|control| format!("{:<12} {}", control.name(), self.panel.get(*control)))
            .collect();
        lines.push(format!("{:<12} {}", "seed", self.panel.seed_text()));
        lines.join("\n")
    }

    /// Executes one command.
    pub fn handle(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Set(control, value) => {
                self.set(control, value)?;
            }
            Command::Seed(text) => {
                self.set_seed_text(&text);
            }
            Command::RandomSeed => {
                let seed = self.randomize_seed();
                println!("seed {seed}");
            }
            Command::Generate => {
                self.update_now()?;
            }
            Command::Export(path) => {
                let written = self.export(&path)?;
                println!("Heightmap saved to: {}", written.display());
            }
            Command::Reset => {
                self.reset()?;
            }
            Command::Show => println!("{}", self.describe()),
            Command::SavePreset(path) => self.save_preset(&path)?,
            Command::LoadPreset(path) => {
                self.load_preset(&path)?;
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
