// src/config.rs

use crate::io::coords::{DEFAULT_PRECISION, MAX_PRECISION};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  /// Decimal places written for each coordinate
  pub precision: usize,
  pub log_level: String,
  /// |det| at or below this marks the lattice singular (0.0 = exact zero only)
  pub singular_tolerance: f64,
  pub overwrite: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      precision: DEFAULT_PRECISION,
      log_level: "info".to_string(),
      singular_tolerance: 0.0,
      overwrite: true,
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/fraccart/settings.json)
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  /// Never fails: anything unreadable falls back to defaults, with the reason
  /// in the returned message.
  pub fn load_from(path: &Path) -> (Self, String) {
    if path.exists() {
      match File::open(path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (
              Self::sanitized(cfg),
              format!("Config loaded from {:?}", path),
            ),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Caps `precision` at what an f64 can carry and maps negative or NaN
  /// tolerances to 0.0, so a hand-edited file cannot disable the
  /// singular-lattice check.
  pub fn sanitized(mut self) -> Self {
    self.precision = self.precision.min(MAX_PRECISION);
    self.singular_tolerance = self.singular_tolerance.max(0.0);
    self
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    self.save_to(&Self::get_path())
  }

  pub fn save_to(&self, path: &Path) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  pub fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "fraccart") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
