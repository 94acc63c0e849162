// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration file for the `theory` command.
//!
//! Holds the defaults the CLI falls back to and any user-defined scales,
//! which are merged into the scale registry at startup.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::scale::validate_formula;
use crate::music::{CustomScaleDefinition, NoteName, ScaleRegistry, ScaleTypeId};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TheoryConfig {
    /// Defaults for commands that omit a root or scale
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// User-defined scales
    #[serde(default)]
    pub custom_scales: Vec<CustomScaleDefinition>,
}

impl TheoryConfig {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Every problem found in the configuration; empty when usable
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if NoteName::from_str(&self.defaults.root).is_none() {
            problems.push(format!("default root {:?} is not a note name", self.defaults.root));
        }

        for def in &self.custom_scales {
            if def.name.trim().is_empty() {
                problems.push("custom scale with an empty name".to_string());
                continue;
            }
            if ScaleTypeId::from_str(&def.name).is_some() {
                problems.push(format!(
                    "custom scale {:?} shadows a built-in scale type",
                    def.name
                ));
            }
            let formula: Vec<i32> = def.formula.iter().map(|&s| s as i32).collect();
            if let Err(err) = validate_formula(&formula) {
                problems.push(format!("custom scale {:?}: {}", def.name, err));
            }
        }

        problems
    }

    /// Registry holding the built-in types plus every custom scale
    pub fn registry(&self) -> ScaleRegistry {
        let mut registry = ScaleRegistry::new();
        for def in &self.custom_scales {
            registry.register(def.clone());
        }
        registry
    }
}

/// Defaults applied when a command leaves a value out
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Root note (e.g., "C", "F#", "Bb")
    #[serde(default = "default_root")]
    pub root: String,
    /// Scale type (e.g., "major", "dorian")
    #[serde(default = "default_scale")]
    pub scale: String,
}

fn default_root() -> String {
    "C".to_string()
}
fn default_scale() -> String {
    "major".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            scale: default_scale(),
        }
    }
}

/// Load a configuration file and reject it if anything in it is unusable
pub fn validate_config<P: AsRef<Path>>(path: P) -> Result<TheoryConfig> {
    let config = TheoryConfig::load(path.as_ref())?;
    let problems = config.validate();
    if !problems.is_empty() {
        bail!(
            "Invalid config file {:?}:\n  {}",
            path.as_ref(),
            problems.join("\n  ")
        );
    }
    Ok(config)
}
