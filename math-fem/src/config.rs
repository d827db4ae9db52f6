//! JSON configuration for the driver

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mesh::Mesh1d;
use crate::problems::BenchmarkProblem;
use crate::quadrature::{MAX_QUADRATURE_ORDER, QuadratureRule};

/// Errors while loading, saving or checking a [`DriverConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Need at least {min} nodes, got {got}")]
    TooFewNodes { min: usize, got: usize },
    #[error("Unknown problem id {0}, expected 1..={max}", max = BenchmarkProblem::COUNT)]
    UnknownProblem(usize),
    #[error("Quadrature order {0} out of range 1..={max}", max = MAX_QUADRATURE_ORDER)]
    QuadratureOrder(usize),
}

/// Which problems to run and on which meshes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Number of mesh nodes for the comparison tables
    #[serde(default = "default_nodes")]
    pub nodes: usize,
    /// Problem ids to run
    #[serde(default = "default_problems")]
    pub problems: Vec<usize>,
    /// Node counts of an optional convergence study
    #[serde(default)]
    pub refine: Vec<usize>,
    /// Gauss points per sub-interval used in assembly
    #[serde(default = "default_quadrature_order")]
    pub quadrature_order: usize,
    /// Where to write JSON results
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_nodes() -> usize {
    11
}

fn default_quadrature_order() -> usize {
    2
}

fn default_problems() -> Vec<usize> {
    (1..=BenchmarkProblem::COUNT).collect()
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            problems: default_problems(),
            refine: Vec::new(),
            quadrature_order: default_quadrature_order(),
            output: None,
        }
    }
}

impl DriverConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = Mesh1d::MIN_NODES;
        for &n in std::iter::once(&self.nodes).chain(&self.refine) {
            if n < min {
                return Err(ConfigError::TooFewNodes { min, got: n });
            }
        }
        if !(1..=MAX_QUADRATURE_ORDER).contains(&self.quadrature_order) {
            return Err(ConfigError::QuadratureOrder(self.quadrature_order));
        }
        if let Some(&id) = self
            .problems
            .iter()
            .find(|&&id| BenchmarkProblem::by_id(id).is_none())
        {
            return Err(ConfigError::UnknownProblem(id));
        }
        Ok(())
    }

    /// Assembly rule for the configured quadrature order
    pub fn quadrature_rule(&self) -> QuadratureRule {
        QuadratureRule::new(self.quadrature_order)
    }

    /// The selected problems, in the configured order
    pub fn selected_problems(&self) -> Result<Vec<BenchmarkProblem>, ConfigError> {
        self.problems
            .iter()
            .map(|&id| BenchmarkProblem::by_id(id).ok_or(ConfigError::UnknownProblem(id)))
            .collect()
    }
}
