//! Solver and server configuration

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::projection::TangentBase;

/// Tuning knobs for the enclosing-circle search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Containment slack in radians
    pub epsilon: f64,
    /// How close to the radius a point must be to count as on the boundary
    pub boundary_tolerance: f64,
    /// Largest hull the cubic search accepts; `None` removes the bound
    pub max_hull_size: Option<usize>,
    /// Where the tangent plane touches the sphere
    pub base: TangentBase,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-10,
            boundary_tolerance: 1e-6,
            max_hull_size: Some(128),
            base: TangentBase::default(),
        }
    }
}

impl SolverConfig {
    pub fn with_base(mut self, base: TangentBase) -> Self {
        self.base = base;
        self
    }

    pub fn with_max_hull_size(mut self, max_hull_size: Option<usize>) -> Self {
        self.max_hull_size = max_hull_size;
        self
    }

    /// Rejects negative or non-finite tolerances and a zero hull bound
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::Config(format!("epsilon must be >= 0, got {}", self.epsilon)));
        }
        if !self.boundary_tolerance.is_finite() || self.boundary_tolerance < 0.0 {
            return Err(Error::Config(format!(
                "boundary_tolerance must be >= 0, got {}",
                self.boundary_tolerance
            )));
        }
        if self.max_hull_size == Some(0) {
            return Err(Error::Config("max_hull_size must be positive".to_string()));
        }
        Ok(())
    }
}

/// HTTP server settings, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub listen_address: String,
    pub body_limit_bytes: usize,
    pub solver: SolverConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:3000".to_string(),
            body_limit_bytes: 10 * 1024 * 1024,
            solver: SolverConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Loads `.env` if present, then reads `LISTEN_ADDRESS`, `BODY_LIMIT_BYTES`,
    /// `MAX_HULL_SIZE` (0 disables the bound) and `TANGENT_BASE`.
    pub fn from_env() -> Result<Self> {
        dotenvy::from_filename(".env").ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(address) = lookup("LISTEN_ADDRESS") {
            config.listen_address = address;
        }

        if let Some(limit) = lookup("BODY_LIMIT_BYTES") {
            config.body_limit_bytes = limit
                .parse()
                .map_err(|_| Error::Config(format!("BODY_LIMIT_BYTES is not a number: {}", limit)))?;
        }

        if let Some(size) = lookup("MAX_HULL_SIZE") {
            let size: usize = size
                .parse()
                .map_err(|_| Error::Config(format!("MAX_HULL_SIZE is not a number: {}", size)))?;
            config.solver.max_hull_size = if size == 0 { None } else { Some(size) };
        }

        if let Some(base) = lookup("TANGENT_BASE") {
            config.solver.base = TangentBase::from_name(&base)
                .ok_or_else(|| Error::Config(format!("unknown TANGENT_BASE: {}", base)))?;
        }

        config.solver.validate()?;
        Ok(config)
    }
}
