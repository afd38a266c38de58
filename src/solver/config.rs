//! Solver configuration and tuning presets.

/// Configuration for the annealing search and the restart driver.
///
/// # Examples
///
/// ```
/// use rune_solver::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_iterations(100_000)
///     .with_initial_temperature(25.0)
///     .with_num_restarts(8)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Mutation/acceptance iterations per annealing run.
    pub iterations: usize,

    /// Starting temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Multiplicative cooling factor applied each iteration, in (0, 1).
    pub cooling_rate: f64,

    /// Temperature floor; keeps the acceptance probability well-defined.
    pub min_temperature: f64,

    /// Probability that a mutation rotates a stone rather than swapping
    /// two cells, in [0, 1].
    pub rotation_probability: f64,

    /// Independent annealing runs; the best result across all of them is
    /// returned.
    pub num_restarts: usize,

    /// Worker hint for running restarts in parallel. Purely a performance
    /// knob: results are identical for any value, including 1.
    pub workers: usize,

    /// Random seed for reproducibility. Restart `i` derives its own seed
    /// from this one.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            iterations: 80_000,
            initial_temperature: 12.0,
            cooling_rate: 0.9997,
            min_temperature: 0.001,
            rotation_probability: 0.4,
            num_restarts: 3,
            workers: 1,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Quick feedback, lower accuracy.
    pub fn fast() -> Self {
        Self {
            iterations: 200_000,
            num_restarts: 30,
            initial_temperature: 25.0,
            cooling_rate: 0.99995,
            workers: 12,
            ..Self::default()
        }
    }

    /// Good accuracy at a moderate runtime.
    pub fn balanced() -> Self {
        Self {
            iterations: 300_000,
            num_restarts: 48,
            initial_temperature: 30.0,
            cooling_rate: 0.99997,
            workers: 12,
            ..Self::default()
        }
    }

    /// High accuracy; roughly a minute on a modern desktop.
    pub fn precise() -> Self {
        Self {
            iterations: 600_000,
            num_restarts: 72,
            initial_temperature: 40.0,
            cooling_rate: 0.999985,
            workers: 12,
            ..Self::default()
        }
    }

    /// Maximum search depth.
    pub fn ultimate() -> Self {
        Self {
            iterations: 600_000,
            num_restarts: 120,
            initial_temperature: 45.0,
            cooling_rate: 0.999985,
            workers: 14,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_rotation_probability(mut self, p: f64) -> Self {
        self.rotation_probability = p;
        self
    }

    pub fn with_num_restarts(mut self, n: usize) -> Self {
        self.num_restarts = n;
        self
    }

    pub fn with_workers(mut self, n: usize) -> Self {
        self.workers = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if self.num_restarts == 0 {
            return Err("num_restarts must be at least 1".into());
        }
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.rotation_probability) {
            return Err(format!(
                "rotation_probability must be in [0, 1], got {}",
                self.rotation_probability
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.iterations, 80_000);
        assert!((config.initial_temperature - 12.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.9997).abs() < 1e-10);
        assert_eq!(config.num_restarts, 3);
        assert_eq!(config.workers, 1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = SolverConfig::default()
            .with_iterations(1_000)
            .with_num_restarts(1)
            .with_rotation_probability(0.7)
            .with_seed(7);
        assert_eq!(config.iterations, 1_000);
        assert_eq!(config.num_restarts, 1);
        assert!((config.rotation_probability - 0.7).abs() < 1e-10);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_ok() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_presets_validate() {
        for preset in [
            SolverConfig::fast(),
            SolverConfig::balanced(),
            SolverConfig::precise(),
            SolverConfig::ultimate(),
        ] {
            assert!(preset.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        assert!(SolverConfig::default().with_iterations(0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_restarts() {
        assert!(SolverConfig::default()
            .with_num_restarts(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_temperatures() {
        assert!(SolverConfig::default()
            .with_initial_temperature(-1.0)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_min_temperature(0.0)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_initial_temperature(0.01)
            .with_min_temperature(0.5)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_cooling_rate() {
        assert!(SolverConfig::default().with_cooling_rate(1.0).validate().is_err());
        assert!(SolverConfig::default().with_cooling_rate(0.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_rotation_probability() {
        assert!(SolverConfig::default()
            .with_rotation_probability(1.5)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_rotation_probability(-0.1)
            .validate()
            .is_err());
    }
}
