//! Post-run memory and timing statistics
//!
//! Values are measured by the training framework (device properties, peak
//! reserved memory, trainer runtime) and handed in; this module only
//! derives the quantities worth reporting and formats them.

use std::fmt;
use std::time::Duration;

/// Device memory readings around a training run, in gigabytes
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryStats {
    /// Accelerator device name
    pub device_name: String,
    /// Total device memory
    pub total_gb: f64,
    /// Memory already reserved before training started
    pub reserved_start_gb: f64,
    /// Peak memory reserved over the whole run
    pub reserved_peak_gb: f64,
}

impl MemoryStats {
    /// Peak memory attributable to training itself
    pub fn training_gb(&self) -> f64 {
        round3((self.reserved_peak_gb - self.reserved_start_gb).max(0.0))
    }

    /// Peak reserved memory as a percentage of device total
    pub fn peak_pct(&self) -> f64 {
        self.pct_of_total(self.reserved_peak_gb)
    }

    /// Training-attributable memory as a percentage of device total
    pub fn training_pct(&self) -> f64 {
        self.pct_of_total(self.training_gb())
    }

    fn pct_of_total(&self, gb: f64) -> f64 {
        if self.total_gb <= 0.0 {
            return 0.0;
        }
        round3(gb / self.total_gb * 100.0)
    }
}

/// Timing and memory summary for one training run
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub runtime: Duration,
    pub memory: MemoryStats,
}

impl RunStats {
    pub fn new(runtime: Duration, memory: MemoryStats) -> Self {
        Self { runtime, memory }
    }

    /// Runtime in whole-ish seconds
    pub fn runtime_secs(&self) -> f64 {
        round3(self.runtime.as_secs_f64())
    }

    /// Runtime in minutes, rounded to two decimals
    pub fn runtime_mins(&self) -> f64 {
        (self.runtime.as_secs_f64() / 60.0 * 100.0).round() / 100.0
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Device = {}. Max memory = {} GB.",
            self.memory.device_name,
            round3(self.memory.total_gb)
        )?;
        writeln!(f, "{} seconds used for training.", self.runtime_secs())?;
        writeln!(f, "{} minutes used for training.", self.runtime_mins())?;
        writeln!(
            f,
            "Peak reserved memory = {} GB.",
            round3(self.memory.reserved_peak_gb)
        )?;
        writeln!(
            f,
            "Peak reserved memory for training = {} GB.",
            self.memory.training_gb()
        )?;
        writeln!(
            f,
            "Peak reserved memory % of max memory = {} %.",
            self.memory.peak_pct()
        )?;
        write!(
            f,
            "Peak reserved memory for training % of max memory = {} %.",
            self.memory.training_pct()
        )
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
