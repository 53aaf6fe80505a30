// AXLSim - Accelerometer Interface Simulator
// Copyright (C) 2026 The AXLSim Authors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which of the two independent pipelines a run drains.
///
/// The simulator runs exactly one pipeline per process: either the linear
/// instruction queue against the register bank, or the circular interrupt
/// queue against the pin catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pipeline {
    Instructions,
    Interrupts,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::Interrupts
    }
}

impl FromStr for Pipeline {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "instructions" | "instruction" | "linear" => Ok(Self::Instructions),
            "interrupts" | "interrupt" | "circular" => Ok(Self::Interrupts),
            _ => Err(format!(
                "unsupported pipeline '{}'; supported: instructions, interrupts",
                value
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunConfig {
    /// Pipeline to drain for this run.
    pub pipeline: Pipeline,
    /// Workload seed; `None` means seed from system entropy.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pipeline: Pipeline::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Pipeline;
    use std::str::FromStr;

    #[test]
    fn test_pipeline_from_str_aliases() {
        assert_eq!(Pipeline::from_str("linear").unwrap(), Pipeline::Instructions);
        assert_eq!(Pipeline::from_str("Interrupts").unwrap(), Pipeline::Interrupts);
        assert!(Pipeline::from_str("both").is_err());
    }
}
