//! @ai:module:intent Recognized measurement schema: stages, metric kinds, counters and unit conversion
//! @ai:module:layer domain
//! @ai:module:public_api StageName, MetricKind, CircuitCounter, FileSizeCounter, Unit
//! @ai:module:stateless true
//!
//! Every recognized raw position is listed here. Extraction walks these tables,
//! so supporting a new stage or counter is an edit to the matching enum.

/// Bytes in one kilobyte.
pub const BYTES_PER_KB: f64 = 1024.0;

/// Bytes in one megabyte.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// @ai:intent Unit conversion applied to a raw value before it is labeled
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Identity,
    Kilobytes,
    Megabytes,
}

impl Unit {
    /// @ai:intent Convert a raw value into this unit
    /// @ai:effects pure
    pub fn convert(self, raw: f64) -> f64 {
        match self {
            Unit::Identity => raw,
            Unit::Kilobytes => raw / BYTES_PER_KB,
            Unit::Megabytes => raw / BYTES_PER_MB,
        }
    }
}

/// @ai:intent Measured pipeline phase
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageName {
    Compilation,
    WitnessGeneration,
    Groth16Setup,
    ZkeyContribute,
    ProofGeneration,
    ProofVerification,
}

impl StageName {
    pub const ALL: [StageName; 6] = [
        StageName::Compilation,
        StageName::WitnessGeneration,
        StageName::Groth16Setup,
        StageName::ZkeyContribute,
        StageName::ProofGeneration,
        StageName::ProofVerification,
    ];

    /// @ai:intent Key of this stage under the document's `metrics` section
    /// @ai:effects pure
    pub fn key(&self) -> &'static str {
        match self {
            StageName::Compilation => "compilation",
            StageName::WitnessGeneration => "witnessGeneration",
            StageName::Groth16Setup => "groth16Setup",
            StageName::ZkeyContribute => "zkeyContribute",
            StageName::ProofGeneration => "proofGeneration",
            StageName::ProofVerification => "proofVerification",
        }
    }
}

impl std::fmt::Display for StageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// @ai:intent Measurement type recorded for each stage
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Time,
    Memory,
    Cpu,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::Time, MetricKind::Memory, MetricKind::Cpu];

    /// @ai:intent Key of this metric inside a stage entry
    /// @ai:effects pure
    pub fn raw_key(&self) -> &'static str {
        match self {
            MetricKind::Time => "timeMs",
            MetricKind::Memory => "maxMemoryBytes",
            MetricKind::Cpu => "maxCpuPercent",
        }
    }

    /// @ai:effects pure
    pub fn unit(&self) -> Unit {
        match self {
            MetricKind::Time | MetricKind::Cpu => Unit::Identity,
            MetricKind::Memory => Unit::Megabytes,
        }
    }

    fn label_name(&self) -> &'static str {
        match self {
            MetricKind::Time => "Time",
            MetricKind::Memory => "Max Memory",
            MetricKind::Cpu => "Max CPU",
        }
    }

    fn label_suffix(&self) -> &'static str {
        match self {
            MetricKind::Time => "",
            MetricKind::Memory => " (MB)",
            MetricKind::Cpu => " (%)",
        }
    }

    /// @ai:intent Display label of this metric for a stage, e.g. `Max Memory (compilation) (MB)`
    /// @ai:effects pure
    pub fn label(&self, stage: StageName) -> String {
        format!("{} ({}){}", self.label_name(), stage.key(), self.label_suffix())
    }
}

/// @ai:intent Circuit-structure counter reported under `circuitDetails`
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircuitCounter {
    TemplateInstances,
    NonLinearConstraints,
    LinearConstraints,
    PublicInputs,
    PrivateInputs,
    PrivateInputsTotal,
    PrivateInputsWitness,
    PublicOutputs,
    Wires,
    Labels,
}

impl CircuitCounter {
    pub const ALL: [CircuitCounter; 10] = [
        CircuitCounter::TemplateInstances,
        CircuitCounter::NonLinearConstraints,
        CircuitCounter::LinearConstraints,
        CircuitCounter::PublicInputs,
        CircuitCounter::PrivateInputs,
        CircuitCounter::PrivateInputsTotal,
        CircuitCounter::PrivateInputsWitness,
        CircuitCounter::PublicOutputs,
        CircuitCounter::Wires,
        CircuitCounter::Labels,
    ];

    /// @ai:effects pure
    pub fn raw_key(&self) -> &'static str {
        match self {
            CircuitCounter::TemplateInstances => "template_instances",
            CircuitCounter::NonLinearConstraints => "non_linear_constraints",
            CircuitCounter::LinearConstraints => "linear_constraints",
            CircuitCounter::PublicInputs => "public_inputs",
            CircuitCounter::PrivateInputs => "private_inputs",
            CircuitCounter::PrivateInputsTotal => "private_inputs_total",
            CircuitCounter::PrivateInputsWitness => "private_inputs_witness",
            CircuitCounter::PublicOutputs => "public_outputs",
            CircuitCounter::Wires => "wires",
            CircuitCounter::Labels => "labels",
        }
    }

    /// @ai:effects pure
    pub fn label(&self) -> &'static str {
        match self {
            CircuitCounter::TemplateInstances => "Circuit: Template Instances",
            CircuitCounter::NonLinearConstraints => "Circuit: Non Linear Constraints",
            CircuitCounter::LinearConstraints => "Circuit: Linear Constraints",
            CircuitCounter::PublicInputs => "Circuit: Public Inputs",
            CircuitCounter::PrivateInputs => "Circuit: Private Inputs",
            CircuitCounter::PrivateInputsTotal => "Circuit: Private Inputs Total",
            CircuitCounter::PrivateInputsWitness => "Circuit: Private Inputs Witness",
            CircuitCounter::PublicOutputs => "Circuit: Public Outputs",
            CircuitCounter::Wires => "Circuit: Wires",
            CircuitCounter::Labels => "Circuit: Labels",
        }
    }
}

/// @ai:intent Artifact file size recorded by the pipeline
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSizeCounter {
    Witness,
    Zkey0000,
    Zkey0001,
    VerificationKey,
    Proof,
    PublicInputs,
    SolidityVerifier,
}

impl FileSizeCounter {
    pub const ALL: [FileSizeCounter; 7] = [
        FileSizeCounter::Witness,
        FileSizeCounter::Zkey0000,
        FileSizeCounter::Zkey0001,
        FileSizeCounter::VerificationKey,
        FileSizeCounter::Proof,
        FileSizeCounter::PublicInputs,
        FileSizeCounter::SolidityVerifier,
    ];

    /// @ai:intent Section of `metrics` that carries this size
    /// @ai:effects pure
    pub fn section(&self) -> &'static str {
        match self {
            FileSizeCounter::Witness => StageName::WitnessGeneration.key(),
            FileSizeCounter::Zkey0000 => StageName::Groth16Setup.key(),
            FileSizeCounter::Zkey0001 => StageName::ZkeyContribute.key(),
            FileSizeCounter::VerificationKey => "verificationKeyExport",
            FileSizeCounter::Proof | FileSizeCounter::PublicInputs => {
                StageName::ProofGeneration.key()
            }
            FileSizeCounter::SolidityVerifier => "solidityVerifierExport",
        }
    }

    /// @ai:effects pure
    pub fn raw_key(&self) -> &'static str {
        match self {
            FileSizeCounter::Witness => "fileSizeWitnessBytes",
            FileSizeCounter::Zkey0000 => "fileSizeZkey0000Bytes",
            FileSizeCounter::Zkey0001 => "fileSizeZkey0001Bytes",
            FileSizeCounter::VerificationKey => "fileSizeVerificationKeyBytes",
            FileSizeCounter::Proof => "fileSizeProofBytes",
            FileSizeCounter::PublicInputs => "fileSizePublicInputsBytes",
            FileSizeCounter::SolidityVerifier => "fileSizeSolidityVerifierBytes",
        }
    }

    /// Large binary artifacts are reported in MB, small text artifacts in KB.
    pub fn unit(&self) -> Unit {
        match self {
            FileSizeCounter::Witness | FileSizeCounter::Zkey0000 | FileSizeCounter::Zkey0001 => {
                Unit::Megabytes
            }
            FileSizeCounter::VerificationKey
            | FileSizeCounter::Proof
            | FileSizeCounter::PublicInputs
            | FileSizeCounter::SolidityVerifier => Unit::Kilobytes,
        }
    }

    /// @ai:effects pure
    pub fn label(&self) -> &'static str {
        match self {
            FileSizeCounter::Witness => "File Size: Witness (MB)",
            FileSizeCounter::Zkey0000 => "File Size: Zkey 0000 (MB)",
            FileSizeCounter::Zkey0001 => "File Size: Zkey 0001 (MB)",
            FileSizeCounter::VerificationKey => "File Size: Verification Key (KB)",
            FileSizeCounter::Proof => "File Size: Proof (KB)",
            FileSizeCounter::PublicInputs => "File Size: Public Inputs (KB)",
            FileSizeCounter::SolidityVerifier => "File Size: Solidity Verifier (KB)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unit_conversion() {
        assert!((Unit::Identity.convert(42.5) - 42.5).abs() < 1e-9);
        assert!((Unit::Kilobytes.convert(2048.0) - 2.0).abs() < 1e-9);
        assert!((Unit::Megabytes.convert(3.0 * 1048576.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_metric_labels() {
        assert_eq!(MetricKind::Time.label(StageName::Compilation), "Time (compilation)");
        assert_eq!(
            MetricKind::Memory.label(StageName::WitnessGeneration),
            "Max Memory (witnessGeneration) (MB)"
        );
        assert_eq!(
            MetricKind::Cpu.label(StageName::ProofVerification),
            "Max CPU (proofVerification) (%)"
        );
    }

    #[test]
    fn test_memory_is_the_only_converted_metric() {
        assert_eq!(MetricKind::Time.unit(), Unit::Identity);
        assert_eq!(MetricKind::Memory.unit(), Unit::Megabytes);
        assert_eq!(MetricKind::Cpu.unit(), Unit::Identity);
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels = HashSet::new();

        for stage in StageName::ALL {
            for kind in MetricKind::ALL {
                assert!(labels.insert(kind.label(stage)));
            }
        }

        for counter in CircuitCounter::ALL {
            assert!(labels.insert(counter.label().to_string()));
        }

        for counter in FileSizeCounter::ALL {
            assert!(labels.insert(counter.label().to_string()));
        }
    }

    #[test]
    fn test_file_size_label_matches_unit() {
        for counter in FileSizeCounter::ALL {
            let suffix = match counter.unit() {
                Unit::Megabytes => "(MB)",
                Unit::Kilobytes => "(KB)",
                Unit::Identity => unreachable!("file sizes are always converted"),
            };
            assert!(counter.label().ends_with(suffix), "{}", counter.label());
        }
    }
}
