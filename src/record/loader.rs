//! @ai:module:intent Load measurement documents and flatten them into labeled records
//! @ai:module:layer infrastructure
//! @ai:module:public_api RecordLoader, RecordLoaderTrait, file_approach_name, directory_approach_name
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::record::flat::FlatRecord;
use crate::record::raw::RawRecord;
use crate::record::schema::{CircuitCounter, FileSizeCounter, MetricKind, StageName};
use std::path::Path;

const FILE_PREFIX: &str = "metrics_";

/// Setup failures are recorded under this section instead of a stage key.
const TRUSTED_SETUP_SECTION: &str = "trustedSetup";

/// @ai:intent Trait for reading and flattening measurement documents
pub trait RecordLoaderTrait: Send + Sync {
    /// @ai:intent Read and parse one document
    fn load(&self, path: &Path) -> Result<RawRecord>;

    /// @ai:intent Project a parsed document onto the recognized schema
    fn flatten(&self, raw: &RawRecord, approach: &str) -> FlatRecord;
}

/// @ai:intent Reads JSON measurement documents from disk
pub struct RecordLoader;

impl RecordLoader {
    /// @ai:intent Create a new record loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Every section that may carry an `error` entry, without repeats
    /// @ai:effects pure
    fn error_sections() -> Vec<&'static str> {
        let mut sections: Vec<&'static str> = Vec::new();
        let candidates = StageName::ALL
            .iter()
            .map(|stage| stage.key())
            .chain(std::iter::once(TRUSTED_SETUP_SECTION))
            .chain(FileSizeCounter::ALL.iter().map(|counter| counter.section()));

        for section in candidates {
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
        sections
    }

    fn report_section_errors(raw: &RawRecord, approach: &str) {
        for section in Self::error_sections() {
            if let Some(message) = raw.section_error(section) {
                tracing::warn!("Stage {} of {} reported an error: {}", section, approach, message);
            }
        }
    }

    fn flatten_stage_metrics(raw: &RawRecord, record: &mut FlatRecord) {
        for stage in StageName::ALL {
            for kind in MetricKind::ALL {
                if let Some(value) = raw.section_value(stage.key(), kind.raw_key()) {
                    record.insert(kind.label(stage), kind.unit().convert(value));
                }
            }
        }
    }

    fn flatten_circuit_details(raw: &RawRecord, record: &mut FlatRecord) {
        for counter in CircuitCounter::ALL {
            if let Some(value) = raw.circuit_detail(counter.raw_key()) {
                record.insert(counter.label(), value);
            }
        }
    }

    fn flatten_file_sizes(raw: &RawRecord, record: &mut FlatRecord) {
        for counter in FileSizeCounter::ALL {
            if let Some(value) = raw.section_value(counter.section(), counter.raw_key()) {
                record.insert(counter.label(), counter.unit().convert(value));
            }
        }
    }
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordLoaderTrait for RecordLoader {
    /// @ai:intent Read and parse a measurement document
    /// @ai:effects fs:read
    fn load(&self, path: &Path) -> Result<RawRecord> {
        if !path.exists() {
            return Err(Error::MissingInput {
                path: path.to_path_buf(),
            });
        }

        let malformed = |source: Box<dyn std::error::Error + Send + Sync>| {
            Error::MalformedDocument {
                path: path.to_path_buf(),
                source,
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| malformed(e.into()))?;
        RawRecord::parse(&content).map_err(|e| malformed(e.into()))
    }

    /// @ai:intent Flatten a document into labeled, unit-converted fields
    /// @ai:effects pure
    fn flatten(&self, raw: &RawRecord, approach: &str) -> FlatRecord {
        let mut record = FlatRecord::new(approach).with_timestamp(raw.timestamp());

        if !raw.has_metrics() {
            tracing::debug!("Document for {} has no metrics section", approach);
            return record;
        }

        Self::report_section_errors(raw, approach);
        Self::flatten_stage_metrics(raw, &mut record);
        Self::flatten_circuit_details(raw, &mut record);
        Self::flatten_file_sizes(raw, &mut record);

        tracing::debug!("Flattened {} fields for {}", record.len(), approach);
        record
    }
}

/// @ai:intent Approach name for a standalone document: its circuit name, else the file stem
/// @ai:effects pure
pub fn file_approach_name(raw: &RawRecord, path: &Path) -> String {
    if let Some(name) = raw.circuit_name() {
        return name.to_string();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    stem.strip_prefix(FILE_PREFIX)
        .map(str::to_string)
        .unwrap_or(stem)
}

/// @ai:intent Approach name for a run directory, e.g. `approach_1` becomes `Approach 1`
/// @ai:effects fs:read
pub fn directory_approach_name(dir: &Path) -> String {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            dir.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| dir.display().to_string());

    title_case(&name)
}

/// @ai:intent Replace separator runs with single spaces and capitalize each word
/// @ai:effects pure
fn title_case(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();

            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn flatten(value: serde_json::Value) -> FlatRecord {
        let raw = RawRecord::parse(&value.to_string()).unwrap();
        RecordLoader::new().flatten(&raw, "Test")
    }

    #[test]
    fn test_flatten_stage_grid() {
        let record = flatten(json!({
            "metrics": {
                "compilation": { "timeMs": 100.0, "maxMemoryBytes": 2097152, "maxCpuPercent": 87.5 },
                "proofVerification": { "timeMs": 12.0 }
            }
        }));

        assert_eq!(record.get("Time (compilation)"), Some(100.0));
        assert_eq!(record.get("Max Memory (compilation) (MB)"), Some(2.0));
        assert_eq!(record.get("Max CPU (compilation) (%)"), Some(87.5));
        assert_eq!(record.get("Time (proofVerification)"), Some(12.0));
        assert_eq!(record.get("Max Memory (proofVerification) (MB)"), None);
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_memory_is_bytes_over_mebibyte() {
        let record = flatten(json!({
            "metrics": { "groth16Setup": { "maxMemoryBytes": 123456789 } }
        }));

        let mb = record.get("Max Memory (groth16Setup) (MB)").unwrap();
        assert!((mb - 123456789.0 / 1048576.0).abs() < 1e-9);
    }

    #[test]
    fn test_file_sizes_use_per_artifact_units() {
        let record = flatten(json!({
            "metrics": {
                "witnessGeneration": { "fileSizeWitnessBytes": 3145728 },
                "groth16Setup": { "fileSizeZkey0000Bytes": 1048576 },
                "zkeyContribute": { "fileSizeZkey0001Bytes": 2097152 },
                "verificationKeyExport": { "fileSizeVerificationKeyBytes": 3072 },
                "proofGeneration": { "fileSizeProofBytes": 512, "fileSizePublicInputsBytes": 1024 },
                "solidityVerifierExport": { "fileSizeSolidityVerifierBytes": 10240 }
            }
        }));

        assert_eq!(record.get("File Size: Witness (MB)"), Some(3.0));
        assert_eq!(record.get("File Size: Zkey 0000 (MB)"), Some(1.0));
        assert_eq!(record.get("File Size: Zkey 0001 (MB)"), Some(2.0));
        assert_eq!(record.get("File Size: Verification Key (KB)"), Some(3.0));
        assert_eq!(record.get("File Size: Proof (KB)"), Some(0.5));
        assert_eq!(record.get("File Size: Public Inputs (KB)"), Some(1.0));
        assert_eq!(record.get("File Size: Solidity Verifier (KB)"), Some(10.0));
    }

    #[test]
    fn test_circuit_details_allow_list() {
        let record = flatten(json!({
            "metrics": {
                "circuitDetails": {
                    "template_instances": 7,
                    "non_linear_constraints": 1200,
                    "wires": 1500,
                    "mystery_counter": 99
                }
            }
        }));

        assert_eq!(record.get("Circuit: Template Instances"), Some(7.0));
        assert_eq!(record.get("Circuit: Non Linear Constraints"), Some(1200.0));
        assert_eq!(record.get("Circuit: Wires"), Some(1500.0));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_missing_metrics_yields_approach_only() {
        let record = flatten(json!({ "circuitName": "x", "timestamp": "2025-01-01T00:00:00Z" }));

        assert_eq!(record.approach(), "Test");
        assert!(record.is_empty());
    }

    #[test]
    fn test_errored_stage_contributes_nothing() {
        let record = flatten(json!({
            "metrics": {
                "compilation": { "timeMs": 10.0 },
                "witnessGeneration": { "error": "input missing" }
            }
        }));

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("Time (witnessGeneration)"), None);
    }

    #[test]
    fn test_error_sections_cover_setup_and_exports() {
        let sections = RecordLoader::error_sections();

        for expected in [
            "compilation",
            "proofVerification",
            "trustedSetup",
            "verificationKeyExport",
            "solidityVerifierExport",
        ] {
            assert!(sections.contains(&expected), "missing {}", expected);
        }

        let mut unique = sections.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), sections.len());
    }

    #[test]
    fn test_errored_export_section_keeps_other_fields() {
        let record = flatten(json!({
            "metrics": {
                "trustedSetup": { "error": "PTAU file missing" },
                "verificationKeyExport": { "error": "export failed" },
                "proofGeneration": { "fileSizeProofBytes": 2048 }
            }
        }));

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("File Size: Proof (KB)"), Some(2.0));
    }

    #[test]
    fn test_load_missing_file() {
        let loader = RecordLoader::new();
        let err = loader.load(Path::new("/nonexistent/metrics_x.json")).unwrap_err();
        assert!(matches!(err, Error::MissingInput { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metrics_bad.json");
        std::fs::write(&path, "{ \"metrics\": ").unwrap();

        let err = RecordLoader::new().load(&path).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
    }

    #[test]
    fn test_load_unreadable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metrics_bin.json");
        std::fs::write(&path, [0xff, 0xfe, b'{', b'}']).unwrap();

        let err = RecordLoader::new().load(&path).unwrap_err();
        assert!(matches!(&err, Error::MalformedDocument { path: p, .. } if p == &path));
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("metrics_bin.json"));
    }

    #[test]
    fn test_load_directory_as_file() {
        let temp = TempDir::new().unwrap();

        let err = RecordLoader::new().load(temp.path()).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
    }

    #[test]
    fn test_load_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metrics_ok.json");
        std::fs::write(&path, r#"{"circuitName": "ok", "metrics": {}}"#).unwrap();

        let raw = RecordLoader::new().load(&path).unwrap();
        assert_eq!(raw.circuit_name(), Some("ok"));
    }

    #[test]
    fn test_file_approach_name_prefers_circuit_name() {
        let raw = RawRecord::parse(r#"{"circuitName": "approach_2"}"#).unwrap();
        let name = file_approach_name(&raw, Path::new("metrics_other_1700000000.json"));
        assert_eq!(name, "approach_2");
    }

    #[test]
    fn test_file_approach_name_falls_back_to_stem() {
        let raw = RawRecord::default();
        let name = file_approach_name(&raw, Path::new("runs/metrics_approach_1.json"));
        assert_eq!(name, "approach_1");

        let name = file_approach_name(&raw, Path::new("custom.json"));
        assert_eq!(name, "custom");
    }

    #[test]
    fn test_directory_approach_name() {
        assert_eq!(directory_approach_name(&PathBuf::from("out/approach_1")), "Approach 1");
        assert_eq!(directory_approach_name(&PathBuf::from("poseidon-hash__v2")), "Poseidon Hash V2");
        assert_eq!(directory_approach_name(&PathBuf::from("BASELINE/")), "Baseline");
    }
}
