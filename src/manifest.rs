use serde::{Deserialize, Serialize};
use serde_json::Value;
use indexmap::IndexMap;
use chrono::{DateTime, Utc};

/// Metadata for the generated manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Version of the manifest format
    pub version: String,

    /// Timestamp when the manifest was generated
    pub generated_at: DateTime<Utc>,

    /// Total number of rules in the stylesheet
    pub total_rules: usize,

    /// Whether the stylesheet was written minified
    pub minified: bool,

    /// Generator version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator_version: Option<String>,
}

/// Rule counts for one utility family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyCounts {
    pub normal: usize,
    pub important: usize,
}

impl FamilyCounts {
    pub fn total(&self) -> usize {
        self.normal + self.important
    }
}

/// Output sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestStatistics {
    /// Stylesheet size in bytes
    pub css_size_bytes: usize,

    /// Guide size in bytes
    pub docs_size_bytes: usize,

    /// Compressed stylesheet size (if the compressor ran)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed_size_bytes: Option<u64>,

    /// Generation time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
}

/// Complete manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Metadata about the run
    pub metadata: ManifestMetadata,

    /// Family name -> rule counts, in emission order
    pub families: IndexMap<String, FamilyCounts>,

    /// Output statistics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ManifestStatistics>,
}

impl Manifest {
    /// Create a new manifest with default metadata
    pub fn new() -> Self {
        Self {
            metadata: ManifestMetadata {
                version: "1.0.0".to_string(),
                generated_at: Utc::now(),
                total_rules: 0,
                minified: true,
                generator_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            },
            families: IndexMap::new(),
            statistics: None,
        }
    }

    /// Record the counts of one family
    pub fn add_family(&mut self, name: &str, counts: FamilyCounts) {
        self.metadata.total_rules += counts.total();
        self.families.insert(name.to_string(), counts);
    }

    /// Convert manifest to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Convert manifest to pretty JSON string
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating manifests
pub struct ManifestBuilder {
    manifest: Manifest,
    start_time: Option<std::time::Instant>,
}

impl ManifestBuilder {
    /// Create a new manifest builder
    pub fn new() -> Self {
        Self {
            manifest: Manifest::new(),
            start_time: Some(std::time::Instant::now()),
        }
    }

    /// Start timing from an earlier instant
    pub fn started_at(mut self, start: std::time::Instant) -> Self {
        self.start_time = Some(start);
        self
    }

    pub fn with_minified(mut self, minified: bool) -> Self {
        self.manifest.metadata.minified = minified;
        self
    }

    /// Add family counts, keeping the given order
    pub fn with_families<'a>(mut self, families: impl IntoIterator<Item = (&'a str, FamilyCounts)>) -> Self {
        for (name, counts) in families {
            self.manifest.add_family(name, counts);
        }
        self
    }

    /// Build the final manifest with statistics
    pub fn build(mut self, css_size: usize, docs_size: usize, compressed_size: Option<u64>) -> Manifest {
        let processing_time = self.start_time.map(|t| t.elapsed().as_millis() as u64);
        self.manifest.statistics = Some(ManifestStatistics {
            css_size_bytes: css_size,
            docs_size_bytes: docs_size,
            compressed_size_bytes: compressed_size,
            processing_time_ms: processing_time,
        });
        self.manifest
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_creation() {
        let manifest = Manifest::new();
        assert_eq!(manifest.metadata.version, "1.0.0");
        assert_eq!(manifest.families.len(), 0);
        assert_eq!(manifest.metadata.total_rules, 0);
    }

    #[test]
    fn test_add_family() {
        let mut manifest = Manifest::new();
        manifest.add_family("display", FamilyCounts { normal: 8, important: 8 });
        manifest.add_family("position", FamilyCounts { normal: 17, important: 17 });

        assert_eq!(manifest.metadata.total_rules, 50);
        assert_eq!(manifest.families["display"].total(), 16);
        assert_eq!(manifest.families.get_index(1).map(|(k, _)| k.as_str()), Some("position"));
    }

    #[test]
    fn test_manifest_builder() {
        let manifest = ManifestBuilder::new()
            .with_minified(false)
            .with_families([("spacing", FamilyCounts { normal: 3, important: 3 })])
            .build(1024, 256, Some(200));

        assert!(!manifest.metadata.minified);
        assert_eq!(manifest.metadata.total_rules, 6);
        let stats = manifest.statistics.unwrap();
        assert_eq!(stats.css_size_bytes, 1024);
        assert_eq!(stats.docs_size_bytes, 256);
        assert_eq!(stats.compressed_size_bytes, Some(200));
    }

    #[test]
    fn test_json_serialization() {
        let mut manifest = Manifest::new();
        manifest.add_family("flex", FamilyCounts { normal: 2, important: 2 });
        let json = manifest.to_json();

        assert!(json["metadata"].is_object());
        assert_eq!(json["metadata"]["version"], "1.0.0");
        assert_eq!(json["families"]["flex"]["important"], 2);
        assert!(json.get("statistics").is_none());
    }
}
