use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::args::GenerateArgs;
use crate::errors::{GeneratorError, Result};

/// Pipeline configuration. The rule tables themselves are not configurable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Where and how outputs are written
    pub output: OutputConfig,

    /// External compressor settings
    pub compression: CompressionConfig,
}

/// Output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory relative output paths are resolved against (defaults to the
    /// directory holding the executable)
    pub base_dir: Option<PathBuf>,

    /// Output directory for the stylesheet and the guide
    pub dir: PathBuf,

    /// Stylesheet file name
    pub css_name: String,

    /// Markdown guide file name
    pub docs_name: String,

    /// Optional JSON manifest path
    pub manifest: Option<PathBuf>,

    /// One rule per line instead of minified output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            dir: PathBuf::from("static/css"),
            css_name: "generated.css".to_string(),
            docs_name: "style-guide.md".to_string(),
            manifest: None,
            pretty: false,
        }
    }
}

/// External compressor invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Run the compressor after writing the stylesheet
    pub enabled: bool,

    /// Executable name, looked up on PATH
    pub command: String,

    /// Quality level passed as `-q`
    pub quality: u8,

    /// Suffix appended to the stylesheet path for the compressed file
    pub suffix: String,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "brotli".to_string(),
            quality: 11,
            suffix: ".br".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GeneratorError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_yaml::from_str(&content)
            .map_err(|e| GeneratorError::ConfigError {
                message: format!("Failed to parse YAML config: {}", e),
            })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GeneratorError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_json::from_str(&content)
            .map_err(|e| GeneratorError::ConfigError {
                message: format!("Failed to parse JSON config: {}", e),
            })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(GeneratorError::ConfigError {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Load the file named by `args.config` (if any) and apply the CLI overrides
    pub fn resolve(args: &GenerateArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.apply_args(args))
    }

    /// Command-line flags win over file values
    pub fn apply_args(mut self, args: &GenerateArgs) -> Self {
        if let Some(base_dir) = &args.base_dir {
            self.output.base_dir = Some(base_dir.clone());
        }
        if let Some(dir) = &args.output_dir {
            self.output.dir = dir.clone();
        }
        if let Some(css_name) = &args.css_name {
            self.output.css_name = css_name.clone();
        }
        if let Some(docs_name) = &args.docs_name {
            self.output.docs_name = docs_name.clone();
        }
        if let Some(manifest) = &args.manifest {
            self.output.manifest = Some(manifest.clone());
        }
        if args.pretty {
            self.output.pretty = true;
        }
        if args.no_compress {
            self.compression.enabled = false;
        }
        self
    }

    /// Directory relative outputs land under: `base_dir`, or the tool's own
    /// directory when unset
    pub fn base_dir(&self) -> PathBuf {
        self.output.base_dir.clone().unwrap_or_else(tool_dir)
    }

    /// Resolved output directory
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir().join(&self.output.dir)
    }

    pub fn css_path(&self) -> PathBuf {
        self.output_dir().join(&self.output.css_name)
    }

    pub fn docs_path(&self) -> PathBuf {
        self.output_dir().join(&self.output.docs_name)
    }

    /// Manifest path; relative paths are resolved like the output directory
    pub fn manifest_path(&self) -> Option<PathBuf> {
        let manifest = self.output.manifest.as_ref()?;
        if manifest.is_absolute() {
            return Some(manifest.clone());
        }
        Some(self.base_dir().join(manifest))
    }

    /// Path of the compressed stylesheet, e.g. `generated.css.br`
    pub fn compressed_path(&self) -> PathBuf {
        let mut path = self.css_path().into_os_string();
        path.push(&self.compression.suffix);
        PathBuf::from(path)
    }
}

/// Directory of the running executable, falling back to the working directory
/// when the platform cannot report it.
pub fn tool_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output.dir, PathBuf::from("static/css"));
        assert_eq!(config.output.css_name, "generated.css");
        assert!(config.compression.enabled);
        assert_eq!(config.compression.command, "brotli");
    }

    #[test]
    fn test_yaml_config_loading() {
        let yaml_content = r##"
output:
  dir: "public/assets"
  css_name: "utilities.css"
compression:
  enabled: false
"##;

        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(yaml_content.as_bytes()).unwrap();

        let config = GeneratorConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("public/assets"));
        assert_eq!(config.output.css_name, "utilities.css");
        assert_eq!(config.output.docs_name, "style-guide.md");
        assert!(!config.compression.enabled);
    }

    #[test]
    fn test_json_config_loading() {
        let json_content = r##"{
  "compression": {
    "command": "zopfli-brotli",
    "quality": 9
  }
}"##;

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json_content.as_bytes()).unwrap();

        let config = GeneratorConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.compression.command, "zopfli-brotli");
        assert_eq!(config.compression.quality, 9);
        assert_eq!(config.compression.suffix, ".br");
    }

    #[test]
    fn test_unsupported_extension() {
        let file = NamedTempFile::with_suffix(".toml").unwrap();
        let err = GeneratorConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported config file format"));
    }

    #[test]
    fn test_default_base_is_executable_dir() {
        let config = GeneratorConfig::default();
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();

        assert_eq!(config.base_dir(), exe_dir);
        assert_eq!(config.css_path(), exe_dir.join("static/css/generated.css"));
        assert!(config.css_path().is_absolute());

        let mut config = config;
        config.output.manifest = Some(PathBuf::from("manifest.json"));
        assert_eq!(config.manifest_path(), Some(exe_dir.join("manifest.json")));
    }

    #[test]
    fn test_paths() {
        let mut config = GeneratorConfig::default();
        config.output.base_dir = Some(PathBuf::from("/srv/site"));
        assert_eq!(config.css_path(), PathBuf::from("/srv/site/static/css/generated.css"));
        assert_eq!(config.docs_path(), PathBuf::from("/srv/site/static/css/style-guide.md"));
        assert_eq!(
            config.compressed_path(),
            PathBuf::from("/srv/site/static/css/generated.css.br")
        );
        assert_eq!(config.manifest_path(), None);

        config.output.manifest = Some(PathBuf::from("build/manifest.json"));
        assert_eq!(
            config.manifest_path(),
            Some(PathBuf::from("/srv/site/build/manifest.json"))
        );
    }
}
