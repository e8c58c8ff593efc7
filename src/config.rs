use crate::core::get_config_dir;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub traces: TracesConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TracesConfig {
    /// Root directory holding the raw and converted traces, resolved
    /// relative to the working directory
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Subdirectory of `data_dir` with the raw trace CSVs
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    /// Subdirectory of `data_dir` the converted traces are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Named trace sources, converted in order
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
}

impl Default for TracesConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            sources: default_sources(),
        }
    }
}

impl TracesConfig {
    pub fn input_path(&self, source: &str) -> PathBuf {
        self.data_dir
            .join(&self.input_dir)
            .join(format!("trace_{source}.csv"))
    }

    pub fn output_root(&self) -> PathBuf {
        self.data_dir.join(&self.output_dir)
    }

    pub fn output_path(&self, source: &str) -> PathBuf {
        self.output_root()
            .join(format!("converted_{source}_trace.csv"))
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_input_dir() -> String {
    "job_trace".to_string()
}

fn default_output_dir() -> String {
    "converted_trace".to_string()
}

fn default_sources() -> Vec<String> {
    vec!["kalos".to_string(), "seren".to_string()]
}

pub fn load_config(config_path: Option<&PathBuf>) -> Result<Config, config::ConfigError> {
    let mut config_vec = vec![];

    // User-provided config file
    if let Some(config_path) = config_path {
        if config_path.exists() {
            config_vec.push(config_path.clone());
        } else {
            eprintln!("Warning: Config file {config_path:?} not found.");
        }
    }

    // Default config file
    if let Ok(default_config_path) = get_config_dir().map(|d| d.join("gtrace.toml")) {
        if default_config_path.exists() {
            config_vec.push(default_config_path);
        }
    }

    let settings = config::Config::builder();
    let settings = config_vec.iter().fold(settings, |s, path| {
        s.add_source(config::File::from(path.as_path()))
    });

    settings
        .add_source(
            config::Environment::with_prefix("GTRACE")
                .separator("_")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("traces.sources"),
        )
        .build()?
        .try_deserialize()
}
