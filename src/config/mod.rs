mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    CONFIG_VERSION, Config, ContentConfig, DEFAULT_CONTENT_MARKER, DEFAULT_MARKER_FILE,
    DEFAULT_OUTPUT_PATH, OutputConfig, ScannerConfig, normalize_extension,
};
