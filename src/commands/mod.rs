pub mod init;
pub mod scan;

pub use init::{generate_config_template, run_init, run_init_impl};
pub use scan::{ScanOutcome, run_scan, run_scan_impl};
