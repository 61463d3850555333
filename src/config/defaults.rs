//! Configuration default values
//!
//! All default values for configuration options live here so they can be
//! changed in one place.

// Input defaults
pub const DEFAULT_SNAPSHOT_DIR: &str = "./data/snapshot";

// Output defaults
pub const DEFAULT_M3U_PATH: &str = "./data/stirr.m3u";
pub const DEFAULT_XMLTV_PATH: &str = "./data/stirr.xml";

// XMLTV defaults
pub const DEFAULT_GENERATOR_INFO_NAME: &str = "stirr-guide";
