// Kept in its own test binary: environment overrides are process-wide and would race
// with the default-value tests in src/config.rs.
use std::fs;
use tempfile::TempDir;
use think_tool::ThinkToolConfig;

#[test]
fn test_environment_overrides_file_and_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("think-tool.toml");
    fs::write(&path, "[server]\nname = \"from-file\"\nversion = \"3.0.0\"\n").unwrap();

    std::env::set_var("THINK_TOOL_SERVER__NAME", "from-env");
    let loaded = ThinkToolConfig::load_from(path.to_str().unwrap());
    std::env::remove_var("THINK_TOOL_SERVER__NAME");

    let config = loaded.unwrap();
    assert_eq!(config.server.name, "from-env");
    assert_eq!(config.server.version, "3.0.0");
    assert_eq!(config.server.transport, "stdio");

    // Without the variable the file wins again
    let config = ThinkToolConfig::load_from(path.to_str().unwrap()).unwrap();
    assert_eq!(config.server.name, "from-file");
}
