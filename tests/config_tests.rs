//! Loading commit options from YAML files and the environment

use std::io::Write;

use hxkit::{BufferedResponse, HxConfig, HxResponse};

#[test]
fn test_yaml_file_enables_vary() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "auto_vary: true\ntrace_headers: true").unwrap();

    let config = HxConfig::from_yaml_file(file.path()).unwrap();
    assert!(config.auto_vary);
    assert!(config.trace_headers);

    let mut res = BufferedResponse::new();
    HxResponse::with_config(config)
        .retarget("#main")
        .commit(&mut res)
        .unwrap();
    assert_eq!(res.get_header("Vary"), Some("HX-Request"));
    assert_eq!(res.headers.last().map(|(k, _)| &**k), Some("Vary"));
}

#[test]
fn test_empty_yaml_file_is_default() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "{}\n").unwrap();
    assert_eq!(
        HxConfig::from_yaml_file(file.path()).unwrap(),
        HxConfig::default()
    );
}

#[test]
fn test_from_env_truthy_values() {
    std::env::set_var("HXKIT_AUTO_VARY", "Yes");
    std::env::set_var("HXKIT_TRACE_HEADERS", "0");
    let config = HxConfig::from_env();
    assert!(config.auto_vary);
    assert!(!config.trace_headers);

    std::env::remove_var("HXKIT_AUTO_VARY");
    std::env::remove_var("HXKIT_TRACE_HEADERS");
    assert_eq!(HxConfig::from_env(), HxConfig::default());
}
