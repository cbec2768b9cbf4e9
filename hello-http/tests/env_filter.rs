// Mutates the process environment, so it lives in its own test binary.

#[test]
fn test_rust_log_from_dotenv_file() {
    std::env::remove_var("RUST_LOG");
    assert_eq!(hello_http::env_filter().to_string(), "info");

    let path = std::env::temp_dir().join(format!("hello-http-{}.env", std::process::id()));
    std::fs::write(&path, "RUST_LOG=warn\n").unwrap();
    let loaded = dotenvy::from_path(&path);
    std::fs::remove_file(&path).unwrap();
    loaded.unwrap();

    assert_eq!(hello_http::env_filter().to_string(), "warn");
}
