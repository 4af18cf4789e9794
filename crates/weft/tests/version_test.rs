#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(weft::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!weft::VERSION.is_empty());
}
