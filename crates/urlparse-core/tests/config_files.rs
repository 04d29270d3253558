//! Loading processor configuration from TOML files on disk.

use std::io::Write;

use tempfile::NamedTempFile;
use urlparse_core::config::{self, ConfigError};
use urlparse_core::UrlParse;

fn write_config(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn load_and_build_from_file() {
    let f = write_config(
        r#"
        ignore_missing = true

        [[fields]]
        from = "http.request.referrer"
        to = "referrer"

        [[fields]]
        from = "url.original"
    "#,
    );
    let cfg = config::load_from(f.path()).unwrap();
    let p = UrlParse::new(cfg).unwrap();
    assert!(p.plan().ignore_missing());
    assert!(p.plan().fail_on_error());
    assert_eq!(
        p.to_string(),
        "urlparse=[{from:http.request.referrer to:referrer} {from:url.original to:url.original}]"
    );
}

#[test]
fn invalid_file_is_a_configuration_error() {
    let f = write_config("fields = []\n");
    assert!(matches!(
        config::load_from(f.path()),
        Err(ConfigError::NoFields)
    ));

    let f = write_config("fields = [{ from = \"a\" }]\nfail_on_eror = false\n");
    let err = config::load_from(f.path()).unwrap_err();
    assert!(err.to_string().contains("fail_on_eror"), "{err}");
}
