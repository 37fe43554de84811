use assert_cmd::Command;
use assert_cmd::cargo;
use instantclient_installer::platform::{Platform, PlatformKey, resolve};
use instantclient_installer::source::SourceTable;
use mockito::Server;
use predicates::prelude::*;
use std::io::prelude::*;
use tempfile::tempdir;
use zip::ZipWriter;
use zip::write::FileOptions;

fn create_zip(files: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options: FileOptions<()> = FileOptions::default();
    for (name, content) in files {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Key of the machine running the tests, if it has a published build.
fn host_key() -> Option<PlatformKey> {
    resolve(&Platform::detect()).ok()
}

/// Request path the binary will ask the mock server for.
fn archive_path(server_url: &str, key: PlatformKey) -> String {
    SourceTable::with_base_url(server_url)
        .url_for(key)
        .trim_start_matches(server_url)
        .to_string()
}

fn installer_cmd(work_dir: &std::path::Path, base_url: &str) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("instantclient-installer"));
    cmd.arg("--dir")
        .arg(work_dir)
        .arg("--base-url")
        .arg(base_url)
        .env_remove("INSTANTCLIENT_DIR")
        .env_remove("INSTANTCLIENT_BASE_URL");
    cmd
}

#[test]
fn test_end_to_end_install() {
    let Some(key) = host_key() else {
        return;
    };

    let mut server = Server::new();
    let url = server.url();

    let zip_bytes = create_zip(&[
        ("instantclient_19_6/libclntsh.so", "client library"),
        ("instantclient_19_6/network/admin/README", "admin"),
    ]);
    let mock = server
        .mock("GET", archive_path(&url, key).as_str())
        .with_status(200)
        .with_body(&zip_bytes)
        .create();

    let root_dir = tempdir().unwrap();
    let work_dir = root_dir.path();

    installer_cmd(work_dir, &url)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Operating system is {}", key)))
        .stdout(predicate::str::contains("Downloading the instant client from:"))
        .stdout(predicate::str::contains("Received 0K total."))
        .stdout(predicate::str::contains("Extracting zip contents to"));

    mock.assert();

    let install_dir = work_dir.join("bin/instantclient");
    assert_eq!(
        std::fs::read_to_string(install_dir.join("libclntsh.so")).unwrap(),
        "client library"
    );
    assert!(install_dir.join("network/admin/README").exists());
    assert!(!work_dir.join("bin/instantclient_19_6").exists());
    assert!(!work_dir.join("bin/instantclient.zip").exists());
}

#[test]
fn test_existing_bin_dir_fails_without_download() {
    let Some(_) = host_key() else {
        return;
    };

    let mut server = Server::new();
    let url = server.url();
    let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create();

    let root_dir = tempdir().unwrap();
    std::fs::create_dir(root_dir.path().join("bin")).unwrap();

    installer_cmd(root_dir.path(), &url)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to create directory"));

    mock.assert();
}

#[test]
fn test_http_error_reports_status_and_body() {
    let Some(key) = host_key() else {
        return;
    };

    let mut server = Server::new();
    let url = server.url();
    let mock = server
        .mock("GET", archive_path(&url, key).as_str())
        .with_status(404)
        .with_body("not found")
        .create();

    let root_dir = tempdir().unwrap();

    installer_cmd(root_dir.path(), &url)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error status code: 404"))
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("Error with http(s) request"));

    mock.assert();
}

#[test]
fn test_corrupt_archive_reports_extraction_error() {
    let Some(key) = host_key() else {
        return;
    };

    let mut server = Server::new();
    let url = server.url();
    let _mock = server
        .mock("GET", archive_path(&url, key).as_str())
        .with_status(200)
        .with_body("this is not a zip file")
        .create();

    let root_dir = tempdir().unwrap();

    installer_cmd(root_dir.path(), &url)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error extracting archive"));

    assert!(root_dir.path().join("bin/instantclient.zip").exists());
}

#[test]
fn test_archive_without_folder_reports_structural_error() {
    let Some(key) = host_key() else {
        return;
    };

    let mut server = Server::new();
    let url = server.url();
    let zip_bytes = create_zip(&[("README.txt", "flat archive")]);
    let _mock = server
        .mock("GET", archive_path(&url, key).as_str())
        .with_status(200)
        .with_body(&zip_bytes)
        .create();

    let root_dir = tempdir().unwrap();

    installer_cmd(root_dir.path(), &url)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("No extracted directory found"));
}

#[test]
fn test_help_lists_options() {
    Command::new(cargo::cargo_bin!("instantclient-installer"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--base-url"));
}
