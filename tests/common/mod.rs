#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use mod_assembler_lib::models::paths::{ModPaths, ProjectPaths};
use mod_assembler_lib::ModCatalog;
use std::fs;
use tempfile::TempDir;

/// Lays out an empty project with both mod pools and a `target` directory.
pub fn setup_project() -> (TempDir, Utf8PathBuf, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();

    let project_root = root.join("Pack");
    let target = root.join("launcher").join("instances").join("Pack");

    let paths = ProjectPaths::new(&project_root);
    for dir in [&paths.content_mods, &paths.dependency_mods, &paths.instance_core, &paths.server_core] {
        fs::create_dir_all(dir).unwrap();
    }
    fs::create_dir_all(&target).unwrap();

    (tmp, project_root, target)
}

pub fn catalog(project_root: &Utf8Path) -> ModCatalog {
    ModCatalog::from_project(&ProjectPaths::new(project_root)).unwrap()
}

/// Creates a mod in a pool with a `data.json` and a `mods/<name>.jar` file.
pub fn create_test_mod(
    pool_root: &Utf8Path,
    name: &str,
    client: bool,
    server: bool,
    dependencies: &[&str],
) -> Utf8PathBuf {
    let mod_dir = pool_root.join(name);
    let jar = mod_dir.join("mods").join(format!("{}.jar", name));
    fs::create_dir_all(jar.parent().unwrap()).unwrap();
    fs::write(&jar, name).unwrap();

    let metadata = serde_json::json!({
        "Client": client,
        "Server": server,
        "Dependencies": dependencies,
    });
    fs::write(ModPaths::new(&mod_dir).metadata, metadata.to_string()).unwrap();
    mod_dir
}

pub fn content_mod(project_root: &Utf8Path, name: &str, client: bool, dependencies: &[&str]) -> Utf8PathBuf {
    create_test_mod(&ProjectPaths::new(project_root).content_mods, name, client, true, dependencies)
}

pub fn dependency_mod(project_root: &Utf8Path, name: &str, client: bool, dependencies: &[&str]) -> Utf8PathBuf {
    create_test_mod(&ProjectPaths::new(project_root).dependency_mods, name, client, true, dependencies)
}

pub fn write_file(path: &Utf8Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
