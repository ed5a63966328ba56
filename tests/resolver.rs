mod common;

use common::{catalog, content_mod, dependency_mod, setup_project, write_file};
use mod_assembler_lib::{AssemblyError, InstallState, Resolver, TargetVariant};
use std::fs;

#[test]
fn test_dependency_installed_before_dependent() {
    let (_tmp, project, target) = setup_project();
    dependency_mod(&project, "A", true, &[]);
    content_mod(&project, "B", true, &["A"]);
    let catalog = catalog(&project);
    let resolver = Resolver::new(&catalog, &target, TargetVariant::Client);
    let mut state = InstallState::new();

    let added = resolver.install_mod("B", &mut state).unwrap();

    assert_eq!(added, vec!["A", "B"]);
    assert_eq!(state.enabled(), ["A", "B"]);
    assert!(target.join("mods/A.jar").exists());
    assert!(target.join("mods/B.jar").exists());
}

#[test]
fn test_install_is_idempotent() {
    let (_tmp, project, target) = setup_project();
    content_mod(&project, "A", true, &[]);
    let catalog = catalog(&project);
    let resolver = Resolver::new(&catalog, &target, TargetVariant::Client);
    let mut state = InstallState::new();

    resolver.install_mod("A", &mut state).unwrap();
    // A second install must not write again.
    fs::remove_file(target.join("mods/A.jar")).unwrap();
    let added = resolver.install_mod("A", &mut state).unwrap();

    assert!(added.is_empty());
    assert_eq!(state.enabled(), ["A"]);
    assert!(!target.join("mods/A.jar").exists());
}

#[test]
fn test_platform_filtered_mod_is_excluded() {
    let (_tmp, project, target) = setup_project();
    content_mod(&project, "ServerOnly", false, &[]);
    let catalog = catalog(&project);
    let resolver = Resolver::new(&catalog, &target, TargetVariant::Client);
    let mut state = InstallState::new();

    let added = resolver.install_mod("ServerOnly", &mut state).unwrap();

    assert!(added.is_empty());
    assert!(state.enabled().is_empty());
    assert!(!target.join("mods").exists());
}

#[test]
fn test_server_variant_uses_server_flag() {
    let (_tmp, project, target) = setup_project();
    let paths = mod_assembler_lib::models::paths::ProjectPaths::new(&project);
    common::create_test_mod(&paths.content_mods, "ClientOnly", true, false, &[]);
    let catalog = catalog(&project);
    let resolver = Resolver::new(&catalog, &target, TargetVariant::Server);
    let mut state = InstallState::new();

    assert!(resolver.install_mod("ClientOnly", &mut state).unwrap().is_empty());
    assert!(state.enabled().is_empty());
}

#[test]
fn test_ineligible_dependency_is_unsatisfied() {
    let (_tmp, project, target) = setup_project();
    dependency_mod(&project, "C", false, &[]);
    content_mod(&project, "D", true, &["C"]);
    let catalog = catalog(&project);
    let resolver = Resolver::new(&catalog, &target, TargetVariant::Client);
    let mut state = InstallState::new();

    match resolver.install_mod("D", &mut state) {
        Err(AssemblyError::UnsatisfiedDependency { dependency, required_by }) => {
            assert_eq!(dependency, "C");
            assert_eq!(required_by, "D");
        }
        other => panic!("Expected UnsatisfiedDependency, got {:?}", other),
    }
    assert!(state.enabled().is_empty());
    assert!(!target.join("mods/D.jar").exists());
}

#[test]
fn test_missing_dependency_is_not_found() {
    let (_tmp, project, target) = setup_project();
    content_mod(&project, "E", true, &["Nowhere"]);
    let catalog = catalog(&project);
    let resolver = Resolver::new(&catalog, &target, TargetVariant::Client);
    let mut state = InstallState::new();

    match resolver.install_mod("E", &mut state) {
        Err(AssemblyError::ModNotFound { name }) => assert_eq!(name, "Nowhere"),
        other => panic!("Expected ModNotFound, got {:?}", other),
    }
}

#[test]
fn test_shared_and_duplicate_dependencies_install_once() {
    let (_tmp, project, target) = setup_project();
    dependency_mod(&project, "Lib", true, &[]);
    dependency_mod(&project, "Api", true, &["Lib"]);
    content_mod(&project, "Top", true, &["Lib", "Api", "Lib"]);
    let catalog = catalog(&project);
    let resolver = Resolver::new(&catalog, &target, TargetVariant::Client);
    let mut state = InstallState::new();

    let added = resolver.install_mod("Top", &mut state).unwrap();

    assert_eq!(added, vec!["Lib", "Api", "Top"]);
    assert_eq!(state.enabled(), ["Lib", "Api", "Top"]);
}

#[test]
fn test_cycle_fails_fast() {
    let (_tmp, project, target) = setup_project();
    content_mod(&project, "A", true, &["B"]);
    dependency_mod(&project, "B", true, &["A"]);
    let catalog = catalog(&project);
    let resolver = Resolver::new(&catalog, &target, TargetVariant::Client);
    let mut state = InstallState::new();

    match resolver.install_mod("A", &mut state) {
        Err(AssemblyError::CyclicDependency { chain }) => assert_eq!(chain, "A -> B -> A"),
        other => panic!("Expected CyclicDependency, got {:?}", other),
    }
    assert!(state.enabled().is_empty());

    // The failed walk must not leave stale entries behind.
    content_mod(&project, "Solo", true, &[]);
    let catalog = common::catalog(&project);
    let resolver = Resolver::new(&catalog, &target, TargetVariant::Client);
    assert_eq!(resolver.install_mod("Solo", &mut state).unwrap(), vec!["Solo"]);
}

#[test]
fn test_override_folder_rules_apply_per_mod() {
    let (_tmp, project, target) = setup_project();
    let a = dependency_mod(&project, "A", true, &[]);
    let b = content_mod(&project, "B", true, &["A"]);
    write_file(&a.join("config/a.toml"), "a");
    write_file(&b.join("config/_changelog.txt"), "");
    write_file(&b.join("config/b.toml"), "b");
    let catalog = catalog(&project);
    let resolver = Resolver::new(&catalog, &target, TargetVariant::Client);

    resolver.install_mod("B", &mut InstallState::new()).unwrap();

    assert!(!target.join("config/a.toml").exists());
    assert!(target.join("config/b.toml").exists());
    assert!(!target.join("config/_changelog.txt").exists());
}
