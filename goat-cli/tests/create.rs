use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn goat(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("goat").expect("goat binary");
    cmd.current_dir(cwd).env_remove("GOAT_TEMPLATES_DIR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn create_with_flags_writes_project() {
    let workspace = TempDir::new().unwrap();

    goat(workspace.path())
        .args(["create", "--name", "demo", "--module", "example.com/demo", "--skip-tidy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'demo' created successfully!"))
        .stdout(predicate::str::contains("cd demo"));

    let project = workspace.path().join("demo");
    assert!(project.join(".gitignore").is_file());
    assert!(project.join("main.go").is_file());
    let go_mod = std::fs::read_to_string(project.join("go.mod")).unwrap();
    assert!(go_mod.contains("module example.com/demo"), "{go_mod}");
    assert!(go_mod.contains("gofiber"), "fiber is the default stack: {go_mod}");
}

#[test]
fn rerun_fails_and_mentions_existing_directory() {
    let workspace = TempDir::new().unwrap();
    let args = ["create", "-n", "twice", "-m", "example.com/twice", "--skip-tidy"];

    goat(workspace.path()).args(args).assert().success();
    goat(workspace.path())
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn empty_name_fails_without_creating_anything() {
    let workspace = TempDir::new().unwrap();

    goat(workspace.path())
        .args(["create", "--name", "", "--module", "example.com/x", "--skip-tidy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project name is required"));

    assert!(std::fs::read_dir(workspace.path()).unwrap().next().is_none());
}

#[test]
fn gin_stack_via_flag() {
    let workspace = TempDir::new().unwrap();

    goat(workspace.path())
        .args(["create", "-n", "web", "-m", "example.com/web", "--stack", "gin", "--skip-tidy"])
        .assert()
        .success();

    let main_go = std::fs::read_to_string(workspace.path().join("web").join("main.go")).unwrap();
    assert!(main_go.contains("gin-gonic"), "{main_go}");
}

#[test]
fn interactive_create_reads_names_from_stdin() {
    let workspace = TempDir::new().unwrap();

    goat(workspace.path())
        .args(["create-gin", "--skip-tidy"])
        .write_stdin("shop\nexample.com/shop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project name:"))
        .stdout(predicate::str::contains("Module path:"))
        .stdout(predicate::str::contains("Project 'shop' created successfully!"));

    let go_mod = std::fs::read_to_string(workspace.path().join("shop").join("go.mod")).unwrap();
    assert!(go_mod.contains("example.com/shop"));
}

#[test]
fn interactive_cancel_generates_nothing() {
    let workspace = TempDir::new().unwrap();

    goat(workspace.path())
        .args(["create-fiber", "--skip-tidy"])
        .write_stdin("half\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    assert!(!workspace.path().join("half").exists());
}

#[test]
fn templates_dir_overrides_builtin_template() {
    let workspace = TempDir::new().unwrap();
    let overrides = TempDir::new().unwrap();
    std::fs::create_dir_all(overrides.path().join("fiber")).unwrap();
    std::fs::write(
        overrides.path().join("fiber").join("main.go.tmpl"),
        "// custom {{.ProjectName}}\n",
    )
    .unwrap();

    goat(workspace.path())
        .args(["create", "-n", "custom", "-m", "example.com/custom", "--skip-tidy"])
        .arg("--templates-dir")
        .arg(overrides.path())
        .assert()
        .success();

    let main_go =
        std::fs::read_to_string(workspace.path().join("custom").join("main.go")).unwrap();
    assert_eq!(main_go, "// custom custom\n");
}

#[test]
fn partial_failure_lists_files_already_written() {
    let workspace = TempDir::new().unwrap();
    let overrides = TempDir::new().unwrap();
    std::fs::create_dir_all(overrides.path().join("fiber")).unwrap();
    std::fs::write(
        overrides.path().join("fiber").join("go.mod.tmpl"),
        "module {{ Bad",
    )
    .unwrap();

    goat(workspace.path())
        .args(["create", "-n", "partial", "-m", "example.com/partial", "--skip-tidy"])
        .arg("--templates-dir")
        .arg(overrides.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(".gitignore"))
        .stdout(predicate::str::contains("main.go"))
        .stdout(predicate::str::contains("go.mod").not())
        .stderr(predicate::str::contains("failed to parse template templates/fiber/go.mod.tmpl"));

    let project = workspace.path().join("partial");
    assert!(project.join(".gitignore").is_file());
    assert!(project.join("main.go").is_file());
    assert!(!project.join("go.mod").exists());
}
