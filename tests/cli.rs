use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp dir holding the demo seed as `seed.json` and an empty config dir.
fn workspace() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let seed = dir.path().join("seed.json");
    let json = serde_json::to_string_pretty(&parish::source::seed::demo()).unwrap();
    std::fs::write(&seed, json).unwrap();
    (dir, seed)
}

fn parish(dir: &Path, seed: &Path) -> Command {
    let mut cmd = Command::cargo_bin("parish").unwrap();
    cmd.env("PARISH_CONFIG_DIR", dir.join("config"))
        .env("NO_COLOR", "1")
        .arg("--data")
        .arg(seed);
    cmd
}

#[test]
fn test_search_users() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["users", "--search", "maria"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maria Santos"))
        .stdout(predicate::str::contains("João Silva").not());
}

#[test]
fn test_filter_without_matches_reports_total() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["posts", "-s", "inexistente"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum registro encontrado."))
        .stdout(predicate::str::contains("3 registros no total"));
}

#[test]
fn test_toggle_group_into_active_view() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["groups", "--active", "true", "toggle", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pastoral do Dízimo agora está ativa",
        ))
        .stdout(predicate::str::contains("Primeira terça do mês"));
}

#[test]
fn test_delete_with_yes() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["posts", "delete", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Excluído (publicação 2): Campanha do Agasalho",
        ));
}

#[test]
fn test_delete_without_terminal_is_cancelled() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["users", "rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Operação cancelada."))
        .stdout(predicate::str::contains("João Silva"));
}

#[test]
fn test_unknown_id_fails() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["members", "toggle", "99"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("membro 99 não encontrado"));
}

#[test]
fn test_subscribe_to_full_event_fails() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["events", "subscribe", "3", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lotado"));
}

#[test]
fn test_subscribe_reports_spots_left() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["events", "subscribe", "2", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inscrição confirmada"))
        .stdout(predicate::str::contains("27 vaga(s) restante(s)"));
}

#[test]
fn test_summary_is_the_default() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usuários"))
        .stdout(predicate::str::contains("Eventos"));
}

#[test]
fn test_missing_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.json");

    parish(dir.path(), &absent)
        .arg("users")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Erro interno do servidor"));
}

#[test]
fn test_config_set_and_get() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["config", "login-path", "/entrar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("login-path set to /entrar"));

    parish(dir.path(), &seed)
        .args(["config", "login-path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/entrar"));

    parish(dir.path(), &seed)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("confirm-label = Confirmar"));
}

#[test]
fn test_config_rejects_bad_value() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["config", "latency-ms", "devagar"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("latency-ms expects milliseconds"));

    assert!(!dir.path().join("config").join("config.json").exists());
}

#[test]
fn test_config_unknown_key_fails() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key: colour"));

    parish(dir.path(), &seed)
        .args(["config", "colour"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_search_help_names_every_field() {
    let (dir, seed) = workspace();

    parish(dir.path(), &seed)
        .args(["posts", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search title, content and author"));

    parish(dir.path(), &seed)
        .args(["events", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Search title, description, location and organizer",
        ));
}
