//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = "Do you prefer mornings or evenings?|Mornings,Evenings\n\
                      Pick a color|Red,Green,Blue,Yellow\n";

/// A command isolated from any config in the working directory or home.
fn psysurvey(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("psysurvey").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("PSYSURVEY_QUESTIONS")
        .env_remove("RUST_LOG");
    cmd
}

fn repo_questions() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../questions/psychology_questions.txt")
}

fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("questions.txt");
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    psysurvey(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiple-choice psychology survey"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    psysurvey(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("psysurvey"));
}

#[test]
fn validate_bundled_questions() {
    let dir = TempDir::new().unwrap();
    psysurvey(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg(repo_questions())
        .assert()
        .success()
        .stdout(predicate::str::contains("(5 questions)"))
        .stdout(predicate::str::contains("Question file valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.txt");
    std::fs::write(&path, "Good|a,b\nno pipe here\nToo many|1,2,3,4,5,6\n").unwrap();

    psysurvey(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 questions)"))
        .stdout(predicate::str::contains("[line 2] WARNING: malformed line"))
        .stdout(predicate::str::contains("[line 3] WARNING: 6 answers"))
        .stdout(predicate::str::contains("2 warning(s) found."));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    psysurvey(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: failed to read question file"));
}

#[test]
fn score_sample_answers() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    psysurvey(dir.path())
        .arg("score")
        .arg("--questions")
        .arg(&path)
        .arg("--answers")
        .arg("2,3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Результаты опроса:"))
        .stdout(predicate::str::contains("Ваш ответ: Evenings\nБаллы за ответ: 2"))
        .stdout(predicate::str::contains("Ваш ответ: Blue\nБаллы за ответ: 3"))
        .stdout(predicate::str::contains("Итоговые баллы: 5"));
}

#[test]
fn score_with_skipped_question() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    psysurvey(dir.path())
        .arg("score")
        .arg("--questions")
        .arg(&path)
        .arg("--answers")
        .arg("-,4")
        .assert()
        .success()
        .stdout(predicate::str::contains("Вы не ответили на этот вопрос"))
        .stdout(predicate::str::contains("Итоговые баллы: 4"));
}

#[test]
fn score_out_of_range_answer() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    psysurvey(dir.path())
        .arg("score")
        .arg("--questions")
        .arg(&path)
        .arg("--answers")
        .arg("3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("question 1 has 2 answer(s), got answer 3"));
}

#[test]
fn score_too_many_answers() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    psysurvey(dir.path())
        .arg("score")
        .arg("--questions")
        .arg(&path)
        .arg("--answers")
        .arg("1,1,1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("3 answers given"));
}

#[test]
fn score_missing_question_file() {
    let dir = TempDir::new().unwrap();
    psysurvey(dir.path())
        .arg("score")
        .arg("--questions")
        .arg("missing.txt")
        .arg("--answers")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read question file"));
}

#[test]
fn score_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let output = psysurvey(dir.path())
        .arg("score")
        .arg("--questions")
        .arg(&path)
        .arg("--answers")
        .arg("2,3")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_points"], 5);
    assert_eq!(report["entries"][1]["answer"], "Blue");
    assert_eq!(report["entries"][1]["max_points"], 4);
}

#[test]
fn score_markdown_output() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    psysurvey(dir.path())
        .arg("score")
        .arg("--questions")
        .arg(&path)
        .arg("--answers")
        .arg("1")
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("| 1 | Do you prefer mornings or evenings? | Mornings | 1 |"))
        .stdout(predicate::str::contains("**Итоговые баллы:** 1"));
}

#[test]
fn score_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    psysurvey(dir.path())
        .arg("score")
        .arg("--questions")
        .arg(&path)
        .arg("--answers")
        .arg("1")
        .arg("--format")
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: 'bogus'"));
}

#[test]
fn score_uses_config_file() {
    let dir = TempDir::new().unwrap();
    write_sample(&dir);
    std::fs::write(
        dir.path().join("psysurvey.toml"),
        "questions_file = \"questions.txt\"\n\n[labels]\ntotal = \"Total:\"\n",
    )
    .unwrap();

    psysurvey(dir.path())
        .arg("score")
        .arg("--answers")
        .arg("2,2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 4"));
}

#[test]
fn take_interactive_survey() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    psysurvey(dir.path())
        .arg("take")
        .arg("--questions")
        .arg(&path)
        .write_stdin("1\n2\n\n3\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you prefer mornings or evenings?"))
        .stdout(predicate::str::contains("[x] 2) Evenings"))
        .stdout(predicate::str::contains("Итоговые баллы: 5"));
}

#[test]
fn take_with_closed_input_leaves_questions_unanswered() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    psysurvey(dir.path())
        .arg("take")
        .arg("--questions")
        .arg(&path)
        .write_stdin("2\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Вы не ответили на этот вопрос"))
        .stdout(predicate::str::contains("Итоговые баллы: 2"));
}

#[test]
fn take_with_missing_file_completes_immediately() {
    let dir = TempDir::new().unwrap();

    psysurvey(dir.path())
        .arg("take")
        .arg("--questions")
        .arg("missing.txt")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Итоговые баллы: 0"))
        .stderr(predicate::str::contains("failed to read question file"));
}

#[test]
fn take_exports_reports() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let output = dir.path().join("results");

    psysurvey(dir.path())
        .arg("take")
        .arg("--questions")
        .arg(&path)
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("all")
        .write_stdin("1\n\n1\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Results saved to:"))
        .stderr(predicate::str::contains("HTML report:"));

    let mut extensions: Vec<String> = std::fs::read_dir(&output)
        .unwrap()
        .map(|e| {
            e.unwrap()
                .path()
                .extension()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    extensions.sort();
    assert_eq!(extensions, vec!["html", "json"]);
}

#[test]
fn take_rejects_unknown_format_before_prompting() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    psysurvey(dir.path())
        .arg("take")
        .arg("--questions")
        .arg(&path)
        .arg("--format")
        .arg("markdown")
        .write_stdin("1\n\n1\n\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Do you prefer").not())
        .stderr(predicate::str::contains("unknown format: 'markdown'"));

    assert!(!dir.path().join("survey-results").exists());
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    psysurvey(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created psysurvey.toml"))
        .stdout(predicate::str::contains("Created psychology_questions.txt"));

    assert!(dir.path().join("psysurvey.toml").exists());
    assert!(dir.path().join("psychology_questions.txt").exists());

    // The generated files work together out of the box.
    psysurvey(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("(5 questions)"))
        .stdout(predicate::str::contains("Question file valid."));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    psysurvey(dir.path()).arg("init").assert().success();

    // Second init should skip
    psysurvey(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
