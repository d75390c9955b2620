#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::path::Path;
use subtracker::models::{NotificationSource, RenewalType, Subscription, SubscriptionId};
use tempfile::TempDir;

/// Binary under test, with its config dir pointed at `home`.
pub fn stk(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("subtracker");
    cmd.env("SUBTRACKER_HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Scratch dir holding config and database for one test.
pub struct TestEnv {
    pub dir: TempDir,
    pub db_path: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db_path = dir
            .path()
            .join("subtracker_test.sqlite")
            .to_string_lossy()
            .to_string();
        Self { dir, db_path }
    }

    pub fn cmd(&self) -> Command {
        stk(self.dir.path())
    }

    /// Command with `--db` already set.
    pub fn db_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--db", &self.db_path]);
        cmd
    }

    /// Absolute path of an output file inside the scratch dir.
    pub fn temp_out(&self, name: &str, ext: &str) -> String {
        self.dir
            .path()
            .join(format!("{name}_out.{ext}"))
            .to_string_lossy()
            .to_string()
    }
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(env: &TestEnv) {
    env.db_cmd().args(["--test", "init"]).assert().success();

    env.db_cmd()
        .args([
            "add",
            "Netflix",
            "--price",
            "15.99",
            "--type",
            "mensal",
            "--start",
            "2024-01-15",
            "--category",
            "Streaming",
        ])
        .assert()
        .success();

    env.db_cmd()
        .args([
            "add",
            "Domain",
            "--price",
            "12,00",
            "--type",
            "anual",
            "--start",
            "2023-03-01",
            "--category",
            "Hosting",
            "--description",
            "example.org",
        ])
        .assert()
        .success();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// In-memory subscription for library-level tests.
pub fn sub(
    id: i64,
    renewal_type: RenewalType,
    start: Option<&str>,
    price: Option<&str>,
) -> Subscription {
    Subscription {
        id: SubscriptionId::from(id),
        name: format!("sub-{id}"),
        category: "Test".to_string(),
        description: String::new(),
        price: price.map(|p| p.parse().expect("valid test price")),
        renewal_type,
        start_date: start.map(date),
        next_renewal: None,
        notification: NotificationSource::Derived,
    }
}
