#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use rust_xlsxwriter::Workbook;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;

use telecall::config::Config;
use telecall::{auth, db};

pub const ADMIN_PASSWORD: &str = "admin";

/// A running test server backed by its own SQLite file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
    pub upload_dir: PathBuf,
    // Holds the database file and upload directory until the test ends.
    pub dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn login(&self, username: &str, password: &str) -> (Value, StatusCode) {
        self.post_json("/login", &json!({ "username": username, "password": password }))
            .await
    }

    pub async fn create_user(&self, username: &str, password: &str) -> (Value, StatusCode) {
        self.post_json(
            "/create-user",
            &json!({ "username": username, "password": password }),
        )
        .await
    }

    pub async fn candidates(&self, user: &str, role: &str) -> Vec<Value> {
        let (body, status) = self
            .get(&format!("/candidates?user={user}&role={role}"))
            .await;
        assert_eq!(status, StatusCode::OK, "candidates non-200: {body}");
        body.as_array().cloned().expect("candidates should be a list")
    }

    pub async fn stats(&self) -> Value {
        let (body, status) = self.get("/stats").await;
        assert_eq!(status, StatusCode::OK, "stats non-200: {body}");
        body
    }

    /// Upload workbook bytes as the `file` part, with an optional assignee.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        assign_to: Option<&str>,
    ) -> (Value, StatusCode) {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let mut form = Form::new().part("file", part);
        if let Some(assignee) = assign_to {
            form = form.text("assign_to", assignee.to_string());
        }

        let resp = self
            .client
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await
            .expect("upload request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> (Value, StatusCode) {
        let body = form
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let resp = self
            .client
            .post(self.url(path))
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("post form request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Files currently sitting in the upload directory.
    pub fn staged_files(&self) -> usize {
        std::fs::read_dir(&self.upload_dir)
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

pub fn test_config(dir: &TempDir) -> Config {
    Config {
        database_url: format!("sqlite://{}", dir.path().join("telecall.db").display()),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        static_dir: dir.path().join("public"),
        upload_dir: dir.path().join("uploads"),
        max_body_size: 10 * 1024 * 1024,
        request_timeout: Duration::from_secs(30),
        db_timeout: Duration::from_secs(5),
        admin_password: ADMIN_PASSWORD.to_string(),
        log_level: "warn".to_string(),
    }
}

/// Open and migrate a fresh database in `dir`, without bootstrapping users.
pub async fn fresh_pool(dir: &TempDir) -> SqlitePool {
    let config = test_config(dir);
    let pool = db::connect(&config.database_url, config.db_timeout)
        .await
        .expect("Failed to open test database");
    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");
    pool
}

/// Spawn the app on a random port with a bootstrapped admin account.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Like [`spawn_app`], with a hook to adjust the configuration first.
pub async fn spawn_app_with(adjust: impl FnOnce(&mut Config)) -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = test_config(&dir);
    adjust(&mut config);
    std::fs::create_dir_all(&config.upload_dir).expect("Failed to create upload dir");
    std::fs::create_dir_all(&config.static_dir).expect("Failed to create static dir");

    let pool = fresh_pool(&dir).await;
    auth::bootstrap_admin(&pool, &config.admin_password)
        .await
        .expect("Failed to bootstrap admin");

    let upload_dir = config.upload_dir.clone();
    let app = telecall::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        upload_dir,
        dir,
    }
}

pub async fn cleanup(app: TestApp) {
    app.pool.close().await;
    drop(app.dir);
}

/// A cell value for [`workbook`].
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Build an xlsx file whose first sheet holds `header` then `rows`.
pub fn workbook(header: &[&str], rows: &[Vec<Cell<'_>>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, title) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *title).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    sheet.write_string(r, col as u16, *text).unwrap();
                }
                Cell::Number(n) => {
                    sheet.write_number(r, col as u16, *n).unwrap();
                }
                Cell::Blank => {}
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// Shorthand for an all-text workbook.
pub fn text_workbook(header: &[&str], rows: &[&[&str]]) -> Vec<u8> {
    let rows: Vec<Vec<Cell<'_>>> = rows
        .iter()
        .map(|row| row.iter().map(|v| Cell::Text(*v)).collect())
        .collect();
    workbook(header, &rows)
}
