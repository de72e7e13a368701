use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use goschool_config::ProvisionConfig;
use goschool_db::ProvisionSession;
use goschool_models::demo_accounts::emails;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use tokio::net::TcpListener;

pub const REGISTRATION_PATH: &str = "/api/v1/register_testing_users/";

/// A session whose pool points at a port nothing listens on. Any statement
/// issued through it fails, so a test that finishes with
/// `!session.is_active()` proves the database was never touched.
#[allow(dead_code)]
pub fn unreachable_session() -> ProvisionSession {
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy("mysql://root@127.0.0.1:1/unreachable")
        .unwrap();
    ProvisionSession::from_pool(pool, "unreachable")
}

/// The schema script shipped at the workspace root.
#[allow(dead_code)]
pub fn schema_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../database.sql")
}

/// Provisioning config writing keys into `dir`.
#[allow(dead_code)]
pub fn test_config(dir: &Path, registration_url: &str, schema_path: PathBuf) -> ProvisionConfig {
    ProvisionConfig {
        schema_path,
        registration_url: registration_url.to_string(),
        private_key_path: dir.join("ecc_private_key.pem"),
        public_key_path: dir.join("ecc_public_key.pem"),
    }
}

#[allow(dead_code)]
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}{REGISTRATION_PATH}")
}

/// A registration endpoint that always answers `status` and does nothing else.
#[allow(dead_code)]
pub async fn spawn_registration_stub(status: StatusCode) -> String {
    let router = Router::new().route(REGISTRATION_PATH, get(move || async move { status }));
    serve(router).await
}

/// A URL on a port that refuses connections.
#[allow(dead_code)]
pub async fn closed_registration_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{REGISTRATION_PATH}")
}

/// A registration endpoint that behaves like the backend: it creates the
/// five test accounts in `pool` and answers 201.
#[allow(dead_code)]
pub async fn spawn_registering_backend(pool: MySqlPool) -> String {
    let router = Router::new()
        .route(REGISTRATION_PATH, get(register_testing_users))
        .with_state(pool);
    serve(router).await
}

#[allow(dead_code)]
async fn register_testing_users(State(pool): State<MySqlPool>) -> StatusCode {
    let accounts = [
        emails::ADMIN,
        emails::STUDENT,
        emails::PRECEPTOR,
        emails::FATHER,
        emails::TEACHER,
    ];

    for account in accounts {
        let inserted = sqlx::query("INSERT INTO users (email, password, role) VALUES (?, ?, ?)")
            .bind(account)
            .bind(account)
            .bind(account)
            .execute(&pool)
            .await;
        if inserted.is_err() {
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    }

    StatusCode::CREATED
}
