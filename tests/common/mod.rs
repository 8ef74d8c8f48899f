//! Shared fixtures for integration tests.

use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use okulno_api::{HttpServer, ServiceConfig};

/// A data directory populated with record files.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let fixture = Self::empty();
        for (name, content) in files {
            fixture.write(name, content);
        }
        fixture
    }

    /// The two-row sample used across tests.
    pub fn sample() -> Self {
        Self::with_files(&[(
            "okulno1.csv",
            "1,111,GAZAL,YILMAZ,776,Mezun\n2,222,ALI,VELI,900,Kayıtlı\n",
        )])
    }

    #[allow(dead_code)]
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) {
        fs::write(self.dir.path().join(name), content).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> ServiceConfig {
        let mut config = ServiceConfig::default();
        config.data.directory = self.path().to_string_lossy().into_owned();
        config
    }

    pub fn server(&self) -> HttpServer {
        HttpServer::new(self.config())
    }
}

/// Send a GET through the router without binding a socket.
#[allow(dead_code)]
pub async fn get(server: &HttpServer, uri: &str) -> Response {
    server
        .router()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a GET and decode the JSON body.
#[allow(dead_code)]
pub async fn get_json(server: &HttpServer, uri: &str) -> (StatusCode, Value) {
    let response = get(server, uri).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
