//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `seometa-server`
//! integration tests. `TestApp` writes a temporary `config.yml` and site
//! document, builds the real `AppState` from them and spawns the server on a
//! random port. An `httpmock::MockServer` is started alongside so tests can
//! serve images to the HTTP image probe.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::MockServer;
use reqwest::Client;
use seometa_server::{
    config, router,
    state::{build_app_state, AppState},
};
use std::{fs, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server over `site_yaml` with image probing disabled.
    pub async fn spawn(site_yaml: &str) -> Result<Self> {
        Self::spawn_with(MockServer::start(), site_yaml, "probe:\n  enabled: false\n").await
    }

    /// Spawns the server over `site_yaml`, appending `extra_config` to the
    /// generated `config.yml`.
    pub async fn spawn_with(
        mock_server: MockServer,
        site_yaml: &str,
        extra_config: &str,
    ) -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let config_dir = tempdir()?;
        let site_path = config_dir.path().join("site.yml");
        fs::write(&site_path, site_yaml)?;

        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            "port: 0\nsite_file: \"{}\"\n{extra_config}",
            site_path.display()
        );
        fs::write(&config_path, config_content)?;

        let config = config::get_config(Some(config_path.to_str().unwrap()))?;
        let app_state = build_app_state(config)?;
        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state: app_state_for_harness,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Issues a GET against the spawned server.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .get(format!("{}{path}", self.address))
            .send()
            .await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Finds the `content` of the tag keyed `key` in a serialized `MetadataResult`.
pub fn tag_content<'a>(meta: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    meta["tags"]
        .as_array()?
        .iter()
        .find(|tag| tag["name"] == key || tag["property"] == key)
        .map(|tag| &tag["content"])
}
