use std::net::SocketAddr;

use reqwest::{Client, StatusCode};

use cleanform::config::Config;

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit urlencoded form data, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// Submit multipart form data, return (body, status).
    pub async fn submit_multipart(&self, data: &[(&str, &str)]) -> (String, StatusCode) {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in data {
            form = form.text(name.to_string(), value.to_string());
        }
        let resp = self
            .client
            .post(self.url("/submit"))
            .multipart(form)
            .send()
            .await
            .expect("submit multipart failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }
}

/// Default test configuration: permissive limits, quiet logging.
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        max_body_size: 1_048_576,
        trusted_proxies: vec![],
        rate_limit: 1000,
        rate_limit_window_secs: 60,
        honeypot_field: None,
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app with the default configuration.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

/// Spawn a test app with a custom configuration.
pub async fn spawn_app_with(config: Config) -> TestApp {
    let (app, _state) = cleanform::build_app(config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp { addr, client }
}
