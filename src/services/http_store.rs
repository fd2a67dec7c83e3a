//! HTTP Store
//!
//! Loads and persists the camera record through the controller's REST API.

use crate::constants::{CAMERA_CONFIG_PATH, HTTP_TIMEOUT_SECS};
use crate::domain::camera::{CameraConfig, RawCameraConfig};
use crate::error::Result;
use crate::services::collaborators::{ConfigLoader, ConfigSink};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Camera record served by a remote controller
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    endpoint: String,
}

impl HttpStore {
    /// Create a store for the controller at `base_url` (e.g. `http://reef-pi.local:8080`)
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            endpoint: camera_endpoint(base_url),
        })
    }

    /// Full URL of the camera configuration resource
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Build the camera configuration URL from a controller base URL
pub fn camera_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CAMERA_CONFIG_PATH)
}

impl ConfigLoader for HttpStore {
    fn load(&self) -> Result<Option<CameraConfig>> {
        debug!(url = %self.endpoint, "Fetching camera record");
        let raw: RawCameraConfig = self
            .client
            .get(&self.endpoint)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(raw.into_record())
    }
}

impl ConfigSink for HttpStore {
    fn store(&self, record: &CameraConfig) -> Result<()> {
        self.client
            .post(&self.endpoint)
            .json(record)
            .send()?
            .error_for_status()?;
        info!(url = %self.endpoint, "Camera record posted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answer a single request on a local port. The handle yields the raw request.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let base = format!("http://{}", listener.local_addr().expect("addr"));

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone"));

            let mut request = String::new();
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).expect("read header") == 0 {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().expect("content length");
                    }
                }
                request.push_str(&line);
                if line == "\r\n" {
                    break;
                }
            }
            let mut payload = vec![0; content_length];
            reader.read_exact(&mut payload).expect("read body");
            request.push_str(&String::from_utf8(payload).expect("utf8"));

            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .expect("respond");
            request
        });

        (base, handle)
    }

    fn record() -> CameraConfig {
        CameraConfig {
            enable: true,
            tick_interval: 15,
            capture_flags: "-n 3".to_string(),
            image_directory: "/var/img".to_string(),
            upload: true,
        }
    }

    #[test]
    fn test_load_fetches_record() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"enable":true,"tick_interval":15,"capture_flags":"-n 3","image_directory":"/var/img","upload":true}"#,
        );
        let store = HttpStore::new(&base).expect("client");

        assert_eq!(store.load().expect("load"), Some(record()));
        let request = server.join().expect("server");
        assert!(request.starts_with("GET /api/camera/config HTTP/1.1"));
    }

    #[test]
    fn test_load_without_enable_is_not_loaded() {
        let (base, server) = serve_once("200 OK", r#"{"tick_interval":5,"upload":true}"#);
        let store = HttpStore::new(&base).expect("client");

        assert_eq!(store.load().expect("load"), None);
        server.join().expect("server");
    }

    #[test]
    fn test_store_posts_record_as_json() {
        let (base, server) = serve_once("200 OK", "");
        let store = HttpStore::new(&base).expect("client");

        store.store(&record()).expect("store");
        let request = server.join().expect("server");
        assert!(request.starts_with("POST /api/camera/config HTTP/1.1"));
        let (_, body) = request.split_once("\r\n\r\n").expect("body");
        let posted: CameraConfig = serde_json::from_str(body).expect("json body");
        assert_eq!(posted, record());
    }

    #[test]
    fn test_error_status_is_http_error() {
        let (base, server) = serve_once("500 Internal Server Error", "{}");
        let store = HttpStore::new(&base).expect("client");
        assert!(matches!(store.load(), Err(Error::Http { .. })));
        server.join().expect("server");

        let (base, server) = serve_once("404 Not Found", "");
        let store = HttpStore::new(&base).expect("client");
        assert!(matches!(store.store(&record()), Err(Error::Http { .. })));
        server.join().expect("server");
    }

    #[test]
    fn test_camera_endpoint() {
        assert_eq!(
            camera_endpoint("http://reef-pi.local:8080"),
            "http://reef-pi.local:8080/api/camera/config"
        );
        assert_eq!(
            camera_endpoint("http://10.0.0.2/"),
            "http://10.0.0.2/api/camera/config"
        );
    }

    #[test]
    fn test_store_exposes_endpoint() {
        let store = HttpStore::new("http://localhost:8080//").expect("client");
        assert_eq!(store.endpoint(), "http://localhost:8080/api/camera/config");
    }
}
