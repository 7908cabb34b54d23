//! HTTP fixture source.
//!
//! Uses the blocking `reqwest` client; the poller already runs on its own
//! thread so there is nothing to gain from async here.

use std::time::Duration;

use super::DataSource;
use crate::error::LoadError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// A JSON document served over HTTP(S).
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, LoadError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl DataSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let resp = self.client.get(&self.url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }
        Ok(resp.bytes()?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Serve one canned HTTP response on a local port and return its URL.
    fn serve_once(response: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/ads.json", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            stream.write_all(response.as_bytes()).unwrap();
        });
        (url, handle)
    }

    #[test]
    fn name_returns_url() {
        let src = HttpSource::new("http://example.com/ads.json").unwrap();
        assert_eq!(src.name(), "http://example.com/ads.json");
    }

    #[test]
    fn non_success_status_is_an_error() {
        let (url, server) =
            serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let src = HttpSource::new(url.clone()).unwrap();

        let err = src.fetch().unwrap_err();
        server.join().unwrap();

        match err {
            LoadError::Status { status, url: failed } => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn success_returns_body_bytes() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 13\r\nConnection: close\r\n\r\n[{\"id\":\"a1\"}]",
        );
        let src = HttpSource::new(url).unwrap();

        let body = src.fetch().unwrap();
        server.join().unwrap();

        assert_eq!(body, br#"[{"id":"a1"}]"#);
    }
}
