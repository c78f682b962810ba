// tests/common/mod.rs
//
// Throwaway HTTP/1.1 server on 127.0.0.1 serving canned responses in order.
//
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

pub struct Canned {
    pub status: &'static str,
    pub body: Vec<u8>,
}

impl Canned {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::status("200 OK", body)
    }
    pub fn status(status: &'static str, body: impl Into<String>) -> Self {
        Self { status, body: body.into().into_bytes() }
    }
    /// Body bytes sent as-is, valid UTF-8 or not.
    pub fn raw(status: &'static str, body: &[u8]) -> Self {
        Self { status, body: body.to_vec() }
    }
}

pub struct MockServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Request lines seen so far, e.g. `GET /facts?page=8 HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serve `responses` one per connection. Extra requests are never answered.
pub fn serve(responses: Vec<Canned>) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);

    thread::spawn(move || {
        for canned in responses {
            let Ok((mut stream, _)) = listener.accept() else { return };
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }
            let head = String::from_utf8_lossy(&buf);
            let line = head.lines().next().unwrap_or("").to_string();
            seen.lock().unwrap().push(line);

            let preamble = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                canned.status,
                canned.body.len()
            );
            let _ = stream.write_all(preamble.as_bytes());
            let _ = stream.write_all(&canned.body);
            let _ = stream.flush();
        }
    });

    MockServer { url: format!("http://{addr}/facts"), requests }
}

/// Accepts one connection and never answers it.
pub fn serve_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(std::time::Duration::from_secs(5));
            drop(stream);
        }
    });
    format!("http://{addr}/facts")
}

/// A port nothing listens on.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/facts")
}
