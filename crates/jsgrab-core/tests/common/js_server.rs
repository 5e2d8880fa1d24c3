//! Minimal HTTP/1.1 server serving fixed per-path responses for tests.
//!
//! Each route maps a request path to a status and body. Unknown paths get
//! 404. The server runs until the process exits.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(content_type: &'static str, body: &[u8]) -> Self {
        Route {
            status: 200,
            content_type,
            body: body.to_vec(),
        }
    }

    pub fn status(status: u16) -> Self {
        Route {
            status,
            content_type: "text/plain",
            body: Vec::new(),
        }
    }
}

/// Starts a server for `routes` in a background thread. Returns the base
/// URL without a trailing slash (e.g. "http://127.0.0.1:12345").
pub fn start(routes: HashMap<String, Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request_path(request).unwrap_or("/");
    // Route lookup ignores the query string, like a static file server.
    let path = path.split('?').next().unwrap_or(path);

    let (status, content_type, body) = match routes.get(path) {
        Some(route) => (route.status, route.content_type, route.body.as_slice()),
        None => (404, "text/plain", &[][..]),
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        content_type,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

fn request_path(request: &str) -> Option<&str> {
    request.lines().next()?.split_whitespace().nth(1)
}
