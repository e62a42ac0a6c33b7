//! Static file server for the detection front-end
//!
//! Serves the built Leptos WASM app from the dist/ directory. The listen
//! port comes from the PORT environment variable, defaulting to 8080.

use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

fn main() {
    let port = env::var("PORT")
        .ok()
        .filter(|port| !port.is_empty())
        .unwrap_or_else(|| "8080".to_string());
    let addr = format!("127.0.0.1:{}", port);
    let listener = TcpListener::bind(&addr).expect("Failed to bind listen address");

    println!("Detection front-end running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let reader = BufReader::new(&mut stream);
    let request_line = match reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    // Request target is the second token; drop any query string
    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = target.split('?').next().unwrap_or(target);

    let file_path = resolve_path(path);

    let (status, content_type, body) = match fs::read(&file_path) {
        Ok(contents) => ("200 OK", content_type_for(&file_path), contents),
        Err(e) => {
            eprintln!("Failed to read {}: {}", file_path.display(), e);
            (
                "404 NOT FOUND",
                "text/html; charset=utf-8",
                b"<!DOCTYPE html><html><body><h1>File not found</h1></body></html>".to_vec(),
            )
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }

    let _ = stream.flush();
}

/// Map a request path to a file under dist/. Unknown routes fall back to
/// index.html so client-side routing keeps working after a full page load.
fn resolve_path(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return PathBuf::from("dist/index.html");
    }

    let mut dist_path = PathBuf::from("dist");
    dist_path.push(path.strip_prefix('/').unwrap_or(path));

    if dist_path.is_dir() || !dist_path.exists() {
        PathBuf::from("dist/index.html")
    } else {
        dist_path
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}
