//! End-to-end tests over real TCP sockets

use stash::files::{FileHandler, FileStore};
use stash::server::listener::serve;
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn start() -> (TempDir, SocketAddr) {
    let dir = tempfile::tempdir().unwrap();
    let handler = Arc::new(FileHandler::new(FileStore::new(dir.path())));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(serve(listener, handler, 1024));

    (dir, addr)
}

async fn send(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw).await.unwrap();

    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    out
}

#[tokio::test]
async fn test_post_then_get_over_tcp() {
    let (_dir, addr) = start().await;

    let created = send(
        addr,
        b"POST /x HTTP/1.1\r\nContent-Type: application/json\r\n\r\n{\"a\":[1,2]}",
    )
    .await;
    assert_eq!(created, b"HTTP/1.1 201 Created\r\n\r\n".to_vec());

    let fetched = send(addr, b"GET /x.json HTTP/1.1\r\n\r\n").await;
    assert_eq!(
        fetched,
        b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 11\r\n\r\n{\"a\":[1,2]}".to_vec()
    );
}

#[tokio::test]
async fn test_malformed_request_does_not_stop_server() {
    let (_dir, addr) = start().await;

    let dropped = send(addr, b"NONSENSE\r\n\r\n").await;
    assert!(dropped.is_empty());

    let response = send(addr, b"GET /missing.txt HTTP/1.1\r\n\r\n").await;
    assert!(response.starts_with(b"HTTP/1.1 404 Not Found\r\n"));
}

#[tokio::test]
async fn test_concurrent_clients() {
    let (dir, addr) = start().await;

    let mut tasks = Vec::new();
    for i in 0..8 {
        tasks.push(tokio::spawn(async move {
            let raw = format!("POST /c/{i} HTTP/1.1\r\nContent-Type: text/plain\r\n\r\nbody-{i}");
            send(addr, raw.as_bytes()).await
        }));
    }

    for task in tasks {
        assert_eq!(task.await.unwrap(), b"HTTP/1.1 201 Created\r\n\r\n".to_vec());
    }

    for i in 0..8 {
        let stored = std::fs::read(dir.path().join(format!("c/{i}.txt"))).unwrap();
        assert_eq!(stored, format!("body-{i}").into_bytes());
    }
}
