#![allow(dead_code)]

use tokio::net::TcpListener;

/// A bound listener on an ephemeral loopback port.
pub async fn open_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// An ephemeral loopback port with nothing listening on it.
pub async fn closed_port() -> u16 {
    let (listener, port) = open_listener().await;
    drop(listener);
    port
}
