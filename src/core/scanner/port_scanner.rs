// src/core/scanner/port_scanner.rs

use std::future::Future;
use std::io;
use std::time::Duration;

use futures::future::join_all;
use tokio::net::TcpStream;
use tokio::time::{self, Instant};
use tracing::{debug, info};

use crate::core::error::ProbeError;
use crate::core::models::{PortCheckResult, PortScanReport};

/// Attempts a single TCP connect to `(host, port)` bounded by `timeout`.
///
/// Exactly one outcome is produced: open, timeout, or the socket error. The
/// socket is closed on every path: on success the stream is dropped here, on
/// timeout the pending connect future (and the socket it owns) is dropped by
/// `tokio::time::timeout`. No retries.
pub async fn probe_port(host: &str, port: u16, timeout: Duration) -> PortCheckResult {
    probe_with(port, timeout, TcpStream::connect((host, port))).await
}

async fn probe_with<F>(port: u16, timeout: Duration, connect: F) -> PortCheckResult
where
    F: Future<Output = io::Result<TcpStream>>,
{
    let outcome = match time::timeout(timeout, connect).await {
        Ok(Ok(stream)) => {
            drop(stream);
            Ok(())
        }
        Ok(Err(e)) => Err(ProbeError::Socket(e)),
        Err(_) => Err(ProbeError::Timeout),
    };

    match outcome {
        Ok(()) => {
            debug!(port, "Port open.");
            PortCheckResult::open(port)
        }
        Err(e) => {
            debug!(port, error = %e, "Port not reachable.");
            PortCheckResult::closed(port, Some(e.to_string()))
        }
    }
}

/// Probes every port concurrently and returns the results in input order.
///
/// All probes run on the caller's task; wall time tracks the slowest probe,
/// not the sum.
pub async fn scan_ports(host: &str, ports: &[u16], timeout: Duration) -> PortScanReport {
    info!(target = host, ports = ports.len(), "Starting port scan.");
    scan_with(ports, timeout, |port| TcpStream::connect((host, port))).await
}

pub(crate) async fn scan_with<C, F>(ports: &[u16], timeout: Duration, connect: C) -> PortScanReport
where
    C: Fn(u16) -> F,
    F: Future<Output = io::Result<TcpStream>>,
{
    let start = Instant::now();

    let checked_ports =
        join_all(ports.iter().map(|&port| probe_with(port, timeout, connect(port)))).await;

    let report = PortScanReport {
        checked_ports,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        open = report.open_count(),
        duration_ms = report.duration_ms,
        "Port scan finished."
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::pending;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn stalled_connect_reports_timeout() {
        let result = probe_with(
            3306,
            Duration::from_millis(50),
            pending::<io::Result<TcpStream>>(),
        )
        .await;
        assert_eq!(result, PortCheckResult::closed(3306, Some("timeout".to_string())));
    }

    #[tokio::test]
    async fn connect_error_reports_message() {
        let refused = async {
            Err::<TcpStream, _>(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
        };
        let result = probe_with(21, Duration::from_secs(1), refused).await;
        assert!(!result.open);
        assert_eq!(result.error.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn stalled_ports_time_out_together() {
        let ports = [21, 22, 25, 80, 443, 3306];
        let timeout = Duration::from_millis(300);
        let start = Instant::now();

        let report = scan_with(&ports, timeout, |_| pending::<io::Result<TcpStream>>()).await;

        let elapsed = start.elapsed();
        assert!(elapsed >= timeout, "finished before the timeout: {elapsed:?}");
        // Sequential probing would take 6 * 300ms.
        assert!(elapsed < timeout * 3, "probes did not overlap: {elapsed:?}");
        let observed: Vec<u16> = report.checked_ports.iter().map(|p| p.port).collect();
        assert_eq!(observed, ports);
        assert!(
            report
                .checked_ports
                .iter()
                .all(|p| !p.open && p.error.as_deref() == Some("timeout"))
        );
    }

    #[tokio::test]
    async fn connected_socket_is_closed_when_probe_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Holds a connected socket and never resolves.
        let connect = async move {
            let stream = TcpStream::connect(addr).await?;
            pending::<()>().await;
            Ok::<TcpStream, io::Error>(stream)
        };

        let result = probe_with(addr.port(), Duration::from_millis(200), connect).await;

        assert_eq!(result, PortCheckResult::closed(addr.port(), Some("timeout".to_string())));
        assert_peer_sees_eof(&listener).await;
    }

    #[tokio::test]
    async fn connected_socket_is_closed_when_caller_cancels() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let connect = async move {
            let stream = TcpStream::connect(addr).await?;
            pending::<()>().await;
            Ok::<TcpStream, io::Error>(stream)
        };

        let outer = time::timeout(
            Duration::from_millis(200),
            probe_with(addr.port(), Duration::from_secs(30), connect),
        )
        .await;

        assert!(outer.is_err(), "the caller's timeout should fire first");
        assert_peer_sees_eof(&listener).await;
    }

    async fn assert_peer_sees_eof(listener: &TcpListener) {
        let (mut accepted, _) = time::timeout(Duration::from_secs(2), listener.accept())
            .await
            .expect("connection was never established")
            .unwrap();
        let mut buf = [0u8; 16];
        let read = time::timeout(Duration::from_secs(2), accepted.read(&mut buf))
            .await
            .expect("socket was left open");
        assert_eq!(read.unwrap(), 0);
    }

    #[tokio::test]
    async fn unresolvable_host_is_an_error_not_a_panic() {
        let result = probe_port("name.invalid", 22, Duration::from_secs(2)).await;
        assert!(!result.open);
        assert!(result.error.is_some());
    }

    #[tokio::test]
    async fn empty_port_list_yields_empty_report() {
        let report = scan_ports("127.0.0.1", &[], Duration::from_millis(100)).await;
        assert!(report.checked_ports.is_empty());
    }
}
