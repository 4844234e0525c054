use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Time allowed for cut requests to flush their 503 before the server task is dropped.
const FORCE_CLOSE_FLUSH: Duration = Duration::from_millis(500);

pub async fn start_web_server(
    bind_addr: SocketAddr,
    app: Router,
    shutdown: CancellationToken,
    drain_window: Duration,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!(bind_address = %bind_addr, "Web server listening");

    serve(listener, app, shutdown, drain_window).await
}

/// Serves `app` until `shutdown` fires, then gives in-flight requests
/// `drain_window` to finish. Requests still running after that are
/// dropped and answered with 503.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: CancellationToken,
    drain_window: Duration,
) -> anyhow::Result<()> {
    let force_close = CancellationToken::new();

    let app = app
        .layer(middleware::from_fn_with_state(
            force_close.clone(),
            cut_on_force_close,
        ))
        .layer(TraceLayer::new_for_http());

    let graceful = shutdown.clone();
    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move { graceful.cancelled().await });

    let mut handle = tokio::spawn(async move { server.await });

    let drain_deadline = async {
        shutdown.cancelled().await;
        tokio::time::sleep(drain_window).await;
    };

    tokio::select! {
        joined = &mut handle => {
            joined??;
            info!("Web server stopped");
        }
        _ = drain_deadline => {
            warn!(
                drain_ms = drain_window.as_millis() as u64,
                "Drain window elapsed, cutting in-flight requests"
            );
            force_close.cancel();
            if tokio::time::timeout(FORCE_CLOSE_FLUSH, &mut handle).await.is_err() {
                handle.abort();
            }
        }
    }

    Ok(())
}

/// Drops the handler future once `force_close` fires.
async fn cut_on_force_close(
    State(force_close): State<CancellationToken>,
    request: Request,
    next: Next,
) -> Response {
    tokio::select! {
        response = next.run(request) => response,
        _ = force_close.cancelled() => {
            warn!("Request cut at end of drain window");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Instant;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::Notify;

    fn slow_app(started: Arc<Notify>, finished: Arc<AtomicBool>, work: Duration) -> Router {
        Router::new().route(
            "/slow",
            get(move || {
                let started = started.clone();
                let finished = finished.clone();
                async move {
                    started.notify_one();
                    tokio::time::sleep(work).await;
                    finished.store(true, Ordering::SeqCst);
                    "done"
                }
            }),
        )
    }

    async fn send_request(addr: SocketAddr, path: &str) -> TcpStream {
        let mut client = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {} HTTP/1.1\r\nHost: localhost\r\n\r\n", path);
        client.write_all(request.as_bytes()).await.unwrap();
        client
    }

    #[tokio::test]
    async fn test_drain_window_cuts_in_flight_requests() {
        let started = Arc::new(Notify::new());
        let finished = Arc::new(AtomicBool::new(false));
        let app = slow_app(started.clone(), finished.clone(), Duration::from_secs(1));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = CancellationToken::new();
        let server = tokio::spawn(serve(
            listener,
            app,
            shutdown.clone(),
            Duration::from_millis(100),
        ));

        let mut client = send_request(addr, "/slow").await;
        started.notified().await;

        let begin = Instant::now();
        shutdown.cancel();
        server.await.unwrap().unwrap();
        assert!(begin.elapsed() < Duration::from_secs(1));

        let mut response = Vec::new();
        let _ = tokio::time::timeout(Duration::from_secs(1), client.read_to_end(&mut response)).await;
        assert!(String::from_utf8_lossy(&response).starts_with("HTTP/1.1 503"));

        // Past the point where the handler would have completed.
        tokio::time::sleep(Duration::from_millis(1200)).await;
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_requests_inside_drain_window_complete() {
        let started = Arc::new(Notify::new());
        let finished = Arc::new(AtomicBool::new(false));
        let app = slow_app(started.clone(), finished.clone(), Duration::from_millis(50));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = CancellationToken::new();
        let server = tokio::spawn(serve(
            listener,
            app,
            shutdown.clone(),
            Duration::from_secs(2),
        ));

        let mut client = send_request(addr, "/slow").await;
        started.notified().await;
        shutdown.cancel();

        let mut response = Vec::new();
        let _ = tokio::time::timeout(Duration::from_secs(1), client.read_to_end(&mut response)).await;
        server.await.unwrap().unwrap();

        assert!(String::from_utf8_lossy(&response).starts_with("HTTP/1.1 200"));
        assert!(finished.load(Ordering::SeqCst));
    }
}
