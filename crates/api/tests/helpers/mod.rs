#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    extract::connect_info::MockConnectInfo,
    http::{Method, Request, StatusCode},
    Router,
};
use dnsaudit_api::{create_api_routes, AppState};
use dnsaudit_application::ports::{AddressResolver, ResolutionHistoryRepository};
use dnsaudit_application::use_cases::{GetHistoryUseCase, LookupDomainUseCase};
use dnsaudit_domain::{DomainError, ResolutionEvent};
use dnsaudit_infrastructure::metrics::detached_handle;
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

pub const PEER: ([u8; 4], u16) = ([203, 0, 113, 7], 54321);

#[derive(Clone, Default)]
pub struct MockAddressResolver {
    responses: Arc<RwLock<HashMap<String, Vec<Ipv4Addr>>>>,
    stalled: Arc<RwLock<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl MockAddressResolver {
    pub async fn set_response(&self, domain: &str, addresses: Vec<Ipv4Addr>) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), addresses);
    }

    /// Lookups of `domain` report a resolver timeout.
    pub async fn set_stalled(&self, domain: &str) {
        self.stalled.write().await.push(domain.to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressResolver for MockAddressResolver {
    async fn resolve_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.stalled.read().await.iter().any(|d| d == domain) {
            return Err(DomainError::ResolutionTimeout(domain.to_string()));
        }
        self.responses
            .read()
            .await
            .get(domain)
            .cloned()
            .ok_or_else(|| DomainError::ResolutionFailed(format!("no such host: {}", domain)))
    }
}

#[derive(Clone, Default)]
pub struct MockHistoryRepository {
    events: Arc<RwLock<Vec<ResolutionEvent>>>,
    fail_writes: Arc<RwLock<bool>>,
    fail_reads: Arc<RwLock<bool>>,
}

impl MockHistoryRepository {
    pub async fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write().await = fail;
    }

    pub async fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.write().await = fail;
    }

    pub async fn insert(&self, event: ResolutionEvent) {
        self.events.write().await.push(event);
    }

    pub async fn stored(&self) -> Vec<ResolutionEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl ResolutionHistoryRepository for MockHistoryRepository {
    async fn append(&self, event: &ResolutionEvent) -> Result<(), DomainError> {
        if *self.fail_writes.read().await {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        self.events.write().await.push(event.clone());
        Ok(())
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<ResolutionEvent>, DomainError> {
        if *self.fail_reads.read().await {
            return Err(DomainError::CorruptRecord("bad blob".to_string()));
        }
        let mut events = self.events.read().await.clone();
        events.reverse();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        events.truncate(limit as usize);
        Ok(events)
    }
}

pub struct TestApp {
    pub router: Router,
    pub resolver: MockAddressResolver,
    pub repo: MockHistoryRepository,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_kubernetes(false).await
    }

    pub async fn with_kubernetes(kubernetes: bool) -> Self {
        let resolver = MockAddressResolver::default();
        resolver
            .set_response(
                "example.com",
                vec![Ipv4Addr::new(93, 184, 216, 34), Ipv4Addr::new(93, 184, 216, 35)],
            )
            .await;
        let repo = MockHistoryRepository::default();

        let state = AppState {
            lookup: Arc::new(LookupDomainUseCase::new(
                Arc::new(resolver.clone()),
                Arc::new(repo.clone()),
            )),
            get_history: Arc::new(GetHistoryUseCase::new(Arc::new(repo.clone()))),
            metrics: detached_handle(),
            kubernetes,
        };

        let router = create_api_routes(state).layer(MockConnectInfo(SocketAddr::from(PEER)));

        Self {
            router,
            resolver,
            repo,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Body) -> (StatusCode, Bytes) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Bytes) {
        self.send(Method::GET, uri, Body::empty()).await
    }

    pub async fn post_json(&self, uri: &str, json: &str) -> (StatusCode, Bytes) {
        self.send(Method::POST, uri, Body::from(json.to_string()))
            .await
    }
}

pub fn error_message(body: &Bytes) -> String {
    let value: serde_json::Value = serde_json::from_slice(body).unwrap();
    value["message"].as_str().unwrap().to_string()
}
