#![allow(dead_code)]

use async_trait::async_trait;
use dnsaudit_application::ports::{AddressResolver, ResolutionHistoryRepository};
use dnsaudit_domain::{DomainError, ResolutionEvent};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock AddressResolver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockAddressResolver {
    responses: Arc<RwLock<HashMap<String, Vec<Ipv4Addr>>>>,
    calls: Arc<AtomicUsize>,
}

impl MockAddressResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, domain: &str, addresses: Vec<Ipv4Addr>) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), addresses);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressResolver for MockAddressResolver {
    async fn resolve_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .read()
            .await
            .get(domain)
            .cloned()
            .ok_or_else(|| DomainError::ResolutionFailed(format!("no such host: {}", domain)))
    }
}

// ============================================================================
// Mock ResolutionHistoryRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockHistoryRepository {
    events: Arc<RwLock<Vec<ResolutionEvent>>>,
    fail_writes: Arc<RwLock<bool>>,
    fail_reads: Arc<RwLock<bool>>,
    appends: Arc<AtomicUsize>,
}

impl MockHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_events(events: Vec<ResolutionEvent>) -> Self {
        let repo = Self::new();
        *repo.events.write().await = events;
        repo
    }

    pub async fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write().await = fail;
    }

    pub async fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.write().await = fail;
    }

    pub async fn stored(&self) -> Vec<ResolutionEvent> {
        self.events.read().await.clone()
    }

    /// Append attempts, successful or not
    pub fn appends(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResolutionHistoryRepository for MockHistoryRepository {
    async fn append(&self, event: &ResolutionEvent) -> Result<(), DomainError> {
        self.appends.fetch_add(1, Ordering::SeqCst);
        if *self.fail_writes.read().await {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        self.events.write().await.push(event.clone());
        Ok(())
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<ResolutionEvent>, DomainError> {
        if *self.fail_reads.read().await {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        let mut events = self.events.read().await.clone();
        // Latest insert first among same-second ties
        events.reverse();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        events.truncate(limit as usize);
        Ok(events)
    }
}

pub fn make_event(domain: &str, created_at: i64) -> ResolutionEvent {
    ResolutionEvent::new(
        domain,
        "192.168.1.10".parse().unwrap(),
        vec![Ipv4Addr::new(10, 0, 0, 1)],
        created_at,
    )
}
