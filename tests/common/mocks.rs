#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use karuta_archive::{
    AdGrantGateway, AdUnlockGrant, AppError, ClockSource, EntitlementGateway,
    RemoteCatalogGateway, RemoteCatalogRecord,
};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use tokio::sync::RwLock;

pub struct MockRemoteGateway {
    response: RwLock<Result<Vec<RemoteCatalogRecord>, String>>,
    fetch_count: AtomicU32,
}

impl MockRemoteGateway {
    pub fn with_records(records: Vec<RemoteCatalogRecord>) -> Self {
        Self {
            response: RwLock::new(Ok(records)),
            fetch_count: AtomicU32::new(0),
        }
    }

    pub async fn set_records(&self, records: Vec<RemoteCatalogRecord>) {
        *self.response.write().await = Ok(records);
    }

    pub async fn fail_with(&self, message: &str) {
        *self.response.write().await = Err(message.to_string());
    }

    pub fn fetches(&self) -> u32 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteCatalogGateway for MockRemoteGateway {
    async fn fetch_catalog(&self) -> Result<Vec<RemoteCatalogRecord>, AppError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        match self.response.read().await.clone() {
            Ok(records) => Ok(records),
            Err(message) => Err(AppError::RemoteFetch(message)),
        }
    }
}

pub struct MockEntitlementGateway {
    entitled: AtomicBool,
}

impl MockEntitlementGateway {
    pub fn new(entitled: bool) -> Self {
        Self {
            entitled: AtomicBool::new(entitled),
        }
    }

    pub fn set(&self, entitled: bool) {
        self.entitled.store(entitled, Ordering::SeqCst);
    }
}

#[async_trait]
impl EntitlementGateway for MockEntitlementGateway {
    async fn is_entitled(&self) -> Result<bool, AppError> {
        Ok(self.entitled.load(Ordering::SeqCst))
    }
}

#[derive(Default)]
pub struct MockGrantGateway {
    grants: RwLock<Vec<AdUnlockGrant>>,
}

impl MockGrantGateway {
    pub async fn add(&self, grant: AdUnlockGrant) {
        self.grants.write().await.push(grant);
    }
}

#[async_trait]
impl AdGrantGateway for MockGrantGateway {
    async fn list_active_grants(&self) -> Result<Vec<AdUnlockGrant>, AppError> {
        Ok(self.grants.read().await.clone())
    }
}

pub struct FixedClock(pub NaiveDate);

impl ClockSource for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn remote_record(id: &str, date: Option<&str>) -> RemoteCatalogRecord {
    RemoteCatalogRecord {
        id: id.to_string(),
        category: "classic".to_string(),
        item_date: date.map(str::to_string),
        difficulty: Some("medium".to_string()),
        is_special: false,
    }
}
