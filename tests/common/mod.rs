#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use reference_data_api::api::routes::{Access, routes_for};
use reference_data_api::application::services::auth_service::hash_token;
use reference_data_api::domain::DataError;
use reference_data_api::domain::entities::{
    BoxCode, ConvenienceFee, Denomination, Division, InstitutionRole, MiscellaneousText,
    OfficeCode, School, WorkTask,
};
use reference_data_api::domain::repositories::{
    ApiToken, NewApiToken, ReferenceDataRepository, TokenRepository, WorkTaskRepository,
};
use reference_data_api::infrastructure::cache::{CacheResult, CacheService};
use reference_data_api::routes::app_router;
use reference_data_api::state::{AppState, ServiceSettings};

pub const SIGNING_SECRET: &str = "test-signing-secret";
pub const TOKEN: &str = "advisor-token";
pub const SUPERVISOR_TOKEN: &str = "supervisor-token";
pub const EXPIRED_TOKEN: &str = "expired-token";
pub const ADVISOR_ID: &str = "0000123";
pub const SUPERVISOR_ID: &str = "0000999";

// ─── Reference data ─────────────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeReferenceData {
    pub denominations: Vec<Denomination>,
    pub divisions: Vec<Division>,
    pub schools: Vec<School>,
    pub office_codes: Vec<OfficeCode>,
    pub convenience_fees: Vec<ConvenienceFee>,
    pub miscellaneous_text: Vec<MiscellaneousText>,
    pub box_codes: Vec<BoxCode>,
    pub roles: Vec<InstitutionRole>,
    /// Returned by every read instead of data when set.
    pub failure: Option<DataError>,
    pub database_down: bool,
    pub reads: AtomicUsize,
}

impl FakeReferenceData {
    fn read<T: Clone>(&self, items: &[T]) -> Result<Vec<T>, DataError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(items.to_vec()),
        }
    }
}

#[async_trait]
impl ReferenceDataRepository for FakeReferenceData {
    async fn denominations(&self) -> Result<Vec<Denomination>, DataError> {
        self.read(&self.denominations)
    }
    async fn divisions(&self) -> Result<Vec<Division>, DataError> {
        self.read(&self.divisions)
    }
    async fn schools(&self) -> Result<Vec<School>, DataError> {
        self.read(&self.schools)
    }
    async fn office_codes(&self) -> Result<Vec<OfficeCode>, DataError> {
        self.read(&self.office_codes)
    }
    async fn convenience_fees(&self) -> Result<Vec<ConvenienceFee>, DataError> {
        self.read(&self.convenience_fees)
    }
    async fn miscellaneous_text(&self) -> Result<Vec<MiscellaneousText>, DataError> {
        self.read(&self.miscellaneous_text)
    }
    async fn box_codes(&self) -> Result<Vec<BoxCode>, DataError> {
        self.read(&self.box_codes)
    }
    async fn institution_roles(&self) -> Result<Vec<InstitutionRole>, DataError> {
        self.read(&self.roles)
    }
    async fn ping(&self) -> Result<(), DataError> {
        if self.database_down {
            Err(DataError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn denomination(code: &str, description: &str) -> Denomination {
    Denomination {
        code: code.to_string(),
        description: description.to_string(),
    }
}

// ─── Work tasks ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeWorkTasks {
    pub roles: HashMap<String, Vec<String>>,
    pub person_tasks: HashMap<String, Vec<WorkTask>>,
    pub role_tasks: HashMap<String, Vec<WorkTask>>,
    pub failure: Option<DataError>,
}

impl FakeWorkTasks {
    fn check(&self) -> Result<(), DataError> {
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WorkTaskRepository for FakeWorkTasks {
    async fn roles_for_person(&self, person_id: &str) -> Result<Vec<String>, DataError> {
        self.check()?;
        Ok(self.roles.get(person_id).cloned().unwrap_or_default())
    }

    async fn tasks_for_person(&self, person_id: &str) -> Result<Vec<WorkTask>, DataError> {
        self.check()?;
        Ok(self.person_tasks.get(person_id).cloned().unwrap_or_default())
    }

    async fn tasks_for_roles(&self, role_ids: &[String]) -> Result<Vec<WorkTask>, DataError> {
        self.check()?;
        Ok(role_ids
            .iter()
            .filter_map(|r| self.role_tasks.get(r))
            .flatten()
            .cloned()
            .collect())
    }
}

pub fn task(id: &str, description: &str) -> WorkTask {
    WorkTask {
        id: id.to_string(),
        category: "APPROVAL".to_string(),
        description: description.to_string(),
        process_code: None,
        start_date: None,
    }
}

// ─── Tokens ─────────────────────────────────────────────────────────────────

pub struct FakeTokens {
    tokens: Mutex<Vec<ApiToken>>,
}

impl FakeTokens {
    fn stored(
        id: i64,
        raw: &str,
        person_id: &str,
        permissions: &[&str],
        expires_at: Option<DateTime<Utc>>,
    ) -> ApiToken {
        ApiToken {
            id,
            name: format!("token-{id}"),
            token_hash: hash_token(SIGNING_SECRET, raw),
            person_id: person_id.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            created_at: Utc::now(),
            expires_at,
            revoked_at: None,
        }
    }

    /// An advisor token, a supervisor token with `VIEW.ANY.PERSON.WORK.TASKS`, and an
    /// expired token.
    pub fn standard() -> Self {
        Self {
            tokens: Mutex::new(vec![
                Self::stored(1, TOKEN, ADVISOR_ID, &[], None),
                Self::stored(
                    2,
                    SUPERVISOR_TOKEN,
                    SUPERVISOR_ID,
                    &["VIEW.ANY.PERSON.WORK.TASKS"],
                    None,
                ),
                Self::stored(
                    3,
                    EXPIRED_TOKEN,
                    ADVISOR_ID,
                    &[],
                    Some(Utc::now() - chrono::Duration::hours(1)),
                ),
            ]),
        }
    }
}

#[async_trait]
impl TokenRepository for FakeTokens {
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<ApiToken>, DataError> {
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens.iter().find(|t| t.token_hash == token_hash).cloned())
    }

    async fn update_last_used(&self, _token_hash: &str) -> Result<(), DataError> {
        Ok(())
    }

    async fn create_token(&self, new_token: NewApiToken) -> Result<ApiToken, DataError> {
        let mut tokens = self.tokens.lock().unwrap();
        let token = ApiToken {
            id: tokens.len() as i64 + 1,
            name: new_token.name,
            token_hash: new_token.token_hash,
            person_id: new_token.person_id,
            permissions: new_token.permissions,
            created_at: Utc::now(),
            expires_at: new_token.expires_at,
            revoked_at: None,
        };
        tokens.push(token.clone());
        Ok(token)
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, DataError> {
        Ok(self.tokens.lock().unwrap().clone())
    }

    async fn revoke_by_name(&self, name: &str) -> Result<bool, DataError> {
        let mut tokens = self.tokens.lock().unwrap();
        match tokens
            .iter_mut()
            .find(|t| t.name == name && t.revoked_at.is_none())
        {
            Some(t) => {
                t.revoked_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ─── Cache ──────────────────────────────────────────────────────────────────

/// In-process stand-in for Redis.
#[derive(Default)]
pub struct MemoryCache {
    pub entries: Mutex<HashMap<String, String>>,
    pub unreachable: AtomicBool,
}

impl MemoryCache {
    pub fn unreachable() -> Self {
        let cache = Self::default();
        cache.unreachable.store(true, Ordering::SeqCst);
        cache
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<bool> {
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }

    async fn health_check(&self) -> bool {
        !self.unreachable.load(Ordering::SeqCst)
    }
}

// ─── App ────────────────────────────────────────────────────────────────────

pub struct TestApp {
    pub reference_data: Arc<FakeReferenceData>,
    pub work_tasks: Arc<FakeWorkTasks>,
    pub cache: Arc<MemoryCache>,
    pub settings: ServiceSettings,
}

impl Default for TestApp {
    fn default() -> Self {
        Self {
            reference_data: Arc::new(FakeReferenceData::default()),
            work_tasks: Arc::new(FakeWorkTasks::default()),
            cache: Arc::new(MemoryCache::default()),
            settings: ServiceSettings::default(),
        }
    }
}

impl TestApp {
    pub fn with_reference_data(mut self, data: FakeReferenceData) -> Self {
        self.reference_data = Arc::new(data);
        self
    }

    pub fn with_work_tasks(mut self, work_tasks: FakeWorkTasks) -> Self {
        self.work_tasks = Arc::new(work_tasks);
        self
    }

    pub fn with_cache(mut self, cache: MemoryCache) -> Self {
        self.cache = Arc::new(cache);
        self
    }

    pub fn with_detailed_health_check(mut self) -> Self {
        self.settings.detailed_health_check = true;
        self
    }

    pub fn state(&self) -> AppState {
        AppState::new(
            self.reference_data.clone(),
            self.work_tasks.clone(),
            Arc::new(FakeTokens::standard()),
            self.cache.clone(),
            SIGNING_SECRET.to_string(),
            3600,
            self.settings.clone(),
        )
    }

    /// Every route from the route table, without rate limiting.
    pub fn server(&self) -> TestServer {
        let state = self.state();
        let app = Router::new()
            .merge(routes_for(&state, Access::Anonymous))
            .merge(routes_for(&state, Access::Authenticated))
            .with_state(state);
        TestServer::new(app).unwrap()
    }

    /// The production router, rate limiting and trailing-slash handling included.
    /// Served over a real socket so the client address is available.
    pub fn full_server(&self) -> TestServer {
        let app = app_router(self.state(), true);
        TestServer::builder()
            .http_transport()
            .build(ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app))
            .unwrap()
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
