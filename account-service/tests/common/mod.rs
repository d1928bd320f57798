use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use account_service::domain::account::errors::RepositoryError;
use account_service::domain::account::models::UserRecord;
use account_service::domain::account::ports::AuthServicePort;
use account_service::domain::account::ports::UserRepository;
use account_service::domain::account::service::AuthService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::hasher::Argon2CredentialHasher;
use account_service::outbound::repositories::user::check_record;
use async_trait::async_trait;
use auth::TokenIssuer;

/// Signing secret shared by the spawned service and the assertions.
pub const TEST_SECRET: &[u8] = b"test-secret-key-for-token-signing-0123456789";

/// Test application that spawns the real router on a random port.
///
/// Persistence is an in-memory store with the same uniqueness and schema
/// semantics as the Postgres adapter, so the suite runs the full HTTP
/// surface with real hashing and token issuance and no infrastructure.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(Argon2CredentialHasher::new());

        let auth_service: Arc<dyn AuthServicePort> = Arc::new(AuthService::new(
            repository,
            hasher,
            TokenIssuer::new(TEST_SECRET),
            24,
        ));

        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_issuer: TokenIssuer::new(TEST_SECRET),
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}

/// In-memory implementation of the repository port.
///
/// Insert-if-absent under a single lock mirrors the database's unique
/// constraint: of two racing inserts for one email, exactly one wins and
/// the other observes a violation.
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, record: UserRecord) -> Result<(), RepositoryError> {
        check_record(&record)?;

        let mut users = self.users.lock().expect("users lock poisoned");
        match users.entry(record.email.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::UniqueViolation {
                constraint: "users_email_key".to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let users = self.users.lock().expect("users lock poisoned");
        Ok(users.get(email).cloned())
    }
}
