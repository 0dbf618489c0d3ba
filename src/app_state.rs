//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::stores::{BudgetGoalStore, LedgerStore};

#[derive(Clone)]
struct JwtKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

/// The state of the REST server: the in-memory stores plus the keys for
/// signing and verifying bearer tokens.
///
/// Created once at process start and torn down with the process; the
/// stores hold no state beyond the process lifetime.
#[derive(Clone)]
pub struct AppState {
    ledger: Arc<Mutex<LedgerStore>>,
    budget_goals: Arc<Mutex<BudgetGoalStore>>,
    jwt_keys: JwtKeys,
}

impl AppState {
    /// Create the server state from the token-signing secret.
    ///
    /// The ledger starts empty; the budget goals start from the default
    /// goal set.
    pub fn new(jwt_secret: &str) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(LedgerStore::new())),
            budget_goals: Arc::new(Mutex::new(BudgetGoalStore::with_defaults())),
            jwt_keys: JwtKeys {
                encoding_key: EncodingKey::from_secret(jwt_secret.as_ref()),
                decoding_key: DecodingKey::from_secret(jwt_secret.as_ref()),
            },
        }
    }

    /// The shared transaction ledger.
    pub fn ledger(&self) -> &Mutex<LedgerStore> {
        &self.ledger
    }

    /// The shared budget goals.
    pub fn budget_goals(&self) -> &Mutex<BudgetGoalStore> {
        &self.budget_goals
    }

    /// The encoding key for bearer tokens.
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.jwt_keys.encoding_key
    }

    /// The decoding key for bearer tokens.
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.jwt_keys.decoding_key
    }
}
