use crate::CliResult;

use eco_client::{ClientResult, CredentialClient, CredentialFlow, CredentialForm, FlowOutcome};
use eco_config::Config;
use eco_core::{
    ActivityLog, ActivityRecord, BalanceTiers, MemoryNotifier, Notification, Notifier,
    PriceTable, Scanner, SessionStore, SharedSession,
};
use eco_store::{COLLECTIONS_KEY, Language, LocalStore, TOKEN_KEY, USERNAME_KEY};

use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::RwLock;

/// Everything one dashboard run shares: the session, the collection log,
/// the scanner, the remote flow and the local storage mirror.
pub struct App {
    pub(crate) session: SharedSession,
    pub(crate) activity: Arc<RwLock<ActivityLog>>,
    pub(crate) scanner: Scanner,
    pub(crate) flow: CredentialFlow,
    pub(crate) store: LocalStore,
    pub(crate) notifier: Arc<MemoryNotifier>,
}

impl App {
    /// Wires the app from validated configuration.
    ///
    /// `server` overrides `api.base_url`. The collection log is restored
    /// from storage; balances always start from the configured tiers.
    pub fn new(config: &Config, config_dir: &Path, server: Option<&str>) -> CliResult<Self> {
        let store = LocalStore::open(config.storage_path(config_dir))?;

        let records = match store.get_json::<Vec<ActivityRecord>>(COLLECTIONS_KEY) {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                warn!("Ignoring stored collection log: {e}");
                Vec::new()
            }
        };
        debug!("Restored {} collection records", records.len());
        let activity = Arc::new(RwLock::new(ActivityLog::from_records(
            config.activity_log.capacity,
            records,
        )));

        let tiers = BalanceTiers {
            end_user: config.session.end_user_balance,
            collection_point: config.session.collection_point_balance,
            factory: config.session.factory_balance,
        };
        let session = SessionStore::new(tiers, config.session.location.clone()).shared();

        let notifier = Arc::new(MemoryNotifier::new());
        let prices = PriceTable::new(config.pricing.per_kg, config.pricing.per_unit);
        let scanner = Scanner::new(
            Arc::clone(&session),
            Arc::clone(&activity),
            prices,
            config.scan.delay(),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        );

        let base_url = server.unwrap_or(config.api.base_url.as_str());
        let client = CredentialClient::new(base_url, config.api.timeout())?;
        info!("Authentication service: {}", client.base_url);
        let flow = CredentialFlow::new(client, Arc::clone(&session));

        Ok(Self {
            session,
            activity,
            scanner,
            flow,
            store,
            notifier,
        })
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn language(&self) -> Language {
        self.store.language()
    }

    /// Removes and returns the notifications raised since the last call.
    pub fn take_notifications(&self) -> Vec<Notification> {
        self.notifier.drain()
    }

    /// Runs the remote login/registration flow, mirroring the token.
    pub async fn submit_credentials(
        &mut self,
        form: &mut CredentialForm,
    ) -> ClientResult<FlowOutcome> {
        self.flow.submit(form, Some(&mut self.store)).await
    }

    pub(crate) fn remember_username(&mut self, name: &str) {
        if let Err(e) = self.store.set(USERNAME_KEY, name) {
            warn!("Failed to store username: {e}");
        }
    }

    pub(crate) fn forget_token(&mut self) {
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            warn!("Failed to clear session token: {e}");
        }
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        if let Err(e) = self.store.set_language(language) {
            warn!("Failed to store language: {e}");
        }
    }

    /// Mirrors the collection log into storage.
    pub(crate) async fn persist_activity(&mut self) {
        let records = self.activity.read().await.to_vec();
        if let Err(e) = self.store.set_json(COLLECTIONS_KEY, &records) {
            warn!("Failed to store collection log: {e}");
        }
    }
}
