//! Shared world state for routing BDD scenarios.

use camino::Utf8PathBuf;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use switchboard::config::SwitchboardConfig;
use switchboard::federation::{
    adapters::memory::InMemoryAgentStore, domain::CanonicalRecord, services::RouterError,
};
use switchboard::{RegistryClients, Switchboard};

/// Scenario world for routing behaviour tests.
pub struct RoutingWorld {
    /// Configuration the switchboard is built from.
    pub config: SwitchboardConfig,
    /// Local agent store.
    pub store: Arc<InMemoryAgentStore>,
    /// Clients for enabled remote registries.
    pub clients: RegistryClients,
    /// Assembled switchboard, once built.
    pub switchboard: Option<Switchboard>,
    /// Result of the last resolution.
    pub last_result: Option<Result<CanonicalRecord, RouterError>>,
}

impl RoutingWorld {
    /// Creates a world with the fixture taxonomy and no remote registries.
    #[must_use]
    pub fn new() -> Self {
        let mut config = SwitchboardConfig::default();
        config.taxonomy.schema_dir = Some(
            Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/taxonomy/schema"),
        );
        Self {
            config,
            store: Arc::new(InMemoryAgentStore::new()),
            clients: RegistryClients::new(),
            switchboard: None,
            last_result: None,
        }
    }

    /// Returns the assembled switchboard.
    pub fn switchboard(&self) -> Result<&Switchboard, eyre::Report> {
        self.switchboard
            .as_ref()
            .ok_or_else(|| eyre::eyre!("switchboard has not been assembled"))
    }

    /// Returns the last resolution result.
    pub fn last_result(&self) -> Result<&Result<CanonicalRecord, RouterError>, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no identifier has been resolved"))
    }
}

impl Default for RoutingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RoutingWorld {
    RoutingWorld::default()
}

/// Shared clock for assembled switchboards.
pub fn clock() -> Arc<DefaultClock> {
    Arc::new(DefaultClock)
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
