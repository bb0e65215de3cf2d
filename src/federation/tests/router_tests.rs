//! Unit tests for identifier routing.

use super::{fixture_translator, helper_agent, registry};
use crate::federation::{
    adapters::{
        DisabledAdapter, LocalAdapter, RemoteAdapter,
        memory::{InMemoryAgentStore, InMemoryRegistryClient},
    },
    domain::{
        AdapterKind, CanonicalRecord, ExternalRecord, IdentifierError, RegistryDescriptor,
        RegistryStatus,
    },
    ports::{AdapterError, AgentStore, RegistryClient, RegistryClientResult},
    services::{Router, RouterError},
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

struct Harness {
    router: Router,
    remote: Arc<InMemoryRegistryClient>,
}

#[fixture]
async fn harness() -> Harness {
    let store = Arc::new(InMemoryAgentStore::new());
    store
        .create(&CanonicalRecord {
            agent_id: "financial-analyzer".to_owned(),
            agent_name: "financial-analyzer".to_owned(),
            ..CanonicalRecord::default()
        })
        .await
        .expect("create should succeed");

    let remote = Arc::new(InMemoryRegistryClient::new());
    remote
        .publish(helper_agent())
        .expect("publish should succeed");

    let clock = Arc::new(DefaultClock);
    let router = Router::new(Arc::new(LocalAdapter::new(
        registry("nanda"),
        store,
        Arc::clone(&clock),
    )))
    .with_adapter(Arc::new(RemoteAdapter::new(
        RegistryDescriptor::new(registry("agntcy"), AdapterKind::Remote),
        Arc::clone(&remote),
        fixture_translator(),
        clock,
    )))
    .expect("agntcy should register")
    .with_adapter(Arc::new(DisabledAdapter::new(RegistryDescriptor::new(
        registry("mcp-hub"),
        AdapterKind::Remote,
    ))))
    .expect("mcp-hub should register");

    Harness { router, remote }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn qualified_identifiers_route_to_the_named_registry(#[future] harness: Harness) {
    let harness = harness.await;

    let record = harness
        .router
        .resolve("@agntcy:helper-agent")
        .await
        .expect("remote lookup should succeed");

    assert_eq!(record.agent_id, "@agntcy:helper-agent");
    assert_eq!(record.registry_id, "agntcy");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unqualified_identifiers_route_to_the_local_registry(#[future] harness: Harness) {
    let harness = harness.await;

    let record = harness
        .router
        .resolve("financial-analyzer")
        .await
        .expect("local lookup should succeed");

    assert_eq!(record.registry_id, "nanda");
    assert_eq!(record.source_schema, "nanda");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn local_registry_is_also_addressable_by_prefix(#[future] harness: Harness) {
    let harness = harness.await;

    let record = harness
        .router
        .resolve("@NANDA:financial-analyzer")
        .await
        .expect("qualified local lookup should succeed");

    assert_eq!(record.agent_id, "financial-analyzer");
}

#[rstest]
#[case("@unknown:x", RouterError::UnknownRegistry("unknown".to_owned()))]
#[case("@not a registry:x", RouterError::UnknownRegistry("not a registry".to_owned()))]
#[case("@agntcy", RouterError::UnknownRegistry("@agntcy".to_owned()))]
#[case("", RouterError::InvalidIdentifier(IdentifierError::Empty))]
#[case("@agntcy:", RouterError::InvalidIdentifier(IdentifierError::MissingName("@agntcy:".to_owned())))]
#[tokio::test(flavor = "multi_thread")]
async fn unroutable_identifiers_fail_before_any_lookup(
    #[future] harness: Harness,
    #[case] identifier: &str,
    #[case] expected: RouterError,
) {
    let harness = harness.await;

    let err = harness
        .router
        .resolve(identifier)
        .await
        .expect_err("identifier should not route");

    assert_eq!(err, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn adapter_errors_pass_through_unchanged(#[future] harness: Harness) {
    let harness = harness.await;

    let missing = harness
        .router
        .resolve("@agntcy:ghost")
        .await
        .expect_err("missing agent should fail");
    let disabled = harness
        .router
        .resolve("@mcp-hub:anything")
        .await
        .expect_err("disabled registry should fail");

    assert_eq!(
        missing,
        RouterError::Adapter(AdapterError::not_found(&registry("agntcy"), "ghost"))
    );
    assert!(matches!(disabled, RouterError::Adapter(ref err) if err.is_unavailable()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unreachable_remote_surfaces_unavailable(#[future] harness: Harness) {
    let harness = harness.await;
    harness
        .remote
        .set_unreachable(true)
        .expect("toggle should succeed");

    let err = harness
        .router
        .resolve("@agntcy:helper-agent")
        .await
        .expect_err("unreachable registry should fail");

    assert!(matches!(err, RouterError::Adapter(ref inner) if inner.is_unavailable()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registries_are_listed_in_registration_order(#[future] harness: Harness) {
    let harness = harness.await;

    let listed: Vec<(String, RegistryStatus)> = harness
        .router
        .list_registries()
        .iter()
        .map(|descriptor| (descriptor.registry_id().to_string(), descriptor.status()))
        .collect();

    assert_eq!(
        listed,
        vec![
            ("nanda".to_owned(), RegistryStatus::Active),
            ("agntcy".to_owned(), RegistryStatus::Active),
            ("mcp-hub".to_owned(), RegistryStatus::Disabled),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_health_updates_listed_descriptors(#[future] harness: Harness) {
    let harness = harness.await;
    harness
        .remote
        .set_unreachable(true)
        .expect("toggle should succeed");

    let refreshed = harness.router.refresh_health().await;
    let statuses: Vec<RegistryStatus> = harness
        .router
        .list_registries()
        .iter()
        .map(RegistryDescriptor::status)
        .collect();

    assert_eq!(refreshed.len(), 3);
    assert_eq!(
        statuses,
        vec![
            RegistryStatus::Active,
            RegistryStatus::Unreachable,
            RegistryStatus::Disabled,
        ]
    );
}

#[rstest]
fn duplicate_registries_are_rejected() {
    let store = Arc::new(InMemoryAgentStore::new());
    let local = Arc::new(LocalAdapter::new(
        registry("nanda"),
        store,
        Arc::new(DefaultClock),
    ));

    let err = Router::new(local)
        .with_adapter(Arc::new(DisabledAdapter::new(RegistryDescriptor::new(
            registry("nanda"),
            AdapterKind::Remote,
        ))))
        .expect_err("duplicate registry should be rejected");

    assert_eq!(err, RouterError::DuplicateRegistry(registry("nanda")));
}

/// Sets its flag when the owning future is dropped.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Client whose fetch starts and then never completes.
#[derive(Default)]
struct HangingClient {
    started: Arc<AtomicBool>,
    dropped: Arc<AtomicBool>,
}

#[async_trait]
impl RegistryClient for HangingClient {
    async fn fetch(&self, _name: &str) -> RegistryClientResult<Option<ExternalRecord>> {
        let _flag = DropFlag(Arc::clone(&self.dropped));
        self.started.store(true, Ordering::SeqCst);
        std::future::pending::<()>().await;
        Ok(None)
    }

    async fn ping(&self) -> RegistryClientResult<()> {
        Ok(())
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn aborting_a_resolve_drops_the_in_flight_fetch() {
    let client = Arc::new(HangingClient::default());
    let started = Arc::clone(&client.started);
    let dropped = Arc::clone(&client.dropped);
    let router = Arc::new(
        Router::new(Arc::new(LocalAdapter::new(
            registry("nanda"),
            Arc::new(InMemoryAgentStore::new()),
            Arc::new(DefaultClock),
        )))
        .with_adapter(Arc::new(RemoteAdapter::new(
            RegistryDescriptor::new(registry("agntcy"), AdapterKind::Remote),
            client,
            fixture_translator(),
            Arc::new(DefaultClock),
        )))
        .expect("agntcy should register"),
    );

    let task = tokio::spawn({
        let task_router = Arc::clone(&router);
        async move { task_router.resolve("@agntcy:helper-agent").await }
    });
    tokio::time::timeout(Duration::from_secs(5), async {
        while !started.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("fetch should start");
    assert!(!dropped.load(Ordering::SeqCst));

    task.abort();
    let outcome = task.await.expect_err("aborted task should not complete");

    assert!(outcome.is_cancelled());
    assert!(dropped.load(Ordering::SeqCst));
}
