//! Given steps for routing BDD scenarios.

use super::world::{RoutingWorld, clock, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use std::sync::Arc;
use switchboard::Switchboard;
use switchboard::config::RemoteRegistryConfig;
use switchboard::federation::{
    adapters::memory::InMemoryRegistryClient,
    domain::{CanonicalRecord, ExternalRecord, ExternalSkill, Locator, RegistryId},
    ports::{AgentStore, RegistryClient},
};

#[given(r#"a remote registry "{registry}" publishing agent "{name}""#)]
fn remote_registry_publishing(
    world: &mut RoutingWorld,
    registry: String,
    name: String,
) -> Result<(), eyre::Report> {
    let registry_id = RegistryId::new(registry.as_str()).wrap_err("parse registry id")?;
    let client = Arc::new(InMemoryRegistryClient::new());
    client
        .publish(ExternalRecord {
            name: name.clone(),
            version: "v1.0.0".to_owned(),
            schema_version: "1.0.0".to_owned(),
            skills: vec![ExternalSkill {
                id: 102,
                name: "natural_language_processing/natural_language_generation".to_owned(),
            }],
            locators: vec![Locator::new(
                "source_code",
                format!("https://github.com/example/{name}"),
            )],
            ..ExternalRecord::default()
        })
        .wrap_err("publish remote record")?;
    world
        .clients
        .insert(registry_id, client as Arc<dyn RegistryClient>);
    world.config.registries.push(RemoteRegistryConfig::new(registry));
    Ok(())
}

#[given(r#"a disabled remote registry "{registry}""#)]
fn disabled_remote_registry(world: &mut RoutingWorld, registry: String) {
    let mut remote = RemoteRegistryConfig::new(registry);
    remote.enabled = false;
    world.config.registries.push(remote);
}

#[given(r#"a local agent named "{name}""#)]
fn local_agent_named(world: &mut RoutingWorld, name: String) -> Result<(), eyre::Report> {
    let record = CanonicalRecord {
        agent_id: name.clone(),
        agent_name: name,
        ..CanonicalRecord::default()
    };
    run_async(world.store.create(&record)).wrap_err("seed local agent")?;
    Ok(())
}

#[given("the switchboard is assembled")]
fn switchboard_is_assembled(world: &mut RoutingWorld) -> Result<(), eyre::Report> {
    let switchboard = Switchboard::from_config(
        &world.config,
        Arc::clone(&world.store),
        &world.clients,
        &clock(),
    )
    .wrap_err("assemble switchboard")?;
    world.switchboard = Some(switchboard);
    Ok(())
}
