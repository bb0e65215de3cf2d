//! Then steps for routing BDD scenarios.

use super::world::RoutingWorld;
use rstest_bdd_macros::then;
use switchboard::federation::{
    domain::{CanonicalRecord, RegistryStatus},
    services::RouterError,
};
use switchboard::taxonomy::domain::Capability;

fn resolved(world: &RoutingWorld) -> Result<&CanonicalRecord, eyre::Report> {
    world
        .last_result()?
        .as_ref()
        .map_err(|err| eyre::eyre!("resolution failed: {err}"))
}

#[then(r#"the resolved record has agent id "{agent_id}""#)]
fn record_has_agent_id(world: &RoutingWorld, agent_id: String) -> Result<(), eyre::Report> {
    let record = resolved(world)?;
    if record.agent_id != agent_id {
        return Err(eyre::eyre!(
            "expected agent id {agent_id}, found {}",
            record.agent_id
        ));
    }
    Ok(())
}

#[then(r#"the resolved record comes from registry "{registry}""#)]
fn record_from_registry(world: &RoutingWorld, registry: String) -> Result<(), eyre::Report> {
    let record = resolved(world)?;
    if record.registry_id != registry {
        return Err(eyre::eyre!(
            "expected registry {registry}, found {}",
            record.registry_id
        ));
    }
    Ok(())
}

#[then(r#"the resolved record maps skill "{skill}""#)]
fn record_maps_skill(world: &RoutingWorld, skill: String) -> Result<(), eyre::Report> {
    let record = resolved(world)?;
    let mapped = record
        .capabilities
        .iter()
        .filter_map(Capability::mapping)
        .any(|mapping| mapping.skill_id == skill);
    if !mapped {
        return Err(eyre::eyre!("expected a mapping to {skill}"));
    }
    Ok(())
}

#[then(r#"resolution fails with an unknown registry error for "{registry}""#)]
fn fails_with_unknown_registry(world: &RoutingWorld, registry: String) -> Result<(), eyre::Report> {
    match world.last_result()? {
        Err(RouterError::UnknownRegistry(found)) if *found == registry => Ok(()),
        other => Err(eyre::eyre!("expected unknown registry {registry}, got {other:?}")),
    }
}

#[then("resolution fails because the registry is unavailable")]
fn fails_as_unavailable(world: &RoutingWorld) -> Result<(), eyre::Report> {
    match world.last_result()? {
        Err(RouterError::Adapter(err)) if err.is_unavailable() => Ok(()),
        other => Err(eyre::eyre!("expected an unavailable registry, got {other:?}")),
    }
}

#[then(r#"listing registries reports "{registry}" as disabled"#)]
fn listing_reports_disabled(world: &RoutingWorld, registry: String) -> Result<(), eyre::Report> {
    let listed = world.switchboard()?.list_registries();
    let descriptor = listed
        .iter()
        .find(|descriptor| descriptor.registry_id().as_str() == registry)
        .ok_or_else(|| eyre::eyre!("registry {registry} is not listed"))?;
    if descriptor.status() != RegistryStatus::Disabled {
        return Err(eyre::eyre!(
            "expected {registry} to be disabled, found {}",
            descriptor.status()
        ));
    }
    Ok(())
}
