//! When steps for routing BDD scenarios.

use super::world::{RoutingWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the identifier "{identifier}" is resolved"#)]
fn identifier_is_resolved(world: &mut RoutingWorld, identifier: String) -> Result<(), eyre::Report> {
    let result = run_async(world.switchboard()?.resolve(&identifier));
    world.last_result = Some(result);
    Ok(())
}
