//! Then steps for bus factory BDD scenarios.

use super::world::BusFactoryWorld;
use rstest_bdd_macros::then;
use warren::bus_factory::{domain::ValidationResult, services::BusConfigurationError};

#[then(r#"the local address targets host "{host}""#)]
fn local_address_targets(world: &BusFactoryWorld, host: String) -> Result<(), eyre::Report> {
    let address = world
        .configurator
        .local_address()
        .ok_or_else(|| eyre::eyre!("expected a local address"))?;
    if address.host() != host {
        return Err(eyre::eyre!(
            "expected local address on '{host}', found {address}"
        ));
    }
    Ok(())
}

#[then(r#"the default queue name starts with "{prefix}""#)]
fn default_queue_name_prefix(world: &BusFactoryWorld, prefix: String) -> Result<(), eyre::Report> {
    let address = world
        .configurator
        .local_address()
        .ok_or_else(|| eyre::eyre!("expected a local address"))?;
    if !address.path().starts_with(&prefix) {
        return Err(eyre::eyre!(
            "expected default queue to start with '{prefix}', found '{}'",
            address.path()
        ));
    }
    Ok(())
}

#[then("building the bus yields {count:usize} receive endpoints")]
fn bus_endpoint_count(world: &BusFactoryWorld, count: usize) -> Result<(), eyre::Report> {
    let bus = world
        .configurator
        .create_bus()
        .map_err(|err| eyre::eyre!("create_bus failed: {err}"))?;
    let found = bus.receive_endpoints().len();
    if found != count {
        return Err(eyre::eyre!("expected {count} receive endpoints, found {found}"));
    }
    Ok(())
}

#[then(r#"the bus has a durable receive endpoint "{queue}""#)]
fn bus_has_durable_endpoint(world: &BusFactoryWorld, queue: String) -> Result<(), eyre::Report> {
    let bus = world
        .configurator
        .create_bus()
        .map_err(|err| eyre::eyre!("create_bus failed: {err}"))?;
    let endpoint = bus
        .receive_endpoint(&queue)
        .ok_or_else(|| eyre::eyre!("expected receive endpoint '{queue}'"))?;
    if !endpoint.settings().is_durable() {
        return Err(eyre::eyre!("expected '{queue}' to be durable"));
    }
    Ok(())
}

#[then("the declaration succeeds")]
fn declaration_succeeds(world: &BusFactoryWorld) -> Result<(), eyre::Report> {
    match &world.last_declaration {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected successful declaration, got {other:?}")),
    }
}

#[then("the declaration fails with a missing host error")]
fn declaration_fails_with_missing_host(world: &BusFactoryWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_declaration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing declaration result in scenario world"))?;
    if !matches!(
        result,
        Err(BusConfigurationError::EndpointTargetMissing { .. })
    ) {
        return Err(eyre::eyre!("expected missing host error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"validation reports a failure for "{key}""#)]
fn validation_reports_failure(world: &BusFactoryWorld, key: String) -> Result<(), eyre::Report> {
    let reported = world
        .last_validation
        .iter()
        .filter(|result| result.is_failure())
        .any(|result| result.key() == key);
    if !reported {
        let keys: Vec<&str> = world
            .last_validation
            .iter()
            .map(ValidationResult::key)
            .collect();
        return Err(eyre::eyre!("expected failure for '{key}', got {keys:?}"));
    }
    Ok(())
}

#[then("building a validated bus fails")]
fn validated_bus_fails(world: &BusFactoryWorld) -> Result<(), eyre::Report> {
    match world.configurator.create_validated_bus() {
        Err(BusConfigurationError::Validation(_)) => Ok(()),
        Err(err) => Err(eyre::eyre!("expected validation error, got {err}")),
        Ok(_) => Err(eyre::eyre!("expected the validated build to fail")),
    }
}
