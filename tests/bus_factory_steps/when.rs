//! When steps for bus factory BDD scenarios.

use super::world::BusFactoryWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use warren::bus_factory::domain::{RabbitMqHost, RabbitMqHostSettings};

#[when(r#"host "{host}" is registered"#)]
fn host_is_registered(world: &mut BusFactoryWorld, host: String) -> Result<(), eyre::Report> {
    world.register_host(&host).wrap_err("register host")
}

#[when(r#"a receive endpoint "{queue}" is declared on host "{host}""#)]
fn endpoint_declared_on_host(
    world: &mut BusFactoryWorld,
    queue: String,
    host: String,
) -> Result<(), eyre::Report> {
    let handle = world.host(&host)?.clone();
    let result = world
        .configurator
        .receive_endpoint(&handle, queue, |endpoint| {
            endpoint.durable(true);
        });
    world.last_declaration = Some(result);
    Ok(())
}

#[when(r#"a receive endpoint "{queue}" is declared on an unregistered host"#)]
fn endpoint_declared_on_unregistered_host(
    world: &mut BusFactoryWorld,
    queue: String,
) -> Result<(), eyre::Report> {
    let stranger = RabbitMqHost::new(RabbitMqHostSettings::new("stranger")?);
    let result = world.configurator.receive_endpoint(&stranger, queue, |_| {});
    world.last_declaration = Some(result);
    Ok(())
}

#[when("the configuration is validated")]
fn configuration_is_validated(world: &mut BusFactoryWorld) {
    world.last_validation = world.configurator.validate().collect();
}
