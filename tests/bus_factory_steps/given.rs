//! Given steps for bus factory BDD scenarios.

use std::sync::Arc;

use super::world::{BusFactoryWorld, build_configurator};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use warren::bus_factory::{
    domain::HostMetadata, specifications::ConcurrencyLimitSpecification,
};

#[given(r#"a configurator for process "{process}" on machine "{machine}""#)]
fn a_configurator_for(world: &mut BusFactoryWorld, process: String, machine: String) {
    world.configurator = build_configurator(HostMetadata::new(process, machine));
}

#[given(r#"a registered host "{host}""#)]
fn a_registered_host(world: &mut BusFactoryWorld, host: String) -> Result<(), eyre::Report> {
    world
        .register_host(&host)
        .wrap_err("register host for scenario")
}

#[given("a bus-level concurrency limit of {limit:usize}")]
fn a_bus_level_concurrency_limit(world: &mut BusFactoryWorld, limit: usize) {
    world
        .configurator
        .add_pipe_specification(Arc::new(ConcurrencyLimitSpecification::new(limit)));
}
