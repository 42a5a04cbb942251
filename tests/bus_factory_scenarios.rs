//! Behaviour tests for bus factory configuration.

mod bus_factory_steps;

use bus_factory_steps::world::{BusFactoryWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/bus_factory.feature",
    name = "The first host becomes the default host"
)]
fn first_host_is_default(world: BusFactoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/bus_factory.feature",
    name = "Declare a receive endpoint on a registered host"
)]
fn declare_endpoint_on_registered_host(world: BusFactoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/bus_factory.feature",
    name = "Reject a receive endpoint on an unregistered host"
)]
fn reject_endpoint_on_unregistered_host(world: BusFactoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/bus_factory.feature",
    name = "Validation requires a host"
)]
fn validation_requires_host(world: BusFactoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/bus_factory.feature",
    name = "Validation reports invalid pipe specifications"
)]
fn validation_reports_invalid_pipes(world: BusFactoryWorld) {
    let _ = world;
}
