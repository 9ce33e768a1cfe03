//! Given steps for task API BDD scenarios.

use super::world::ApiWorld;
use eyre::WrapErr;
use hypertodo::api::InMemoryTodoResource;
use hypertodo::config::ApiConfig;
use rstest_bdd_macros::given;

#[given("a task API seeded with {count:usize} tasks")]
fn seeded_api(world: &mut ApiWorld, count: usize) -> Result<(), eyre::Report> {
    let config = ApiConfig {
        seed_count: count,
        ..ApiConfig::default()
    };
    world.resource =
        Some(InMemoryTodoResource::from_config(&config).wrap_err("build task API from config")?);
    Ok(())
}
