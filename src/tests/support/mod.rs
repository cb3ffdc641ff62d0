pub mod app_state_builder;
pub mod auth_helper;
pub mod stubs;
pub mod user_fixtures;

#[cfg(test)]
pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}
