mod get_all_profiles;
mod get_alumni;
mod get_profile;
mod update_profile;

pub use get_all_profiles::get_all_profiles_handler;
pub use get_alumni::get_alumni_handler;
pub use get_profile::get_profile_handler;
pub use update_profile::update_profile_handler;
