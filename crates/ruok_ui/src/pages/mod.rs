pub mod home;
pub mod instance;
pub mod jobs;
pub mod not_found;
pub mod welcome;
