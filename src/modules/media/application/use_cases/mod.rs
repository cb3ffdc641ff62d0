pub mod media_use_cases;
pub mod upload_image;

pub use media_use_cases::MediaUseCases;
