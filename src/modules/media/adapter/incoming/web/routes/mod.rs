mod upload_image;

pub use upload_image::upload_image_handler;
