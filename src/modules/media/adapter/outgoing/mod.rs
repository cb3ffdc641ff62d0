pub mod gcs_image_store;
