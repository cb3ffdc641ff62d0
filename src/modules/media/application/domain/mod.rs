pub mod validated_image;
