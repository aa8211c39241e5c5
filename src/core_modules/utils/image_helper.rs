pub mod image_helper {
    use image::ImageEncoder;

    use crate::core_modules::projection::ProjectionImage;
    use crate::error::Result;

    /// Writes an 8-bit grayscale buffer to a PNG file.
    pub fn save(name: String, width: u32, height: u32, buffer: &[u8]) -> Result<()> {
        let output = std::fs::File::create(name).map_err(image::ImageError::IoError)?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(buffer, width, height, image::ExtendedColorType::L8)?;

        Ok(())
    }

    /// Writes a QC projection image to a PNG file.
    pub fn save_projection(name: String, projection: &ProjectionImage) -> Result<()> {
        save(name, projection.width, projection.height, &projection.pixels)
    }
}
