use crate::controllers::ports::file_presenter::{FilePresenterPort, OutputFormat, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbImage};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes pixel buffers to disk through the `image` crate. PPM output is the
/// binary `P6` pixmap.
#[derive(Debug)]
pub struct ImageFilePresenter {}

impl FilePresenterPort for ImageFilePresenter {
    fn present(
        &self,
        buffer: &PixelBuffer,
        filepath: impl AsRef<Path>,
        format: OutputFormat,
    ) -> Result<(), PresentError> {
        let filepath = filepath.as_ref();
        let width = buffer.pixel_rect().width();
        let height = buffer.pixel_rect().height();

        let image = RgbImage::from_raw(width, height, buffer.buffer().clone()).ok_or(
            PresentError::BufferMismatch {
                width,
                height,
                buffer_size: buffer.buffer_size(),
            },
        )?;

        match format {
            OutputFormat::Png => image.save_with_format(filepath, ImageFormat::Png)?,
            OutputFormat::Ppm => {
                // The default PNM subtype for RGB8 is PAM (P7), not a pixmap.
                let mut writer = BufWriter::new(File::create(filepath)?);
                PnmEncoder::new(&mut writer)
                    .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
                    .write_image(image.as_raw(), width, height, ExtendedColorType::Rgb8)?;
                writer.flush()?;
            }
        }

        debug!("wrote {}x{} {} to {}", width, height, format, filepath.display());

        Ok(())
    }
}

impl Default for ImageFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
