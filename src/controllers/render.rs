use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};

use crate::controllers::ports::file_presenter::{FilePresenterPort, OutputFormat, PresentError};
use crate::core::actions::generate_fractal::generate_escape_field::{
    GenerateEscapeFieldError, generate_escape_field,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, colourise_escape_field,
};
use crate::core::colour_maps::factory::colour_map_factory;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::escape_time::IterationCount;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::EscapeMode;
use crate::core::fractals::render_config::RenderConfig;

#[derive(Debug)]
pub enum RenderError {
    Field(GenerateEscapeFieldError),
    PixelBuffer(GeneratePixelBufferError),
    Present { path: PathBuf, source: PresentError },
    OutputDir { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(err) => write!(f, "field generation failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "colouring failed: {}", err),
            Self::Present { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            Self::OutputDir { path, source } => {
                write!(f, "failed to create {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Present { source, .. } => Some(source),
            Self::OutputDir { source, .. } => Some(source),
        }
    }
}

impl From<GenerateEscapeFieldError> for RenderError {
    fn from(err: GenerateEscapeFieldError) -> Self {
        Self::Field(err)
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Drives one render: computes the escape field once, then colours and
/// writes it in every requested style.
pub struct RenderController<P: FilePresenterPort> {
    config: RenderConfig,
    presenter: P,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(config: RenderConfig, presenter: P) -> Self {
        Self { config, presenter }
    }

    pub fn generate_field<M: EscapeMode>(
        &self,
    ) -> Result<EscapeField<M::Count>, RenderError> {
        let pixel_rect = self.config.pixel_rect();

        info!(
            "rendering {} at {}x{}, max iterations {}",
            self.config.fractal(),
            pixel_rect.width(),
            pixel_rect.height(),
            self.config.max_iterations()
        );

        let algorithm = EscapeTimeAlgorithm::<M>::new(&self.config);
        let start = Instant::now();
        let field = generate_escape_field(&algorithm)?;

        debug!(
            "escape field: {:?}, {} of {} pixels escaped",
            start.elapsed(),
            field.escaped_count(),
            pixel_rect.size()
        );

        Ok(field)
    }

    pub fn colourise<N: IterationCount + 'static>(
        &self,
        field: &EscapeField<N>,
        kind: ColourMapKind,
    ) -> Result<PixelBuffer, RenderError> {
        let start = Instant::now();
        let colour_map = colour_map_factory(kind, field);
        let buffer = colourise_escape_field(field, &colour_map)?;

        debug!("{}: {:?}", kind, start.elapsed());

        Ok(buffer)
    }

    /// Path a style is written to: `<output_dir>/<fractal>_<style>.<ext>`.
    #[must_use]
    pub fn output_path(
        &self,
        output_dir: impl AsRef<Path>,
        kind: ColourMapKind,
        format: OutputFormat,
    ) -> PathBuf {
        output_dir.as_ref().join(format!(
            "{}_{}.{}",
            self.config.fractal().slug(),
            kind.slug(),
            format.extension()
        ))
    }

    /// Renders every style in `styles` from a single shared field and
    /// returns the written paths in the same order.
    pub fn render<M: EscapeMode>(
        &self,
        styles: &[ColourMapKind],
        output_dir: impl AsRef<Path>,
        format: OutputFormat,
    ) -> Result<Vec<PathBuf>, RenderError>
    where
        M::Count: 'static,
    {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir).map_err(|source| RenderError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let field = self.generate_field::<M>()?;
        let mut written = Vec::with_capacity(styles.len());

        for &kind in styles {
            let buffer = self.colourise(&field, kind)?;
            let path = self.output_path(output_dir, kind, format);

            self.presenter
                .present(&buffer, &path, format)
                .map_err(|source| RenderError::Present {
                    path: path.clone(),
                    source,
                })?;

            info!("saved {} to {}", kind, path.display());
            written.push(path);
        }

        Ok(written)
    }
}
