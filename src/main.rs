use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use escape_render::{
    ColourMapKind, Complex, DEFAULT_JULIA_CONSTANT, Discrete, FractalKind, ImageFilePresenter,
    OutputFormat, RenderConfig, RenderController, Smoothed,
};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FractalArg {
    Mandelbrot,
    Julia,
}

/// Render the Mandelbrot or a Julia set to image files.
///
/// Unset view options fall back to the default view of the chosen fractal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value_t = FractalArg::Mandelbrot)]
    fractal: FractalArg,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    re_start: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    re_end: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    im_start: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    im_end: Option<f64>,

    #[arg(long)]
    max_iterations: Option<u32>,

    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_JULIA_CONSTANT.real)]
    julia_re: f64,

    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_JULIA_CONSTANT.imag)]
    julia_im: f64,

    /// Colour style to write: histogram, hue or grayscale. Repeat for
    /// several; all three when omitted.
    #[arg(long = "style")]
    styles: Vec<ColourMapKind>,

    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    #[arg(long, default_value_t = OutputFormat::Png)]
    format: OutputFormat,

    /// Use whole iteration counts instead of smoothed escape values.
    #[arg(long)]
    discrete: bool,
}

impl Args {
    fn render_config(&self) -> Result<RenderConfig, escape_render::ConfigError> {
        let (base, fractal) = match self.fractal {
            FractalArg::Mandelbrot => (RenderConfig::default(), FractalKind::Mandelbrot),
            FractalArg::Julia => (
                RenderConfig::julia_default(),
                FractalKind::Julia {
                    c: Complex::new(self.julia_re, self.julia_im),
                },
            ),
        };
        let top_left = base.complex_rect().top_left();
        let bottom_right = base.complex_rect().bottom_right();

        RenderConfig::from_dimensions(
            self.width.unwrap_or(base.pixel_rect().width()),
            self.height.unwrap_or(base.pixel_rect().height()),
            (
                self.re_start.unwrap_or(top_left.real),
                self.re_end.unwrap_or(bottom_right.real),
            ),
            (
                self.im_start.unwrap_or(top_left.imag),
                self.im_end.unwrap_or(bottom_right.imag),
            ),
            self.max_iterations.unwrap_or(base.max_iterations()),
            fractal,
        )
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.render_config()?;
    let styles = if args.styles.is_empty() {
        ColourMapKind::ALL.to_vec()
    } else {
        args.styles.clone()
    };
    let controller = RenderController::new(config, ImageFilePresenter::new());

    let written = if args.discrete {
        controller.render::<Discrete>(&styles, &args.output_dir, args.format)?
    } else {
        controller.render::<Smoothed>(&styles, &args.output_dir, args.format)?
    };

    info!("wrote {} image(s)", written.len());

    Ok(())
}
