use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use paintbox::config::{Config, TextConfig};
use paintbox::draw::{CairoSurface, Color, Graphics};
use paintbox::layout::{Justify, ParagraphStyle};

#[derive(Parser, Debug)]
#[command(name = "paintbox")]
#[command(version, about = "Wrap, justify and render text with Cairo and Pango")]
struct Cli {
    /// Config file to use instead of ~/.config/paintbox/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Font size in pixels (overrides the config file)
    #[arg(long, short = 's', value_name = "PX", global = true)]
    font_size: Option<f64>,

    /// Font family (overrides the config file)
    #[arg(long, value_name = "FAMILY", global = true)]
    font: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print TEXT wrapped to WIDTH pixels, one wrapped line per output line
    Wrap {
        /// Maximum line width in pixels
        #[arg(long, short = 'w')]
        width: f64,

        text: String,
    },

    /// Render a wrapped paragraph to a PNG file
    Render(RenderArgs),

    /// Render a single justified line to a PNG file
    Label(LabelArgs),

    /// Write a documented example config file
    InitConfig,
}

#[derive(Args, Debug)]
struct Canvas {
    /// Image width in pixels
    #[arg(long, short = 'W', value_parser = clap::value_parser!(u32).range(1..=16384))]
    width: u32,

    /// Image height in pixels
    #[arg(long, short = 'H', value_parser = clap::value_parser!(u32).range(1..=16384))]
    height: u32,

    /// Output PNG path
    #[arg(long, short = 'o')]
    output: PathBuf,

    /// Inner margin in pixels
    #[arg(long, default_value_t = 10.0)]
    margin: f64,

    /// Width of a frame drawn around the image in colors.accent
    #[arg(long, value_name = "PX", default_value_t = 0.0)]
    border: f64,

    /// Text color as rrggbb or #rrggbb (defaults to colors.text)
    #[arg(long, value_name = "HEX")]
    color: Option<Color>,

    /// Background color as rrggbb or #rrggbb (defaults to colors.background)
    #[arg(long, value_name = "HEX")]
    background: Option<Color>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    canvas: Canvas,

    /// Center every line
    #[arg(long)]
    center: bool,

    /// Center the paragraph vertically
    #[arg(long)]
    vcenter: bool,

    /// List marker; lines not starting with it get a hanging indent
    #[arg(long, value_name = "MARKER")]
    list_char: Option<String>,

    text: String,
}

#[derive(Args, Debug)]
struct LabelArgs {
    #[command(flatten)]
    canvas: Canvas,

    /// Horizontal alignment
    #[arg(long, short = 'j', value_enum, default_value_t = JustifyArg::Center)]
    justify: JustifyArg,

    /// Draw a shadow behind the text
    #[arg(long)]
    shadow: bool,

    /// Shadow color as rrggbb or #rrggbb (defaults to colors.shadow)
    #[arg(long, value_name = "HEX", requires = "shadow")]
    shadow_color: Option<Color>,

    text: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum JustifyArg {
    Left,
    Center,
    Right,
}

impl From<JustifyArg> for Justify {
    fn from(arg: JustifyArg) -> Self {
        match arg {
            JustifyArg::Left => Justify::Left,
            JustifyArg::Center => Justify::Center,
            JustifyArg::Right => Justify::Right,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if let Command::InitConfig = cli.command {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_overrides(cli.font_size, cli.font);

    match cli.command {
        Command::Wrap { width, text } => {
            let scratch = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1)
                .context("Failed to create scratch surface")?;
            let gfx = graphics_for(&scratch, &config.text)?;
            for line in gfx.split_text(&text, width) {
                println!("{line}");
            }
        }
        Command::Render(args) => {
            let palette = config.colors.resolve();
            let color = args.canvas.color.unwrap_or(palette.text);
            let style = ParagraphStyle {
                center: args.center,
                list_char: args.list_char.clone().unwrap_or_default(),
            };
            render_png(&args.canvas, &config, |gfx, x, y, w, h| {
                let size = if args.vcenter {
                    gfx.draw_vcentered_paragraph(&args.text, x, y, w, h, Some(color), &style)
                } else {
                    gfx.draw_paragraph(&args.text, x, y, w, Some(color), &style)
                };
                if size.height > h {
                    log::warn!(
                        "Paragraph is {:.0}px tall but only {:.0}px are available",
                        size.height,
                        h
                    );
                }
            })?;
        }
        Command::Label(args) => {
            let palette = config.colors.resolve();
            let color = args.canvas.color.unwrap_or(palette.text);
            let shadow = args
                .shadow
                .then(|| args.shadow_color.unwrap_or(palette.shadow));
            render_png(&args.canvas, &config, |gfx, x, y, w, h| {
                let top = y + (h - gfx.line_height()) / 2.0;
                gfx.draw_justified_text(x, top, w, &args.text, args.justify.into(), color, shadow);
            })?;
        }
        Command::InitConfig => unreachable!("handled before loading config"),
    }

    Ok(())
}

fn graphics_for(image: &cairo::ImageSurface, text: &TextConfig) -> Result<Graphics<CairoSurface>> {
    let surface = CairoSurface::for_image(image, text.font(), text.font_size)
        .context("Failed to create Cairo context")?;
    Ok(Graphics::new(surface, text.clone()))
}

/// Clears a new image to the background color, frames it with the accent
/// color, runs `draw` with the inner box `(x, y, w, h)` and writes the image
/// as PNG.
fn render_png<F>(canvas: &Canvas, config: &Config, draw: F) -> Result<()>
where
    F: FnOnce(&mut Graphics<CairoSurface>, f64, f64, f64, f64),
{
    let width = i32::try_from(canvas.width).context("Image width too large")?;
    let height = i32::try_from(canvas.height).context("Image height too large")?;
    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create image surface")?;

    {
        let mut gfx = graphics_for(&image, &config.text)?;
        let background = canvas
            .background
            .unwrap_or_else(|| config.colors.background.to_color());
        gfx.clear(background);

        let (image_w, image_h) = (f64::from(canvas.width), f64::from(canvas.height));
        let border = if canvas.border.is_nan() {
            0.0
        } else {
            canvas.border.clamp(0.0, image_w.min(image_h) / 2.0)
        };
        if border > 0.0 {
            let accent = config.colors.accent.to_color();
            gfx.draw_outline(0.0, 0.0, image_w, image_h, border, border, accent);
        }

        let margin = canvas.margin.max(0.0) + border;
        let inner_w = image_w - 2.0 * margin;
        let inner_h = image_h - 2.0 * margin;
        draw(&mut gfx, margin, margin, inner_w, inner_h);
    }

    write_png(&image, &canvas.output)?;
    log::info!(
        "Wrote {}x{} image to {}",
        canvas.width,
        canvas.height,
        canvas.output.display()
    );
    Ok(())
}

fn write_png(image: &cairo::ImageSurface, path: &Path) -> Result<()> {
    image.flush();
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    image
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
    Ok(())
}
