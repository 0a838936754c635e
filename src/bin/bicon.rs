//! Command-line icon renderer.
//!
//! ```text
//! bicon alert-circle-fill --rotate 45 --variant danger
//! bicon check --flip-h --png check.png --size 64
//! bicon circle-fill --shift-h 8 --shift-v 16 --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use bicon_renderer::{IconRenderer, IconRequest, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "bicon", about = "Render an icon as SVG, JSON or PNG")]
struct Args {
    /// Icon name, e.g. `alert-circle-fill`.
    #[arg(required_unless_present = "list")]
    icon: Option<String>,

    #[arg(long)]
    variant: Option<String>,

    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Rotation in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rotate: f64,

    #[arg(long)]
    flip_h: bool,

    #[arg(long)]
    flip_v: bool,

    /// Horizontal shift in 1/16 em.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    shift_h: f64,

    /// Vertical shift in 1/16 em, positive is up.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    shift_v: f64,

    #[arg(long, default_value_t = 1.0)]
    font_scale: f64,

    #[arg(long)]
    animation: Option<String>,

    #[arg(long)]
    stacked: bool,

    /// Print the element tree as JSON instead of SVG markup.
    #[arg(long, conflicts_with = "png")]
    json: bool,

    /// Write a PNG to this path instead of printing.
    #[arg(long)]
    png: Option<PathBuf>,

    /// PNG edge length in pixels.
    #[arg(long, default_value_t = 64)]
    size: u32,

    /// List the built-in icon names and exit.
    #[arg(long)]
    list: bool,
}

impl Args {
    fn request(&self) -> IconRequest {
        let mut req = IconRequest::new(self.icon.clone().unwrap_or_default())
            .scale(self.scale)
            .rotate(self.rotate)
            .flip_h(self.flip_h)
            .flip_v(self.flip_v)
            .shift(self.shift_h, self.shift_v)
            .font_scale(self.font_scale)
            .stacked(self.stacked);
        if let Some(variant) = &self.variant {
            req = req.variant(variant.clone());
        }
        if let Some(animation) = &self.animation {
            req = req.animation(animation.clone());
        }
        req
    }
}

fn run(args: &Args) -> Result<()> {
    let renderer = IconRenderer::global();

    if args.list {
        for name in renderer.registry().names() {
            println!("{name}");
        }
        return Ok(());
    }

    let req = args.request();
    if let Some(path) = &args.png {
        renderer.rasterize(&req, args.size)?.save(path)?;
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&renderer.render(&req))?);
    } else {
        println!("{}", renderer.render_svg(&req));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bicon: {err}");
            ExitCode::FAILURE
        }
    }
}
