use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wallkit::{config, generate, gif, imaging, optimize, report, thumbs, validate, walk};

#[derive(Parser)]
#[command(name = "wallkit")]
#[command(about = "Asset pipeline for a statically-hosted wallpaper collection")]
#[command(long_about = "\
Asset pipeline for a statically-hosted wallpaper collection

Your filesystem is the data source. Directories under the wallpaper root
become categories, images inside them become catalog entries, and clients
consume the collection through one generated manifest.json.

Repository structure:

  wallpapers/
  ├── work/                        # Category (directory name = category id)
  │   ├── misty_mountains.jpg      # Wallpaper
  │   └── misty_mountains_thumb.jpg # Its thumbnail (generated by `thumbs`)
  ├── gaming/
  │   └── neon_city.jpg
  └── minimal/
      └── zen_garden.png
  manifest.json                    # Generated catalog — the data contract
  app_gifs/                        # Demo videos converted by `gif`

Typical flow: drop images into category folders, run `thumbs`, then
`generate`, then `validate` before publishing.

Run 'wallkit gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Wallpaper root directory (overrides config)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Manifest path (overrides config)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the wallpaper tree and write manifest.json
    Generate,
    /// Check an existing manifest against the files on disk
    Validate,
    /// Generate missing thumbnails for every .jpg wallpaper
    Thumbs,
    /// Recompress every .jpg in place for web delivery
    Optimize,
    /// Convert demo videos to GIFs (requires ffmpeg)
    Gif,
    /// Show the repository tree with sizes and thumbnail status
    List,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load(&cli.config)?;

    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.wallpaper_dir));
    let manifest = cli
        .manifest
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.manifest_path));

    match cli.command {
        Command::Generate => {
            let result = generate::generate(
                &root,
                &config,
                &imaging::CrateProbe,
                &generate::SystemClock,
            )?;
            generate::write_catalog(&result.catalog, &manifest)?;
            report::print_generate_output(&result, &manifest);
        }
        Command::Validate => match validate::validate(&manifest, &root) {
            Ok(validation) => {
                report::print_validate_report(&validation);
                if !validation.passed() {
                    std::process::exit(1);
                }
            }
            Err(err) => {
                eprintln!("✗ {err}");
                std::process::exit(1);
            }
        },
        Command::Thumbs => {
            let categories = thumbs::generate_all(&root, &config.thumbnails)?;
            report::print_thumbs_output(&categories);
        }
        Command::Optimize => {
            let categories = optimize::optimize_all(&root, &config)?;
            report::print_optimize_output(&categories);
        }
        Command::Gif => {
            let dir = PathBuf::from(&config.gif_dir);
            match gif::convert_all(&dir, &config.gif, &gif::FfmpegTranscoder) {
                Ok(conversions) => report::print_gif_output(&conversions),
                Err(gif::TranscodeError::FfmpegMissing) => {
                    eprintln!("✗ ffmpeg is not installed or not on PATH");
                    eprintln!("  Install it with: apt install ffmpeg (or brew install ffmpeg)");
                    std::process::exit(1);
                }
                Err(err) => {
                    eprintln!("✗ {err}");
                    std::process::exit(1);
                }
            }
        }
        Command::List => {
            let listing = walk::tree_listing(&root)?;
            report::print_tree(&listing);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
