// Command-line renderer for pixel-plant.
//
// Usage:
//   plant-render render [--seed S] [--frame N] [--bg MODE] [--card FILE] [--grayscale] -o <output.bmp>
//   plant-render card [--seed S] [--bg MODE]
//   plant-render seed [length]

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use log::info;

use pixel_plant::export::{save_bmp, to_grayscale};
use pixel_plant::random_seed::generate_seed;
use pixel_plant::{
    deserialize_seed_card, generate_plant, sanitize_seed, serialize_seed_card, AppConfiguration,
    Background, RenderingBuffer,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "render" => parse_render_args(&args[2..]).and_then(|opts| cmd_render(&opts)),
        "card" => cmd_card(&args[2..]),
        "seed" => cmd_seed(&args[2..]),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("plant-render - render pixel-art plants from seeds");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  render [--seed S] [--frame N] [--bg MODE] [--card FILE] [--grayscale] -o <output.bmp>");
    eprintln!("      Render one plant to a 192x288 BMP.");
    eprintln!();
    eprintln!("  card [--seed S] [--bg MODE]");
    eprintln!("      Print a seed card for the default phenotype.");
    eprintln!();
    eprintln!("  seed [length]");
    eprintln!("      Print a fresh random seed.");
}

#[derive(Debug, Default, PartialEq)]
struct RenderOptions {
    seed: Option<String>,
    frame: i64,
    bg: Option<Background>,
    card: Option<PathBuf>,
    grayscale: bool,
    output: Option<PathBuf>,
}

fn parse_render_args(args: &[String]) -> Result<RenderOptions> {
    let mut opts = RenderOptions::default();
    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--seed", Some(v)) => opts.seed = Some(v.clone()),
            ("--frame", Some(v)) => {
                opts.frame = v.parse().with_context(|| format!("invalid frame {:?}", v))?
            }
            ("--bg", Some(v)) => opts.bg = Some(v.parse()?),
            ("--card", Some(v)) => opts.card = Some(PathBuf::from(v)),
            ("-o", Some(v)) => opts.output = Some(PathBuf::from(v)),
            ("--grayscale", _) => {
                opts.grayscale = true;
                i += 1;
                continue;
            }
            (other, _) => bail!("unknown or incomplete option {:?}", other),
        }
        i += 2;
    }
    Ok(opts)
}

fn load_card(path: &Path) -> Result<AppConfiguration> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed card {}", path.display()))?;
    deserialize_seed_card(&text).with_context(|| format!("bad seed card {}", path.display()))
}

fn cmd_render(opts: &RenderOptions) -> Result<()> {
    let mut config = match &opts.card {
        Some(path) => load_card(path)?,
        None => AppConfiguration::default(),
    };
    if let Some(seed) = &opts.seed {
        config.seed = sanitize_seed(seed);
    }
    if let Some(bg) = opts.bg {
        config.bg_mode = bg;
    }
    let output = opts
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}_f{}.bmp", config.seed, opts.frame)));

    let mut buf = RenderingBuffer::canvas();
    let report = generate_plant(&mut buf, &config.phenotype, &config.seed, opts.frame, config.bg_mode);
    info!(
        "rendered seed={} frame={} nodes={} in {:.2} ms",
        config.seed,
        opts.frame,
        report.node_count,
        report.elapsed.as_secs_f64() * 1000.0
    );
    if opts.grayscale {
        to_grayscale(&mut buf);
    }

    save_bmp(&output, &buf).with_context(|| format!("failed to save {}", output.display()))?;
    println!("Saved: {}", output.display());
    Ok(())
}

fn cmd_card(args: &[String]) -> Result<()> {
    let mut config = AppConfiguration::default();
    let mut i = 0;
    while i < args.len() {
        match (args[i].as_str(), args.get(i + 1)) {
            ("--seed", Some(v)) => config.seed = sanitize_seed(v),
            ("--bg", Some(v)) => config.bg_mode = v.parse()?,
            (other, _) => bail!("unknown or incomplete option {:?}", other),
        }
        i += 2;
    }
    let card = serialize_seed_card(&config)?;
    let pretty: serde_json::Value = serde_json::from_str(&card)?;
    println!("{}", serde_json::to_string_pretty(&pretty)?);
    Ok(())
}

fn cmd_seed(args: &[String]) -> Result<()> {
    let len = match args.first() {
        Some(v) => v.parse().with_context(|| format!("invalid length {:?}", v))?,
        None => 0,
    };
    println!("{}", generate_seed(len));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_render_args() {
        let opts = parse_render_args(&args(&[
            "--seed", "fern", "--frame", "3", "--bg", "dark", "--grayscale", "-o", "out.bmp",
        ]))
        .unwrap();
        assert_eq!(opts.seed.as_deref(), Some("fern"));
        assert_eq!(opts.frame, 3);
        assert_eq!(opts.bg, Some(Background::Dark));
        assert!(opts.grayscale);
        assert_eq!(opts.output, Some(PathBuf::from("out.bmp")));
    }

    #[test]
    fn test_parse_render_args_errors() {
        assert!(parse_render_args(&args(&["--frame", "soon"])).is_err());
        assert!(parse_render_args(&args(&["--bg", "neon"])).is_err());
        assert!(parse_render_args(&args(&["--seed"])).is_err());
        assert!(parse_render_args(&args(&["--what"])).is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse_render_args(&[]).unwrap(), RenderOptions::default());
    }
}
