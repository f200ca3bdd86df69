//! Pixelflow CLI - apply named filters and pipelines to image files.

use anyhow::{bail, Context, Result};
use pixelflow::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("pixelflow");

    if args.len() < 2 {
        print_usage(program);
        return;
    }

    let result = match args[1].as_str() {
        "list" => list_filters(&args[2..]),
        "apply" => apply(&args[2..]),
        "batch" => batch(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage(program);
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(program);
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn print_usage(program: &str) {
    println!("Pixelflow v{}", pixelflow::VERSION);
    println!();
    println!("Usage: {} <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  list [--config <file>]            List registered filters");
    println!("  apply <in> <out> [options]        Filter one image");
    println!("  batch <glob> <out-dir> [options]  Filter every image matching a pattern");
    println!("  help                              Show this help message");
    println!();
    println!("Options:");
    println!("  --filter <name>     Append a registered filter (repeatable, applied in order)");
    println!("  --spec <json>       Append a filter from a JSON spec, e.g.");
    println!("                      '{{\"kind\": \"enhanced_red\", \"shift\": 30}}'");
    println!("  --config <file>     Load extra filters, pipelines and options from TOML");
    println!("  --sequential        Disable parallel processing");
    println!("  --overwrite         Let batch replace files already in <out-dir>");
}

/// Options shared by `apply` and `batch`.
#[derive(Debug, Default)]
struct RunOptions {
    positional: Vec<String>,
    stages: Vec<Stage>,
    config: Option<PathBuf>,
    sequential: bool,
    overwrite: bool,
}

#[derive(Debug)]
enum Stage {
    Named(String),
    Spec(String),
}

fn parse_options(args: &[String]) -> Result<RunOptions> {
    let mut options = RunOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--filter" => {
                let name = iter.next().context("--filter needs a filter name")?;
                options.stages.push(Stage::Named(name.clone()));
            }
            "--spec" => {
                let json = iter.next().context("--spec needs a JSON filter spec")?;
                options.stages.push(Stage::Spec(json.clone()));
            }
            "--config" => {
                let path = iter.next().context("--config needs a file path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--sequential" => options.sequential = true,
            "--overwrite" => options.overwrite = true,
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            _ => options.positional.push(arg.clone()),
        }
    }

    Ok(options)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Resolve registry, pipeline and processor from parsed options.
fn prepare(options: &RunOptions) -> Result<(Pipeline, ImageProcessor)> {
    let config = load_config(options.config.as_deref())?;
    let registry = config.registry()?;

    let mut pipeline = Pipeline::empty();
    for stage in &options.stages {
        let filter = match stage {
            Stage::Named(name) => registry.lookup(name)?,
            Stage::Spec(json) => FilterSpec::from_json(json)?.build()?,
        };
        pipeline.push(filter);
    }
    if pipeline.is_empty() {
        bail!("No filters given; use --filter or --spec");
    }

    let processor_options = config.processing.clone().with_parallel(
        config.processing.parallel && !options.sequential,
    );
    Ok((pipeline, ImageProcessor::with_options(processor_options)))
}

fn list_filters(args: &[String]) -> Result<()> {
    let options = parse_options(args)?;
    let config = load_config(options.config.as_deref())?;
    let registry = config.registry()?;

    println!("Available filters ({} total):", registry.len());
    for name in registry.names() {
        let filter = registry.lookup(name)?;
        println!("  • {} [{}]", name, filter.name());
    }
    Ok(())
}

fn apply(args: &[String]) -> Result<()> {
    let options = parse_options(args)?;
    let [input, output] = options.positional.as_slice() else {
        bail!("apply needs exactly <input> and <output>");
    };

    let (pipeline, processor) = prepare(&options)?;
    let stats = process_file(Path::new(input), Path::new(output), &pipeline, &processor)?;

    println!(
        "{} -> {} ({} pixels, {} stages, {:?})",
        input,
        output,
        stats.pixels,
        pipeline.len(),
        stats.duration
    );
    Ok(())
}

fn batch(args: &[String]) -> Result<()> {
    let options = parse_options(args)?;
    let [pattern, out_dir] = options.positional.as_slice() else {
        bail!("batch needs exactly <glob> and <out-dir>");
    };

    let out_dir = PathBuf::from(out_dir);
    if !out_dir.is_dir() {
        bail!("Output directory does not exist: {}", out_dir.display());
    }

    let (pipeline, processor) = prepare(&options)?;
    let inputs = glob::glob(pattern)
        .with_context(|| format!("invalid pattern {}", pattern))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if inputs.is_empty() {
        bail!("No input files found matching pattern: {}", pattern);
    }

    let jobs = plan_outputs(&inputs, &out_dir, options.overwrite)?;
    for (input, output) in &jobs {
        let stats = process_file(input, output, &pipeline, &processor)?;
        println!("  • {} ({:?})", output.display(), stats.duration);
    }

    println!("Processed {} image(s)", jobs.len());
    Ok(())
}

/// Pair every input with its path in `out_dir`.
///
/// Fails before any image is written if two inputs share a file name, or if
/// an output already exists and `overwrite` is off.
fn plan_outputs(
    inputs: &[PathBuf],
    out_dir: &Path,
    overwrite: bool,
) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut seen = HashSet::new();
    let mut jobs = Vec::with_capacity(inputs.len());

    for input in inputs {
        let file_name = input
            .file_name()
            .with_context(|| format!("{} has no file name", input.display()))?;
        if !seen.insert(file_name.to_os_string()) {
            bail!(
                "Several inputs are named {}; outputs in {} would collide",
                file_name.to_string_lossy(),
                out_dir.display()
            );
        }

        let output = out_dir.join(file_name);
        if output.exists() && !overwrite {
            bail!(
                "Output already exists: {} (pass --overwrite to replace it)",
                output.display()
            );
        }
        jobs.push((input.clone(), output));
    }

    Ok(jobs)
}

fn process_file(
    input: &Path,
    output: &Path,
    pipeline: &Pipeline,
    processor: &ImageProcessor,
) -> Result<ProcessStats> {
    let image = pixelflow::io::load(input).with_context(|| format!("reading {}", input.display()))?;
    let (result, stats) = processor.process_buffer_with_stats(&image, pipeline)?;
    pixelflow::io::save(&result, output).with_context(|| format!("writing {}", output.display()))?;
    Ok(stats)
}
