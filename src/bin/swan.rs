use clap::*;

use swan::core::parser::*;
use swan::core::prelude::*;

use std::env;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use log::*;

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Input scene file.
    #[arg(short, long, value_name = "filename")]
    pub infile: Option<PathBuf>,

    /// Suppress all text output other than error messages.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR, 3-> FATAL).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,

    /// Print the loaded scene back in scene file syntax.
    #[arg(short, long, default_value = "false")]
    pub cat: bool,

    /// Print the loaded scene as JSON.
    #[arg(long, default_value = "false")]
    pub json: bool,

    #[arg(value_name = "scene-file")]
    pub scenefile: Option<PathBuf>,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn print_summary(scene: &Scene) {
    println!(
        "{} lights, {} objects",
        scene.num_lights(),
        scene.num_objects()
    );
    for (id, light) in scene.light_ids().zip(scene.lights()) {
        let power = light.power().to_rgb();
        println!(
            "  light {}: {} (power {} {} {})",
            id.index(),
            light.name(),
            power[0],
            power[1],
            power[2]
        );
    }
    for (id, object) in scene.object_ids().zip(scene.objects()) {
        let material = scene
            .material(object.material())
            .map(|m| m.name())
            .unwrap_or("?");
        println!(
            "  object {}: {} {} (area {})",
            id.index(),
            object.shape().name(),
            material,
            object.shape().area()
        );
    }
    println!("total light power (y): {}", scene.total_power().y());
}

fn run(input_path: &Path, opts: &CommandOptions) -> Result<(), SwanError> {
    let scene = parse_file(input_path)?;
    if opts.cat {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        print_scene(&scene, &mut out)?;
    }
    if opts.json {
        let s = serde_json::to_string_pretty(&scene)?;
        println!("{}", s);
    }
    if !opts.quiet && !opts.cat && !opts.json {
        let version = env!("CARGO_PKG_VERSION");
        println!("swan version {}", version);
        print_summary(&scene);
    }
    return Ok(());
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);
    let input = if let Some(scenefile) = opts.scenefile.as_ref() {
        Some(scenefile.clone())
    } else {
        opts.infile.as_ref().cloned()
    };

    let input_path = match input {
        Some(p) => p,
        None => {
            println!("{}", CommandOptions::command().render_usage());
            process::exit(-1);
        }
    };

    if let Err(e) = run(&input_path, &opts) {
        error!("{}", e);
        process::exit(-1);
    }
}
