//! Deglare CLI - Glare Suppression via Combined Edge Detection
//!
//! Runs the full pipeline on one image and writes every intermediate stage
//! into an output directory.

use deglare::pipeline::{self, PipelineOptions};
use deglare::render::Renderer;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("help") | Some("--help") | Some("-h") => {
            print_usage(&args[0]);
            if args.len() < 2 {
                std::process::exit(2);
            }
        }
        Some(input) => {
            let output_dir = args.get(2).map(String::as_str).unwrap_or("./output");
            process_image(input, output_dir);
        }
    }
}

fn print_usage(program: &str) {
    println!("Deglare v{} - glare suppression via combined edge detection", deglare::VERSION);
    println!();
    println!("Usage: {} <input-image> [output-dir]", program);
    println!();
    println!("Arguments:");
    println!("  input-image    Image file to process (format auto-detected)");
    println!("  output-dir     Directory for stage images (default: ./output)");
}

fn process_image(input: &str, output_dir: &str) {
    let output = match pipeline::run(input, &PipelineOptions::default()) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let renderer = match Renderer::new(output_dir) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Error: could not prepare output directory: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = output.render_all(&renderer) {
        eprintln!("Error: failed to render stages: {}", e);
        std::process::exit(1);
    }

    let stage_count = output.stages().len();
    println!(
        "Wrote {} stage images and the summary grid to {}",
        stage_count,
        renderer.dir().display()
    );
}
