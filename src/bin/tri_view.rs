//! Renders a triangulation result file as an SVG plot.
//!
//! I use it with `tri_view -i mesh.in > mesh.svg` or
//! `tri_view -i mesh.in -c -nd -o mesh.svg`.

use std::process::exit;

use tri_view::render::RenderOptions;
use tri_view::{circles, input, output, render, triangles};

const USAGE: &str = "usage: tri_view -i <file> [-c] [-nd] [-o <file>] [--dot <file>] [--labels]

-i  | --input file
\tinput file emitted by the triangulation program
-c  | --circle
\tdraw the circumscribed circle of every triangle
-nd | --no-display
\tdo not print the SVG to stdout
-o  | --save file
\twrite the SVG to a file
--dot file
\twrite the mesh topology in DOT format to a file
--labels
\tannotate points with their indices

Input file format:
<number-of-points : int>
<x1 : float> <y1 : float>
...
<i1 : int> <j1 : int>
...";

struct Args {
    input: String,
    circle: bool,
    no_display: bool,
    save: Option<String>,
    dot: Option<String>,
    labels: bool,
}

fn usage_error(message: &str) -> ! {
    eprintln!("tri_view: {message}\n{USAGE}");
    exit(1)
}

fn parse_args() -> Args {
    let mut input = None;
    let mut circle = false;
    let mut no_display = false;
    let mut save = None;
    let mut dot = None;
    let mut labels = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-i" | "--input" => {
                input = Some(args.next().unwrap_or_else(|| usage_error("--input needs a file")));
            }
            "-c" | "--circle" => circle = true,
            "-nd" | "--no-display" => no_display = true,
            "-o" | "--save" => {
                save = Some(args.next().unwrap_or_else(|| usage_error("--save needs a file")));
            }
            "--dot" => {
                dot = Some(args.next().unwrap_or_else(|| usage_error("--dot needs a file")));
            }
            "--labels" => labels = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                exit(0);
            }
            other => usage_error(&format!("invalid option: {other}")),
        }
    }

    let Some(input) = input else {
        usage_error("--input is required");
    };
    Args { input, circle, no_display, save, dot, labels }
}

fn run(args: &Args) -> Result<(), tri_view::Error> {
    let mesh = input::from_file(&args.input)?;

    let overlays = if args.circle {
        circles::circles(&mesh, &triangles::triangles(&mesh))?
    } else {
        Vec::new()
    };

    let svg = render::render_svg(&mesh, &overlays, &RenderOptions { labels: args.labels });

    if let Some(path) = &args.save {
        output::to_file(&svg, path)?;
    }
    if let Some(path) = &args.dot {
        output::to_file(&output::to_dot_str(&mesh), path)?;
    }
    if !args.no_display {
        print!("{svg}");
    }
    Ok(())
}

fn main() {
    let args = parse_args();
    if let Err(e) = run(&args) {
        eprintln!("tri_view: {e}");
        exit(1);
    }
}
