use std::path::Path;

use pngcmp::{compare, ComparisonResult, ImageDecoder, PngFileDecoder};

fn run(path1: &str, path2: &str) -> Result<ComparisonResult, Box<dyn std::error::Error>> {
    let decoder = PngFileDecoder;
    let a = decoder.decode(Path::new(path1))?;
    let b = decoder.decode(Path::new(path2))?;
    Ok(compare(&a, &b)?)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <image1.png> <image2.png>", args[0]);
        std::process::exit(1);
    }

    match run(&args[1], &args[2]) {
        Ok(result) => {
            println!("{}\t{}", result.matched_pixels, result.total_pixels);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
