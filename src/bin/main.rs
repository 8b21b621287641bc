use foilcut_rs::contour::{build_contour, scale_contour, ScaleParameters};
use foilcut_rs::dat::{parse_dat, title, DatProfile};
use foilcut_rs::emit::csv::emit_csv;
use foilcut_rs::emit::dxf::emit_dxf;
use foilcut_rs::errors::ProfileError;
use std::io::Write;
use std::path::Path;
use std::{env, fs, io, process};

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: foilcut <profile.dat>");
        process::exit(2);
    });
    let raw = fs::read_to_string(&path).expect("Failed reading profile file");

    let profile = match parse_dat(&raw) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("{}: {}", path, e);
            process::exit(1);
        }
    };

    if let Some(name) = title(&raw) {
        println!("Profile: {}", name);
    }
    let stem = Path::new(&path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "profile".to_string());

    // The parsed profile is immutable; every iteration rebuilds and rescales
    // from it so scale factors never compound across runs.
    println!("Enter a blank chord width to exit.");
    while let Some(chord_width) = prompt_u32("Chord width in mm: ") {
        let thickness =
            prompt_u32("Max thickness in mm (blank or 0 keeps native proportions): ").unwrap_or(0);
        let params = ScaleParameters::new(chord_width, thickness);

        match generate(&profile, &params) {
            Ok((csv, dxf_bytes)) => {
                let base = format!("{}_{}_{}", stem, chord_width, thickness);
                fs::write(format!("{}.csv", base), csv).expect("Failed writing CSV file");
                fs::write(format!("{}.dxf", base), dxf_bytes).expect("Failed writing DXF file");
                println!("Saved {}.csv and {}.dxf", base, base);
            }
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn generate(
    profile: &DatProfile,
    params: &ScaleParameters,
) -> Result<(String, Vec<u8>), ProfileError> {
    let contour = build_contour(profile)?;
    let scaled = scale_contour(&contour, params)?;
    Ok((emit_csv(&scaled), emit_dxf(&scaled)?))
}

/// Reads a non-negative integer from stdin. Returns `None` on a blank line or
/// end of input; keeps asking while the input is not a number.
fn prompt_u32(label: &str) -> Option<u32> {
    loop {
        print!("{}", label);
        io::stdout().flush().expect("Failed flushing stdout");

        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .expect("Failed reading stdin");
        if read == 0 {
            return None;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse() {
            Ok(value) => return Some(value),
            Err(_) => eprintln!("Not a whole number: {}", trimmed),
        }
    }
}
