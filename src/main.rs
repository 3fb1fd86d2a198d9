use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use chordmidi::pattern::{find, CATALOG};
use chordmidi::{generate_midi_from_json, generate_midi_from_yaml, transpose_chords, TransposeRequest};

fn usage() -> ! {
    eprintln!("Usage: chordmidi <request.json|request.yaml> [output.mid]");
    eprintln!("       chordmidi --patterns");
    eprintln!("       chordmidi --describe <pattern>");
    eprintln!("       chordmidi --transpose <from-key> <to-key> <chord>...");
    process::exit(1);
}

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    match args[1].as_str() {
        "--patterns" => list_patterns(),
        "--describe" => match args.get(2) {
            Some(name) => describe_pattern(name),
            None => usage(),
        },
        "--transpose" => {
            if args.len() < 5 {
                usage();
            }
            transpose(&args[2], &args[3], &args[4..]);
        }
        input => render(input, args.get(2)),
    }
}

fn list_patterns() {
    for pattern in CATALOG.iter() {
        println!("{:<20} {}", pattern.name, pattern.description);
    }
}

fn describe_pattern(name: &str) {
    let Some(pattern) = find(name) else {
        eprintln!("Unknown pattern '{}' (try --patterns)", name);
        process::exit(1);
    };
    match serde_yaml::to_string(pattern) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => {
            eprintln!("Error describing '{}': {}", name, e);
            process::exit(1);
        }
    }
}

fn transpose(from_key: &str, to_key: &str, chords: &[String]) {
    let response = transpose_chords(&TransposeRequest {
        from_key: from_key.to_string(),
        to_key: to_key.to_string(),
        chords: chords.to_vec(),
    });
    eprintln!("{} -> {}: up {} semitones", from_key, to_key, response.semitones);
    let transposed: Vec<&str> = response.results.iter().map(|r| r.transposed.as_str()).collect();
    println!("{}", transposed.join(" "));
}

fn render(input_path: &str, output_path: Option<&String>) {
    // Read request
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    let is_json = Path::new(input_path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let result = if is_json {
        generate_midi_from_json(&source)
    } else {
        generate_midi_from_yaml(&source)
    };

    let midi = match result {
        Ok(midi) => midi,
        Err(e) => {
            eprintln!("Error in '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &midi) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            log::info!("wrote {}", path);
        }
        None => {
            if let Err(e) = io::stdout().lock().write_all(&midi) {
                eprintln!("Error writing MIDI to stdout: {}", e);
                process::exit(1);
            }
        }
    }
}
