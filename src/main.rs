// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{anyhow, bail, Context, Result};
use guitar_theory::config::{validate_config, TheoryConfig};
use guitar_theory::engine;
use guitar_theory::{harmonize, Chord, ChordQuality, Engine, Key, NoteName, ScaleTypeId};
use tracing::{debug, Level};

fn print_usage() {
    println!("THEORY - Scale spelling and harmonic analysis");
    println!();
    println!("Usage: theory [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  scale [ROOT] [SCALE]                   Spell a scale with interval labels");
    println!("  intervals <ROOT> <NOTE>... [--mode M]  Label notes against a root");
    println!("  chord <ROOT> <QUALITY>                 Spell a chord with interval labels");
    println!("  numeral <KEY> <CHORD-ROOT> <DEGREE> <QUALITY>");
    println!("                                         Roman numeral for a chord in a key");
    println!("  function <DEGREE> <SCALE> [functional] Harmonic function of a degree");
    println!("  harmonize [ROOT] [SCALE]               Triads on every degree of a key");
    println!("  enharmonic <NOTE>                      Enharmonic respelling of a note");
    println!("  list                                   List available scale types");
    println!();
    println!("Options:");
    println!("  --config <FILE>   Load defaults and custom scales from a YAML file");
    println!("  --verbose, -v     Show debug logging");
    println!("  --help, -h        Show this help message");
}

/// Global options split from the command line
struct Options {
    config: Option<String>,
    verbose: bool,
    help: bool,
    mode: Option<String>,
    positional: Vec<String>,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut options = Options {
        config: None,
        verbose: false,
        help: false,
        mode: None,
        positional: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config = Some(path.clone());
            }
            "--mode" => {
                let mode = iter.next().ok_or_else(|| anyhow!("--mode requires a scale type"))?;
                options.mode = Some(mode.clone());
            }
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => options.help = true,
            _ => options.positional.push(arg.clone()),
        }
    }

    Ok(options)
}

fn required<'a>(args: &'a [String], index: usize, what: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing {}", what))
}

fn parse_degree(s: &str) -> Result<u8> {
    s.parse().map_err(|_| anyhow!("Invalid degree: {}", s))
}

fn parse_note(s: &str) -> Result<NoteName> {
    NoteName::from_str(s).ok_or_else(|| anyhow!("Invalid note name: {}", s))
}

fn show_scale(engine: &Engine, root: &str, scale_type: &str) -> Result<()> {
    let notes = engine.build_named_scale(root, scale_type);
    if notes.is_empty() {
        bail!("Cannot build {} {} (run with --verbose for details)", root, scale_type);
    }
    let refs: Vec<&str> = notes.iter().map(String::as_str).collect();
    let labels = engine.intervals_of(&refs, root, Some(scale_type), None);

    let entry = engine.resolve(scale_type, notes.len());
    println!("{} {} ({})", root, entry.kind, entry.category.name());
    println!("  notes:     {}", notes.join(" "));
    println!("  intervals: {}", labels.join(" "));
    Ok(())
}

fn show_chord(root: &str, quality: &str) -> Result<()> {
    let chord = Chord::new(parse_note(root)?, ChordQuality::parse(quality));
    let notes = chord
        .notes()
        .with_context(|| format!("Cannot spell {}", chord))?;
    let labels: Vec<String> = chord.intervals().iter().map(|l| l.to_string()).collect();

    println!("{}", chord);
    println!(
        "  notes:     {}",
        notes.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ")
    );
    println!("  intervals: {}", labels.join(" "));
    Ok(())
}

fn show_harmony(root: &str, scale_type: &str) -> Result<()> {
    let key = Key::parse(root, scale_type)
        .ok_or_else(|| anyhow!("Unknown key: {} {}", root, scale_type))?;
    let chords = harmonize(&key).with_context(|| format!("Cannot harmonize {}", key))?;
    if chords.is_empty() {
        println!("{} is not a seven-note scale", key);
        return Ok(());
    }

    println!("Chords in {}", key);
    for row in &chords {
        println!(
            "  {}  {:<6} {:<16} {}",
            row.degree,
            row.numeral,
            row.chord.to_string(),
            row.function
        );
    }
    Ok(())
}

fn list_scales(engine: &Engine) {
    println!("Built-in scale types:");
    for id in ScaleTypeId::all() {
        println!(
            "  {:<22} {:<28} {:<20} {}",
            id.slug(),
            id.name(),
            id.category().name(),
            id.strategy().tag()
        );
    }

    let custom: Vec<String> = engine
        .registry()
        .available_scales()
        .into_iter()
        .filter(|name| ScaleTypeId::from_str(name).is_none())
        .collect();
    if !custom.is_empty() {
        println!();
        println!("Custom scales:");
        for name in custom {
            println!("  {}", name);
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_options(&args)?;

    tracing_subscriber::fmt()
        .with_max_level(if options.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if options.help {
        print_usage();
        return Ok(());
    }

    let config = match &options.config {
        Some(path) => validate_config(path)?,
        None => TheoryConfig::default(),
    };
    debug!(custom_scales = config.custom_scales.len(), "configuration loaded");
    let engine = Engine::with_registry(config.registry());

    let Some((command, rest)) = options.positional.split_first() else {
        println!("THEORY - Scale spelling and harmonic analysis");
        println!("Run with --help for usage information");
        return Ok(());
    };

    let defaults = &config.defaults;
    let root_or_default = |i: usize| rest.get(i).map(String::as_str).unwrap_or(&defaults.root);
    let scale_or_default = |i: usize| rest.get(i).map(String::as_str).unwrap_or(&defaults.scale);

    match command.as_str() {
        "scale" => {
            show_scale(&engine, root_or_default(0), scale_or_default(1))?;
        }
        "intervals" => {
            let root = required(rest, 0, "root note")?;
            let notes: Vec<&str> = rest[1..].iter().map(String::as_str).collect();
            if notes.is_empty() {
                bail!("intervals requires at least one note");
            }
            let labels = engine.intervals_of(&notes, root, None, options.mode.as_deref());
            for (note, label) in notes.iter().zip(&labels) {
                println!("  {:<4} {}", note, label);
            }
        }
        "chord" => {
            show_chord(required(rest, 0, "chord root")?, required(rest, 1, "chord quality")?)?;
        }
        "numeral" => {
            let key = required(rest, 0, "key root")?;
            let chord_root = required(rest, 1, "chord root")?;
            let degree = parse_degree(required(rest, 2, "degree")?)?;
            let quality = required(rest, 3, "chord quality")?;
            let numeral = engine.roman_numeral(key, chord_root, degree, quality);
            if numeral.is_empty() {
                println!("(no numeral for {} {} at degree {})", chord_root, quality, degree);
            } else {
                println!("{}", numeral);
            }
        }
        "function" => {
            let degree = parse_degree(required(rest, 0, "degree")?)?;
            let scale_type = required(rest, 1, "scale type")?;
            let category = rest.get(2).map(String::as_str);
            let label = engine.chord_function(degree, scale_type, category);
            println!("{}", if label.is_empty() { "-" } else { label.as_str() });
        }
        "harmonize" => {
            show_harmony(root_or_default(0), scale_or_default(1))?;
        }
        "enharmonic" => {
            let note = required(rest, 0, "note")?;
            parse_note(note)?;
            println!("{}", engine::enharmonic_equivalent(note));
        }
        "list" => {
            list_scales(&engine);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
