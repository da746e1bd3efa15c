//! Afinar CLI
//!
//! Command-line entry point for dataset preparation and evaluation.
//!
//! # Usage
//!
//! ```bash
//! # Check a run specification
//! afinar validate run.yaml
//! afinar validate run.yaml --detailed
//!
//! # Show the parsed specification
//! afinar info run.yaml --format yaml
//!
//! # Render, length-filter, and split a conversation dataset
//! afinar prepare run.yaml --input conversations.json --output ./prepared
//!
//! # Score model generations against references
//! afinar eval --pairs generations.jsonl
//! ```

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::process::ExitCode;

use afinar::chat::{ChatTemplate, Conversation};
use afinar::config::{
    apply_overrides, load_config, parse_args, Command, EvalArgs, InfoArgs, OutputFormat,
    PrepareArgs, ValidateArgs,
};
use afinar::dataset::{train_test_split, LengthFilter};
use afinar::eval::{evaluate, EvalExample};
use afinar::tokenizer::CharTokenizer;

fn main() -> ExitCode {
    let cli = parse_args();

    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    let result = match cli.command {
        Command::Validate(args) => run_validate(args, log_level),
        Command::Info(args) => run_info(args, log_level),
        Command::Prepare(args) => run_prepare(args, log_level),
        Command::Eval(args) => run_eval(args, log_level),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum LogLevel {
    Quiet,
    Normal,
    Verbose,
}

fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        println!();
        println!("Configuration Summary:");
        println!("  Model: {}", spec.model.name);
        println!("  Max sequence length: {}", spec.model.max_seq_len);
        println!();
        println!("  Dataset: {}", spec.data.dataset);
        println!("  Test fraction: {}", spec.data.test_size);
        println!("  Batch size: {}", spec.data.batch_size);
        println!("  Eval batch size: {}", spec.data.eval_batch_size());
        println!();
        println!("  Optimizer: {}", spec.optimizer.name);
        println!("  Learning rate: {}", spec.optimizer.lr);
        if let Some(wd) = spec.optimizer.params.get("weight_decay") {
            println!("  Weight decay: {wd}");
        }
        println!();
        println!("  Epochs: {}", spec.training.epochs);
        println!(
            "  Gradient accumulation: {}",
            spec.training.gradient_accumulation_steps
        );
        if let Some(clip) = spec.training.max_grad_norm {
            println!("  Gradient clipping: {clip}");
        }
        if let Some(scheduler) = &spec.training.lr_scheduler {
            println!("  LR scheduler: {scheduler}");
        }
        println!("  Output dir: {}", spec.training.output_dir.display());

        if let Some(lora) = &spec.lora {
            println!();
            println!("  LoRA:");
            println!("    Rank: {}", lora.rank);
            println!("    Alpha: {}", lora.alpha);
            if lora.dropout > 0.0 {
                println!("    Dropout: {}", lora.dropout);
            }
            println!("    Target modules: {:?}", lora.target_modules);
        }

        if let Some(generation) = &spec.generation {
            println!();
            println!("  Generation:");
            println!("    Max new tokens: {}", generation.max_new_tokens);
            println!("    Temperature: {}", generation.temperature);
            println!("    Top-p: {}", generation.top_p);
        }
    }

    Ok(())
}

fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_config(&args.config).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Model: {}", spec.model.name);
            println!(
                "Optimizer: {} (lr={})",
                spec.optimizer.name, spec.optimizer.lr
            );
            println!("Epochs: {}", spec.training.epochs);
            println!("Batch size: {}", spec.data.batch_size);

            if spec.lora.is_some() {
                println!("LoRA: enabled");
            }
            if spec.generation.is_some() {
                println!("Generation settings: present");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec).map_err(|e| e.to_string())?;
            println!("{yaml}");
        }
    }

    Ok(())
}

fn run_prepare(args: PrepareArgs, level: LogLevel) -> Result<(), String> {
    let mut spec = load_config(&args.config).map_err(|e| e.to_string())?;
    apply_overrides(&mut spec, &args);

    log(
        level,
        LogLevel::Normal,
        &format!("Preparing {} for {}", args.input.display(), spec.model.name),
    );

    let raw = fs::read_to_string(&args.input)
        .map_err(|e| format!("Failed to read {}: {e}", args.input.display()))?;
    let conversations: Vec<Conversation> =
        serde_json::from_str(&raw).map_err(|e| format!("Failed to parse conversations: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!("  Loaded {} conversations", conversations.len()),
    );

    // Fit the baseline tokenizer on the rendered corpus, then drop
    // everything over the sequence budget
    let template = ChatTemplate::default();
    let rendered: Vec<String> = conversations
        .iter()
        .map(|conversation| template.render(conversation, false))
        .collect();

    let mut tokenizer = CharTokenizer::new();
    tokenizer.fit(&rendered);

    let filter = LengthFilter::new(&template, &tokenizer, spec.model.max_seq_len);
    let kept = filter.apply(&conversations).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Kept {} of {} after length filtering",
            kept.len(),
            conversations.len()
        ),
    );

    let (train, test) =
        train_test_split(&kept, spec.data.test_size, spec.data.seed).map_err(|e| e.to_string())?;

    fs::create_dir_all(&args.output)
        .map_err(|e| format!("Failed to create {}: {e}", args.output.display()))?;
    write_records(&args.output.join("train.jsonl"), &train)?;
    write_records(&args.output.join("test.jsonl"), &test)?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Wrote {} train / {} test records to {}",
            train.len(),
            test.len(),
            args.output.display()
        ),
    );

    Ok(())
}

fn write_records(path: &std::path::Path, texts: &[String]) -> Result<(), String> {
    let mut file =
        fs::File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    for text in texts {
        let record = serde_json::json!({ "text": text });
        writeln!(file, "{record}").map_err(|e| format!("Failed to write record: {e}"))?;
    }
    Ok(())
}

fn run_eval(args: EvalArgs, level: LogLevel) -> Result<(), String> {
    let file = fs::File::open(&args.pairs)
        .map_err(|e| format!("Failed to open {}: {e}", args.pairs.display()))?;

    let mut examples = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| format!("Failed to read pairs: {e}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let example: EvalExample =
            serde_json::from_str(&line).map_err(|e| format!("Failed to parse pair: {e}"))?;
        examples.push(example);
    }

    log(
        level,
        LogLevel::Verbose,
        &format!("  Loaded {} pairs", examples.len()),
    );

    let corpus: Vec<&str> = examples
        .iter()
        .flat_map(|example| [example.reference.as_str(), example.generated.as_str()])
        .collect();
    let mut tokenizer = CharTokenizer::new();
    tokenizer.fit(&corpus);

    let report = evaluate(&examples, &tokenizer).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        _ => println!("{report}"),
    }

    Ok(())
}
