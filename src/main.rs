use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{anyhow, Context};
use clap::Parser as CliParser;
use tcc::{
    compiler::compiler::{class_name_for, compile, output_path_for},
    display_error,
    errors::errors::Error,
    lexer::lexer::Scanner,
    parser::parser::parse,
    semantic::analyzer::analyze,
};
use tracing::{error, info, Level};

/// Compiles a `.tcc` program to a Java class.
#[derive(CliParser, Debug)]
#[command(name = "tcc", version, about)]
struct Args {
    /// Source file to compile
    input: PathBuf,

    /// Directory for the generated `.java` file (defaults to the source's directory)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Stop after semantic analysis
    #[arg(long)]
    check: bool,

    /// Print the token stream and exit
    #[arg(long)]
    tokens: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let file_name = args.input.to_string_lossy().into_owned();
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {:?}", args.input))?;

    if args.tokens {
        for token in Scanner::new(source.as_str()) {
            match token {
                Ok(token) => token.debug(),
                Err(err) => return Ok(report(&Error::from(err), &source, &file_name)),
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let start = Instant::now();
    let program = match parse(&source) {
        Ok(program) => program,
        Err(err) => return Ok(report(&err, &source, &file_name)),
    };
    info!("Parsed in {:?}", start.elapsed());

    let analyze_start = Instant::now();
    if let Err(err) = analyze(&program) {
        return Ok(report(&Error::from(err), &source, &file_name));
    }
    info!("Analyzed in {:?}", analyze_start.elapsed());

    if args.check {
        println!("{}: ok", file_name);
        return Ok(ExitCode::SUCCESS);
    }

    let class_name = class_name_for(&args.input)
        .ok_or_else(|| anyhow!("cannot derive a class name from {:?}", args.input))?;
    let output_path = output_path_for(&args.input, args.out_dir.as_deref())
        .ok_or_else(|| anyhow!("cannot derive an output path from {:?}", args.input))?;

    let output = compile(&program, &class_name);
    fs::write(&output_path, output).with_context(|| format!("writing {:?}", output_path))?;

    info!("Total time: {:?}", start.elapsed());
    info!("Wrote {}", output_path.display());
    Ok(ExitCode::SUCCESS)
}

fn report(err: &Error, source: &str, file_name: &str) -> ExitCode {
    eprint!("{}", display_error(err, source, file_name));
    ExitCode::FAILURE
}
