use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wisam::{Config, InputSource, Interpreter, ast::tree::Tree, parse, tokenize};

/// wisam runs programs written in Wisam, a small scripting language with
/// Arabic keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells wisam to read a file instead of taking the program as an
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the tokens of the program instead of running it.
    #[arg(long)]
    tokens: bool,

    /// Prints the syntax tree of the program instead of running it.
    #[arg(long)]
    ast: bool,

    /// The deepest allowed nesting of function calls.
    #[arg(long)]
    max_call_depth: Option<usize>,

    /// Logs what the interpreter does to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

/// Reads `ادخل` lines from standard input.
struct Stdin;

impl InputSource for Stdin {
    fn read_line(&mut self, prompt: Option<&str>) -> Option<String> {
        if let Some(prompt) = prompt {
            print!("{prompt} ");
            io::stdout().flush().ok()?;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("wisam=debug"),
        Err(_) => return,
    };

    tracing_subscriber::registry().with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                                  .with(filter)
                                  .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                                              eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                        &args.contents);
                                              std::process::exit(1);
                                          })
    } else {
        args.contents
    };

    if args.tokens {
        let tokenized = tokenize(&script);
        for token in &tokenized.tokens {
            println!("{token}");
        }
        for error in &tokenized.errors {
            eprintln!("{error}");
        }
        return;
    }

    let parsed = parse(&script);

    if args.ast {
        print!("{}", Tree(&parsed.program));
    }
    if !parsed.parse_errors.is_empty() {
        for error in &parsed.parse_errors {
            eprintln!("{error}");
        }
        std::process::exit(1);
    }
    if args.ast {
        return;
    }

    let mut config = Config::default();
    if let Some(depth) = args.max_call_depth {
        config.max_call_depth = depth;
    }

    let mut interpreter = Interpreter::with_config(config);
    interpreter.set_input(Box::new(Stdin));

    let outcome = interpreter.run(&parsed.program);
    for line in &outcome.output {
        println!("{line}");
    }
    for error in &outcome.errors {
        eprintln!("{error}");
    }
    if !outcome.success {
        std::process::exit(1);
    }
}
