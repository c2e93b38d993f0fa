//! huffcodes - prints the huffman codes of a text file.
//!
//!   huffcodes                 reads input.txt
//!   huffcodes story.txt       reads story.txt
//!   huffcodes --dot story.txt prints the tree in graphviz dot format instead of the codes

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use huffcanon::{build_alphabet_tree, count_alphabet, format_codes, format_distribution, format_dot};
use huffcanon::{Error, Result};
use log::*;

const DEFAULT_INPUT: &str = "input.txt";

fn usage() {
    eprintln!("huffcodes - huffman codes of a text");
    eprintln!();
    eprintln!("Usage: huffcodes [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dot          Print the tree in graphviz dot format");
    eprintln!("  --skip-zero    Leave out symbols which don't occur in the text");
    eprintln!("  -h, --help     Show this help");
    eprintln!();
    eprintln!("FILE defaults to {}. Set RUST_LOG=debug for log output.", DEFAULT_INPUT);
}

#[derive(Debug)]
struct Opts {
    path: PathBuf,
    dot: bool,
    skip_zero: bool,
    help: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Opts> {
    let mut opts = Opts {
        path: PathBuf::from(DEFAULT_INPUT),
        dot: false,
        skip_zero: false,
        help: false,
    };
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "--dot" => opts.dot = true,
            "--skip-zero" => opts.skip_zero = true,
            "-h" | "--help" => opts.help = true,
            flag if flag.starts_with('-') => {
                return Err(Error::Usage(format!("unknown option: {}", flag)))
            }
            _ if path.is_some() => {
                return Err(Error::Usage(format!("unexpected argument: {}", arg)))
            }
            _ => path = Some(PathBuf::from(&arg)),
        }
    }
    if let Some(path) = path {
        opts.path = path;
    }
    Ok(opts)
}

fn run(opts: &Opts) -> Result<()> {
    let input = fs::read(&opts.path).map_err(|source| Error::Io {
        path: opts.path.clone(),
        source,
    })?;
    info!("read {} bytes from {:?}", input.len(), opts.path);

    let counts = count_alphabet(&input);
    let tree = build_alphabet_tree(&counts, opts.skip_zero)?;

    if opts.dot {
        print!("{}", format_dot(&tree)?);
        return Ok(());
    }

    println!("Decimal ASCII :");
    println!("{:?}", input);
    println!("String : ");
    println!("{}", String::from_utf8_lossy(&input));
    println!("Probability distribution :");
    print!("{}", format_distribution(&counts));
    println!("Huffman Encoding :");
    print!("{}", format_codes(&tree));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let opts = match parse_args(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("huffcodes: {}", err);
            usage();
            return ExitCode::FAILURE;
        }
    };
    if opts.help {
        usage();
        return ExitCode::SUCCESS;
    }

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:?}", err);
            eprintln!("huffcodes: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|arg| arg.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn default_options() {
        let opts = parse_args(args(&[])).unwrap();
        assert_eq!(opts.path, PathBuf::from(DEFAULT_INPUT));
        assert!(!opts.dot && !opts.skip_zero && !opts.help);
    }

    #[test]
    fn flags_and_path() {
        let opts = parse_args(args(&["--dot", "story.txt", "--skip-zero"])).unwrap();
        assert_eq!(opts.path, PathBuf::from("story.txt"));
        assert!(opts.dot && opts.skip_zero);
    }

    #[test]
    fn bad_arguments() {
        assert!(matches!(parse_args(args(&["-x"])), Err(Error::Usage(_))));
        assert!(matches!(
            parse_args(args(&["a.txt", "b.txt"])),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn missing_file() {
        let opts = parse_args(args(&["/nonexistent/huffcodes/input.txt"])).unwrap();
        assert!(matches!(run(&opts), Err(Error::Io { .. })));
    }
}
