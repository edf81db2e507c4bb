use logi::errors::LogiResult;
use logi::logi::RunArgs;
use std::env;
use std::path::PathBuf;
use std::process;

fn main() -> LogiResult<()> {
    let args = parse_args();
    logi::logi::run(args)?;
    Ok(())
}

fn parse_args() -> RunArgs {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut run_args = RunArgs::default();
    let mut args_iter = args.iter().peekable();

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("logi {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "--all" => {
                run_args.all_refs = true;
            }
            "-C" => {
                let path = args_iter.next().unwrap_or_else(|| {
                    eprintln!("error: option '-C' requires an argument");
                    process::exit(1);
                });
                run_args.workdir = Some(PathBuf::from(path));
            }
            "-n" => {
                let count = args_iter.next().unwrap_or_else(|| {
                    eprintln!("error: option '-n' requires an argument");
                    process::exit(1);
                });
                run_args.max_commits = Some(parse_count(count));
            }
            arg if arg.starts_with("-C") => {
                // Handle -C<path> (no space)
                run_args.workdir = Some(PathBuf::from(&arg[2..]));
            }
            arg if arg.starts_with("-n") => {
                run_args.max_commits = Some(parse_count(&arg[2..]));
            }
            arg => {
                eprintln!("error: unknown option '{}'", arg);
                print_help();
                process::exit(1);
            }
        }
    }

    run_args
}

fn parse_count(text: &str) -> usize {
    text.parse().unwrap_or_else(|_| {
        eprintln!("error: option '-n' expects a number, got '{}'", text);
        process::exit(1);
    })
}

fn print_help() {
    println!("logi - a commit-graph log viewer for the terminal");
    println!();
    println!("USAGE:");
    println!("    logi [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -C <path>     Run as if started in <path>");
    println!("    -n <count>    Limit the number of commits loaded");
    println!("    --all         Show commits from all refs, not just HEAD");
    println!("    -h, --help    Print help information");
    println!("    -V, --version Print version information");
}
