use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "osbforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a script into a storyboard file.
    Compile(CompileArgs),
    /// Compile a script and print the document to stdout.
    Print(PrintArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// User script (JSON).
    #[arg(long)]
    script: PathBuf,

    /// Library document merged before the script; repeatable, order is kept.
    #[arg(long = "lib")]
    libs: Vec<PathBuf>,

    /// Line ending of the emitted document.
    #[arg(long, value_enum, default_value_t = LineEndingChoice::Crlf)]
    line_ending: LineEndingChoice,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    #[command(flatten)]
    src: SourceArgs,

    /// Output `.osb` path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PrintArgs {
    #[command(flatten)]
    src: SourceArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LineEndingChoice {
    Crlf,
    Lf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Print(args) => cmd_print(args),
    }
}

fn make_opts(src: SourceArgs) -> osbforge::CompileOpts {
    let line_ending = match src.line_ending {
        LineEndingChoice::Crlf => osbforge::LineEnding::CrLf,
        LineEndingChoice::Lf => osbforge::LineEnding::Lf,
    };
    let mut opts = osbforge::CompileOpts::new(src.script).line_ending(line_ending);
    for lib in src.libs {
        opts = opts.library(lib);
    }
    opts
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let opts = make_opts(args.src);
    let output = osbforge::compile_to_file(&opts, &args.out)
        .with_context(|| format!("compile '{}'", opts.script.display()))?;

    eprintln!(
        "wrote {} ({} sprites, {} records)",
        args.out.display(),
        output.sprites,
        output.records
    );
    Ok(())
}

fn cmd_print(args: PrintArgs) -> anyhow::Result<()> {
    let opts = make_opts(args.src);
    let output =
        osbforge::compile(&opts).with_context(|| format!("compile '{}'", opts.script.display()))?;
    print!("{}", output.text);
    Ok(())
}
