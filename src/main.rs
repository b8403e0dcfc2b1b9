use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::Parser;
use freecheck::config::{self, SectionFamily};
use freecheck::{PrintContext, Resources, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays a clean PostScript stream.
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "freecheck=info",
        2 => "freecheck=debug",
        _ => "freecheck=trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let conf = cli.conf.clone().unwrap_or_else(config::default_config_path);
    let document = config::load_config_file(&conf)?;

    let resources = match &cli.resources {
        Some(dir) => Resources::from_dir(dir)?,
        None => Resources::builtin(),
    };

    let ctx = PrintContext::builder()
        .with_document(document)
        .with_selection(cli.selection())
        .with_overrides(cli.overrides())
        .with_resources(resources)
        .build()?;

    if cli.wants_listing() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if cli.showaccounts {
            print_names(&mut out, "Accounts:", &ctx, SectionFamily::Account)?;
        }
        if cli.showstyles {
            print_names(&mut out, "Check Styles:", &ctx, SectionFamily::Style)?;
        }
        if cli.showblanks {
            print_names(&mut out, "Check Blanks:", &ctx, SectionFamily::CheckBlank)?;
        }
        return Ok(());
    }

    let lines = ctx.generate()?;
    match &cli.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_lines(&mut out, &lines)?;
            out.flush()?;
            tracing::info!(path = %path.display(), "wrote document");
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_lines(&mut out, &lines)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn print_names(
    out: &mut impl Write,
    title: &str,
    ctx: &PrintContext,
    family: SectionFamily,
) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for name in ctx.names(family) {
        writeln!(out, "\t{name}")?;
    }
    Ok(())
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
