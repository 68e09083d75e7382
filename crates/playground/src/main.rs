use clap::Parser;
use tracing::debug;
use erasure::family::Fixture;
use erasure::matrix::ComparisonMatrix;
use erasure::pages::Page;
use cli::args::FormatArg;
use crate::opts::{Command, Opts};

mod opts;

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?;

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.trace.clone(), opts.verbose.clone())?;

    match opts.command {
        Command::Page { page } => {
            print_page(page.into());
        },
        Command::All { } => {
            for (index, page) in Page::ALL.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!("# {}", page.title());
                print_page(*page);
            }
        },
        Command::Matrix { strategy, format } => {
            let fixture: Fixture = strategy.into();
            let matrix = ComparisonMatrix::of(&fixture.boxes());
            debug!("Compared boxes. fixture: {:?}, symmetric: {}", fixture, matrix.is_symmetric());

            match format {
                FormatArg::Text => println!("{}", matrix),
                FormatArg::Json => println!("{}", serde_json::to_string(&matrix)?),
            }
        },
    }

    Ok(())
}

fn print_page(page: Page) {
    let report = page.render();
    debug!("Rendered page. title: '{}', lines: {}", report.title, report.lines.len());

    print!("{}", report);
}
