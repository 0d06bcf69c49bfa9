// src/cli.rs
//! Headless front end: fetch one source, print a page, optionally write the
//! CSV. Same controller and pager as the GUI.

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::info;

use crate::{
    config::{self, options::ExportOptions},
    fetch::{FetchController, FetchEvent},
    file,
    net::HttpFetcher,
    pager::Pager,
    source::Source,
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Fetch posts or comments, page through them, export CSV")]
pub struct Args {
    /// Content type to fetch: posts | comments
    #[arg(short, long, value_parser = parse_source)]
    pub source: Source,

    /// Page to print (1-based); out-of-range values show page 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Write the whole collection as Posts.csv / Comments.csv
    #[arg(short, long)]
    pub export: bool,

    /// Export directory (defaults to the configured one)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Fetch from this base URL instead of the public endpoints
    #[arg(long)]
    pub base_url: Option<String>,
}

fn parse_source(s: &str) -> Result<Source, String> {
    Source::parse(s).ok_or_else(|| format!("unknown source '{s}' (expected posts or comments)"))
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    let opts = crate::log::startup(&config::file::default_path(), &crate::log::default_path());

    let mut fetcher = HttpFetcher::new()?;
    if let Some(base) = &args.base_url {
        fetcher = fetcher.with_base_url(base);
    }

    let mut ctl = FetchController::new(Arc::new(fetcher));
    ctl.select(args.source, || {});
    match ctl.wait() {
        Some(FetchEvent::Loaded { .. }) => {}
        Some(FetchEvent::Failed { source }) => {
            return Err(eyre!("could not load {}: {}", source, ctl.alert().unwrap_or_default()));
        }
        None => return Err(eyre!("fetch did not start")),
    }

    let records = ctl.records();
    let mut pager = Pager::new(records.len());
    pager.go_to(args.page);

    if pager.is_empty() {
        println!("{}", crate::config::consts::EMPTY_MAIN_MSG);
    } else {
        println!("ID\t{}", args.source.column_header());
        for r in pager.visible(records) {
            println!("{}\t{}", r.id, args.source.display_field(r));
        }
        println!("{pager}");
    }

    if args.export {
        let export = match &args.out {
            Some(dir) => ExportOptions::with_dir(dir),
            None => opts.export.clone(),
        };
        let path = file::write_export(&export, records, args.source)
            .wrap_err("export failed")?;
        info!("CLI: exported {}", path.display());
        println!("Wrote {}", path.display());
    }

    Ok(())
}
