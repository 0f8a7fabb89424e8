use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};

use file_finder::cli::Cli;
use file_finder::finder::FileFinder;
use file_finder::output::ConsoleSink;

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 初始化日志
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = run(&cli) {
        error!("{:#}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let start_time = Instant::now();

    // 所有配置错误都在遍历开始前报告
    let options = cli.build_options().context("invalid configuration")?;
    let finder = FileFinder::new(&cli.in_dir)?.with_options(options)?;
    debug!("Options: {:?}", finder.options());

    let summary = finder
        .search_and_print(&mut ConsoleSink)
        .context("search aborted")?;

    info!(
        "Search finished in {:.2?}: {} files, {} directories",
        start_time.elapsed(),
        summary.files_found,
        summary.dirs_found
    );
    Ok(())
}
