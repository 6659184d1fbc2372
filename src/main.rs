use anyhow::Result;
use clap::Parser;
use reactscan::cli::Cli;
use reactscan::io::output::create_writer;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let runtime = tokio::runtime::Runtime::new()?;
    let report = runtime.block_on(reactscan::scan_with_batch_size(&cli.path, cli.batch_size))?;

    let mut writer = create_writer(cli.format.into(), &cli.path);
    writer.write_report(&report)?;
    Ok(())
}
