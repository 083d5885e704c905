use clap::Parser;

fn main() {
    human_panic::setup_panic!();
    let cli = umber::cli::Cli::parse();
    let result = cli.run();
    proc_exit::exit(result);
}
