use clap::Parser as _;
use smclear::BaseArgs;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project. Accordingly, we subscribe to these
    // events so they can be written to stderr, filtered via RUST_LOG.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = BaseArgs::parse();
    args.evaluate()
}
