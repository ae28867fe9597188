//! Demo binary: drives the counter headlessly and prints what renders.

use tally_ui::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut harness = Harness::mount(CounterApp::new());
    println!("{}", harness.text("count-display")?);

    for _ in 0..3 {
        harness.click("btn-inc")?;
    }
    harness.click("btn-dec")?;
    println!("{}", harness.text("count-display")?);

    // Drive it to the floor and one past, to show the warning.
    for _ in 0..3 {
        harness.click("btn-dec")?;
    }
    println!("{}", harness.text("count-display")?);
    println!("{}", harness.text("error-message")?);

    println!("{}", harness.frame().to_json()?);
    harness.unmount();
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();
}
