use anyhow::Result;

pub fn run() -> Result<()> {
    println!("resonance {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
