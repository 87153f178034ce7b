use anyhow::Result;
use envgen_core::describe;
use envgen_engine::validate_target_name;

pub fn handle(name: &str) -> Result<()> {
    validate_target_name(name)?;

    println!("✓ {} is a valid target name", name);
    println!("  Header description: {}", describe(name));
    Ok(())
}
