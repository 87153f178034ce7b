use anyhow::Result;
use envgen_core::ENV_TYPES;

pub fn handle(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ENV_TYPES)?);
        return Ok(());
    }

    let width = ENV_TYPES.iter().map(|t| t.name.len()).max().unwrap_or(0);

    println!("Template types:");
    for env_type in ENV_TYPES {
        println!(
            "  {:<width$}  {}",
            env_type.name,
            env_type.menu_description,
            width = width
        );
    }
    println!("  Any other name starting with .env is accepted as a custom template.");

    Ok(())
}
