use anyhow::Result;
use envgen_config::Config;
use envgen_engine::{GenerateRequest, Generator};
use envgen_security::RedactionInfo;
use std::io::Write;

use crate::cli::GenerateArgs;

pub async fn handle(args: GenerateArgs, config: &Config) -> Result<()> {
    let target_name = args
        .target
        .unwrap_or_else(|| config.default_target.clone());

    tracing::debug!(
        "Generating {} from {}",
        target_name,
        args.env_file.display()
    );

    let generator = Generator::from_config(config, args.author);
    let request = GenerateRequest {
        source: args.env_file,
        target_name,
        date: args.date,
        force: args.force,
        write: !args.stdout,
    };

    let outcome = generator.generate(&request).await?;

    if args.stdout {
        print!("{}", outcome.content);
    } else {
        println!("✓ Generated {}", outcome.target_path.display());
        println!("  Type: {}", outcome.header.type_description);
        println!("  Author: {}", outcome.header.author);
    }

    if args.report {
        let report = if args.json {
            serde_json::to_string_pretty(&outcome.redactions)?
        } else {
            format_report(&outcome.redactions)
        };

        // Keep the template alone on stdout
        if args.stdout {
            writeln!(std::io::stderr(), "{}", report)?;
        } else {
            println!("{}", report);
        }
    }

    Ok(())
}

fn format_report(redactions: &[RedactionInfo]) -> String {
    if redactions.is_empty() {
        return "No values redacted.".to_string();
    }

    let width = redactions.iter().map(|r| r.key.len()).max().unwrap_or(0);
    let mut out = format!("Redacted {} value(s):", redactions.len());
    for info in redactions {
        out.push_str(&format!(
            "\n  L{:<4} {:<width$}  {:?}",
            info.line,
            info.key,
            info.rule,
            width = width
        ));
    }
    out
}
