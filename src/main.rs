use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use stencil::cli::{CliArgs, Command};
use stencil::registry::Registry;
use stencil::{config, sms, template};

fn main() -> Result<()> {
    stencil::tracing::init();

    let args = CliArgs::parse();
    let registry = config::load_registry();

    match args.command {
        Command::Vars { category } => cmd_vars(&registry, category.as_deref()),
        Command::Check { template } => cmd_check(&registry, &template),
        Command::Render { template, values } => cmd_render(&template, &values),
        Command::Sms { template, values } => cmd_sms(&template, values.as_deref()),
    }
}

fn cmd_vars(registry: &Registry, category: Option<&str>) -> Result<()> {
    for group in registry.by_category() {
        if category.is_some_and(|c| !c.eq_ignore_ascii_case(&group.category)) {
            continue;
        }
        println!("{}", group.category);
        for var in &group.variables {
            println!("  {:<24} {} (e.g. {})", var.token(), var.label, var.example);
        }
    }
    Ok(())
}

fn cmd_check(registry: &Registry, template: &Path) -> Result<()> {
    let text = read_template(template)?;
    let keys = template::extract_variables(&text);

    let unknown: Vec<&String> = keys
        .iter()
        .filter(|key| registry.get(key).is_none())
        .collect();

    for key in &unknown {
        eprintln!("unknown variable: {{{{{}}}}}", key);
    }
    if !unknown.is_empty() {
        bail!("{} unknown variable(s)", unknown.len());
    }

    println!("{} variable(s), all known to the catalog", keys.len());
    Ok(())
}

fn cmd_render(template: &Path, values: &Path) -> Result<()> {
    let text = read_template(template)?;
    let values = read_values(values)?;

    let missing: Vec<String> = template::extract_variables(&text)
        .into_iter()
        .filter(|key| !values.contains_key(key))
        .collect();
    for key in &missing {
        eprintln!("no value for {{{{{}}}}}, left as-is", key);
    }

    print!("{}", template::render(&text, &values));
    Ok(())
}

fn cmd_sms(template: &Path, values: Option<&Path>) -> Result<()> {
    let text = read_template(template)?;
    let message = match values {
        Some(path) => template::render(&text, &read_values(path)?),
        None => text,
    };

    let info = sms::analyze(&message);
    println!("length:    {}", info.length);
    println!("segments:  {}", info.segments);
    println!("remaining: {}", info.remaining);
    if info.exceeds {
        eprintln!(
            "message exceeds the {} character ceiling by {}",
            sms::MAX_LENGTH,
            -info.remaining
        );
    }
    Ok(())
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading template {}", path.display()))
}

/// Value maps come as YAML from humans and JSON from the CRM's API tooling
fn read_values(path: &Path) -> Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading values file {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("parsing JSON values in {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("parsing YAML values in {}", path.display()))
    }
}
