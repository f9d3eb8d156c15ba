//! config command - Show effective configuration values

use crate::cli::Context;
use crate::core::config::Config;
use anyhow::{Context as _, Result};
use serde_json::json;

/// Print one configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let value = ctx
        .config
        .get(key)
        .with_context(|| format!("Known keys: {}", Config::KEYS.join(", ")))?;

    if ctx.json() {
        println!("{}", json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }
    Ok(())
}

/// Print every configuration value.
pub fn list(ctx: &Context) -> Result<()> {
    let mut entries = serde_json::Map::new();
    for key in Config::KEYS {
        let value = ctx.config.get(key)?;
        if ctx.json() {
            entries.insert(key.to_string(), json!(value));
        } else {
            println!("{} = {}", key, value);
        }
    }

    if ctx.json() {
        println!("{}", serde_json::Value::Object(entries));
    }
    Ok(())
}

/// Print the path of the loaded config file.
pub fn path(ctx: &Context) -> Result<()> {
    let path = ctx.config.path().map(|p| p.display().to_string());

    if ctx.json() {
        println!("{}", json!({ "path": path }));
    } else {
        match path {
            Some(path) => println!("{}", path),
            None => println!("(no config file; using defaults)"),
        }
    }
    Ok(())
}
