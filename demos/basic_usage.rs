// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the configuration crate.
//!
//! This example demonstrates:
//! - Loading a YAML document where every entry is parsed once
//! - Reading text values back as lists, maps, integers and booleans
//! - Typed YAML values short-circuiting coercion
//! - Falling back to defaults for missing or unreadable values
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use lazycfg::prelude::*;
use std::collections::HashMap;

const DOCUMENT: &str = r#"
service:
  name: checkout
  port: "8443"
  replicas: 3
  allowed_hosts: "api.local, admin.local, api.local"
  labels: "env:staging;team:payments"
  broken_labels: "region:eu:west"
  tls: "True"
  debug: "on"
"#;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== lazycfg: Basic Usage ===\n");

    let config = ParsedConfig::from_yaml_str(DOCUMENT)?;
    println!("Loaded {} entries.\n", config.len());

    println!("--- Text read as other types ---");
    let port = config.get_or("service.port", 80_i64);
    println!("✓ service.port as integer: {}", port);

    let hosts = config.get_or("service.allowed_hosts", Vec::<String>::new());
    println!("✓ service.allowed_hosts as list: {:?}", hosts);

    let labels = config.get_or("service.labels", HashMap::<String, String>::new());
    println!("✓ service.labels as map: {:?}", labels);

    let tls = config.get_or("service.tls", false);
    println!("✓ service.tls as boolean: {}", tls);

    // Only "true" counts as true
    let debug = config.get_or("service.debug", true);
    println!("✓ service.debug (\"on\") as boolean: {}", debug);

    println!("\n--- Typed values ---");
    let replicas = config.get::<i64>("service.replicas")?;
    println!("✓ service.replicas: {}", replicas);
    match config.get::<String>("service.replicas") {
        Ok(text) => println!("  unexpected text: {}", text),
        Err(e) => println!("✗ service.replicas as text without a default: {}", e),
    }

    println!("\n--- Defaults ---");
    let timeout = config.get_or("service.timeout", 30_i64);
    println!("✓ service.timeout (missing): {}", timeout);

    // Logged at warn level when loaded; reads back as an empty map
    let broken = config.get_or("service.broken_labels", HashMap::<String, String>::new());
    println!("✓ service.broken_labels as map: {:?}", broken);

    println!("\n=== Example Complete ===");
    Ok(())
}
