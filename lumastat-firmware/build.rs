//! Build script for lumastat-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted in each section, with their inclusive range
const DISPLAY_KEYS: &[(&str, i64, i64)] = &[
    ("refresh_interval_ms", 1, u32::MAX as i64),
    ("idle_timeout_ms", 0, u32::MAX as i64),
    ("text_budget", 2, u8::MAX as i64),
    ("amps_threshold_ma", 0, u16::MAX as i64),
];

const BATTERY_KEYS: &[(&str, i64, i64)] = &[
    ("adc_max", 1, u16::MAX as i64),
    ("supply_mv", 0, u16::MAX as i64),
    ("divider_ratio", 1, u8::MAX as i64),
    ("vref_mv", 0, u16::MAX as i64),
    ("healthy_above", 0, 100),
    ("caution_above", 0, 100),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");
    if !config_path.exists() {
        fail(
            "display.toml not found",
            &["Create one in the lumastat-firmware directory."],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read display.toml", &[&e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("display.toml is not valid TOML", &[&e.to_string()]),
    };

    let mut errors = Vec::new();
    let Some(root) = config.as_table() else {
        fail("display.toml must be a table", &[]);
    };

    for (name, value) in root {
        let keys = match name.as_str() {
            "display" => DISPLAY_KEYS,
            "battery" => BATTERY_KEYS,
            _ => {
                errors.push(format!("unknown section [{}]", name));
                continue;
            }
        };
        match value.as_table() {
            Some(table) => validate_section(name, table, keys, &mut errors),
            None => errors.push(format!("[{}] must be a table", name)),
        }
    }

    // Band thresholds must be ordered
    let battery = root.get("battery").and_then(|b| b.as_table());
    let healthy = battery
        .and_then(|b| b.get("healthy_above"))
        .and_then(|v| v.as_integer())
        .unwrap_or(30);
    let caution = battery
        .and_then(|b| b.get("caution_above"))
        .and_then(|v| v.as_integer())
        .unwrap_or(10);
    if caution >= healthy {
        errors.push(format!(
            "[battery] caution_above ({}) must be below healthy_above ({})",
            caution, healthy
        ));
    }

    if !errors.is_empty() {
        let lines: Vec<&str> = errors.iter().map(String::as_str).collect();
        fail("Invalid display configuration", &lines);
    }
}

fn validate_section(
    section: &str,
    table: &toml::value::Table,
    keys: &[(&str, i64, i64)],
    errors: &mut Vec<String>,
) {
    for (key, value) in table {
        let Some(&(_, min, max)) = keys.iter().find(|(name, _, _)| *name == key.as_str()) else {
            errors.push(format!("[{}] unknown key '{}'", section, key));
            continue;
        };
        match value.as_integer() {
            Some(v) if v < min || v > max => {
                errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            }
            Some(_) => {}
            None => errors.push(format!("[{}] {} must be an integer", section, key)),
        }
    }
}

fn fail(title: &str, details: &[&str]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        details
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
