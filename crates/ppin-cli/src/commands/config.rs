//! `ppin config` command implementation

use crate::config::{Config, ENV_VARS};
use crate::error::Result;
use colored::Colorize;

/// Show all configuration
pub fn show(config: &Config) -> Result<()> {
    print!("{}", format_config(config));
    Ok(())
}

fn format_config(config: &Config) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", "PPIN Configuration:".cyan().bold()));
    out.push_str(&format!("{:<20} {}\n", "biogrid_url:", config.biogrid_url));
    out.push_str(&format!("{:<20} {}\n", "string_url:", config.string_url));
    out.push_str(&format!("{:<20} {}\n", "species:", config.species));
    out.push_str(&format!(
        "{:<20} {}\n",
        "biogrid_access_key:",
        config.redacted_access_key()
    ));
    out.push_str(&format!("{:<20} {}s\n", "timeout:", config.timeout.as_secs()));
    out.push_str(&format!("{:<20} {}\n", "verbose:", config.verbose));
    out.push('\n');
    out.push_str(&format!("{}\n", "Environment Variables:".cyan()));
    for (name, description) in ENV_VARS {
        out.push_str(&format!("  {name:<24} - {description}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_format_config_redacts_key() {
        let config = Config {
            biogrid_access_key: Some(SecretString::from("0123456789abcdef".to_string())),
            ..Config::new()
        };
        let rendered = format_config(&config);

        assert!(rendered.contains("biogrid_access_key:"));
        assert!(rendered.contains("cdef"));
        assert!(!rendered.contains("0123456789abcdef"));
        assert!(rendered.contains("PPIN_SPECIES"));
    }

    #[test]
    fn test_show() {
        assert!(show(&Config::new()).is_ok());
    }
}
