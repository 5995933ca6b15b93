//! The `lindagrades init` command.

use anyhow::Result;

use lindagrades_session::config::LOCAL_CONFIG_FILE;

pub fn execute() -> Result<()> {
    if std::path::Path::new(LOCAL_CONFIG_FILE).exists() {
        println!("{LOCAL_CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(LOCAL_CONFIG_FILE, SAMPLE_CONFIG)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(
                LOCAL_CONFIG_FILE,
                std::fs::Permissions::from_mode(0o600),
            )?;
        }
        println!("Created {LOCAL_CONFIG_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {LOCAL_CONFIG_FILE} with your LINDA credentials");
    println!("  2. Run: lindagrades average");
    println!("  3. Run: lindagrades new-exams");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# lindagrades configuration

username = "${LINDA_USERNAME}"
password = "${LINDA_PASSWORD}"

# base_url = "https://linda.hs-heilbronn.de"
# cache_path = "exams.json"

# Replacement ECTS credits keyed by exam number.
[ects_overrides]
# 12345 = 5.0
"#;
