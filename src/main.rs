use eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use safelink_icons::{icon_file_name, write_icon, ICON_SIZES};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    for size in ICON_SIZES {
        write_icon(".", size).wrap_err_with(|| format!("failed to create {}", icon_file_name(size)))?;
        println!("Created icon: {}", icon_file_name(size));
    }

    Ok(())
}
