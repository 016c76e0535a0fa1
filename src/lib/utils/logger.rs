use color_eyre::{eyre::Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// [`config_logger`] The `env_logger` configuration for the process that
/// embeds the toolchain layer. Verbosity 0 logs at `Info`, 1 at `Debug`
/// and anything above at `Trace`
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let mut builder = Builder::from_default_env();

    builder
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis();

    builder.filter(
        None,
        match verbose_level {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        },
    );

    builder
        .try_init()
        .with_context(|| "benchforge wasn't able to set up the logger")
}
