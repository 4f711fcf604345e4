//! Handlers for the conversion run and the config subcommands.

use clap::CommandFactory;

use ascii_ramp::config::{default_path as get_config_path, Config, DEFAULT_CONFIG};
use ascii_ramp::convert::convert_file;

use super::args::{Args, ConfigAction};
use super::error::CliError;
use super::settings::Settings;

/// Convert the image named by `--file` and write it to every selected sink.
///
/// Without `--file` the usage text is printed and nothing else happens.
pub fn run_convert(args: &Args) -> Result<(), CliError> {
    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(args, &config);

    let Some(file) = settings.file.as_deref() else {
        eprintln!("{}", Args::command().render_help());
        return Ok(());
    };

    if settings.sinks.is_empty() {
        log::warn!("No output selected; use --print, --out or --html");
    }

    let art = convert_file(file, &settings.convert)?;
    for sink in &settings.sinks {
        sink.emit(&art, &settings.render)?;
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: &ConfigAction, args: &Args) -> Result<(), CliError> {
    let config_path = args.config.clone().unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(args.config.as_deref())?;
            let settings = Settings::resolve(args, &config);

            println!("Current configuration:");
            println!("  Scale: {}", settings.convert.scale);
            println!("  Contrast: {}", settings.convert.contrast);
            println!("  Buckets: {}", settings.convert.buckets);
            println!("  Repeat: {}", settings.render.repeat);
            println!(
                "  Invert: {}",
                if settings.convert.invert { "yes" } else { "no" }
            );
            println!(
                "  Print: {}",
                if config.output.print { "yes" } else { "no" }
            );
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(CliError::ConfigExists { path: config_path });
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).map_err(|source| CliError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|source| CliError::Io {
                path: config_path.clone(),
                source,
            })?;

            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_init_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let args = Args::parse_from(["ascii-ramp", "--config", path.to_str().unwrap()]);

        handle_config_action(&ConfigAction::Init, &args).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_config_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();
        let args = Args::parse_from(["ascii-ramp", "--config", path.to_str().unwrap()]);

        let err = handle_config_action(&ConfigAction::Init, &args).unwrap_err();
        assert!(matches!(err, CliError::ConfigExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn test_run_convert_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let args = Args::parse_from([
            "ascii-ramp",
            "--config",
            path.to_str().unwrap(),
            "--file",
            "x.png",
        ]);
        let err = run_convert(&args).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_run_convert_writes_text_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("white.png");
        image::RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]))
            .save(&input)
            .unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        let out = dir.path().join("art.txt");

        let args = Args::parse_from([
            "ascii-ramp",
            "--config",
            config.to_str().unwrap(),
            "--file",
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ]);
        run_convert(&args).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "@@@@@@\n@@@@@@\n");
    }

    #[test]
    fn test_run_convert_reports_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        let args = Args::parse_from([
            "ascii-ramp",
            "--config",
            config.to_str().unwrap(),
            "--file",
            dir.path().join("missing.png").to_str().unwrap(),
        ]);
        let err = run_convert(&args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Convert(ascii_ramp::error::ConvertError::Open { .. })
        ));
    }

    #[test]
    fn test_run_convert_without_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        let out = dir.path().join("art.txt");
        let args = Args::parse_from([
            "ascii-ramp",
            "--config",
            config.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ]);

        run_convert(&args).unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("config.toml")]);
    }

    #[test]
    fn test_run_convert_without_sink_still_decodes() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        let input = dir.path().join("garbage.png");
        std::fs::write(&input, b"not an image at all").unwrap();
        let args = Args::parse_from([
            "ascii-ramp",
            "--config",
            config.to_str().unwrap(),
            "--file",
            input.to_str().unwrap(),
        ]);

        let err = run_convert(&args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Convert(ascii_ramp::error::ConvertError::Decode { .. })
        ));
        assert!(err.to_string().contains("garbage.png"));
    }

    #[test]
    fn test_run_convert_rejects_nan_contrast_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "[render]\ncontrast = nan\n").unwrap();
        let args = Args::parse_from([
            "ascii-ramp",
            "--config",
            config.to_str().unwrap(),
            "--file",
            dir.path().join("unused.png").to_str().unwrap(),
        ]);

        let err = run_convert(&args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Convert(ascii_ramp::error::ConvertError::InvalidContrast(_))
        ));
    }
}
