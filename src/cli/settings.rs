//! Merge command-line flags with the config file.
//!
//! Precedence: CLI flag > config file > built-in default.

use std::path::PathBuf;

use ascii_ramp::config::Config;
use ascii_ramp::convert::ConvertOptions;
use ascii_ramp::render::{OutputSink, RenderOptions, GLYPH_REPEAT};

use super::args::Args;

/// Fully resolved settings for one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub file: Option<PathBuf>,
    pub convert: ConvertOptions,
    pub render: RenderOptions,
    pub sinks: Vec<OutputSink>,
}

impl Settings {
    pub fn resolve(args: &Args, config: &Config) -> Self {
        let defaults = ConvertOptions::default();
        let convert = ConvertOptions {
            scale: args.scale.or(config.render.scale).unwrap_or(defaults.scale),
            contrast: args
                .contrast
                .or(config.render.contrast)
                .unwrap_or(defaults.contrast),
            buckets: args
                .buckets
                .or(config.render.buckets)
                .unwrap_or(defaults.buckets),
            invert: args.invert || config.render.invert,
        };

        let render = RenderOptions {
            repeat: config.render.repeat.unwrap_or(GLYPH_REPEAT).max(1),
        };

        let mut sinks = Vec::new();
        if args.print || config.output.print {
            sinks.push(OutputSink::Stdout);
        }
        if let Some(path) = &args.out {
            sinks.push(OutputSink::Text(path.clone()));
        }
        if let Some(path) = &args.html {
            sinks.push(OutputSink::Html(path.clone()));
        }

        Self {
            file: args.file.clone(),
            convert,
            render,
            sinks,
        }
    }
}
