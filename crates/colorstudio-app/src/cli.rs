//! Command-line sampling.
//!
//! `colorstudio <image> <x> <y> [<display-width> <display-height>] [--copy <hex|rgb|hsl>]`
//!
//! The point is given in display coordinates. Without a display size the
//! image is assumed to be shown at its natural size.

use colorstudio_core::{ColorFormat, ColorReadout, Point, Rect, Size, Studio, StudioConfig, StudioError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "COLORSTUDIO_CONFIG";

pub const USAGE: &str =
    "usage: colorstudio <image> <x> <y> [<display-width> <display-height>] [--copy <hex|rgb|hsl>]";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\n{usage}", usage = USAGE)]
    Usage(String),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("({x}, {y}) is outside the image")]
    OutOfBounds { x: f64, y: f64 },
    #[error(transparent)]
    Studio(#[from] StudioError),
}

pub type CliResult<T> = Result<T, CliError>;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub image: PathBuf,
    pub point: Point,
    pub display: Option<Size>,
    pub copy: Option<ColorFormat>,
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional = Vec::new();
        let mut copy = None;

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            if arg == "--copy" {
                let format = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("--copy needs a format".into()))?;
                copy = Some(format.parse::<ColorFormat>().map_err(CliError::Usage)?);
            } else {
                positional.push(arg);
            }
        }

        let number = |s: &String| {
            s.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| CliError::Usage(format!("not a number: {s}")))
        };

        let (image, x, y, display) = match positional.as_slice() {
            [image, x, y] => (image, x, y, None),
            [image, x, y, w, h] => (image, x, y, Some(Size::new(number(w)?, number(h)?))),
            _ => return Err(CliError::Usage("wrong number of arguments".into())),
        };

        Ok(Self {
            image: PathBuf::from(image),
            point: Point::new(number(x)?, number(y)?),
            display,
            copy,
        })
    }
}

/// Load the config from `path`, or defaults when there is none.
pub fn load_config(path: Option<&Path>) -> CliResult<StudioConfig> {
    let Some(path) = path else {
        return Ok(StudioConfig::default());
    };
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = StudioConfig::from_json_str(&json)?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Sample the pixel under `args.point` and return its readout.
pub fn sample_file(args: &Args, config: StudioConfig) -> CliResult<(Studio, ColorReadout)> {
    let bytes = std::fs::read(&args.image).map_err(|source| CliError::Io {
        path: args.image.clone(),
        source,
    })?;
    let name = args
        .image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut studio = Studio::new(config);
    let id = studio.add_image(&name, &bytes)?;
    let buffer = studio.library().buffer(id)?;
    let display = args
        .display
        .unwrap_or_else(|| Size::new(f64::from(buffer.width()), f64::from(buffer.height())));
    let layout = Rect::from_origin_size(Point::ZERO, display);

    studio.toggle_picker()?;
    studio
        .clicked(id, args.point, layout)
        .ok_or(CliError::OutOfBounds {
            x: args.point.x,
            y: args.point.y,
        })?;

    let readout = studio.readout();
    Ok((studio, readout))
}

/// One line per copyable format, e.g. `HEX  #ff0000`.
pub fn format_readout(readout: &ColorReadout) -> String {
    ColorFormat::ALL
        .iter()
        .map(|format| format!("{:<4} {}", format.label(), format.format(readout.color)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorstudio_core::MemoryClipboard;
    use std::io::Write;

    fn args(list: &[&str]) -> CliResult<Args> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    fn write_png(dir: &Path) -> PathBuf {
        let mut img = image::RgbaImage::new(4, 2);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = if x < 2 {
                image::Rgba([99, 102, 241, 255])
            } else if y == 0 {
                image::Rgba([255, 0, 0, 255])
            } else {
                image::Rgba([128, 128, 128, 255])
            };
        }
        let path = dir.join("swatch.png");
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["a.png", "3", "4.5"]).unwrap();
        assert_eq!(parsed.image, PathBuf::from("a.png"));
        assert_eq!(parsed.point, Point::new(3.0, 4.5));
        assert_eq!(parsed.display, None);
        assert_eq!(parsed.copy, None);

        let parsed = args(&["a.png", "3", "4", "--copy", "hsl", "800", "600"]).unwrap();
        assert_eq!(parsed.display, Some(Size::new(800.0, 600.0)));
        assert_eq!(parsed.copy, Some(ColorFormat::Hsl));
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(matches!(args(&["a.png"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.png", "x", "1"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.png", "NaN", "1"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.png", "1", "1", "--copy"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.png", "1", "1", "--copy", "cmyk"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_sample_natural_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path());

        let parsed = Args {
            image: path,
            point: Point::new(2.5, 0.5),
            display: None,
            copy: None,
        };
        let (studio, readout) = sample_file(&parsed, StudioConfig::default()).unwrap();
        assert_eq!(readout.hex, "#ff0000");
        assert_eq!(readout.rgb_label, "255, 0, 0");
        assert_eq!(readout.hsl_label, "0°, 100%, 50%");
        assert_eq!(studio.history().len(), 1);
        assert_eq!(
            format_readout(&readout),
            "HEX  #ff0000\nRGB  rgb(255, 0, 0)\nHSL  hsl(0, 100%, 50%)"
        );
    }

    #[test]
    fn test_sample_scaled_display() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path());

        // 4x2 image shown at 400x200: (350, 150) is pixel (3, 1).
        let parsed = Args {
            image: path,
            point: Point::new(350.0, 150.0),
            display: Some(Size::new(400.0, 200.0)),
            copy: Some(ColorFormat::Rgb),
        };
        let (mut studio, readout) = sample_file(&parsed, StudioConfig::default()).unwrap();
        assert_eq!(readout.hex, "#808080");
        assert_eq!(readout.hsl_label, "0°, 0%, 50%");

        let mut clipboard = MemoryClipboard::new();
        studio.copy(ColorFormat::Rgb, &mut clipboard).unwrap();
        assert_eq!(clipboard.contents(), Some("rgb(128, 128, 128)"));
    }

    #[test]
    fn test_sample_outside() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path());
        let parsed = Args {
            image: path,
            point: Point::new(4.0, 0.0),
            display: None,
            copy: None,
        };
        assert!(matches!(
            sample_file(&parsed, StudioConfig::default()),
            Err(CliError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_sample_missing_or_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Args {
            image: dir.path().join("nope.png"),
            point: Point::ZERO,
            display: None,
            copy: None,
        };
        assert!(matches!(sample_file(&missing, StudioConfig::default()), Err(CliError::Io { .. })));

        let corrupt_path = dir.path().join("corrupt.png");
        std::fs::write(&corrupt_path, b"\x89PNG\r\n\x1a\nnot really").unwrap();
        let corrupt = Args {
            image: corrupt_path,
            ..missing
        };
        assert!(matches!(
            sample_file(&corrupt, StudioConfig::default()),
            Err(CliError::Studio(StudioError::Decode(_)))
        ));
    }

    #[test]
    fn test_load_config() {
        assert_eq!(load_config(None).unwrap(), StudioConfig::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "history_len": 4 }}"#).unwrap();
        assert_eq!(load_config(Some(file.path())).unwrap().history_len, 4);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, r#"{{ "history_len": 0 }}"#).unwrap();
        assert!(matches!(
            load_config(Some(bad.path())),
            Err(CliError::Studio(StudioError::InvalidConfig(_)))
        ));
    }
}
