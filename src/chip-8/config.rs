use clap::{crate_version, App, AppSettings, Arg};

use crate::Error;

const DEFAULT_WINDOW_WIDTH: u32 = 64;
const DEFAULT_WINDOW_HEIGHT: u32 = 32;
const DEFAULT_FG_COLOR: u32 = 0xFF_FF_FF_FF;
const DEFAULT_BG_COLOR: u32 = 0x00_00_00_00;
const DEFAULT_SCALE_FACTOR: u32 = 20;

/// Runtime parameters, resolved once before any platform resource exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Logical width in CHIP-8 pixels.
    pub window_width: u32,
    /// Logical height in CHIP-8 pixels.
    pub window_height: u32,
    /// Packed RGBA8888.
    pub fg_color: u32,
    /// Packed RGBA8888.
    pub bg_color: u32,
    /// Physical pixels per logical pixel along each axis.
    pub scale_factor: u32,
}

impl Config {
    /// Resolves the configuration from the process arguments. The first item is the program
    /// name. No flags are recognised yet, every other value is accepted and discarded.
    pub fn resolve<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = App::new("CHIP-8")
            .version(crate_version!())
            .about("A CHIP-8 emulator")
            .setting(AppSettings::TrailingVarArg)
            .setting(AppSettings::AllowLeadingHyphen)
            .setting(AppSettings::DisableHelpFlags)
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name("ARGS")
                    .help("Reserved, currently ignored")
                    .multiple(true)
                    .index(1),
            )
            .get_matches_from_safe(args)
            .map_err(|e| Error::InvalidArgument(e.message))?;

        let ignored = matches.values_of_lossy("ARGS").unwrap_or_default();
        if !ignored.is_empty() {
            log::debug!("Ignoring arguments {:?}", ignored);
        }

        let config = Self::default();
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(Error::InvalidArgument(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }

        if self.scale_factor == 0 {
            return Err(Error::InvalidArgument(
                "scale factor must be at least 1".to_string(),
            ));
        }

        let scaled_width = self.window_width.checked_mul(self.scale_factor);
        let scaled_height = self.window_height.checked_mul(self.scale_factor);
        if scaled_width.is_none() || scaled_height.is_none() {
            return Err(Error::InvalidArgument(format!(
                "{}x{} at scale {} overflows the window size",
                self.window_width, self.window_height, self.scale_factor
            )));
        }

        Ok(())
    }

    /// Window size in physical pixels. Saturates on configurations `validate` rejects.
    pub fn physical_size(&self) -> (u32, u32) {
        (
            self.window_width.saturating_mul(self.scale_factor),
            self.window_height.saturating_mul(self.scale_factor),
        )
    }

    pub fn fg(&self) -> Rgba {
        Rgba::from_packed(self.fg_color)
    }

    pub fn bg(&self) -> Rgba {
        Rgba::from_packed(self.bg_color)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            fg_color: DEFAULT_FG_COLOR,
            bg_color: DEFAULT_BG_COLOR,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

/// An unpacked RGBA8888 color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 24) & 0xFF) as u8,
            g: ((value >> 16) & 0xFF) as u8,
            b: ((value >> 8) & 0xFF) as u8,
            a: (value & 0xFF) as u8,
        }
    }

    /// 0RGB layout, alpha dropped.
    pub fn to_0rgb(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}
