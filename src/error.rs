//! Error type for the fallible edges of the crate.
//!
//! Rendering an icon never fails. Errors only surface when registering
//! glyph markup, installing the global registry, (de)serializing props,
//! or rasterizing output.

/// Errors produced outside the render path.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// Glyph markup handed to the registry is not well-formed.
    #[error("invalid glyph markup for `{name}`: {reason}")]
    InvalidGlyph { name: String, reason: String },

    /// The icon name normalizes to nothing.
    #[error("icon name `{0}` is empty after normalization")]
    InvalidName(String),

    /// The icon name is reserved for the fallback glyph.
    #[error("icon name `{0}` is reserved")]
    ReservedName(String),

    /// An entry already exists under the normalized name.
    #[error("icon `{0}` is already registered")]
    DuplicateName(String),

    /// [`crate::registry::install`] was called more than once.
    #[error("the global icon registry has already been installed")]
    RegistryInstalled,

    /// A theme color is not a `#rrggbb` value.
    #[error("invalid color `{0}`")]
    InvalidColor(String),

    /// Serialized SVG output could not be parsed by usvg.
    #[error("failed to parse rendered svg: {0}")]
    Svg(String),

    /// A pixmap of the requested size could not be allocated.
    #[error("cannot allocate a {width}x{height} pixmap")]
    Raster { width: u32, height: u32 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, IconError>;
