//! Parse and load user configuration.

use std::{fs, path::Path};

use ron::{Options, extensions::Extensions};
use tracing::debug;
use winplace::PlacementProfile;

use crate::{
    Error,
    error::excerpt_at,
    raw::{RawConfig, RawOptions},
};

/// Load a [`PlacementProfile`] from a RON file at `path`.
pub fn load_from_path(path: &Path) -> Result<PlacementProfile, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: format!("Failed to read config: {}", e),
    })?;
    let profile = load_from_str(&text, Some(path))?;
    debug!("config: loaded {}", path.display());
    Ok(profile)
}

/// Parse RON text into a validated [`PlacementProfile`].
///
/// `path` is only used to annotate errors. The returned profile has an empty
/// `forced` layer; command-line overrides are applied by the caller.
pub fn load_from_str(text: &str, path: Option<&Path>) -> Result<PlacementProfile, Error> {
    let options = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
    let raw: RawConfig = options.from_str(text).map_err(|e| {
        let line = e.span.start.line;
        let col = e.span.start.col;
        Error::Parse {
            path: path.map(Path::to_path_buf),
            line,
            col,
            message: e.code.to_string(),
            excerpt: excerpt_at(text, line, col),
        }
    })?;
    let attach = |e: Error| match path {
        Some(p) => e.with_path(p),
        None => e,
    };
    validate("", &raw.base()).map_err(attach)?;
    for (app, opts) in &raw.apps {
        validate(&format!("apps.\"{}\".", app), opts).map_err(attach)?;
    }

    let mut profile = PlacementProfile {
        base: raw.base().to_options(),
        ..Default::default()
    };
    for (app, opts) in raw.apps {
        profile.per_app.insert(app, opts.to_override());
    }
    Ok(profile)
}

/// Range checks for one options block; `prefix` qualifies field names.
fn validate(prefix: &str, opts: &RawOptions) -> Result<(), Error> {
    if let Some(t) = opts.tolerance
        && !(t.is_finite() && t > 0.0)
    {
        return Err(Error::Validation {
            path: None,
            field: format!("{}tolerance", prefix),
            message: format!("tolerance must be a finite number > 0, got {}", t),
        });
    }
    if let Some(m) = opts.margin
        && !(m.is_finite() && m >= 0.0)
    {
        return Err(Error::Validation {
            path: None,
            field: format!("{}margin", prefix),
            message: format!("margin must be a finite number >= 0, got {}", m),
        });
    }
    Ok(())
}
