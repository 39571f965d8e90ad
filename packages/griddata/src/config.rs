//! Configuration constants and validation functions.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{GridError, Result};

/// Culture used when a context is built without one.
pub const DEFAULT_CULTURE: &str = "en-US";

/// Alias of the built-in media picker editor.
pub const EDITOR_MEDIA: &str = "media";

/// Alias of the built-in embed editor.
pub const EDITOR_EMBED: &str = "embed";

/// Alias of the built-in rich text editor.
pub const EDITOR_RTE: &str = "rte";

/// Alias of the built-in macro editor.
pub const EDITOR_MACRO: &str = "macro";

/// Alias of the built-in headline editor.
pub const EDITOR_HEADLINE: &str = "headline";

/// Alias of the built-in quote editor.
pub const EDITOR_QUOTE: &str = "quote";

/// Culture pattern: primary language subtag followed by optional subtags.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CULTURE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("valid regex"));

/// Validate a culture name.
///
/// # Examples
/// ```
/// use griddata::config::validate_culture;
///
/// assert!(validate_culture("en-US").is_ok());
/// assert!(validate_culture("da").is_ok());
/// assert!(validate_culture("en_US").is_err());
/// ```
pub fn validate_culture(culture: &str) -> Result<()> {
    if CULTURE_PATTERN.is_match(culture) {
        Ok(())
    } else {
        Err(GridError::InvalidCulture(culture.to_string()))
    }
}
