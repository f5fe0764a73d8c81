//! Display-name sanitization.
//!
//! Names are free text, but they end up in web pages and terminals, so every
//! tag is removed before storage. `script` and `style` elements lose their
//! content as well; for any other tag only the markup goes and the text
//! stays.

use ammonia::Builder;
use std::collections::HashSet;

/// Strip markup and executable content from a player name
pub fn clean_name(raw: &str) -> String {
    Builder::default()
        .tags(HashSet::new())
        .clean(raw)
        .to_string()
}
