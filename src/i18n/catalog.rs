// SPDX-License-Identifier: MPL-2.0
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// The per-language message tables.
///
/// Each embedded `assets/i18n/<lang>.toml` file contributes one table
/// mapping message keys to template strings. Templates may contain `{name}`
/// placeholder tokens; the catalog stores them verbatim and performs no
/// substitution itself. The catalog is built once at startup and never
/// mutated afterwards.
pub struct Catalog {
    tables: HashMap<String, HashMap<String, String>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::load()
    }
}

impl Catalog {
    /// Builds the catalog from the embedded translation assets.
    pub fn load() -> Self {
        let mut tables = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(lang) = filename.strip_suffix(".toml") {
                if let Some(content) = Asset::get(filename) {
                    let text = String::from_utf8_lossy(content.data.as_ref()).to_string();
                    // Embedded assets are fixed at compile time.
                    let table: HashMap<String, String> =
                        toml::from_str(&text).expect("Failed to parse translation table.");
                    tables.insert(lang.to_string(), table);
                }
            }
        }

        Self { tables }
    }

    /// Builds a catalog from caller-supplied tables.
    pub fn from_tables(tables: HashMap<String, HashMap<String, String>>) -> Self {
        Self { tables }
    }

    /// Returns the stored template for a `(language, key)` pair, without any
    /// placeholder substitution. `None` if either the language or the key is
    /// unknown.
    pub fn template(&self, lang: &str, key: &str) -> Option<&str> {
        self.tables
            .get(lang)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.tables.contains_key(lang)
    }

    /// Language codes with a loaded table, sorted for stable output.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Keys present in `reference`'s table but absent from `lang`'s table,
    /// sorted. Diagnostic only: lookup still falls back silently at runtime.
    pub fn missing_keys(&self, lang: &str, reference: &str) -> Vec<&str> {
        let table = self.tables.get(lang);
        let Some(reference_table) = self.tables.get(reference) else {
            return Vec::new();
        };

        let mut missing: Vec<&str> = reference_table
            .keys()
            .filter(|key| !table.is_some_and(|t| t.contains_key(*key)))
            .map(String::as_str)
            .collect();
        missing.sort_unstable();
        missing
    }
}
