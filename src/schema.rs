//! Column-name mapping for external benchmark tables
//!
//! Different measurement programs write the same logical schema under
//! different column names. The two observed in the wild:
//!
//! | logical   | capitalized | lowercase |
//! |-----------|-------------|-----------|
//! | size      | `Size`      | `N`       |
//! | method    | `Method`    | `method`  |
//! | threads   | `Threads`   | `threads` |
//! | time      | `Time_Sec`  | `time`    |
//!
//! An explicit, injectable [`ColumnMapping`] replaces hardcoded column names
//! so a misconfigured source fails loudly instead of silently misreading one
//! column as another.

use serde::{Deserialize, Serialize};

use crate::error::{AnalizarError, Result};

/// Maps the four logical benchmark columns onto a source table's headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Header of the matrix-size column
    pub size_col: String,
    /// Header of the method/variant column
    pub method_col: String,
    /// Header of the thread-count column
    pub threads_col: String,
    /// Header of the elapsed-time column (seconds)
    pub time_col: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::capitalized()
    }
}

impl ColumnMapping {
    /// The `Size/Method/Threads/Time_Sec` scheme
    #[must_use]
    pub fn capitalized() -> Self {
        Self {
            size_col: "Size".to_string(),
            method_col: "Method".to_string(),
            threads_col: "Threads".to_string(),
            time_col: "Time_Sec".to_string(),
        }
    }

    /// The `N/method/threads/time` scheme
    #[must_use]
    pub fn lowercase() -> Self {
        Self {
            size_col: "N".to_string(),
            method_col: "method".to_string(),
            threads_col: "threads".to_string(),
            time_col: "time".to_string(),
        }
    }

    /// Look up a named preset (`capitalized` or `lowercase`).
    ///
    /// # Errors
    ///
    /// Returns [`AnalizarError::InvalidMapping`] for an unknown preset name.
    pub fn preset(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "capitalized" => Ok(Self::capitalized()),
            "lowercase" => Ok(Self::lowercase()),
            other => Err(AnalizarError::InvalidMapping {
                reason: format!(
                    "unknown schema preset '{other}', expected 'capitalized' or 'lowercase'"
                ),
            }),
        }
    }

    /// Build a custom mapping from four header names.
    ///
    /// # Errors
    ///
    /// Returns [`AnalizarError::InvalidMapping`] if any two names collide.
    pub fn new(
        size_col: impl Into<String>,
        method_col: impl Into<String>,
        threads_col: impl Into<String>,
        time_col: impl Into<String>,
    ) -> Result<Self> {
        let mapping = Self {
            size_col: size_col.into(),
            method_col: method_col.into(),
            threads_col: threads_col.into(),
            time_col: time_col.into(),
        };
        mapping.validate()?;
        Ok(mapping)
    }

    /// Check that the four configured names are distinct.
    ///
    /// Two logical columns pointing at the same header would make the loader
    /// read one physical column as two different quantities.
    ///
    /// # Errors
    ///
    /// Returns [`AnalizarError::InvalidMapping`] on a collision.
    pub fn validate(&self) -> Result<()> {
        let names = self.columns();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                if a == b {
                    return Err(AnalizarError::InvalidMapping {
                        reason: format!("column '{a}' is mapped more than once"),
                    });
                }
            }
        }
        Ok(())
    }

    /// The four configured headers in logical order: size, method, threads, time
    #[must_use]
    pub fn columns(&self) -> [&str; 4] {
        [
            &self.size_col,
            &self.method_col,
            &self.threads_col,
            &self.time_col,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_capitalized() {
        assert_eq!(ColumnMapping::default(), ColumnMapping::capitalized());
    }

    #[test]
    fn test_capitalized_preset() {
        let mapping = ColumnMapping::capitalized();
        assert_eq!(mapping.columns(), ["Size", "Method", "Threads", "Time_Sec"]);
    }

    #[test]
    fn test_lowercase_preset() {
        let mapping = ColumnMapping::lowercase();
        assert_eq!(mapping.columns(), ["N", "method", "threads", "time"]);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(
            ColumnMapping::preset("lowercase").expect("known preset"),
            ColumnMapping::lowercase()
        );
        assert_eq!(
            ColumnMapping::preset("CAPITALIZED").expect("case-insensitive"),
            ColumnMapping::capitalized()
        );
    }

    #[test]
    fn test_preset_unknown_name() {
        let err = ColumnMapping::preset("pandas").unwrap_err();
        assert!(matches!(err, AnalizarError::InvalidMapping { .. }));
        assert!(err.to_string().contains("pandas"));
    }

    #[test]
    fn test_custom_mapping() {
        let mapping =
            ColumnMapping::new("dim", "variant", "workers", "elapsed").expect("distinct names");
        assert_eq!(mapping.columns(), ["dim", "variant", "workers", "elapsed"]);
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let err = ColumnMapping::new("dim", "dim", "workers", "elapsed").unwrap_err();
        assert!(matches!(err, AnalizarError::InvalidMapping { .. }));
    }

    #[test]
    fn test_mapping_json_round_trip() {
        let mapping = ColumnMapping::lowercase();
        let json = serde_json::to_string(&mapping).expect("serialize");
        let back: ColumnMapping = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, mapping);
    }
}
