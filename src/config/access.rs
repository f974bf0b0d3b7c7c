use super::*;

impl TomlConfig {
    /// Get a raw `Value` using dot notation.
    ///
    /// Numeric segments index into arrays, so `servers.alpha.ports.5.1` is the
    /// second element of the sixth entry of `ports`.
    ///
    /// # Errors
    /// Returns `PathNotFound` if any segment is missing. No default is substituted.
    pub fn get(&self, path: &str) -> Result<&Value, TomlError> {
        self.document.get(path).map_err(|e| {
            let (line, snippet) = helpers::find_closest_config_line(path, &self.raw_content);
            match e {
                TomlError::PathNotFound { path, code, .. } if line > 0 => TomlError::PathNotFound {
                    path,
                    line,
                    hint: Some(format!("Closest existing entry: {}", snippet)),
                    code,
                },
                other => other,
            }
        })
    }

    /// Get a typed value using dot notation.
    ///
    /// # Examples
    /// ```
    /// # use tomlet::TomlConfig;
    /// let config = TomlConfig::from_str("[server]\nport = 8080\nhost = \"localhost\"").unwrap();
    /// let port: u16 = config.get_as("server.port").unwrap();
    /// let host: String = config.get_as("server.host").unwrap();
    /// assert_eq!((port, host.as_str()), (8080, "localhost"));
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get_as<T>(&self, path: &str) -> Result<T, TomlError>
    where
        T: for<'v> TryFrom<&'v Value, Error = TomlError>,
    {
        let value = self.get(path)?;
        T::try_from(value).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, TomlError>
    where
        T: for<'v> TryFrom<&'v Value, Error = TomlError>,
    {
        match self.get_as(path) {
            Ok(value) => Ok(Some(value)),
            Err(TomlError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// ```
    /// # use tomlet::TomlConfig;
    /// let config = TomlConfig::new();
    /// assert_eq!(config.get_or("server.timeout", 30i64), 30);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: for<'v> TryFrom<&'v Value, Error = TomlError>,
    {
        self.get_as(path).unwrap_or(default)
    }

    /// Get all keys of the table at `path`, in source order. The empty path
    /// lists the top-level keys.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, TomlError> {
        if path.trim().is_empty() {
            return Ok(self.document.root().keys().cloned().collect());
        }

        match self.get(path)? {
            Value::Table(table) => Ok(table.keys().cloned().collect()),
            other => Err(TomlError::TypeError {
                message: format!("Path '{}' is a {}, not a table", path, other.type_name()),
                path: path.to_string(),
                hint: Some("Only tables have keys".into()),
                code: Some(306),
            }),
        }
    }

    /// Check if a configuration path exists.
    pub fn has(&self, path: &str) -> bool {
        self.document.get(path).is_ok()
    }
}

/// Attach the path and the source line to type/validation errors.
pub(super) fn enhance_error_with_line_info(e: TomlError, path: &str, raw_content: &str) -> TomlError {
    let (line, snippet) = helpers::find_config_line(path, raw_content);
    let located = |hint: Option<String>| {
        if line > 0 {
            let at = format!("line {}: {}", line, snippet);
            Some(hint.map_or(at.clone(), |h| format!("{}\n  → {}", h, at)))
        } else {
            hint
        }
    };

    match e {
        TomlError::TypeError { message, hint, code, .. } => TomlError::TypeError {
            message,
            path: path.to_string(),
            hint: located(hint),
            code,
        },
        TomlError::ValidationError { message, hint, code, .. } => TomlError::ValidationError {
            message,
            path: path.to_string(),
            hint: located(hint),
            code,
        },
        other => other,
    }
}
