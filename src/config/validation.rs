use super::*;

impl TomlConfig {
    /// Get a value with validation - returns detailed error with line info if validation fails
    pub fn get_validated<T, F>(&self, path: &str, validator: F, valid_values: &str) -> Result<T, TomlError>
    where
        T: for<'v> TryFrom<&'v Value, Error = TomlError>,
        F: FnOnce(&T) -> bool,
    {
        let typed_value: T = self.get_as(path)?;

        if !validator(&typed_value) {
            let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
            return Err(TomlError::ValidationError {
                message: format!("Invalid value for `{}` on line {}\nExpected: {}", path, line, valid_values),
                path: path.to_string(),
                hint: Some(format!("Valid values are: {}\n  → {}", valid_values, snippet)),
                code: Some(450),
            });
        }

        Ok(typed_value)
    }

    /// Get a string value and check it's one of the allowed values (case-insensitive)
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> Result<String, TomlError> {
        let value: String = self.get_as(path)?;
        let lower_value = value.to_lowercase();

        if !allowed_values.iter().any(|&v| v.to_lowercase() == lower_value) {
            let (_, snippet) = helpers::find_config_line(path, &self.raw_content);
            return Err(TomlError::ValidationError {
                message: format!("Invalid value '{}' for `{}`", value, path),
                path: path.to_string(),
                hint: Some(format!("Expected one of: {}\n  → {}", allowed_values.join(", "), snippet)),
                code: Some(451),
            });
        }

        Ok(value)
    }
}
