use std::fmt;

/// A WGSL module that failed to compile, with the compiler's report.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// The source did not parse.
    Parse { label: String, log: String },
    /// The source parsed but failed validation (types, layouts, entry points).
    Validation { label: String, log: String },
}

impl ShaderError {
    /// The formatted compiler log, with source excerpts.
    pub fn log(&self) -> &str {
        match self {
            ShaderError::Parse { log, .. } | ShaderError::Validation { log, .. } => log,
        }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Parse { label, log } => {
                write!(f, "shader `{label}` failed to parse:\n{log}")
            }
            ShaderError::Validation { label, log } => {
                write!(f, "shader `{label}` failed validation:\n{log}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// Parses and validates WGSL source without touching a GPU device.
///
/// wgpu reports shader errors through the device's uncaptured-error handler,
/// which by default panics. Running naga first turns the same diagnostics into
/// a returnable error.
pub fn validate_wgsl(label: &str, source: &str) -> Result<(), ShaderError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderError::Parse {
        label: label.to_string(),
        log: e.emit_to_string(source),
    })?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    )
    .validate(&module)
    .map_err(|e| ShaderError::Validation {
        label: label.to_string(),
        log: e.emit_to_string(source),
    })?;

    Ok(())
}

/// Validates `source`, then creates the shader module on `device`.
pub fn compile_wgsl(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    validate_wgsl(label, source)?;

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    log::debug!("compiled shader `{label}`");
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_source_passes() {
        let src = "@fragment fn fs() -> @location(0) vec4<f32> { return vec4<f32>(1.0); }";
        assert_eq!(validate_wgsl("ok", src), Ok(()));
    }

    #[test]
    fn syntax_error_is_reported_as_parse_error() {
        let err = validate_wgsl("broken", "fn main( {").unwrap_err();
        assert!(matches!(err, ShaderError::Parse { ref label, .. } if label == "broken"));
        assert!(!err.log().is_empty());
    }

    #[test]
    fn type_error_is_reported_with_label() {
        // Parses fine, but returns a scalar where a vec4 is declared.
        let src = "@fragment fn fs() -> @location(0) vec4<f32> { let x: f32 = 1.0; return x; }";
        let err = validate_wgsl("typed", src).unwrap_err();
        assert!(err.to_string().contains("typed"));
    }
}
