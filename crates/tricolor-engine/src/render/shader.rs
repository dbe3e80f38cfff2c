use std::borrow::Cow;

use wgpu::naga;

use super::error::{InitError, ShaderStage};

/// WGSL source shipped with the engine.
pub const TRIANGLE_WGSL: &str = include_str!("shaders/triangle.wgsl");

pub const DEFAULT_VERTEX_ENTRY: &str = "vertex_main";
pub const DEFAULT_FRAGMENT_ENTRY: &str = "fragment_main";

/// Shader library source plus the entry points to link.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    pub source: Cow<'static, str>,
    pub vertex_entry: Cow<'static, str>,
    pub fragment_entry: Cow<'static, str>,
}

impl Default for ShaderProgram {
    fn default() -> Self {
        Self {
            source: Cow::Borrowed(TRIANGLE_WGSL),
            vertex_entry: Cow::Borrowed(DEFAULT_VERTEX_ENTRY),
            fragment_entry: Cow::Borrowed(DEFAULT_FRAGMENT_ENTRY),
        }
    }
}

/// A parsed and validated shader library with both stages resolved.
///
/// Building one runs entirely on the CPU, so a bad library is caught before any
/// GPU object is created.
#[derive(Debug)]
pub struct ResolvedProgram<'a> {
    pub source: &'a str,
    pub vertex_entry: &'a str,
    pub fragment_entry: &'a str,
}

impl ShaderProgram {
    /// Parses and validates the library, then looks up both entry points.
    pub fn resolve(&self) -> Result<ResolvedProgram<'_>, InitError> {
        let module = naga::front::wgsl::parse_str(&self.source)
            .map_err(|e| InitError::ShaderLibrary(e.emit_to_string(&self.source)))?;

        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        )
        .validate(&module)
        .map_err(|e| InitError::ShaderLibrary(e.into_inner().to_string()))?;

        find_entry(&module, ShaderStage::Vertex, &self.vertex_entry)?;
        find_entry(&module, ShaderStage::Fragment, &self.fragment_entry)?;

        Ok(ResolvedProgram {
            source: &self.source,
            vertex_entry: &self.vertex_entry,
            fragment_entry: &self.fragment_entry,
        })
    }
}

fn find_entry(module: &naga::Module, stage: ShaderStage, name: &str) -> Result<(), InitError> {
    let wanted = match stage {
        ShaderStage::Vertex => naga::ShaderStage::Vertex,
        ShaderStage::Fragment => naga::ShaderStage::Fragment,
    };

    if module
        .entry_points
        .iter()
        .any(|ep| ep.name == name && ep.stage == wanted)
    {
        Ok(())
    } else {
        Err(InitError::MissingShaderStage {
            stage,
            name: name.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_program_resolves() {
        let program = ShaderProgram::default();
        let resolved = program.resolve().expect("bundled shader must resolve");
        assert_eq!(resolved.vertex_entry, "vertex_main");
        assert_eq!(resolved.fragment_entry, "fragment_main");
    }

    #[test]
    fn unknown_vertex_entry_is_reported() {
        let program = ShaderProgram {
            vertex_entry: Cow::Borrowed("vs_missing"),
            ..ShaderProgram::default()
        };
        match program.resolve() {
            Err(InitError::MissingShaderStage { stage, name }) => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert_eq!(name, "vs_missing");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn entry_of_wrong_stage_is_not_accepted() {
        // `vertex_main` exists, but not as a fragment stage.
        let program = ShaderProgram {
            fragment_entry: Cow::Borrowed(DEFAULT_VERTEX_ENTRY),
            ..ShaderProgram::default()
        };
        assert!(matches!(
            program.resolve(),
            Err(InitError::MissingShaderStage { stage: ShaderStage::Fragment, .. })
        ));
    }

    #[test]
    fn unparsable_source_is_a_library_error() {
        let program = ShaderProgram {
            source: Cow::Borrowed("fn vertex_main( {"),
            ..ShaderProgram::default()
        };
        assert!(matches!(program.resolve(), Err(InitError::ShaderLibrary(_))));
    }

    #[test]
    fn invalid_module_is_a_library_error() {
        // Well-formed syntax, but a vec3 is bound to a vec4 `let`.
        let src = "
            @vertex
            fn vertex_main() -> @builtin(position) vec4<f32> {
                return vec4<f32>(0.0, 0.0, 0.0, 1.0);
            }
            @fragment
            fn fragment_main() -> @location(0) vec4<f32> {
                let c: vec4<f32> = vec3<f32>(1.0, 1.0, 1.0);
                return c;
            }
        ";
        let program = ShaderProgram {
            source: Cow::Borrowed(src),
            ..ShaderProgram::default()
        };
        assert!(matches!(program.resolve(), Err(InitError::ShaderLibrary(_))));
    }
}
