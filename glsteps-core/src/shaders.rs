//! Embedded GLSL sources.
//!
//! Every shader pair lives under `shaders/<name>/{vert,frag}.glsl` and is
//! baked into the binary. [`Interface`] scans the `in`, `out` and `uniform`
//! declarations of a source so the stages can be checked against each other
//! and against the vertex layouts without a GL context.

use include_dir::{Dir, include_dir};

static SHADERS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/shaders");

/// The `#version` line every embedded source starts with.
pub const VERSION_DIRECTIVE: &str = "#version 150 core";

/// Name of the fragment output bound to draw buffer 0.
pub const FRAGMENT_OUTPUT: &str = "outColor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    fn file_name(self) -> &'static str {
        match self {
            Stage::Vertex => "vert.glsl",
            Stage::Fragment => "frag.glsl",
        }
    }

    /// Human readable stage name, capitalized.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Vertex => "Vertex",
            Stage::Fragment => "Fragment",
        }
    }
}

/// Returns the embedded source of one stage of the named shader pair.
pub fn source(pair: &str, stage: Stage) -> Option<&'static str> {
    let path = format!("{}/{}", pair, stage.file_name());
    SHADERS.get_file(path)?.contents_utf8()
}

/// Names of all embedded shader pairs.
pub fn pairs() -> impl Iterator<Item = &'static str> {
    SHADERS
        .dirs()
        .filter_map(|dir| dir.path().file_name()?.to_str())
}

/// A declared variable of a shader interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub ty: String,
    pub name: String,
}

/// The global declarations of one shader stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interface {
    pub version: Option<String>,
    pub inputs: Vec<Variable>,
    pub outputs: Vec<Variable>,
    pub uniforms: Vec<Variable>,
}

impl Interface {
    /// Scans top-level declarations. Only understands the simple
    /// one-variable-per-line style used by the embedded sources.
    pub fn parse(source: &str) -> Self {
        let mut interface = Interface::default();
        let mut depth = 0usize;

        for line in source.lines() {
            let line = line.split("//").next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with("#version") {
                interface.version = Some(line.to_string());
                continue;
            }

            if depth == 0 {
                let mut words = line.trim_end_matches(';').split_whitespace();
                let target = match words.next() {
                    Some("in") => Some(&mut interface.inputs),
                    Some("out") => Some(&mut interface.outputs),
                    Some("uniform") => Some(&mut interface.uniforms),
                    _ => None,
                };
                if let (Some(target), Some(ty), Some(name)) = (target, words.next(), words.next()) {
                    let name = name.split('[').next().unwrap_or(name);
                    target.push(Variable {
                        ty: ty.to_string(),
                        name: name.to_string(),
                    });
                }
            }

            depth += line.matches('{').count();
            depth = depth.saturating_sub(line.matches('}').count());
        }

        interface
    }

    pub fn input(&self, name: &str) -> Option<&Variable> {
        self.inputs.iter().find(|v| v.name == name)
    }

    pub fn output(&self, name: &str) -> Option<&Variable> {
        self.outputs.iter().find(|v| v.name == name)
    }

    pub fn uniform(&self, name: &str) -> Option<&Variable> {
        self.uniforms.iter().find(|v| v.name == name)
    }
}

/// Checks that every fragment input is fed by a vertex output of the same
/// type, and that the fragment stage writes [`FRAGMENT_OUTPUT`].
pub fn check_linkage(vertex: &Interface, fragment: &Interface) -> Result<(), String> {
    for input in &fragment.inputs {
        match vertex.output(&input.name) {
            Some(output) if output.ty == input.ty => {}
            Some(output) => {
                return Err(format!(
                    "`{}` is {} in the vertex stage but {} in the fragment stage",
                    input.name, output.ty, input.ty
                ));
            }
            None => {
                return Err(format!(
                    "Fragment input `{}` has no matching vertex output",
                    input.name
                ));
            }
        }
    }
    if fragment.output(FRAGMENT_OUTPUT).is_none() {
        return Err(format!("Fragment stage does not declare `{}`", FRAGMENT_OUTPUT));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_declarations() {
        let source = "#version 150 core\n\
                      in vec2 position; // xy\n\
                      uniform sampler2D tex;\n\
                      out vec3 Color;\n\
                      void main() {\n\
                          vec3 in_body = vec3(1.0);\n\
                      }\n";
        let interface = Interface::parse(source);
        assert_eq!(interface.version.as_deref(), Some(VERSION_DIRECTIVE));
        assert_eq!(interface.input("position").unwrap().ty, "vec2");
        assert_eq!(interface.uniform("tex").unwrap().ty, "sampler2D");
        assert_eq!(interface.output("Color").unwrap().ty, "vec3");
        assert_eq!(interface.inputs.len(), 1);
    }

    #[test]
    fn every_pair_has_both_stages() {
        let pairs: Vec<_> = pairs().collect();
        assert!(!pairs.is_empty());
        for pair in pairs {
            for stage in [Stage::Vertex, Stage::Fragment] {
                let source = source(pair, stage)
                    .unwrap_or_else(|| panic!("{pair} is missing its {stage:?} stage"));
                let interface = Interface::parse(source);
                assert_eq!(
                    interface.version.as_deref(),
                    Some(VERSION_DIRECTIVE),
                    "{pair} {stage:?}"
                );
            }
        }
    }

    #[test]
    fn every_pair_links() {
        for pair in pairs() {
            let vertex = Interface::parse(source(pair, Stage::Vertex).unwrap());
            let fragment = Interface::parse(source(pair, Stage::Fragment).unwrap());
            assert_eq!(check_linkage(&vertex, &fragment), Ok(()), "{pair}");
        }
    }

    #[test]
    fn linkage_catches_type_mismatch() {
        let vertex = Interface::parse("out vec2 Texcoord;");
        let fragment = Interface::parse("in vec3 Texcoord;\nout vec4 outColor;");
        assert!(check_linkage(&vertex, &fragment).is_err());
        let fragment = Interface::parse("in vec2 Texcoord;");
        assert!(check_linkage(&vertex, &fragment).is_err());
    }

    #[test]
    fn unknown_pair_has_no_source() {
        assert!(source("does_not_exist", Stage::Vertex).is_none());
    }
}
