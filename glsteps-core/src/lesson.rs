//! The catalogue of lessons, in teaching order.

use std::fmt;
use std::str::FromStr;

use crate::geometry;
use crate::layout::VertexLayout;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LessonKind {
    Window,
    Triangle,
    Uniforms,
    Quad,
    Elements,
    Textures,
    Transforms,
    #[default]
    Reflection,
}

impl LessonKind {
    pub const ALL: [LessonKind; 8] = [
        LessonKind::Window,
        LessonKind::Triangle,
        LessonKind::Uniforms,
        LessonKind::Quad,
        LessonKind::Elements,
        LessonKind::Textures,
        LessonKind::Transforms,
        LessonKind::Reflection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LessonKind::Window => "window",
            LessonKind::Triangle => "triangle",
            LessonKind::Uniforms => "uniforms",
            LessonKind::Quad => "quad",
            LessonKind::Elements => "elements",
            LessonKind::Textures => "textures",
            LessonKind::Transforms => "transforms",
            LessonKind::Reflection => "reflection",
        }
    }

    /// One line summary shown by `--list`.
    pub fn summary(self) -> &'static str {
        match self {
            LessonKind::Window => "an empty window and a GL context",
            LessonKind::Triangle => "a colored triangle from a vertex buffer",
            LessonKind::Uniforms => "a triangle colored by a pulsing uniform",
            LessonKind::Quad => "a quad drawn as two triangles",
            LessonKind::Elements => "the same quad from an element buffer",
            LessonKind::Textures => "a textured quad with a rippling reflection",
            LessonKind::Transforms => "a spinning quad in 3D, Space to push it",
            LessonKind::Reflection => "a cube mirrored in the floor with the stencil buffer",
        }
    }

    /// Name of the embedded shader pair, if the lesson draws anything.
    pub fn shader_pair(self) -> Option<&'static str> {
        match self {
            LessonKind::Window => None,
            LessonKind::Triangle | LessonKind::Quad | LessonKind::Elements => Some("colored"),
            LessonKind::Uniforms => Some("uniform_color"),
            LessonKind::Textures => Some("textured"),
            LessonKind::Transforms => Some("transformed"),
            LessonKind::Reflection => Some("reflection"),
        }
    }

    /// Vertex layout, vertex data and optional index data of the lesson.
    pub fn geometry(self) -> Option<(VertexLayout, &'static [f32], Option<&'static [u32]>)> {
        match self {
            LessonKind::Window => None,
            LessonKind::Triangle => Some((geometry::COLORED_2D, geometry::TRIANGLE.as_slice(), None)),
            LessonKind::Uniforms => Some((
                geometry::POSITION_2D,
                geometry::TRIANGLE_POSITIONS.as_slice(),
                None,
            )),
            LessonKind::Quad => Some((geometry::COLORED_2D, geometry::QUAD_ARRAYS.as_slice(), None)),
            LessonKind::Elements => Some((
                geometry::COLORED_2D,
                geometry::QUAD_CORNERS.as_slice(),
                Some(geometry::QUAD_INDICES.as_slice()),
            )),
            LessonKind::Textures | LessonKind::Transforms => Some((
                geometry::TEXTURED_2D,
                geometry::TEXTURED_QUAD.as_slice(),
                Some(geometry::QUAD_INDICES.as_slice()),
            )),
            LessonKind::Reflection => Some((
                geometry::TEXTURED_3D,
                geometry::CUBE_AND_FLOOR.as_slice(),
                None,
            )),
        }
    }

    /// Whether the lesson samples the kitten and puppy images.
    pub fn uses_textures(self) -> bool {
        matches!(
            self,
            LessonKind::Textures | LessonKind::Transforms | LessonKind::Reflection
        )
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LessonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LessonKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = LessonKind::ALL.iter().map(|k| k.name()).collect();
                format!("Unknown lesson `{}`, expected one of: {}", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::validate_indices;
    use crate::shaders::{self, Interface, Stage};

    #[test]
    fn names_round_trip() {
        for kind in LessonKind::ALL {
            assert_eq!(kind.name().parse::<LessonKind>(), Ok(kind));
        }
        assert_eq!(" Textures ".parse::<LessonKind>(), Ok(LessonKind::Textures));
        let err = "teapot".parse::<LessonKind>().unwrap_err();
        assert!(err.contains("reflection"));
    }

    #[test]
    fn geometry_is_consistent() {
        for kind in LessonKind::ALL {
            let Some((layout, vertices, indices)) = kind.geometry() else {
                continue;
            };
            let count = layout
                .vertex_count(vertices)
                .unwrap_or_else(|e| panic!("{kind}: {e}"));
            if let Some(indices) = indices {
                assert_eq!(validate_indices(indices, count), Ok(()), "{kind}");
            }
        }
    }

    #[test]
    fn layouts_feed_every_vertex_input() {
        for kind in LessonKind::ALL {
            let (Some(pair), Some((layout, _, _))) = (kind.shader_pair(), kind.geometry()) else {
                assert!(kind.shader_pair().is_none() && kind.geometry().is_none());
                continue;
            };
            let vertex = Interface::parse(shaders::source(pair, Stage::Vertex).unwrap());

            for attribute in layout.bound() {
                let input = vertex
                    .input(attribute.name)
                    .unwrap_or_else(|| panic!("{kind}: `{}` is not a vertex input", attribute.name));
                let expected = match attribute.components {
                    1 => "float",
                    2 => "vec2",
                    3 => "vec3",
                    _ => "vec4",
                };
                assert_eq!(input.ty, expected, "{kind}: `{}`", attribute.name);
            }
            for input in &vertex.inputs {
                assert!(
                    layout.names().any(|name| name == input.name),
                    "{kind}: vertex input `{}` has no attribute",
                    input.name
                );
            }
        }
    }

    #[test]
    fn textured_lessons_declare_samplers() {
        for kind in LessonKind::ALL.into_iter().filter(|k| k.uses_textures()) {
            let fragment =
                Interface::parse(shaders::source(kind.shader_pair().unwrap(), Stage::Fragment).unwrap());
            for sampler in ["texKitten", "texPuppy"] {
                assert_eq!(
                    fragment.uniform(sampler).map(|v| v.ty.as_str()),
                    Some("sampler2D"),
                    "{kind}"
                );
            }
        }
    }
}
