//! Hard-coded vertex data for every lesson.
//!
//! Arrays are interleaved `f32`s laid out as described by the matching
//! [`VertexLayout`]. Index arrays are `u32`s drawn as triangles.

use crate::layout::{Attribute, VertexLayout};

/// `position` (vec2) and `color` (vec3).
pub const COLORED_2D: VertexLayout =
    VertexLayout::new(&[Attribute::new("position", 2), Attribute::new("color", 3)]);

/// `position` (vec2) only.
pub const POSITION_2D: VertexLayout = VertexLayout::new(&[Attribute::new("position", 2)]);

/// `position` (vec2), `color` (vec3) and `texcoord` (vec2).
pub const TEXTURED_2D: VertexLayout = VertexLayout::new(&[
    Attribute::new("position", 2),
    Attribute::new("color", 3),
    Attribute::new("texcoord", 2),
]);

/// `position` (vec3), `color` (vec3) and `texcoord` (vec2).
pub const TEXTURED_3D: VertexLayout = VertexLayout::new(&[
    Attribute::new("position", 3),
    Attribute::new("color", 3),
    Attribute::new("texcoord", 2),
]);

#[rustfmt::skip]
pub static TRIANGLE: [f32; 15] = [
//   Position     Color
     0.0,  0.5,   1.0, 0.0, 0.0, // Red
     0.5, -0.5,   0.0, 1.0, 0.0, // Green
    -0.5, -0.5,   0.0, 0.0, 1.0, // Blue
];

#[rustfmt::skip]
pub static TRIANGLE_POSITIONS: [f32; 6] = [
     0.0,  0.5,
     0.5, -0.5,
    -0.5, -0.5,
];

/// Quad made of two triangles, corners repeated.
#[rustfmt::skip]
pub static QUAD_ARRAYS: [f32; 30] = [
    -0.5,  0.5,   1.0, 0.0, 0.0, // Top-left
     0.5,  0.5,   0.0, 1.0, 0.0, // Top-right
     0.5, -0.5,   0.0, 0.0, 1.0, // Bottom-right

     0.5, -0.5,   0.0, 0.0, 1.0, // Bottom-right
    -0.5, -0.5,   1.0, 1.0, 1.0, // Bottom-left
    -0.5,  0.5,   1.0, 0.0, 0.0, // Top-left
];

#[rustfmt::skip]
pub static QUAD_CORNERS: [f32; 20] = [
    -0.5,  0.5,   1.0, 0.0, 0.0, // Top-left
     0.5,  0.5,   0.0, 1.0, 0.0, // Top-right
     0.5, -0.5,   0.0, 0.0, 1.0, // Bottom-right
    -0.5, -0.5,   1.0, 1.0, 1.0, // Bottom-left
];

#[rustfmt::skip]
pub static TEXTURED_QUAD: [f32; 28] = [
//   Position     Color             Texcoords
    -0.5,  0.5,   1.0, 0.0, 0.0,    0.0, 0.0, // Top-left
     0.5,  0.5,   0.0, 1.0, 0.0,    1.0, 0.0, // Top-right
     0.5, -0.5,   0.0, 0.0, 1.0,    1.0, 1.0, // Bottom-right
    -0.5, -0.5,   1.0, 1.0, 1.0,    0.0, 1.0, // Bottom-left
];

/// Two triangles covering a four-corner quad.
#[rustfmt::skip]
pub static QUAD_INDICES: [u32; 6] = [
    0, 1, 2,
    2, 3, 0,
];

/// Number of vertices of the cube at the start of [`CUBE_AND_FLOOR`].
pub const CUBE_VERTICES: usize = 36;

/// Number of vertices of the floor at the end of [`CUBE_AND_FLOOR`].
pub const FLOOR_VERTICES: usize = 6;

/// A unit cube (white, textured) followed by a black 2x2 floor just below it.
#[rustfmt::skip]
pub static CUBE_AND_FLOOR: [f32; 8 * (CUBE_VERTICES + FLOOR_VERTICES)] = [
//   Position            Color            Texcoords
    -0.5, -0.5, -0.5,    1.0, 1.0, 1.0,   0.0, 0.0,
     0.5, -0.5, -0.5,    1.0, 1.0, 1.0,   1.0, 0.0,
     0.5,  0.5, -0.5,    1.0, 1.0, 1.0,   1.0, 1.0,
     0.5,  0.5, -0.5,    1.0, 1.0, 1.0,   1.0, 1.0,
    -0.5,  0.5, -0.5,    1.0, 1.0, 1.0,   0.0, 1.0,
    -0.5, -0.5, -0.5,    1.0, 1.0, 1.0,   0.0, 0.0,

    -0.5, -0.5,  0.5,    1.0, 1.0, 1.0,   0.0, 0.0,
     0.5, -0.5,  0.5,    1.0, 1.0, 1.0,   1.0, 0.0,
     0.5,  0.5,  0.5,    1.0, 1.0, 1.0,   1.0, 1.0,
     0.5,  0.5,  0.5,    1.0, 1.0, 1.0,   1.0, 1.0,
    -0.5,  0.5,  0.5,    1.0, 1.0, 1.0,   0.0, 1.0,
    -0.5, -0.5,  0.5,    1.0, 1.0, 1.0,   0.0, 0.0,

    -0.5,  0.5,  0.5,    1.0, 1.0, 1.0,   1.0, 0.0,
    -0.5,  0.5, -0.5,    1.0, 1.0, 1.0,   1.0, 1.0,
    -0.5, -0.5, -0.5,    1.0, 1.0, 1.0,   0.0, 1.0,
    -0.5, -0.5, -0.5,    1.0, 1.0, 1.0,   0.0, 1.0,
    -0.5, -0.5,  0.5,    1.0, 1.0, 1.0,   0.0, 0.0,
    -0.5,  0.5,  0.5,    1.0, 1.0, 1.0,   1.0, 0.0,

     0.5,  0.5,  0.5,    1.0, 1.0, 1.0,   1.0, 0.0,
     0.5,  0.5, -0.5,    1.0, 1.0, 1.0,   1.0, 1.0,
     0.5, -0.5, -0.5,    1.0, 1.0, 1.0,   0.0, 1.0,
     0.5, -0.5, -0.5,    1.0, 1.0, 1.0,   0.0, 1.0,
     0.5, -0.5,  0.5,    1.0, 1.0, 1.0,   0.0, 0.0,
     0.5,  0.5,  0.5,    1.0, 1.0, 1.0,   1.0, 0.0,

    -0.5, -0.5, -0.5,    1.0, 1.0, 1.0,   0.0, 1.0,
     0.5, -0.5, -0.5,    1.0, 1.0, 1.0,   1.0, 1.0,
     0.5, -0.5,  0.5,    1.0, 1.0, 1.0,   1.0, 0.0,
     0.5, -0.5,  0.5,    1.0, 1.0, 1.0,   1.0, 0.0,
    -0.5, -0.5,  0.5,    1.0, 1.0, 1.0,   0.0, 0.0,
    -0.5, -0.5, -0.5,    1.0, 1.0, 1.0,   0.0, 1.0,

    -0.5,  0.5, -0.5,    1.0, 1.0, 1.0,   0.0, 1.0,
     0.5,  0.5, -0.5,    1.0, 1.0, 1.0,   1.0, 1.0,
     0.5,  0.5,  0.5,    1.0, 1.0, 1.0,   1.0, 0.0,
     0.5,  0.5,  0.5,    1.0, 1.0, 1.0,   1.0, 0.0,
    -0.5,  0.5,  0.5,    1.0, 1.0, 1.0,   0.0, 0.0,
    -0.5,  0.5, -0.5,    1.0, 1.0, 1.0,   0.0, 1.0,

    // Floor
    -1.0, -1.0, -0.5,    0.0, 0.0, 0.0,   0.0, 0.0,
     1.0, -1.0, -0.5,    0.0, 0.0, 0.0,   1.0, 0.0,
     1.0,  1.0, -0.5,    0.0, 0.0, 0.0,   1.0, 1.0,
     1.0,  1.0, -0.5,    0.0, 0.0, 0.0,   1.0, 1.0,
    -1.0,  1.0, -0.5,    0.0, 0.0, 0.0,   0.0, 1.0,
    -1.0, -1.0, -0.5,    0.0, 0.0, 0.0,   0.0, 0.0,
];

/// Height of the floor plane in [`CUBE_AND_FLOOR`].
pub const FLOOR_Z: f32 = -0.5;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::validate_indices;

    #[test]
    fn vertex_counts_match_layouts() {
        assert_eq!(COLORED_2D.vertex_count(&TRIANGLE), Ok(3));
        assert_eq!(POSITION_2D.vertex_count(&TRIANGLE_POSITIONS), Ok(3));
        assert_eq!(COLORED_2D.vertex_count(&QUAD_ARRAYS), Ok(6));
        assert_eq!(COLORED_2D.vertex_count(&QUAD_CORNERS), Ok(4));
        assert_eq!(TEXTURED_2D.vertex_count(&TEXTURED_QUAD), Ok(4));
        assert_eq!(
            TEXTURED_3D.vertex_count(&CUBE_AND_FLOOR),
            Ok(CUBE_VERTICES + FLOOR_VERTICES)
        );
    }

    #[test]
    fn quad_indices_reference_corners() {
        let corners = COLORED_2D.vertex_count(&QUAD_CORNERS).unwrap();
        assert!(validate_indices(&QUAD_INDICES, corners).is_ok());
        let textured = TEXTURED_2D.vertex_count(&TEXTURED_QUAD).unwrap();
        assert!(validate_indices(&QUAD_INDICES, textured).is_ok());
    }

    #[test]
    fn elements_quad_matches_arrays_quad() {
        // Expanding the indexed quad must give the same triangles as the array quad.
        let width = COLORED_2D.floats_per_vertex();
        let expanded: Vec<f32> = QUAD_INDICES
            .iter()
            .flat_map(|&i| {
                let i = i as usize;
                QUAD_CORNERS[i * width..(i + 1) * width].iter().copied()
            })
            .collect();
        assert_eq!(expanded, QUAD_ARRAYS.to_vec());
    }

    #[test]
    fn floor_sits_under_cube() {
        let width = TEXTURED_3D.floats_per_vertex();
        let z = TEXTURED_3D.offset_of("position").unwrap() / 4 + 2;
        let floor = &CUBE_AND_FLOOR[CUBE_VERTICES * width..];
        assert!(floor.chunks(width).all(|v| v[z] == FLOOR_Z));
        let cube = &CUBE_AND_FLOOR[..CUBE_VERTICES * width];
        assert!(cube.chunks(width).all(|v| v[z] >= FLOOR_Z));
    }
}
