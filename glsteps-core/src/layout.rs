//! Interleaved vertex layouts.
//!
//! A [`VertexLayout`] describes how a flat `f32` array is split into named
//! attributes. The client uses it to issue `glVertexAttribPointer` calls, so
//! the stride and offset arithmetic here is what ends up on the GPU.

/// Size in bytes of one vertex component. Every attribute is made of `f32`s.
pub const COMPONENT_SIZE: usize = std::mem::size_of::<f32>();

/// A single named vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    /// Name of the matching `in` variable in the vertex shader.
    pub name: &'static str,
    /// Number of `f32` components (1 to 4).
    pub components: usize,
}

impl Attribute {
    pub const fn new(name: &'static str, components: usize) -> Self {
        Self { name, components }
    }
}

/// An attribute resolved against its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundAttribute {
    pub name: &'static str,
    pub components: usize,
    /// Byte offset from the start of the vertex.
    pub offset: usize,
    /// Byte distance between two consecutive vertices.
    pub stride: usize,
}

/// Ordered list of attributes making up one interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: &'static [Attribute],
}

impl VertexLayout {
    /// Creates a new layout from the given attributes, in memory order.
    pub const fn new(attributes: &'static [Attribute]) -> Self {
        Self { attributes }
    }

    /// Number of `f32`s per vertex.
    pub fn floats_per_vertex(&self) -> usize {
        self.attributes.iter().map(|a| a.components).sum()
    }

    /// Byte size of one vertex.
    pub fn stride(&self) -> usize {
        self.floats_per_vertex() * COMPONENT_SIZE
    }

    /// Byte offset of the named attribute, if the layout has it.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.bound().find(|a| a.name == name).map(|a| a.offset)
    }

    /// Names of all attributes, in memory order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes.iter().map(|a| a.name)
    }

    /// Iterates over the attributes with their offsets and the shared stride.
    pub fn bound(&self) -> impl Iterator<Item = BoundAttribute> + '_ {
        let stride = self.stride();
        let mut offset = 0;
        self.attributes.iter().map(move |a| {
            let bound = BoundAttribute {
                name: a.name,
                components: a.components,
                offset,
                stride,
            };
            offset += a.components * COMPONENT_SIZE;
            bound
        })
    }

    /// Number of vertices in an interleaved array.
    ///
    /// Fails if the array length is not a whole number of vertices.
    pub fn vertex_count(&self, data: &[f32]) -> Result<usize, String> {
        let width = self.floats_per_vertex();
        if width == 0 {
            return Err("Vertex layout has no attributes".to_string());
        }
        if data.len() % width != 0 {
            return Err(format!(
                "Vertex data has {} floats, which is not a multiple of {}",
                data.len(),
                width
            ));
        }
        Ok(data.len() / width)
    }
}

/// Checks that every index refers to one of `vertex_count` vertices.
pub fn validate_indices(indices: &[u32], vertex_count: usize) -> Result<(), String> {
    if indices.len() % 3 != 0 {
        return Err(format!(
            "Index count {} does not form whole triangles",
            indices.len()
        ));
    }
    match indices.iter().find(|&&i| i as usize >= vertex_count) {
        Some(i) => Err(format!(
            "Index {} is out of range for {} vertices",
            i, vertex_count
        )),
        None => Ok(()),
    }
}
