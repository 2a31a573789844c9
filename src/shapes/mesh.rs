use crate::error::PhysicsError;
use crate::shapes::Aabb;
use crate::Result;

/// Number of floats [`box_vertices`] produces: 8 corners of 3 floats each
pub const BOX_VERTEX_COUNT: usize = 24;

/// Number of indices needed to draw a box as triangles
pub const BOX_INDEX_COUNT: usize = 36;

/// Initial capacity of [`VertexArray::new`]
pub const VERTEX_ARRAY_DEFAULT_CAPACITY: usize = 16;

/// Initial capacity of [`IndexArray::new`]
pub const INDEX_ARRAY_DEFAULT_CAPACITY: usize = 8;

// Corner slots, three floats each
const LEFT_BOTTOM_BACK: u32 = 0;
const RIGHT_BOTTOM_BACK: u32 = 1;
const LEFT_TOP_BACK: u32 = 2;
const RIGHT_TOP_BACK: u32 = 3;
const LEFT_BOTTOM_FRONT: u32 = 4;
const RIGHT_BOTTOM_FRONT: u32 = 5;
const LEFT_TOP_FRONT: u32 = 6;
const RIGHT_TOP_FRONT: u32 = 7;

/// Two triangles per face: front, back, left, right, top, bottom
pub const BOX_INDICES: [u32; BOX_INDEX_COUNT] = [
    RIGHT_TOP_FRONT, RIGHT_BOTTOM_FRONT, LEFT_TOP_FRONT,
    LEFT_BOTTOM_FRONT, RIGHT_BOTTOM_FRONT, LEFT_TOP_FRONT,
    RIGHT_TOP_BACK, RIGHT_BOTTOM_BACK, LEFT_TOP_BACK,
    LEFT_BOTTOM_BACK, RIGHT_BOTTOM_BACK, LEFT_TOP_BACK,
    LEFT_TOP_FRONT, LEFT_BOTTOM_FRONT, LEFT_TOP_BACK,
    LEFT_BOTTOM_BACK, LEFT_TOP_BACK, LEFT_BOTTOM_FRONT,
    RIGHT_TOP_FRONT, RIGHT_BOTTOM_FRONT, RIGHT_TOP_BACK,
    RIGHT_BOTTOM_BACK, RIGHT_TOP_BACK, RIGHT_BOTTOM_FRONT,
    LEFT_TOP_BACK, LEFT_TOP_FRONT, RIGHT_TOP_BACK,
    RIGHT_TOP_FRONT, RIGHT_TOP_BACK, LEFT_TOP_FRONT,
    LEFT_BOTTOM_BACK, LEFT_BOTTOM_FRONT, RIGHT_BOTTOM_BACK,
    RIGHT_BOTTOM_FRONT, RIGHT_BOTTOM_BACK, LEFT_BOTTOM_FRONT,
];

/// Returns the eight corners of a box in model space (relative to its position)
///
/// Pair with [`Aabb::transform_matrix`](crate::shapes::Shape::transform_matrix)
/// and [`BOX_INDICES`] to draw the box.
pub fn box_vertices(aabb: &Aabb) -> [f32; BOX_VERTEX_COUNT] {
    let corner = |x: f32, y: f32, z: f32| [x, y, z];
    let corners = [
        corner(aabb.left, aabb.bottom, aabb.back),
        corner(aabb.right, aabb.bottom, aabb.back),
        corner(aabb.left, aabb.top, aabb.back),
        corner(aabb.right, aabb.top, aabb.back),
        corner(aabb.left, aabb.bottom, aabb.front),
        corner(aabb.right, aabb.bottom, aabb.front),
        corner(aabb.left, aabb.top, aabb.front),
        corner(aabb.right, aabb.top, aabb.front),
    ];

    let mut vertices = [0.0; BOX_VERTEX_COUNT];
    for (slot, corner) in vertices.chunks_exact_mut(3).zip(corners.iter()) {
        slot.copy_from_slice(corner);
    }
    vertices
}

/// Appends a box's corners and triangle indices to a pair of render buffers
///
/// The indices are offset by the number of vertices already in `vertices`.
/// Box corners are three floats each, so `vertices` must have a stride of 3.
pub fn append_box(aabb: &Aabb, vertices: &mut VertexArray, indices: &mut IndexArray) -> Result<()> {
    if vertices.get_stride() != 3 {
        return Err(PhysicsError::InvalidParameter(format!(
            "box corners need a vertex stride of 3, not {}",
            vertices.get_stride()
        )));
    }
    let base = u32::try_from(vertices.vertex_count())
        .map_err(|_| PhysicsError::ResourceExhausted("vertex index overflow".to_string()))?;

    vertices.add_floats(&box_vertices(aabb))?;
    let offset: Vec<u32> = BOX_INDICES.iter().map(|index| index + base).collect();
    indices.add_indices(&offset)
}

/// Makes room for `needed` more items, doubling the capacity when it runs out
fn grow<T>(items: &mut Vec<T>, needed: usize) -> Result<()> {
    if items.len() + needed <= items.capacity() {
        return Ok(());
    }
    let target = (items.capacity() * 2).max(items.len() + needed);
    items
        .try_reserve_exact(target - items.len())
        .map_err(|e| PhysicsError::ResourceExhausted(format!("could not grow buffer to {}: {}", target, e)))
}

/// Changes the capacity to exactly `capacity`, refusing to drop stored items
fn resize<T>(items: &mut Vec<T>, capacity: usize) -> Result<()> {
    if capacity < items.len() {
        return Err(PhysicsError::InvalidParameter(format!(
            "capacity {} is smaller than the {} stored items",
            capacity,
            items.len()
        )));
    }
    if capacity > items.capacity() {
        items
            .try_reserve_exact(capacity - items.len())
            .map_err(|e| PhysicsError::ResourceExhausted(format!("could not resize buffer to {}: {}", capacity, e)))?;
    } else {
        items.shrink_to(capacity);
    }
    Ok(())
}

fn with_capacity<T>(capacity: usize) -> Result<Vec<T>> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(capacity)
        .map_err(|e| PhysicsError::ResourceExhausted(format!("could not allocate {} items: {}", capacity, e)))?;
    Ok(items)
}

/// A growable buffer of vertex floats
#[derive(Debug, Clone, Default)]
pub struct VertexArray {
    items: Vec<f32>,
    stride: usize,
}

impl VertexArray {
    /// Creates an array with the default capacity holding `stride` floats per vertex
    pub fn new(stride: usize) -> Result<Self> {
        Self::with_capacity(VERTEX_ARRAY_DEFAULT_CAPACITY, stride)
    }

    /// Creates an array with room for `capacity` floats
    pub fn with_capacity(capacity: usize, stride: usize) -> Result<Self> {
        if stride == 0 {
            return Err(PhysicsError::InvalidParameter("vertex stride must be non-zero".to_string()));
        }
        Ok(Self {
            items: with_capacity(capacity)?,
            stride,
        })
    }

    /// Appends a three-float vertex
    pub fn add_vertex(&mut self, x: f32, y: f32, z: f32) -> Result<()> {
        self.add_floats(&[x, y, z])
    }

    /// Appends a single float
    pub fn add_float(&mut self, value: f32) -> Result<()> {
        self.add_floats(&[value])
    }

    /// Appends several floats
    pub fn add_floats(&mut self, values: &[f32]) -> Result<()> {
        grow(&mut self.items, values.len())?;
        self.items.extend_from_slice(values);
        Ok(())
    }

    /// Sets the capacity, failing if it would not hold the current contents
    pub fn resize_capacity(&mut self, capacity: usize) -> Result<()> {
        resize(&mut self.items, capacity)
    }

    /// Drops spare capacity and empties the array
    pub fn clear(&mut self) -> Result<()> {
        let len = self.items.len();
        resize(&mut self.items, len)?;
        self.items.clear();
        Ok(())
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn get_stride(&self) -> usize {
        self.stride
    }

    /// Number of whole vertices stored
    pub fn vertex_count(&self) -> usize {
        self.items.len() / self.stride.max(1)
    }
}

/// A growable buffer of vertex indices
#[derive(Debug, Clone, Default)]
pub struct IndexArray {
    items: Vec<u32>,
}

impl IndexArray {
    /// Creates an array with the default capacity
    pub fn new() -> Result<Self> {
        Self::with_capacity(INDEX_ARRAY_DEFAULT_CAPACITY)
    }

    /// Creates an array with room for `capacity` indices
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            items: with_capacity(capacity)?,
        })
    }

    /// Appends one index
    pub fn add_index(&mut self, index: u32) -> Result<()> {
        self.add_indices(&[index])
    }

    /// Appends several indices
    pub fn add_indices(&mut self, indices: &[u32]) -> Result<()> {
        grow(&mut self.items, indices.len())?;
        self.items.extend_from_slice(indices);
        Ok(())
    }

    /// Sets the capacity, failing if it would not hold the current contents
    pub fn resize_capacity(&mut self, capacity: usize) -> Result<()> {
        resize(&mut self.items, capacity)
    }

    /// Drops spare capacity and empties the array
    pub fn clear(&mut self) -> Result<()> {
        let len = self.items.len();
        resize(&mut self.items, len)?;
        self.items.clear();
        Ok(())
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
}
