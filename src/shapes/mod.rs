mod shape;
mod aabb;
mod sphere;
mod cube;
mod collider;
pub mod mesh;

pub use self::shape::Shape;
pub use self::aabb::Aabb;
pub use self::sphere::Sphere;
pub use self::cube::Cube;
pub use self::collider::Collider;
pub use self::mesh::{VertexArray, IndexArray, box_vertices, BOX_INDICES};
