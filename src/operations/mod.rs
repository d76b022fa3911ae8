pub mod distance;
pub mod offset;
pub mod skeleton;

pub use distance::signed_vertex_distances;
pub use offset::{OffsetParams, VoronoiOffset};
pub use skeleton::{SkeletonEdge, SkeletonEdges, SkeletonSpan};
