/// The canvas graph renderer.
pub mod force_graph;
/// Subject-driven loading around the renderer.
pub mod graph_view;
