//! Polyline shape model
//!
//! Shapes are immutable once built; the document writer borrows them
//! read-only for the duration of one render and keeps nothing afterwards.

/// A 2-D point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered polyline; insertion order is render order.
#[derive(Debug, Clone, Default)]
pub struct Path {
    vertices: Vec<Vertex>,
}

impl Path {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// The vertices exactly as stored.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Render the SVG path `d` attribute value for this polyline.
    ///
    /// A path with no vertices renders no data at all. Coordinates use the
    /// compact `Display` form (`10`, not `10.0`).
    pub fn path_data(&self) -> String {
        let Some((first, rest)) = self.vertices.split_first() else {
            return String::new();
        };

        let mut d = format!("M{} {}", first.x, first.y);
        for v in rest {
            d.push_str(&format!(" L{} {}", v.x, v.y));
        }
        d.push_str(" Z");
        d
    }

    /// The demo triangle used by the smoke test and the server demo route.
    pub fn example() -> Self {
        Self::new(vec![
            Vertex::new(10.0, 10.0),
            Vertex::new(10.0, 90.0),
            Vertex::new(90.0, 10.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn path_data_for_example_triangle() {
        assert_eq!(Path::example().path_data(), "M10 10 L10 90 L90 10 Z");
    }

    #[test]
    fn empty_path_renders_no_data() {
        assert_eq!(Path::default().path_data(), "");
    }

    #[test]
    fn fractional_coordinates_stay_compact() {
        let path = Path::new(vec![Vertex::new(0.5, 2.0), Vertex::new(3.25, 4.0)]);
        assert_eq!(path.path_data(), "M0.5 2 L3.25 4 Z");
    }

    #[test]
    fn vertices_are_exposed_in_insertion_order() {
        let path = Path::example();
        assert_eq!(path.vertices().len(), 3);
        assert_eq!(path.vertices()[0], Vertex::new(10.0, 10.0));
        assert_eq!(path.vertices()[2], Vertex::new(90.0, 10.0));
    }
}
