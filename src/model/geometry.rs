use serde::{Deserialize, Serialize};

/// Exterior boundary of an area source plus its seismogenic depth bounds.
///
/// Vertices are `[x, y]` pairs (longitude, latitude) in ring order. The ring
/// is always stored closed: [`AreaGeometry::new`] repeats the first vertex at
/// the end when the caller passes an open ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAreaGeometry")]
pub struct AreaGeometry {
    vertices: Vec<[f64; 2]>,
    upper_seismo_depth: f64,
    lower_seismo_depth: f64,
}

/// Deserialized fields, closed through [`AreaGeometry::new`].
#[derive(Deserialize)]
struct RawAreaGeometry {
    vertices: Vec<[f64; 2]>,
    upper_seismo_depth: f64,
    lower_seismo_depth: f64,
}

impl From<RawAreaGeometry> for AreaGeometry {
    fn from(raw: RawAreaGeometry) -> Self {
        AreaGeometry::new(raw.vertices, raw.upper_seismo_depth, raw.lower_seismo_depth)
    }
}

impl AreaGeometry {
    pub fn new(vertices: Vec<[f64; 2]>, upper_seismo_depth: f64, lower_seismo_depth: f64) -> Self {
        let mut vertices = vertices;
        close_ring(&mut vertices);
        Self {
            vertices,
            upper_seismo_depth,
            lower_seismo_depth,
        }
    }

    /// Closed ring, first vertex repeated last.
    #[inline]
    pub fn vertices(&self) -> &[[f64; 2]] {
        &self.vertices
    }

    /// Ring without the closing vertex, as NRML `gml:posList` expects it.
    pub fn open_ring(&self) -> &[[f64; 2]] {
        match self.vertices.len() {
            0 | 1 => &self.vertices,
            n if self.vertices[0] == self.vertices[n - 1] => &self.vertices[..n - 1],
            _ => &self.vertices,
        }
    }

    #[inline]
    pub fn upper_seismo_depth(&self) -> f64 {
        self.upper_seismo_depth
    }

    #[inline]
    pub fn lower_seismo_depth(&self) -> f64 {
        self.lower_seismo_depth
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.vertices.len() > 1 && self.vertices.first() == self.vertices.last()
    }

    /// Well-known-text form of the boundary, e.g.
    /// `POLYGON((10.00000 45.00000, 11.00000 45.00000, 11.00000 46.00000, 10.00000 45.00000))`.
    pub fn wkt(&self) -> String {
        if self.vertices.is_empty() {
            return "POLYGON EMPTY".to_string();
        }

        let coords = self
            .vertices
            .iter()
            .map(|[x, y]| format!("{:.5} {:.5}", x, y))
            .collect::<Vec<_>>()
            .join(", ");
        format!("POLYGON(({}))", coords)
    }
}

fn close_ring(vertices: &mut Vec<[f64; 2]>) {
    if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
        if vertices.len() > 1 && first != last {
            vertices.push(first);
        }
    }
}
