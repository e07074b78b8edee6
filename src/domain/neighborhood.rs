//! Named neighborhood tables.
//!
//! A neighborhood is a fixed list of `(dx, dy)` offsets. Pairing it with a
//! tessellation that makes sense geometrically is the caller's job: a hex
//! table on a rectangular grid still resolves, it just isn't meaningful.

use serde::{Deserialize, Serialize};
use super::Tessellation;

#[rustfmt::skip]
const RECT_VON_NEUMANN: &[(i32, i32)] = &[
              (0, -1),
    (-1, 0),           (1, 0),
              (0, 1),
];

#[rustfmt::skip]
const RECT_MOORE: &[(i32, i32)] = &[
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

#[rustfmt::skip]
const TRI_VON_NEUMANN: &[(i32, i32)] = &[
              (0, -1),
    (-1, 0),
              (0, 1),
];

#[rustfmt::skip]
const TRI_MOORE: &[(i32, i32)] = &[
    (-1, -2), (0, -2),
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
    (-1, 2),  (0, 2),
];

#[rustfmt::skip]
const HEX_HONEYCOMB: &[(i32, i32)] = &[
              (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),
];

#[rustfmt::skip]
const HEX_TRIPOD: &[(i32, i32)] = &[
                       (1, -1),
    (-1, 0),
              (0, 1),
];

#[rustfmt::skip]
const HEX_STAR: &[(i32, i32)] = &[
                                (1, -2),
              (-1, -1), (0, -1), (1, -1), (2, -1),
              (-1, 0),           (1, 0),
    (-2, 1),  (-1, 1),  (0, 1),  (1, 1),
              (-1, 2),
];

/// Relative positions considered adjacent to a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// Four edge-sharing squares
    RectVonNeumann,
    /// Eight squares including diagonals
    RectMoore,
    /// Three edge-sharing triangles
    TriVonNeumann,
    /// Twelve vertex-sharing triangles
    TriMoore,
    /// Six edge-sharing hexagons
    #[default]
    HexHoneycomb,
    /// Every other edge of a hexagon
    HexTripod,
    /// Honeycomb plus the six second-ring cells reached through a vertex
    HexStar,
}

impl Neighborhood {
    /// All neighborhoods, in menu order
    pub fn all() -> Vec<Neighborhood> {
        vec![
            Neighborhood::TriVonNeumann,
            Neighborhood::TriMoore,
            Neighborhood::RectVonNeumann,
            Neighborhood::RectMoore,
            Neighborhood::HexHoneycomb,
            Neighborhood::HexTripod,
            Neighborhood::HexStar,
        ]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Neighborhood::RectVonNeumann => "Rect von Neumann",
            Neighborhood::RectMoore => "Rect Moore",
            Neighborhood::TriVonNeumann => "Tri von Neumann",
            Neighborhood::TriMoore => "Tri Moore",
            Neighborhood::HexHoneycomb => "Hex honeycomb",
            Neighborhood::HexTripod => "Hex tripod",
            Neighborhood::HexStar => "Hex star",
        }
    }

    /// Displacement table, in resolution order
    pub const fn displacements(&self) -> &'static [(i32, i32)] {
        match self {
            Neighborhood::RectVonNeumann => RECT_VON_NEUMANN,
            Neighborhood::RectMoore => RECT_MOORE,
            Neighborhood::TriVonNeumann => TRI_VON_NEUMANN,
            Neighborhood::TriMoore => TRI_MOORE,
            Neighborhood::HexHoneycomb => HEX_HONEYCOMB,
            Neighborhood::HexTripod => HEX_TRIPOD,
            Neighborhood::HexStar => HEX_STAR,
        }
    }

    /// Number of displacements, i.e. the neighbor count of a cell with no
    /// dropped edge slots.
    pub const fn len(&self) -> usize {
        self.displacements().len()
    }

    /// The tessellation this table was drawn for.
    pub const fn native_tessellation(&self) -> Tessellation {
        match self {
            Neighborhood::RectVonNeumann | Neighborhood::RectMoore => Tessellation::Rectangular,
            Neighborhood::TriVonNeumann | Neighborhood::TriMoore => Tessellation::Triangular,
            Neighborhood::HexHoneycomb | Neighborhood::HexTripod | Neighborhood::HexStar => {
                Tessellation::Hexagonal
            }
        }
    }

    /// Neighborhoods drawn for `tessellation`
    pub fn for_tessellation(tessellation: Tessellation) -> Vec<Neighborhood> {
        Self::all()
            .into_iter()
            .filter(|n| n.native_tessellation() == tessellation)
            .collect()
    }
}
