use talus_geom::{Vec2, Vec3};

use crate::constants::SLOTS_PER_FACE;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    /// Returns the `[0..6)` index of this face; also its slot sub-range
    /// order within a cell.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    /// Falls back to `PosY` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Face {
        match i {
            0 => Face::PosY,
            1 => Face::NegY,
            2 => Face::PosX,
            3 => Face::NegX,
            4 => Face::PosZ,
            5 => Face::NegZ,
            _ => Face::PosY,
        }
    }

    /// Returns the integer grid delta `(dx,dy,dz)` toward the neighbor
    /// that decides this face's visibility.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }
}

/// One face's emission recipe: six ordered indices into
/// [`crate::constants::CUBE_CORNERS`] forming the face's two triangles,
/// winding fixed per face, plus the outward direction via `face`.
#[derive(Copy, Clone, Debug)]
pub struct FaceDescriptor {
    pub face: Face,
    pub corners: [usize; 6],
}

impl FaceDescriptor {
    /// Start of this face's 6-entry sub-range within a cell's slot range.
    #[inline]
    pub fn slot_offset(&self) -> usize {
        self.face.index() * SLOTS_PER_FACE
    }

    #[inline]
    pub fn delta(&self) -> (i32, i32, i32) {
        self.face.delta()
    }
}

/// The six face recipes, in [`Face`] index order. The emit path iterates
/// this table; faces are never special-cased individually.
pub const FACES: [FaceDescriptor; 6] = [
    FaceDescriptor {
        face: Face::PosY,
        corners: [6, 3, 2, 6, 7, 3],
    },
    FaceDescriptor {
        face: Face::NegY,
        corners: [0, 5, 4, 0, 1, 5],
    },
    FaceDescriptor {
        face: Face::PosX,
        corners: [3, 5, 1, 3, 7, 5],
    },
    FaceDescriptor {
        face: Face::NegX,
        corners: [6, 0, 4, 6, 2, 0],
    },
    FaceDescriptor {
        face: Face::PosZ,
        corners: [7, 4, 5, 7, 6, 4],
    },
    FaceDescriptor {
        face: Face::NegZ,
        corners: [2, 1, 0, 2, 3, 1],
    },
];

/// Per-face texture coordinates, one entry per emitted vertex. The same
/// pattern serves all six faces.
pub const UV_PATTERN: [Vec2; 6] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, 0.0),
];
