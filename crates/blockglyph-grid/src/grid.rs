use blockglyph_blocks::BlockType;

/// Dense box of blocks, x fastest, then z, then y.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub size_x: usize,
    pub size_y: usize,
    pub size_z: usize,
    pub blocks: Vec<BlockType>,
}

impl Grid {
    /// Cell count of a box, `None` if it does not fit in `usize`.
    #[inline]
    pub fn volume(size_x: usize, size_y: usize, size_z: usize) -> Option<usize> {
        size_x.checked_mul(size_y)?.checked_mul(size_z)
    }

    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Self {
        Self {
            size_x,
            size_y,
            size_z,
            blocks: vec![BlockType::Air; checked_volume(size_x, size_y, size_z)],
        }
    }

    /// Wraps existing storage; pads with air or truncates to the exact volume.
    pub fn from_blocks(
        size_x: usize,
        size_y: usize,
        size_z: usize,
        mut blocks: Vec<BlockType>,
    ) -> Self {
        blocks.resize(checked_volume(size_x, size_y, size_z), BlockType::Air);
        Self {
            size_x,
            size_y,
            size_z,
            blocks,
        }
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.size_x, self.size_y, self.size_z)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.size_z + z) * self.size_x + x
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.size_x
            && (y as usize) < self.size_y
            && (z as usize) < self.size_z
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.blocks[self.idx(x, y, z)]
    }

    /// Out-of-range reads come back as `None` rather than panicking.
    pub fn get_checked(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        if self.in_bounds(x, y, z) {
            Some(self.get(x as usize, y as usize, z as usize))
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, b: BlockType) {
        let i = self.idx(x, y, z);
        self.blocks[i] = b;
    }

    /// Rows of layer `y`, ordered by z.
    pub fn layer(&self, y: usize) -> impl Iterator<Item = &[BlockType]> + '_ {
        let sx = self.size_x;
        let start = y * self.size_z * sx;
        (0..self.size_z).map(move |z| &self.blocks[start + z * sx..start + (z + 1) * sx])
    }

    /// Block counts indexed by `BlockType::index`.
    pub fn histogram(&self) -> [usize; BlockType::COUNT] {
        let mut counts = [0usize; BlockType::COUNT];
        for b in &self.blocks {
            counts[b.index()] += 1;
        }
        counts
    }

    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }
}

fn checked_volume(size_x: usize, size_y: usize, size_z: usize) -> usize {
    match Grid::volume(size_x, size_y, size_z) {
        Some(n) => n,
        None => panic!("grid volume {size_x}x{size_y}x{size_z} overflows usize"),
    }
}
