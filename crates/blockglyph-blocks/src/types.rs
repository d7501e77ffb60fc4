use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::registry::{BLOCK_TABLE, BlockTypeRegistry, UnknownDisplayCharacter};

/// Closed set of block kinds.
///
/// The discriminant is an ordinal (0..COUNT) and carries no meaning beyond
/// identity. The display character lives in the registry table, so the text
/// alphabet can change without touching how blocks are stored.
#[repr(u8)]
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    #[default]
    Air = 0,
    Dirt,
    Grass,
    Stone,
    Sand,
    Water,
    Snow,
    Ice,
}

impl BlockType {
    pub const COUNT: usize = 8;

    /// Every variant in ordinal order.
    pub const ALL: [BlockType; BlockType::COUNT] = [
        BlockType::Air,
        BlockType::Dirt,
        BlockType::Grass,
        BlockType::Stone,
        BlockType::Sand,
        BlockType::Water,
        BlockType::Snow,
        BlockType::Ice,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(i: u8) -> Option<BlockType> {
        if (i as usize) < BlockType::COUNT {
            Some(BlockType::ALL[i as usize])
        } else {
            None
        }
    }

    /// Character used when printing or serializing this block as text.
    #[inline]
    pub const fn display(self) -> char {
        BLOCK_TABLE[self as usize].display
    }

    /// Inverse of [`BlockType::display`]. `None` for characters outside the alphabet.
    #[inline]
    pub fn from_display(c: char) -> Option<BlockType> {
        BlockTypeRegistry::global().from_display(c)
    }

    #[inline]
    pub fn props(self) -> &'static BlockProps {
        BlockTypeRegistry::global().props(self)
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        BLOCK_TABLE[self as usize].name
    }

    #[inline]
    pub const fn color(self) -> Rgb {
        BLOCK_TABLE[self as usize].color
    }

    #[inline]
    pub const fn is_air(self) -> bool {
        matches!(self, BlockType::Air)
    }

    #[inline]
    pub const fn is_solid(self) -> bool {
        BLOCK_TABLE[self as usize].solid
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        BLOCK_TABLE[self as usize].transparent
    }
}

impl From<BlockType> for char {
    #[inline]
    fn from(ty: BlockType) -> char {
        ty.display()
    }
}

impl TryFrom<char> for BlockType {
    type Error = UnknownDisplayCharacter;

    #[inline]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        BlockTypeRegistry::global().lookup(c)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for BlockType {
    type Err = UnknownBlockName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockTypeRegistry::global()
            .by_name(s.trim())
            .ok_or_else(|| UnknownBlockName(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownBlockName(pub String);

impl fmt::Display for UnknownBlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown block name {:?}", self.0)
    }
}

impl Error for UnknownBlockName {}

/// 8-bit sRGB colour used for flat-shaded previews.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_u32(0xFFFFFF);

    #[inline]
    pub const fn from_u32(rgb: u32) -> Rgb {
        Rgb {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.to_u32())
    }

    /// Accepts `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(s: &str) -> Option<Rgb> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Rgb::from_u32)
    }

    /// Normalized components in [0,1], the form vertex colour buffers take.
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// Per-type attributes. One record per variant, indexed by ordinal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockProps {
    pub ty: BlockType,
    pub display: char,
    pub name: &'static str,
    pub color: Rgb,
    // Occupies its cell for collision and occlusion
    pub solid: bool,
    // Light and neighbouring faces show through
    pub transparent: bool,
}
