use std::error::Error;
use std::fmt;

use static_assertions::const_assert;

use super::types::{BlockProps, BlockType, Rgb};

// Reverse table covers 7-bit ASCII; display characters must be printable.
const ASCII_LEN: usize = 128;

/// Source of truth for every per-type attribute, in ordinal order.
///
/// Display characters double as the text world format: changing one is a
/// breaking change for every saved grid.
pub const BLOCK_TABLE: [BlockProps; BlockType::COUNT] = [
    BlockProps {
        ty: BlockType::Air,
        display: ' ',
        name: "air",
        color: Rgb::WHITE,
        solid: false,
        transparent: true,
    },
    BlockProps {
        ty: BlockType::Dirt,
        display: 'D',
        name: "dirt",
        color: Rgb::from_u32(0x8B4513),
        solid: true,
        transparent: false,
    },
    BlockProps {
        ty: BlockType::Grass,
        display: 'G',
        name: "grass",
        color: Rgb::from_u32(0x3CB043),
        solid: true,
        transparent: false,
    },
    BlockProps {
        ty: BlockType::Stone,
        display: 'S',
        name: "stone",
        color: Rgb::from_u32(0x808080),
        solid: true,
        transparent: false,
    },
    BlockProps {
        ty: BlockType::Sand,
        display: 'A',
        name: "sand",
        color: Rgb::from_u32(0xC2B280),
        solid: true,
        transparent: false,
    },
    BlockProps {
        ty: BlockType::Water,
        display: 'W',
        name: "water",
        color: Rgb::from_u32(0x3F76E4),
        solid: false,
        transparent: true,
    },
    BlockProps {
        ty: BlockType::Snow,
        display: 'N',
        name: "snow",
        color: Rgb::from_u32(0xFFFAFA),
        solid: true,
        transparent: false,
    },
    BlockProps {
        ty: BlockType::Ice,
        display: 'I',
        name: "ice",
        color: Rgb::from_u32(0xA5C8FF),
        solid: true,
        transparent: true,
    },
];

const_assert!(alphabet_is_unique(&BLOCK_TABLE));

static REGISTRY: BlockTypeRegistry = BlockTypeRegistry::build(&BLOCK_TABLE);

/// Raised by inverse lookup when a character is not part of the alphabet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownDisplayCharacter(pub char);

impl fmt::Display for UnknownDisplayCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown display character {:?}", self.0)
    }
}

impl Error for UnknownDisplayCharacter {}

/// Immutable identifier <-> attribute tables.
///
/// There is exactly one instance, [`BlockTypeRegistry::global`], built during
/// const evaluation. A malformed [`BLOCK_TABLE`] stops the build instead of
/// surfacing at runtime.
#[derive(Debug)]
pub struct BlockTypeRegistry {
    props: [BlockProps; BlockType::COUNT],
    by_display: [Option<BlockType>; ASCII_LEN],
}

impl BlockTypeRegistry {
    #[inline]
    pub fn global() -> &'static BlockTypeRegistry {
        &REGISTRY
    }

    const fn build(table: &[BlockProps; BlockType::COUNT]) -> BlockTypeRegistry {
        let mut by_display: [Option<BlockType>; ASCII_LEN] = [None; ASCII_LEN];
        let mut i = 0;
        while i < BlockType::COUNT {
            let p = &table[i];
            if p.ty as usize != i {
                panic!("block table is not in ordinal order");
            }
            let code = p.display as u32;
            if code < 0x20 || code > 0x7E {
                panic!("display character is not printable ASCII");
            }
            if by_display[code as usize].is_some() {
                panic!("display character assigned to two block types");
            }
            by_display[code as usize] = Some(p.ty);
            let mut j = 0;
            while j < i {
                if str_eq(table[j].name, p.name) {
                    panic!("block name assigned to two block types");
                }
                j += 1;
            }
            i += 1;
        }
        if table[BlockType::Air as usize].display != ' ' {
            panic!("air must render as a space");
        }
        BlockTypeRegistry {
            props: *table,
            by_display,
        }
    }

    #[inline]
    pub fn display_of(&self, ty: BlockType) -> char {
        self.props[ty.index()].display
    }

    #[inline]
    pub fn from_display(&self, c: char) -> Option<BlockType> {
        let code = c as u32 as usize;
        if code < ASCII_LEN {
            self.by_display[code]
        } else {
            None
        }
    }

    pub fn lookup(&self, c: char) -> Result<BlockType, UnknownDisplayCharacter> {
        self.from_display(c).ok_or(UnknownDisplayCharacter(c))
    }

    #[inline]
    pub fn props(&self, ty: BlockType) -> &BlockProps {
        &self.props[ty.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockProps> {
        self.props.iter()
    }

    /// Display characters in ordinal order.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.props.iter().map(|p| p.display)
    }

    /// Case-insensitive name lookup.
    pub fn by_name(&self, name: &str) -> Option<BlockType> {
        self.props
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.ty)
    }
}

const fn alphabet_is_unique(table: &[BlockProps; BlockType::COUNT]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].display == table[j].display {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
