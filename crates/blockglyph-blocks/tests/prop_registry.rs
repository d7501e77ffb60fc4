use blockglyph_blocks::{BlockType, BlockTypeRegistry, Rgb, UnknownDisplayCharacter};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn arb_block() -> impl Strategy<Value = BlockType> {
    (0u8..BlockType::COUNT as u8).prop_map(|i| BlockType::from_index(i).unwrap())
}

fn alphabet() -> HashSet<char> {
    BlockType::ALL.iter().map(|b| b.display()).collect()
}

proptest! {
    // from_display(display(v)) == Some(v)
    #[test]
    fn display_roundtrips(b in arb_block()) {
        prop_assert_eq!(BlockType::from_display(b.display()), Some(b));
        prop_assert_eq!(BlockType::try_from(char::from(b)), Ok(b));
    }

    // Distinct variants never share a display character
    #[test]
    fn display_is_injective(a in arb_block(), b in arb_block()) {
        prop_assume!(a != b);
        prop_assert_ne!(a.display(), b.display());
    }

    // Any char outside the alphabet is rejected with itself as payload
    #[test]
    fn unknown_chars_are_rejected(c in any::<char>()) {
        prop_assume!(!alphabet().contains(&c));
        prop_assert_eq!(BlockType::from_display(c), None);
        prop_assert_eq!(BlockType::try_from(c), Err(UnknownDisplayCharacter(c)));
    }

    // Name parsing is case-insensitive and agrees with Display
    #[test]
    fn name_roundtrips(b in arb_block(), upper in any::<bool>()) {
        let name = b.to_string();
        let name = if upper { name.to_uppercase() } else { name };
        prop_assert_eq!(name.parse::<BlockType>(), Ok(b));
    }
}

#[test]
fn fixed_alphabet_is_stable() {
    let expected = [
        (' ', BlockType::Air),
        ('D', BlockType::Dirt),
        ('G', BlockType::Grass),
        ('S', BlockType::Stone),
        ('A', BlockType::Sand),
        ('W', BlockType::Water),
        ('N', BlockType::Snow),
        ('I', BlockType::Ice),
    ];
    for (c, b) in expected {
        assert_eq!(b.display(), c);
        assert_eq!(BlockType::from_display(c), Some(b));
    }
    let reg = BlockTypeRegistry::global();
    let chars: Vec<char> = reg.alphabet().collect();
    assert_eq!(chars, expected.map(|(c, _)| c).to_vec());
    assert_eq!(alphabet().len(), BlockType::COUNT);
}

#[test]
fn air_is_space_and_empty() {
    assert_eq!(BlockType::Air.display(), ' ');
    assert_eq!(BlockType::default(), BlockType::Air);
    assert!(BlockType::Air.is_air());
    assert!(!BlockType::Air.is_solid());
    assert!(BlockType::ALL[1..].iter().all(|b| !b.is_air()));
}

#[test]
fn spot_lookups() {
    assert_eq!(BlockType::from_display('D'), Some(BlockType::Dirt));
    assert_eq!(BlockType::from_display('Z'), None);
    assert_eq!(BlockType::from_display('d'), None);
    assert_eq!(BlockType::from_display('\u{e9}'), None);
    let err = BlockTypeRegistry::global().lookup('?').unwrap_err();
    assert_eq!(err, UnknownDisplayCharacter('?'));
    assert_eq!(err.to_string(), "unknown display character '?'");
}

#[test]
fn registry_and_type_accessors_agree() {
    let reg = BlockTypeRegistry::global();
    for (i, p) in reg.iter().enumerate() {
        assert_eq!(p.ty.index(), i);
        assert_eq!(BlockType::from_index(i as u8), Some(p.ty));
        assert_eq!(reg.display_of(p.ty), p.ty.display());
        assert_eq!(p.ty.props(), p);
        assert_eq!(p.ty.name(), p.name);
        assert_eq!(p.ty.color(), p.color);
        assert_eq!(reg.by_name(p.name), Some(p.ty));
    }
    assert_eq!(BlockType::from_index(BlockType::COUNT as u8), None);
    assert_eq!(reg.by_name("lava"), None);
    assert!("lava".parse::<BlockType>().is_err());
}

#[test]
fn render_colors_match_reference_palette() {
    assert_eq!(BlockType::Grass.color().to_hex(), "#3CB043");
    assert_eq!(BlockType::Dirt.color().to_hex(), "#8B4513");
    assert_eq!(BlockType::Stone.color().to_hex(), "#808080");
    assert_eq!(Rgb::from_hex("3cb043"), Some(BlockType::Grass.color()));
    assert_eq!(Rgb::from_hex("#12345"), None);
    assert_eq!(Rgb::from_hex("#GG0000"), None);
    let [r, g, b] = BlockType::Stone.color().to_f32();
    assert!((r - 0.502).abs() < 1e-3 && (g - 0.502).abs() < 1e-3 && (b - 0.502).abs() < 1e-3);
}

#[test]
fn liquids_and_air_are_not_solid() {
    let non_solid: Vec<BlockType> = BlockType::ALL.into_iter().filter(|b| !b.is_solid()).collect();
    assert_eq!(non_solid, vec![BlockType::Air, BlockType::Water]);
    assert!(BlockType::Ice.is_solid() && BlockType::Ice.is_transparent());
    assert!(!BlockType::Stone.is_transparent());
}

#[test]
fn serde_uses_names() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Cell {
        block: BlockType,
    }
    for b in BlockType::ALL {
        let s = toml::to_string(&Cell { block: b }).expect("serialize");
        assert_eq!(s.trim(), format!("block = \"{}\"", b.name()));
        let back: Cell = toml::from_str(&s).expect("deserialize");
        assert_eq!(back.block, b);
    }
    assert!(toml::from_str::<Cell>("block = \"lava\"").is_err());
}

#[test]
fn concurrent_lookups_match_sequential() {
    let sequential: Vec<(char, Option<BlockType>)> = (0u8..128)
        .map(|c| {
            let c = c as char;
            (c, BlockType::from_display(c))
        })
        .collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let sequential = &sequential;
                s.spawn(move || {
                    for round in 0..200 {
                        for (i, &(c, expect)) in sequential.iter().enumerate() {
                            if (i + t + round) % 3 == 0 {
                                assert_eq!(BlockType::from_display(c), expect);
                            }
                        }
                        for b in BlockType::ALL {
                            assert_eq!(BlockTypeRegistry::global().display_of(b), b.display());
                        }
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("reader thread panicked");
        }
    });
}
