use std::error::Error;
use std::io::Write;

use blockglyph_blocks::{BlockType, BlockTypeRegistry};
use blockglyph_grid::{Grid, GridConfig};
use serde::Serialize;

#[derive(Serialize)]
struct PaletteFile {
    blocks: Vec<PaletteEntry>,
}

#[derive(Serialize)]
struct PaletteEntry {
    name: &'static str,
    display: String,
    color: String,
    solid: bool,
    transparent: bool,
}

/// The registry as a TOML document, for tools that want the alphabet without linking this crate.
pub fn palette_toml(out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let doc = PaletteFile {
        blocks: BlockTypeRegistry::global()
            .iter()
            .map(|p| PaletteEntry {
                name: p.name,
                display: p.display.to_string(),
                color: p.color.to_hex(),
                solid: p.solid,
                transparent: p.transparent,
            })
            .collect(),
    };
    out.write_all(toml::to_string(&doc)?.as_bytes())?;
    Ok(())
}

/// One line per registered block type, in ordinal order.
pub fn palette(out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    for p in BlockTypeRegistry::global().iter() {
        let mut flags = Vec::new();
        if p.solid {
            flags.push("solid");
        }
        if p.transparent {
            flags.push("transparent");
        }
        writeln!(
            out,
            "{:<5} {:<6} {} {}",
            format!("{:?}", p.display),
            p.name,
            p.color.to_hex(),
            flags.join(",")
        )?;
    }
    Ok(())
}

/// Resolves each character; fails with the first unknown one after printing all.
pub fn lookup(chars: &str, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let reg = BlockTypeRegistry::global();
    let mut first_err = None;
    for c in chars.chars() {
        match reg.lookup(c) {
            Ok(ty) => writeln!(out, "{:?} -> {}", c, ty)?,
            Err(e) => {
                writeln!(out, "{:?} -> ?", c)?;
                log::warn!("{}", e);
                first_err.get_or_insert(e);
            }
        }
    }
    match first_err {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

pub fn check(text: &str, cfg: &GridConfig, out: &mut impl Write) -> Result<Grid, Box<dyn Error>> {
    let grid = Grid::parse(text, cfg)?;
    let (sx, sy, sz) = grid.dims();
    log::info!(
        "grid {}x{}x{}: {} solid of {} cells",
        sx,
        sy,
        sz,
        grid.solid_count(),
        grid.blocks.len()
    );
    writeln!(out, "size {}x{}x{}", sx, sy, sz)?;
    for (ty, n) in BlockType::ALL.iter().zip(grid.histogram()) {
        if n > 0 {
            writeln!(out, "{:<6} {}", ty, n)?;
        }
    }
    Ok(grid)
}

pub fn render(text: &str, cfg: &GridConfig, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let grid = Grid::parse(text, cfg)?;
    out.write_all(grid.render(cfg)?.as_bytes())?;
    Ok(())
}
