/// Terminal presentation. All terminal I/O lives here.
///
/// Takes the finished raster, HUD text and overlay, and queues the commands
/// that put them on screen. Two pixel rows share one terminal row through
/// the upper-half-block glyph: foreground is the upper pixel, background
/// the lower.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use raycast_shooter::entities::Overlay;
use raycast_shooter::render::{overlay_banner, Framebuffer, Hud, Rgb};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_HEALTH: Color = Color::Red;
const C_HUD_AMMO: Color = Color::Yellow;
const C_HUD_SCORE: Color = Color::Green;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_HUD_WEAPON: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_PANEL_BG: Color = Color::Rgb { r: 12, g: 12, b: 20 };
const C_PANEL_TITLE: Color = Color::Yellow;
const C_PANEL_HINT: Color = Color::White;

const HALF_BLOCK: char = '▀';

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Terminal rows taken by the raster.
pub fn raster_rows(fb: &Framebuffer) -> u16 {
    (fb.height() / 2) as u16
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Present one complete frame.
pub fn present<W: Write>(
    out: &mut W,
    fb: &Framebuffer,
    hud: &Hud,
    overlay: Overlay,
    pointer_captured: bool,
    terminal_size: (u16, u16),
) -> std::io::Result<()> {
    let (cols, rows) = terminal_size;

    draw_raster(out, fb, cols, rows)?;

    let hud_row = raster_rows(fb);
    if hud_row < rows {
        draw_hud(out, hud, hud_row)?;
    }
    if hud_row + 1 < rows {
        draw_controls_hint(out, hud_row + 1, pointer_captured)?;
    }
    if let Some((title, hint)) = overlay_banner(overlay) {
        draw_overlay(out, fb, title, hint)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Raster ────────────────────────────────────────────────────────────────────

fn draw_raster<W: Write>(out: &mut W, fb: &Framebuffer, cols: u16, rows: u16) -> std::io::Result<()> {
    let width = fb.width().min(cols as usize);
    let height = raster_rows(fb).min(rows);

    for row in 0..height {
        out.queue(cursor::MoveTo(0, row))?;

        // Runs of identical colour pairs are printed in one go.
        let mut current: Option<(Rgb, Rgb)> = None;
        let mut run = String::new();

        for x in 0..width {
            let top = fb.pixel(x, row as usize * 2).unwrap_or_default();
            let bottom = fb.pixel(x, row as usize * 2 + 1).unwrap_or_default();

            if current != Some((top, bottom)) {
                if !run.is_empty() {
                    out.queue(Print(&run))?;
                    run.clear();
                }
                out.queue(style::SetForegroundColor(to_color(top)))?;
                out.queue(style::SetBackgroundColor(to_color(bottom)))?;
                current = Some((top, bottom));
            }
            run.push(HALF_BLOCK);
        }
        if !run.is_empty() {
            out.queue(Print(&run))?;
        }
    }

    out.queue(style::ResetColor)?;
    Ok(())
}

// ── HUD (row below the raster) ────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, hud: &Hud, row: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;

    let colors = [C_HUD_HEALTH, C_HUD_AMMO, C_HUD_SCORE, C_HUD_LEVEL, C_HUD_WEAPON];
    for (field, color) in hud.fields().iter().zip(colors) {
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(format!(" {:<14}", field)))?;
    }
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, row: u16, pointer_captured: bool) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    let pointer = if pointer_captured {
        "ESC : Release mouse"
    } else {
        "Click : Mouse look"
    };
    out.queue(Print(format!(
        " W S / A D : Move   ← → : Turn   SPACE / F : Fire   B : Buy ammo   {}   Q : Quit",
        pointer
    )))?;
    Ok(())
}

// ── Overlay panel ─────────────────────────────────────────────────────────────

fn draw_overlay<W: Write>(out: &mut W, fb: &Framebuffer, title: &str, hint: &str) -> std::io::Result<()> {
    let inner = title.chars().count().max(hint.chars().count()) + 4;
    let border = "═".repeat(inner);
    let lines: [(String, Color); 5] = [
        (format!("╔{}╗", border), C_PANEL_TITLE),
        (format!("║{:^inner$}║", title, inner = inner), C_PANEL_TITLE),
        (format!("║{:^inner$}║", "", inner = inner), C_PANEL_HINT),
        (format!("║{:^inner$}║", hint, inner = inner), C_PANEL_HINT),
        (format!("╚{}╝", border), C_PANEL_TITLE),
    ];

    let cx = (fb.width() / 2) as u16;
    let start_row = (raster_rows(fb) / 2).saturating_sub(lines.len() as u16 / 2);

    out.queue(style::SetBackgroundColor(C_PANEL_BG))?;
    for (i, (line, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(line))?;
    }
    Ok(())
}
