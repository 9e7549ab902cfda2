//! Console implementation of the drawing surface, for running the
//! panel on a regular terminal instead of attached hardware.

use anyhow::Result;
use panel_core::{DrawSurface, Frame};
use std::io::Write;

#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl ConsoleSurface {
    pub fn new() -> Self {
        Self
    }
}

impl DrawSurface for ConsoleSurface {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        // Built in full, written in one call: the terminal never shows
        // half a frame.
        let text = format_frame(frame);

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()?;

        Ok(())
    }
}

fn format_frame(frame: &Frame) -> String {
    let mut out = String::new();

    out.push_str("+------------------------------+\n");
    out.push_str(&format!("| {:<28} |\n", frame.title));
    out.push_str(&format!(
        "| {}  {:<25} |\n",
        frame.icon.glyph(),
        frame.temperature.as_deref().unwrap_or("--"),
    ));
    out.push_str(&format!("| {:<28} |\n", frame.description));

    if let Some(pct) = frame.rain_chance {
        out.push_str(&format!("| {:<28} |\n", format!("Chance of rain: {pct}%")));
    }
    if let Some(updated) = &frame.updated {
        out.push_str(&format!("| {:<28} |\n", format!("Updated {updated}")));
    }

    out.push_str("+------------------------------+\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_core::Icon;

    fn overcast_frame() -> Frame {
        Frame {
            title: "London".to_string(),
            temperature: Some("15°C".to_string()),
            description: "Overcast".to_string(),
            icon: Icon::Cloud,
            rain_chance: Some(40),
            updated: Some("12:00".to_string()),
        }
    }

    #[test]
    fn frame_text_contains_every_visible_field() {
        let text = format_frame(&overcast_frame());

        assert!(text.contains("London"));
        assert!(text.contains("15°C"));
        assert!(text.contains("Overcast"));
        assert!(text.contains("Chance of rain: 40%"));
        assert!(text.contains("Updated 12:00"));
    }

    #[test]
    fn optional_lines_are_omitted_when_absent() {
        let mut frame = overcast_frame();
        frame.rain_chance = None;
        frame.updated = None;

        let text = format_frame(&frame);

        assert!(!text.contains("Chance of rain"));
        assert!(!text.contains("Updated"));
    }

    #[test]
    fn formatting_is_idempotent() {
        let frame = overcast_frame();
        assert_eq!(format_frame(&frame), format_frame(&frame));
    }
}
