use std::io::Write;

use super::state::ViewMode;
use super::view_model::{PlaceViewModel, RenderFrame};

/// The outward face of the widget.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame);
    fn notice(&mut self, message: &str);
}

/// Writes frames as plain text, or as one JSON object per line.
pub struct TextRenderer<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &RenderFrame) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, frame)?;
            writeln!(self.out)?;
            self.out.flush()?;
            return Ok(());
        }

        writeln!(self.out, "{} nearby ({} view)", frame.places.len(), frame.view)?;
        if frame.places.is_empty() {
            writeln!(self.out, "  No places match the current filters")?;
        }
        for place in &frame.places {
            writeln!(self.out, "  {}", describe(place, frame.view))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_notice(&mut self, message: &str) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, &serde_json::json!({ "notice": message }))?;
            writeln!(self.out)?;
        } else {
            writeln!(self.out, "! {message}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn describe(place: &PlaceViewModel, view: ViewMode) -> String {
    let star = if place.is_favorite { " *" } else { "" };
    let rating = place
        .rating
        .map(|rating| format!(" {rating:.1}/5"))
        .unwrap_or_default();
    let whereabouts = match view {
        ViewMode::Map => format!("@ {:.4},{:.4}", place.location.lat, place.location.lng),
        ViewMode::List => place.vicinity.clone().unwrap_or_default(),
    };

    format!(
        "{} {}{} [{}] {} | {} | {} ({}){}",
        place.icon,
        place.name,
        star,
        place.category_label,
        whereabouts,
        place.distance_label,
        place.countdown_label,
        place.urgency.label(),
        rating,
    )
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &RenderFrame) {
        if let Err(err) = self.write_frame(frame) {
            log::error!("Failed to render frame: {err:?}");
        }
    }

    fn notice(&mut self, message: &str) {
        if let Err(err) = self.write_notice(message) {
            log::error!("Failed to show notice: {err:?}");
        }
    }
}
