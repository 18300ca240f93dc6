/// Histogram rendering.
///
/// The engine only produces a `Histogram`; presenting it is the job of a
/// `Renderer`. `TextRenderer` writes a titled table with counts, percentages
/// (count / shots × 100) and a bar per outcome.
use crate::core::Histogram;
use std::io::{self, Write};

const BAR_WIDTH: usize = 20;

pub trait Renderer {
    fn render(&mut self, histogram: &Histogram, total_shots: usize) -> io::Result<()>;
}

pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, histogram: &Histogram, total_shots: usize) -> io::Result<()> {
        writeln!(self.out, "Result of {total_shots} Shots")?;
        let max_count = histogram.iter().map(|(_, c)| c).max().unwrap_or(1).max(1);
        let shots = total_shots.max(1) as f64;
        for (label, count) in histogram.iter() {
            let percent = count as f64 / shots * 100.0;
            let bar_len = (count * BAR_WIDTH / max_count).min(BAR_WIDTH);
            let bar = "█".repeat(bar_len);
            let pad = " ".repeat(BAR_WIDTH - bar_len);
            writeln!(self.out, "    {label} : {count:>6}  {percent:>6.2}%  {bar}{pad}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(histogram: &Histogram, shots: usize) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(histogram, shots).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_lines_in_order() {
        let mut h = Histogram::new(2);
        for index in [3, 0, 3, 3] {
            h.record(index);
        }
        let text = render_to_string(&h, 4);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Result of 4 Shots");
        assert!(lines[1].contains("00 :      1   25.00%"));
        assert!(lines[2].contains("11 :      3   75.00%"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_render_empty_histogram() {
        let text = render_to_string(&Histogram::new(1), 0);
        assert_eq!(text, "Result of 0 Shots\n");
    }
}
