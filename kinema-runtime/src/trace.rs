use std::io;
use std::path::Path;

use crate::scene::Scene;
use crate::sink::FrameSink;
use crate::{Error, Result};

#[derive(serde::Serialize)]
struct Record<'a> {
    scenario: &'a str,
    frame: usize,
    kind: &'static str,
    label: &'a str,
    vertex: usize,
    x: f64,
    y: f64,
    z: f64,
}

/// Write scenes as CSV, one record per primitive vertex.
pub struct CsvSink<W: io::Write> {
    writer: csv::Writer<W>,
    name: String,
}

impl CsvSink<std::fs::File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::debug!("Writing frames to {}", path.as_ref().display());

        let writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::NonNumeric)
            .has_headers(true)
            .from_path(path)?;

        Ok(Self {
            writer,
            name: String::new(),
        })
    }
}

impl<W: io::Write> CsvSink<W> {
    pub fn from_writer(writer: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::NonNumeric)
            .has_headers(true)
            .from_writer(writer);

        Self {
            writer,
            name: String::new(),
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

impl<W: io::Write> FrameSink for CsvSink<W> {
    fn begin(&mut self, name: &str) -> Result {
        self.name = name.to_string();
        Ok(())
    }

    fn draw(&mut self, scene: &Scene) -> Result {
        for primitive in scene.primitives() {
            for (vertex, point) in primitive.vertices().iter().enumerate() {
                self.writer.serialize(Record {
                    scenario: &self.name,
                    frame: scene.index(),
                    kind: primitive.kind(),
                    label: primitive.label(),
                    vertex,
                    x: point.x,
                    y: point.y,
                    z: point.z,
                })?;
            }
        }

        Ok(())
    }

    fn finish(&mut self) -> Result {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinema_core::nalgebra::Point3;

    #[test]
    fn test_csv_sink() {
        let mut sink = CsvSink::from_writer(Vec::new());

        let mut scene = Scene::new(4);
        scene
            .add_point("p", Point3::new(1.5, 2.5, -3.5))
            .add_segment("link", Point3::origin(), Point3::new(1.5, 0.0, 0.0));

        sink.begin("test").unwrap();
        sink.draw(&scene).unwrap();
        sink.finish().unwrap();

        let output = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            r#""scenario","frame","kind","label","vertex","x","y","z""#
        );
        assert_eq!(lines[1], r#""test",4,"point","p",0,1.5,2.5,-3.5"#);
        assert!(lines[2].starts_with(r#""test",4,"segment","link",0,"#));
        assert!(lines[3].starts_with(r#""test",4,"segment","link",1,1.5,"#));
    }
}
