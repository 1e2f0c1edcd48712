use std::io::Write;

use serde::Deserialize;

use crate::error::{Result, StandError};
use crate::grouping::{BrandGroup, group_by_brand};
use crate::model::Item;
use crate::stand::Stand;
use crate::width::{fit_to_width, repeat_to_width};

/// Renderer runtime parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    /// Display columns taken by one item cell.
    pub cell_width: usize,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self { cell_width: 17 }
    }
}

impl RendererSettings {
    /// Widest table, in display columns between the side borders.
    pub const MAX_TABLE_WIDTH: usize = 4096;

    /// Inner table width for a stand with `cols` columns.
    pub fn table_width(&self, cols: usize) -> Result<usize> {
        if self.cell_width == 0 {
            return Err(StandError::InvalidConfig(
                "renderer.cell_width must be at least 1".to_string(),
            ));
        }
        match cols.checked_mul(self.cell_width) {
            Some(width) if width <= Self::MAX_TABLE_WIDTH => Ok(width),
            _ => Err(StandError::InvalidConfig(format!(
                "{cols} columns of width {} exceed {} display columns",
                self.cell_width,
                Self::MAX_TABLE_WIDTH
            ))),
        }
    }
}

/// Box-drawing table renderer for a stand.
///
/// Output is a pure function of the stand's contents: rendering never
/// touches the stand and the same contents always give the same text.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    settings: RendererSettings,
}

impl TableRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    pub fn render(&self, stand: &Stand) -> Result<String> {
        let mut output = Vec::new();
        self.render_to(&mut output, stand)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    pub fn render_to(&self, writer: &mut impl Write, stand: &Stand) -> Result<()> {
        let cols = stand.dimensions().cols;
        let inner = self.settings.table_width(cols)?;
        let groups = group_by_brand(stand.items())?;

        writeln!(writer, "{}", rule('┌', '┐', inner))?;
        for (index, group) in groups.iter().enumerate() {
            self.render_group(writer, group, cols, inner)?;
            if index + 1 < groups.len() {
                writeln!(writer, "{}", rule('├', '┤', inner))?;
            }
        }
        writeln!(writer, "{}", rule('└', '┘', inner))?;

        writer.flush()?;
        Ok(())
    }

    fn render_group(
        &self,
        writer: &mut impl Write,
        group: &BrandGroup<'_>,
        cols: usize,
        inner: usize,
    ) -> Result<()> {
        let header = format!(" {}", group.brand.to_uppercase());
        writeln!(writer, "│{}│", fit_to_width(&header, inner))?;

        for chunk in group.items.chunks(cols) {
            let line: String = chunk
                .iter()
                .map(|item| fit_to_width(&cell_text(item), self.settings.cell_width))
                .collect();
            writeln!(writer, "│{}│", fit_to_width(&line, inner))?;
        }
        Ok(())
    }
}

fn cell_text(item: &Item) -> String {
    format!(
        " {:>3}${:>3} {:<7} ",
        item.size_code(),
        item.price(),
        item.color()
    )
}

fn rule(left: char, right: char, inner: usize) -> String {
    let mut line = String::new();
    line.push(left);
    line.push_str(&repeat_to_width('─', inner));
    line.push(right);
    line
}
