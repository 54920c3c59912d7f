use super::config::SmoothingConfig;
use crate::airfoil::SurfacePair;
use ncollide2d::na::Point2;

/// The constant line which terminates every input file
const TERMINATOR: &str = "  1.         ";

/// The contents of the smoothing tool's input file. The tool reads it with fixed column widths, so
/// the layout produced by `render` must not drift by a single character.
#[derive(Debug, Clone)]
pub struct ToolInput<'a> {
    pub title: &'a str,
    pub controls: [u32; 8],
    pub surfaces: &'a SurfacePair,
    pub abscissas: &'a [f64],
}

impl<'a> ToolInput<'a> {
    pub fn new(
        title: &'a str,
        config: &SmoothingConfig,
        surfaces: &'a SurfacePair,
        abscissas: &'a [f64],
    ) -> ToolInput<'a> {
        ToolInput {
            title,
            controls: config.control_values(),
            surfaces,
            abscissas,
        }
    }

    /// Renders the file text. The abscissa count sits alone on its line, while the block of
    /// abscissa rows is followed by a single space before its newline. With no abscissas that
    /// block is an empty row holding only the space.
    pub fn render(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, self.title);
        push_line(&mut out, &control_line(&self.controls));
        push_surface(&mut out, &self.surfaces.upper);
        push_surface(&mut out, &self.surfaces.lower);

        push_line(&mut out, &self.abscissas.len().to_string());
        let rows: Vec<String> = self
            .abscissas
            .iter()
            .map(|x| format!("{:12.6}", x))
            .collect();
        push_line(&mut out, &format!("{} ", rows.join("\n")));
        push_line(&mut out, TERMINATOR);
        out
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_surface(out: &mut String, points: &[Point2<f64>]) {
    push_line(out, &points.len().to_string());
    for p in points.iter() {
        push_line(out, &format!("{:12.6}{:12.6}", p.x, p.y));
    }
}

/// Renders the control values as ten character fields, each holding three spaces and the value
/// written as a real number with a trailing decimal point.
fn control_line(values: &[u32]) -> String {
    let mut line = String::new();
    for v in values.iter() {
        line.push_str(&format!("   {:<7}", format!("{}.", v)));
    }
    line.trim_end().to_string()
}
