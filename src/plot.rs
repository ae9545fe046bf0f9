//! Bitmap rendering of a multistage run.

use crate::filter::Discretization;
use crate::pipeline::PipelineOutput;
use crate::signal::Samples;
use crate::fft;

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

/// Responses drawn by [`render`]. The bilinear response is left out of the
/// figure but is still available in the output.
pub const PLOTTED_RESPONSES: [Discretization; 3] = [
    Discretization::MatchedAnalog,
    Discretization::Derivative,
    Discretization::ImpulseInvariance,
];

/// One auto-ranged panel with any number of lines.
pub struct Panel<'a> {
    title: &'a str,
    xlabel: &'a str,
    ylabel: &'a str,
    stroke_width: u32,
    lines: Vec<(Option<String>, Vec<(f64, f64)>)>,
}

impl<'a> Panel<'a> {
    pub fn new(title: &'a str) -> Self {
        Panel {
            title,
            xlabel: "",
            ylabel: "",
            stroke_width: 2,
            lines: vec![],
        }
    }

    pub fn xlabel(&mut self, xlabel: &'a str) -> &mut Self {
        self.xlabel = xlabel;
        self
    }

    pub fn ylabel(&mut self, ylabel: &'a str) -> &mut Self {
        self.ylabel = ylabel;
        self
    }

    pub fn add_line<I>(&mut self, data: I, label: Option<&str>) -> &mut Self
    where
        I: IntoIterator<Item=(f64, f64)>,
    {
        // non-finite points would wreck the range, and can't be drawn anyway
        let data = data.into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        self.lines.push((label.map(|l| l.to_owned()), data));
        self
    }

    pub fn ranges(&self) -> (Range<f64>, Range<f64>) {
        let points = self.lines.iter().flat_map(|(_, d)| d.iter());
        let (xs, ys): (Vec<f64>, Vec<f64>) = points.cloned().unzip();
        (span(&xs, 0.0), span(&ys, 0.05))
    }

    pub fn draw<DB>(&self, area: &DrawingArea<DB, Shift>)
                    -> Result<(), Box<dyn Error>>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let (xrange, yrange) = self.ranges();
        let mut chart = ChartBuilder::on(area)
            .caption(self.title, ("sans-serif", 20).into_font())
            .margin(5)
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_ranged(xrange, yrange)?;
        chart.configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc(self.xlabel)
            .y_desc(self.ylabel)
            .draw()?;

        let mut legend = false;
        for (i, (label, data)) in self.lines.iter().enumerate() {
            let style: ShapeStyle = Palette99::pick(i)
                .stroke_width(self.stroke_width);
            let series = chart.draw_series(
                LineSeries::new(data.iter().cloned(), style.clone()))?;
            if let Some(label) = label {
                series.label(label.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], style.clone())
                });
                legend = true;
            }
        }

        if legend {
            chart.configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .draw()?;
        }
        Ok(())
    }
}

// [min, max] widened by `pad` of its width; flat or empty data gets a
// unit range so the chart can still be built
fn span(values: &[f64], pad: f64) -> Range<f64> {
    let min = values.iter().cloned().fold(std::f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(std::f64::NEG_INFINITY, f64::max);
    if !(min.is_finite() && max.is_finite()) {
        return 0.0..1.0;
    }
    if max - min <= std::f64::EPSILON * max.abs().max(1.0) {
        return (min - 1.0)..(max + 1.0);
    }
    let extra = (max - min) * pad;
    (min - extra)..(max + extra)
}

fn decibels(v: f64) -> f64 {
    20.0 * v.max(1e-12).log10()
}

fn time_panel<'a>(title: &'a str, signal: &Samples) -> Panel<'a> {
    let mut panel = Panel::new(title);
    panel.xlabel("t (s)")
        .add_line(signal.times().map(|(t, v)| (t, *v)), None);
    panel
}

/// Every panel of the figure, top to bottom.
pub fn panels<'a>(input: &Samples, out: &PipelineOutput,
                  titles: &'a [String]) -> Vec<Panel<'a>> {
    let mut panels = vec![
        time_panel(&titles[0], input),
        time_panel(&titles[1], &out.fir_output),
    ];
    for (title, branch) in titles[2..].iter().zip(out.branches.iter()) {
        panels.push(time_panel(title, &branch.output));
    }

    let mut spectra = Panel::new("Output Spectra");
    spectra.xlabel("f (Hz)").ylabel("dB");
    let names = std::iter::once("fir".to_owned())
        .chain(out.branches.iter().map(|b| b.method.to_string()));
    for (name, signal) in names.zip(out.outputs()) {
        let spec = fft::rfft(signal);
        let db = spec.into_iter().map(|(f, v)| (f, decibels(v.norm())));
        spectra.add_line(db, Some(name.as_str()));
    }
    panels.push(spectra);

    for method in PLOTTED_RESPONSES.iter() {
        if let Some(branch) = out.branch(*method) {
            let mut panel = Panel::new("Frequency Response");
            panel.xlabel("f (Hz)")
                .ylabel("|H|")
                .add_line(branch.response.magnitudes(),
                          Some(method.to_string().as_str()));
            panels.push(panel);
        }
    }
    panels
}

fn titles(out: &PipelineOutput) -> Vec<String> {
    let mut titles = vec![
        "Input Signal".to_owned(),
        "FIR Output".to_owned(),
    ];
    titles.extend(out.branches.iter()
                  .map(|b| format!("IIR Output ({})", b.method)));
    titles
}

/// Draw the input, every output and the plotted responses into one
/// column of panels.
pub fn draw<DB>(root: &DrawingArea<DB, Shift>, input: &Samples,
                out: &PipelineOutput) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let titles = titles(out);
    let panels = panels(input, out, &titles);
    let areas = root.split_evenly((panels.len(), 1));
    for (panel, area) in panels.iter().zip(areas.iter()) {
        panel.draw(area)?;
    }
    Ok(())
}

/// Render to an image file; the format follows the extension.
pub fn render<P>(path: P, size: (u32, u32), input: &Samples,
                 out: &PipelineOutput) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
{
    let root = BitMapBackend::new(path.as_ref(), size).into_drawing_area();
    draw(&root, input, out)?;
    log::info!("wrote plot to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Multistage;
    use crate::signal::{self, Signal};

    #[test]
    fn span_pads_and_handles_flat_data() {
        assert_eq!(span(&[0.0, 10.0], 0.1), -1.0..11.0);
        assert_eq!(span(&[0.0, 0.0], 0.1), -1.0..1.0);
        assert_eq!(span(&[], 0.1), 0.0..1.0);
    }

    #[test]
    fn one_panel_per_output_and_response() {
        let input = signal::sine(1000.0, 50.0, 0.0).take(1.0).sampled()
            .unwrap();
        let out = Multistage::new().run(&input).unwrap();
        let titles = titles(&out);
        let panels = panels(&input, &out, &titles);
        // input, fir, four iir, spectra, three responses
        assert_eq!(panels.len(), 10);
        assert_eq!(panels[5].title, "IIR Output (bilinear)");
        assert_eq!(panels[6].lines.len(), 5);
        let (x, _) = panels[9].ranges();
        assert_eq!(x.start, 0.0);
        assert!(x.end < 500.0);
    }
}
