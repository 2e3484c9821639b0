use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::CalculationResult;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::options::{ChartOptions, BILL_COLOR, TIP_COLOR};

#[derive(Properties, PartialEq)]
pub struct DistributionChartProps {
    /// The latest successful calculation, or `None` to show the empty state.
    pub result: Option<CalculationResult>,
}

/// Pie chart of the bill amount versus the tip amount.
///
/// Redrawn from scratch on every prop change; with no result the canvas is
/// not rendered at all, which releases the drawing context.
pub struct DistributionChart {
    canvas_ref: NodeRef,
    options: ChartOptions,
}

impl Component for DistributionChart {
    type Message = ();
    type Properties = DistributionChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            options: ChartOptions::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Some(result) = &ctx.props().result {
            self.draw(result);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-container">
                <h3 class="chart-title">{"Bill vs Tip"}</h3>
                {if ctx.props().result.is_some() {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            class="chart-canvas"
                            width={self.options.width.to_string()}
                            height={self.options.height.to_string()}
                        ></canvas>
                    }
                } else {
                    html! {
                        <div class="chart-empty">
                            <p>{"Enter a bill amount to see the split"}</p>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl DistributionChart {
    fn draw(&self, result: &CalculationResult) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(self.options.width);
        canvas.set_height(self.options.height);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();

        if root.fill(&WHITE).is_err() {
            return;
        }

        let slices = pie_slices(result);
        if slices.is_empty() {
            let _ = root.present();
            return;
        }

        let sizes: Vec<f64> = slices.iter().map(|(_, size, _)| *size).collect();
        let colors: Vec<RGBColor> = slices.iter().map(|(_, _, color)| *color).collect();
        let labels: Vec<&str> = slices.iter().map(|(label, _, _)| *label).collect();

        let center = self.options.center();
        let radius = self.options.radius();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 12).into_font().color(&WHITE));

        if root.draw(&pie).is_err() {
            return;
        }

        let _ = root.present();
    }
}

/// Non-zero slices for the pie. A zero-amount slice would render as a
/// degenerate wedge with an orphaned label, so it is dropped.
pub(crate) fn pie_slices(result: &CalculationResult) -> Vec<(&'static str, f64, RGBColor)> {
    let mut slices = Vec::new();
    if result.bill_amount > 0.0 {
        slices.push(("Bill Amount", result.bill_amount, BILL_COLOR));
    }
    if result.tip_amount > 0.0 {
        slices.push(("Tip Amount", result.tip_amount, TIP_COLOR));
    }
    slices
}
