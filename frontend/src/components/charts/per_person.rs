use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::CalculationResult;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::options::{ChartOptions, PERSON_COLOR};

#[derive(Properties, PartialEq)]
pub struct PerPersonChartProps {
    /// The latest successful calculation, or `None` to show the empty state.
    pub result: Option<CalculationResult>,
}

/// Bar chart with one equal bar per participant at the per-person amount.
pub struct PerPersonChart {
    canvas_ref: NodeRef,
    options: ChartOptions,
}

impl Component for PerPersonChart {
    type Message = ();
    type Properties = PerPersonChartProps;

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
                <h3 class="chart-title">{"Amount per Person"}</h3>
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
                            <p>{"Each person's share appears here"}</p>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl PerPersonChart {
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

        let values = bar_values(result);
        if values.is_empty() {
            let _ = root.present();
            return;
        }

        // Headroom above the bars so the tallest one does not touch the frame
        let y_max = (result.per_person_amount * 1.25).max(1.0);
        let split = result.split_count;

        let mut chart = match ChartBuilder::on(&root)
            .margin(self.options.margin)
            .x_label_area_size(30)
            .y_label_area_size(55)
            .build_cartesian_2d((0u32..split).into_segmented(), 0f64..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_label_formatter(&|v| format!("${:.2}", v))
            .x_label_formatter(&|x| match x {
                SegmentValue::CenterOf(n) | SegmentValue::Exact(n) => {
                    format!("Person {}", *n + 1)
                }
                _ => String::new(),
            })
            .label_style(("sans-serif", 12).into_font())
            .axis_style(&RGBColor(230, 230, 230))
            .draw()
            .is_err()
        {
            return;
        }

        let bars = Histogram::vertical(&chart)
            .style(PERSON_COLOR.filled())
            .margin(8)
            .data(values.iter().enumerate().map(|(i, v)| (i as u32, *v)));

        if chart.draw_series(bars).is_err() {
            return;
        }

        let _ = root.present();
    }
}

/// One equal entry per participant.
pub(crate) fn bar_values(result: &CalculationResult) -> Vec<f64> {
    vec![result.per_person_amount; result.split_count as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Breakdown;

    fn sample_result(split_count: u32, per_person_amount: f64) -> CalculationResult {
        CalculationResult {
            bill_amount: 100.0,
            tip_percentage: 15.0,
            tip_amount: 15.0,
            total_amount: 115.0,
            split_count,
            per_person_amount,
            breakdown: Breakdown {
                bill_per_person: 100.0 / split_count as f64,
                tip_per_person: 15.0 / split_count as f64,
            },
        }
    }

    #[test]
    fn test_one_equal_bar_per_participant() {
        let values = bar_values(&sample_result(4, 28.75));

        assert_eq!(values.len(), 4);
        assert!(values.iter().all(|v| *v == 28.75));
    }

    #[test]
    fn test_single_participant_gets_single_bar() {
        let values = bar_values(&sample_result(1, 115.0));
        assert_eq!(values, vec![115.0]);
    }

    // Drawing without a mounted canvas must be a no-op, not a panic.
    #[test]
    fn test_draw_without_canvas_is_noop() {
        let chart = PerPersonChart {
            canvas_ref: NodeRef::default(),
            options: ChartOptions::default(),
        };
        chart.draw(&sample_result(4, 28.75));
    }
}
