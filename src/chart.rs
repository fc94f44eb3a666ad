use data::chart::{PADDING, Plot};
use data::config::theme;
use exchange::Series;

use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke};
use iced::{Rectangle, Renderer, Theme, mouse};

/// ضخامت خطوط محور
const AXIS_WIDTH: f32 = 1.0;
/// ضخامت خط قیمت
const LINE_WIDTH: f32 = 2.0;

/// برنامه‌ی بوم نمودار خطی قیمت
///
/// هندسه تا زمانی که کش پاک نشود دوباره ساخته نمی‌شود؛ پاک کردن کش پس از هر
/// تغییر سری بر عهده‌ی فراخواننده است.
pub struct LineChart<'a> {
    series: &'a Series, // سری قیمت فعال
    cache: &'a Cache,   // کش هندسه‌ی رسم شده
}

impl<'a> LineChart<'a> {
    pub fn new(series: &'a Series, cache: &'a Cache) -> Self {
        Self { series, cache }
    }
}

impl<Message> canvas::Program<Message> for LineChart<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let chart = self.cache.draw(renderer, bounds.size(), |frame| {
            draw_series(frame, self.series);
        });

        vec![chart]
    }
}

/// رسم محورها و خط قیمت؛ برای سری خالی یا سطح خیلی کوچک چیزی رسم نمی‌شود
fn draw_series(frame: &mut Frame, series: &Series) {
    let Some(plot) = Plot::project(series.iter(), frame.size(), PADDING) else {
        return;
    };

    let axis = Stroke::with_color(
        Stroke {
            width: AXIS_WIDTH,
            ..Default::default()
        },
        theme::axis_color(),
    );

    frame.stroke(&Path::line(plot.axes.x.0, plot.axes.x.1), axis);
    frame.stroke(&Path::line(plot.axes.y.0, plot.axes.y.1), axis);

    let line = Path::new(|builder| {
        let mut points = plot.points.iter();

        if let Some(first) = points.next() {
            builder.move_to(*first);
            for point in points {
                builder.line_to(*point);
            }
        }
    });

    frame.stroke(
        &line,
        Stroke::with_color(
            Stroke {
                width: LINE_WIDTH,
                ..Default::default()
            },
            theme::line_color(),
        ),
    );
}
