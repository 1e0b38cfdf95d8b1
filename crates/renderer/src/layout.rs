//! Chart geometry: canvas size, padding, and derived plot/legend areas.

#[derive(Debug, Clone, Copy)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            padding: Padding {
                top: 40.0,
                right: 40.0,
                bottom: 120.0,
                left: 80.0,
            },
        }
    }
}

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn plot_left(&self) -> f64 {
        self.padding.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.padding.right
    }

    pub fn plot_top(&self) -> f64 {
        self.padding.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.padding.bottom
    }

    /// Vertical offset of the legend group, below the plot area.
    pub fn legend_top(&self) -> f64 {
        self.plot_bottom() + self.padding.top
    }
}
