//! Presentation attributes, looked up by element and nesting depth

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Vertical alignment of text within its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    Top,
    #[default]
    Middle,
}

impl Baseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Baseline::Top => "hanging",
            Baseline::Middle => "middle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: String,
    pub weight: String,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: "12pt".to_string(),
            weight: "normal".to_string(),
            anchor: TextAnchor::Middle,
            baseline: Baseline::Middle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: String,
    /// Empty for a solid line
    pub dash_array: String,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: "black".to_string(),
            dash_array: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub color: String,
}

impl Default for Fill {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub font: Font,
    pub stroke: Stroke,
    pub fill: Fill,
}

impl Style {
    fn colored(color: &str) -> Self {
        let mut style = Style::default();
        style.fill.color = color.to_string();
        style
    }
}

/// Part of the diagram a style applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Identifier,
    Label,
    Bar,
    Axis,
    TimeScale,
    QuarterGrid,
    YearGrid,
    Milestone,
    MilestoneLabel,
    Deliverable,
}

#[derive(Debug, Clone, PartialEq)]
struct ActivityStyles {
    identifier: Style,
    label: Style,
    bar: Style,
}

impl ActivityStyles {
    fn new(color: &str, weight: &str) -> Self {
        let mut text = Style::colored(color);
        text.font.anchor = TextAnchor::Start;
        text.font.weight = weight.to_string();
        let mut bar = Style::colored(color);
        bar.stroke.width = 0.0;
        Self {
            identifier: text.clone(),
            label: text,
            bar,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    /// One entry per depth; the last one is reused below
    levels: Vec<ActivityStyles>,
    axis: Style,
    time_scale: Style,
    quarter_grid: Style,
    year_grid: Style,
    milestone: Style,
    milestone_label: Style,
    deliverable: Style,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let mut axis = Style::default();
        axis.stroke.width = 3.0;

        let mut time_scale = Style::default();
        time_scale.stroke.width = 0.0;
        time_scale.fill.color = "none".to_string();

        let mut quarter_grid = Style::default();
        quarter_grid.stroke.color = "lightgray".to_string();
        quarter_grid.stroke.dash_array = "4".to_string();

        let mut year_grid = Style::default();
        year_grid.stroke.color = "gray".to_string();

        let mut milestone = Style::colored("darkred");
        milestone.stroke.color = "darkred".to_string();
        milestone.stroke.width = 2.0;

        let mut milestone_label = Style::colored("darkred");
        milestone_label.font.anchor = TextAnchor::End;
        milestone_label.font.weight = "bold".to_string();

        let mut deliverable = Style::colored("orange");
        deliverable.stroke.color = "darkorange".to_string();

        Self {
            levels: vec![
                ActivityStyles::new("darkblue", "bold"),
                ActivityStyles::new("steelblue", "normal"),
            ],
            axis,
            time_scale,
            quarter_grid,
            year_grid,
            milestone,
            milestone_label,
            deliverable,
        }
    }
}

impl StyleSheet {
    /// Style of an element; `depth` only matters for activity elements and
    /// starts at 1 for top-level activities.
    pub fn style(&self, element: Element, depth: usize) -> &Style {
        match element {
            Element::Identifier => &self.level(depth).identifier,
            Element::Label => &self.level(depth).label,
            Element::Bar => &self.level(depth).bar,
            Element::Axis => &self.axis,
            Element::TimeScale => &self.time_scale,
            Element::QuarterGrid => &self.quarter_grid,
            Element::YearGrid => &self.year_grid,
            Element::Milestone => &self.milestone,
            Element::MilestoneLabel => &self.milestone_label,
            Element::Deliverable => &self.deliverable,
        }
    }

    fn level(&self, depth: usize) -> &ActivityStyles {
        let index = depth.saturating_sub(1).min(self.levels.len() - 1);
        &self.levels[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deepest_level_is_reused() {
        let sheet = StyleSheet::default();
        let second = sheet.style(Element::Bar, 2).clone();
        assert_eq!(sheet.style(Element::Bar, 5), &second);
        assert_eq!(second.fill.color, "steelblue");
        assert_eq!(sheet.style(Element::Bar, 1).fill.color, "darkblue");
        assert_eq!(sheet.style(Element::Bar, 0).fill.color, "darkblue");
    }

    #[test]
    fn test_top_level_text_is_bold_and_left_aligned() {
        let sheet = StyleSheet::default();
        let label = sheet.style(Element::Label, 1);
        assert_eq!(label.font.weight, "bold");
        assert_eq!(label.font.anchor, TextAnchor::Start);
        assert_eq!(sheet.style(Element::Identifier, 2).font.weight, "normal");
    }

    #[test]
    fn test_grid_and_axis_strokes() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.style(Element::Axis, 0).stroke.width, 3.0);
        assert_eq!(sheet.style(Element::QuarterGrid, 0).stroke.dash_array, "4");
        assert!(sheet.style(Element::YearGrid, 0).stroke.dash_array.is_empty());
        assert_eq!(sheet.style(Element::MilestoneLabel, 0).font.anchor, TextAnchor::End);
    }
}
