//! Tooltip text and the hover state machine.
//!
//! The tooltip is either hidden or visible. Entering a cell starts a fade-in,
//! moving within it refreshes the text and position, leaving starts a
//! fade-out. Hover handlers only ever call these three transitions.

use std::fmt;

use gtv_data::{month, MonthlyRecord};

use crate::config::TooltipConfig;
use crate::format::to_fixed;

/// The three lines shown for a hovered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipText {
    /// `"<year> <MON>"`
    pub heading: String,
    /// Absolute temperature to three decimals, e.g. `"9.894°C"`.
    pub temperature: String,
    /// Signed deviation from the baseline, e.g. `"+1.234°C"`.
    pub variance: String,
}

impl TooltipText {
    pub fn new(record: &MonthlyRecord, base_temperature: f64) -> TooltipText {
        let month = month::abbreviation(record.month).unwrap_or("");
        // Zero counts as non-negative.
        let sign = if record.variance >= 0.0 { '+' } else { '-' };
        TooltipText {
            heading: format!("{} {}", record.year, month),
            temperature: format!("{}°C", to_fixed(record.temperature(base_temperature), 3)),
            variance: format!("{}{}°C", sign, record.variance.abs()),
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [
            self.heading.as_str(),
            self.temperature.as_str(),
            self.variance.as_str(),
        ]
    }
}

impl fmt::Display for TooltipText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.heading, self.temperature, self.variance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// An opacity animation started by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub to_opacity: f64,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub visibility: Visibility,
    pub text: Option<TooltipText>,
    /// Page position of the tooltip's top-left corner.
    pub left: f64,
    pub top: f64,
    config: TooltipConfig,
}

impl TooltipState {
    pub fn new(config: TooltipConfig) -> TooltipState {
        TooltipState {
            visibility: Visibility::Hidden,
            text: None,
            left: 0.0,
            top: 0.0,
            config,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn opacity(&self) -> f64 {
        match self.visibility {
            Visibility::Hidden => 0.0,
            Visibility::Visible => 1.0,
        }
    }

    pub fn fade_ms(&self) -> u32 {
        self.config.fade_ms
    }

    /// Pointer entered a cell.
    pub fn enter(&mut self) -> Fade {
        self.visibility = Visibility::Visible;
        Fade {
            to_opacity: 1.0,
            duration_ms: self.config.fade_ms,
        }
    }

    /// Pointer moved within a cell: refresh text and follow the pointer.
    pub fn track(&mut self, text: TooltipText, page_x: f64, page_y: f64) {
        self.text = Some(text);
        self.left = page_x + self.config.offset_x;
        self.top = page_y + self.config.offset_y;
    }

    /// Pointer left the cell.
    pub fn leave(&mut self) -> Fade {
        self.visibility = Visibility::Hidden;
        Fade {
            to_opacity: 0.0,
            duration_ms: self.config.fade_ms,
        }
    }
}

impl Default for TooltipState {
    fn default() -> Self {
        TooltipState::new(TooltipConfig::default())
    }
}
